//! WASM API for the bit vector.
//!
//! Provides JavaScript-callable wrappers for vector construction, boolean
//! algebra, windowed extraction and formatting.

use crate::{BitVector, BitVectorError, Builder};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<BitVectorError> for JsError {
    fn from(err: BitVectorError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Immutable bit vector exposed to JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsBitVector {
    inner: BitVector,
}

#[wasm_bindgen]
impl JsBitVector {
    /// Create a vector of `size` bits, all equal to `bit`
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32, bit: bool) -> Result<JsBitVector, JsError> {
        Ok(BitVector::filled(size as usize, bit)?.into())
    }

    /// Create a vector from 32-bit words, least significant first
    #[wasm_bindgen(js_name = fromWords)]
    pub fn from_words(words: js_sys::Uint32Array) -> Result<JsBitVector, JsError> {
        Ok(BitVector::from_words(words.to_vec())?.into())
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 {
        self.inner.size() as u32
    }

    /// Backing words, least significant first
    pub fn words(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(self.inner.words())
    }

    #[wasm_bindgen(js_name = testBit)]
    pub fn test_bit(&self, index: u32) -> Result<bool, JsError> {
        Ok(self.inner.test_bit(index as usize)?)
    }

    pub fn not(&self) -> JsBitVector {
        self.inner.not().into()
    }

    pub fn and(&self, other: &JsBitVector) -> Result<JsBitVector, JsError> {
        Ok(self.inner.and(&other.inner)?.into())
    }

    pub fn or(&self, other: &JsBitVector) -> Result<JsBitVector, JsError> {
        Ok(self.inner.or(&other.inner)?.into())
    }

    pub fn xor(&self, other: &JsBitVector) -> Result<JsBitVector, JsError> {
        Ok(self.inner.xor(&other.inner)?.into())
    }

    pub fn shift(&self, distance: i32) -> JsBitVector {
        self.inner.shift(distance as i64).into()
    }

    #[wasm_bindgen(js_name = extractZeroExtended)]
    pub fn extract_zero_extended(&self, start: i32, size: u32) -> Result<JsBitVector, JsError> {
        Ok(self
            .inner
            .extract_zero_extended(start as i64, size as usize)?
            .into())
    }

    #[wasm_bindgen(js_name = extractWrapped)]
    pub fn extract_wrapped(&self, start: i32, size: u32) -> Result<JsBitVector, JsError> {
        Ok(self.inner.extract_wrapped(start as i64, size as usize)?.into())
    }

    pub fn equals(&self, other: &JsBitVector) -> bool {
        self.inner == other.inner
    }

    /// Canonical MSB-first binary string
    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }

    /// MSB-first uppercase hex string
    #[wasm_bindgen(js_name = toHex)]
    pub fn to_hex(&self) -> String {
        format!("{:X}", self.inner)
    }
}

impl From<BitVector> for JsBitVector {
    fn from(inner: BitVector) -> Self {
        JsBitVector { inner }
    }
}

impl From<JsBitVector> for BitVector {
    fn from(vector: JsBitVector) -> Self {
        vector.inner
    }
}

/// Single-use builder exposed to JavaScript
#[wasm_bindgen]
#[derive(Debug)]
pub struct JsBitVectorBuilder {
    inner: Builder,
}

#[wasm_bindgen]
impl JsBitVectorBuilder {
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32) -> Result<JsBitVectorBuilder, JsError> {
        Ok(JsBitVectorBuilder {
            inner: Builder::new(size as usize)?,
        })
    }

    #[wasm_bindgen(js_name = setByte)]
    pub fn set_byte(&mut self, index: u32, value: u8) -> Result<(), JsError> {
        self.inner.set_byte(index as usize, value)?;
        Ok(())
    }

    pub fn build(&mut self) -> Result<JsBitVector, JsError> {
        Ok(self.inner.build()?.into())
    }
}
