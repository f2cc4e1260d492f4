//! WebAssembly bindings for the bit vector.
//!
//! This module provides JavaScript-callable wrappers around `BitVector` and
//! its `Builder`, so browser front ends can inspect scan-line data.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::{JsBitVector, JsBitVectorBuilder};
