//! C ABI for hosts that load the crate as a shared library or WebAssembly module.
//!
//! The exported names match what existing JavaScript hosts call
//! (`_convertFloat32ToFloat16` once emscripten prefixes it).
#![allow(non_snake_case)]

use crate::convert::f32_bits_to_f16_bits;
use std::slice;
use tracing::warn;

#[no_mangle]
pub extern "C" fn float32ToFloat16(f: u32) -> u16 {
    f32_bits_to_f16_bits(f)
}

/// Converts `len` floats at `src` into half float bit patterns at `dst`.
///
/// # Safety
/// The caller guarantees `src` points to `len` readable `f32`s, `dst` to `len`
/// writable `u16`s, and that the two ranges do not overlap. Lengths cannot be
/// checked across this boundary; use [`crate::slice::convert_many`] from Rust.
#[no_mangle]
pub unsafe extern "C" fn convertFloat32ToFloat16(src: *const f32, dst: *mut u16, len: usize) {
    if len == 0 {
        return;
    }
    if src.is_null() || dst.is_null() {
        warn!("ignoring conversion of {} elements with a null buffer", len);
        return;
    }
    let input = slice::from_raw_parts(src, len);
    let output = slice::from_raw_parts_mut(dst, len);
    input
        .iter()
        .zip(output.iter_mut())
        .for_each(|(value, half)| *half = f32_bits_to_f16_bits(value.to_bits()));
}
