use crate::decode::{decode_f32_bits, EXPONENT_MASK_F16, MAX_EXPONENT_F16};

/// Truncating f32 to f16 bit conversion. Values too small for a normal half
/// become signed zero, values too large (and every NaN) become signed infinity,
/// and the low 13 mantissa bits are dropped without rounding.
#[inline]
pub fn f32_bits_to_f16_bits(bits: u32) -> u16 {
    let (sign, exponent, mantissa) = decode_f32_bits(bits);
    if exponent <= 0 {
        sign
    } else if exponent >= MAX_EXPONENT_F16 {
        // NaN lands here too
        sign | EXPONENT_MASK_F16
    } else {
        sign | ((exponent as u16) << 10) | mantissa
    }
}

#[inline]
pub fn f32_to_f16_bits(value: f32) -> u16 {
    f32_bits_to_f16_bits(value.to_bits())
}
