pub const SIGN_MASK_F16: u16 = 0x8000;
pub const EXPONENT_MASK_F16: u16 = 0x7c00;
pub const MANTISSA_MASK_F32: u32 = 0x007f_ffff;
pub const MANTISSA_SHIFT: u32 = 13;
/// Difference between the f32 (127) and f16 (15) exponent biases
pub const EXPONENT_REBIAS: i32 = 112;
pub const MAX_EXPONENT_F16: i32 = 31;

pub fn raw_exponent(bits: u32) -> u32 {
    (bits >> 23) & 0xff
}

/// (sign at bit 15, rebiased exponent which may be out of range, top 10 mantissa bits)
pub fn decode_f32_bits(bits: u32) -> (u16, i32, u16) {
    let sign = ((bits >> 16) as u16) & SIGN_MASK_F16;
    // Exponent bias
    let exponent = raw_exponent(bits) as i32 - EXPONENT_REBIAS;
    let mantissa = ((bits & MANTISSA_MASK_F32) >> MANTISSA_SHIFT) as u16;
    (sign, exponent, mantissa)
}
