pub mod convert;
pub mod decode;
pub mod error;
pub mod ffi;
pub mod normalize;
pub mod slice;
pub mod tracing;

pub use convert::{f32_bits_to_f16_bits, f32_to_f16_bits};
pub use error::{ConvertError, Result};
pub use slice::{convert_many, convert_slice, convert_to_vec};
