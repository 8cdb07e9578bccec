use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("asked to convert {count} elements but the input only holds {len}")]
    InputTooShort { count: usize, len: usize },

    #[error("asked to convert {count} elements but the output only has room for {capacity}")]
    OutputTooShort { count: usize, capacity: usize },

    #[error("no finite samples to normalize")]
    NoFiniteSamples,

    #[error("every finite sample equals {value}, cannot normalize a flat range")]
    FlatRange { value: f64 },

    #[error("normalization range [{min}, {max}] is not finite")]
    RangeOverflow { min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
