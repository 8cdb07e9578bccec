use crate::convert::f32_to_f16_bits;
use crate::error::{ConvertError, Result};
use rayon::prelude::*;
use tracing::{debug, trace, warn};

/// Number of elements handed to a single rayon task by the parallel converters
pub const PAR_CHUNK_LEN: usize = 1 << 14;

fn check_lengths(input_len: usize, output_len: usize, count: usize) -> Result<()> {
    if count > input_len {
        warn!("rejecting conversion of {} elements from an input of {}", count, input_len);
        return Err(ConvertError::InputTooShort {
            count,
            len: input_len,
        });
    }
    if count > output_len {
        warn!("rejecting conversion of {} elements into an output of {}", count, output_len);
        return Err(ConvertError::OutputTooShort {
            count,
            capacity: output_len,
        });
    }
    Ok(())
}

fn convert_chunk(input: &[f32], output: &mut [u16]) {
    input
        .iter()
        .zip(output.iter_mut())
        .for_each(|(src, dst)| *dst = f32_to_f16_bits(*src));
}

/// Writes the f16 bit pattern of `input[i]` into `output[i]` for every `i < count`.
///
/// Both lengths are checked before anything is written, so on error `output`
/// is left exactly as it was. Elements of `output` past `count` are never touched.
pub fn convert_many(input: &[f32], output: &mut [u16], count: usize) -> Result<()> {
    check_lengths(input.len(), output.len(), count)?;
    trace!("converting {} elements", count);
    convert_chunk(&input[..count], &mut output[..count]);
    Ok(())
}

pub fn convert_slice(input: &[f32], output: &mut [u16]) -> Result<()> {
    convert_many(input, output, input.len())
}

pub fn convert_to_vec(input: &[f32]) -> Vec<u16> {
    trace!("converting {} elements into a new buffer", input.len());
    input.iter().map(|value| f32_to_f16_bits(*value)).collect()
}

/// Parallel version of [`convert_slice`], split into chunks of [`PAR_CHUNK_LEN`].
pub fn par_convert_slice(input: &[f32], output: &mut [u16]) -> Result<()> {
    let count = input.len();
    check_lengths(count, output.len(), count)?;
    debug!(
        "converting {} elements in {} chunks",
        count,
        count.div_ceil(PAR_CHUNK_LEN)
    );
    input
        .par_chunks(PAR_CHUNK_LEN)
        .zip(output[..count].par_chunks_mut(PAR_CHUNK_LEN))
        .for_each(|(src, dst)| convert_chunk(src, dst));
    Ok(())
}

pub fn par_convert_to_vec(input: &[f32]) -> Vec<u16> {
    debug!("converting {} elements into a new buffer in parallel", input.len());
    input
        .par_iter()
        .with_min_len(PAR_CHUNK_LEN)
        .map(|value| f32_to_f16_bits(*value))
        .collect()
}
