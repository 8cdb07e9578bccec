use crate::error::{ConvertError, Result};
use crate::slice::convert_to_vec;
use itertools::{Itertools, MinMaxResult};
use num_traits::Float;
use std::cmp::Ordering;
use tracing::debug;

/// Fraction of |min| and |max| added outside the data bounds before rescaling
pub const BOUND_PADDING: f64 = 0.1;
pub const BLACK_PERCENTILE: f64 = 1.0;
pub const WHITE_PERCENTILE: f64 = 99.9;

fn finite_samples<T: Float>(data: &[T]) -> impl Iterator<Item = f64> + '_ {
    data.iter()
        .filter_map(|x| x.to_f64())
        .filter(|x| x.is_finite())
}

/// Smallest and largest finite sample of a buffer, widened to f64.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    /// Returns `None` when `data` holds no finite sample.
    pub fn of<T: Float>(data: &[T]) -> Option<Self> {
        // Only finite values are compared, so partial_cmp never fails here
        match finite_samples(data).minmax_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal)) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(x) => Some(MinMax { min: x, max: x }),
            MinMaxResult::MinMax(min, max) => Some(MinMax { min, max }),
        }
    }

    /// Pushes each bound outward by [`BOUND_PADDING`] of its magnitude.
    pub fn padded(&self) -> Self {
        MinMax {
            min: self.min - BOUND_PADDING * self.min.abs(),
            max: self.max + BOUND_PADDING * self.max.abs(),
        }
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Default black and white display points of an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayLevels {
    pub black: f64,
    pub white: f64,
}

/// Sample at `floor(p / 100 * len)` of an ascending slice.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let index = ((p / 100.0) * sorted.len() as f64).floor() as usize;
    Some(sorted[index.min(sorted.len() - 1)])
}

/// Black and white points at [`BLACK_PERCENTILE`] and [`WHITE_PERCENTILE`] of
/// the finite samples.
pub fn auto_levels<T: Float>(data: &[T]) -> Option<DisplayLevels> {
    let sorted = finite_samples(data)
        .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .collect_vec();
    Some(DisplayLevels {
        black: percentile(&sorted, BLACK_PERCENTILE)?,
        white: percentile(&sorted, WHITE_PERCENTILE)?,
    })
}

/// Rescales `data` against its padded finite bounds, so the data minimum lands
/// slightly above 0.0 and the maximum slightly below 1.0.
///
/// Arithmetic is done in f64. Non-finite samples go through the same formula:
/// NaN stays NaN and the infinities keep their sign.
pub fn normalize<T: Float>(data: &[T]) -> Result<Vec<f32>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let bounds = MinMax::of(data)
        .ok_or(ConvertError::NoFiniteSamples)?
        .padded();
    let range = bounds.range();
    if range == 0.0 {
        return Err(ConvertError::FlatRange { value: bounds.min });
    }
    if !range.is_finite() {
        return Err(ConvertError::RangeOverflow {
            min: bounds.min,
            max: bounds.max,
        });
    }
    debug!(
        "normalizing {} samples into [{}, {}]",
        data.len(),
        bounds.min,
        bounds.max
    );
    Ok(data
        .iter()
        .map(|x| x.to_f64().unwrap_or(f64::NAN))
        .map(|x| ((x - bounds.min) / range) as f32)
        .collect())
}

/// [`normalize`] followed by [`convert_to_vec`], giving a buffer ready to be
/// uploaded as a half float texture.
pub fn normalized_half_floats<T: Float>(data: &[T]) -> Result<Vec<u16>> {
    let normalized = normalize(data)?;
    Ok(convert_to_vec(&normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_skips_non_finite() {
        let data = [f32::NAN, 3.0, f32::NEG_INFINITY, -1.0, f32::INFINITY, 2.0];
        assert_eq!(MinMax::of(&data), Some(MinMax { min: -1.0, max: 3.0 }));
        assert_eq!(MinMax::of(&[5.0_f64]), Some(MinMax { min: 5.0, max: 5.0 }));
        assert_eq!(MinMax::of(&[f32::NAN]), None);
        assert_eq!(MinMax::of::<f64>(&[]), None);
    }

    #[test]
    fn padding_follows_sign() {
        let padded = MinMax { min: 10.0, max: 20.0 }.padded();
        assert_eq!(padded, MinMax { min: 9.0, max: 22.0 });
        let padded = MinMax { min: -10.0, max: -5.0 }.padded();
        assert_eq!(padded, MinMax { min: -11.0, max: -4.5 });
    }

    #[test]
    fn flat_range_rejected() {
        // padding only leaves a flat range when every sample is zero
        assert_eq!(
            normalize(&[0.0_f32, 0.0, f32::NAN]),
            Err(ConvertError::FlatRange { value: 0.0 })
        );
        assert!(normalize(&[2.0_f32, 2.0]).is_ok());
    }

    #[test]
    fn overflowing_range_rejected() {
        assert!(matches!(
            normalize(&[-f64::MAX, f64::MAX]),
            Err(ConvertError::RangeOverflow { .. })
        ));
    }

    #[test]
    fn nothing_finite_rejected() {
        assert_eq!(
            normalize(&[f64::NAN, f64::INFINITY]),
            Err(ConvertError::NoFiniteSamples)
        );
        assert_eq!(auto_levels(&[f32::NAN]), None);
    }

    #[test]
    fn percentile_indexing() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 0.0), Some(1.0));
        assert_eq!(percentile(&sorted, 50.0), Some(3.0));
        assert_eq!(percentile(&sorted, 100.0), Some(4.0));
        assert_eq!(percentile(&[], 50.0), None);
    }

    #[test]
    fn empty_is_fine() {
        assert_eq!(normalized_half_floats::<f32>(&[]), Ok(vec![]));
    }
}
