//! Gap filling for sensor series
//!
//! Missing samples are rebuilt by linear interpolation between the nearest
//! known neighbours. Interpolation never extrapolates: the first and last
//! samples must be known.

use tracing::debug;

use crate::DataError;

/// Fill a series that marks missing samples with `0.0`.
///
/// A genuine zero reading cannot be told apart from a missing one and will
/// be replaced too; use [`fill_gaps`] when the series carries an explicit
/// marker.
pub fn fill_missing_data(values: &[f64]) -> Result<Vec<f64>, DataError> {
    let samples: Vec<Option<f64>> = values
        .iter()
        .map(|&v| if v == 0.0 { None } else { Some(v) })
        .collect();
    fill_gaps(&samples)
}

/// Fill `None` samples by linear interpolation over their index.
pub fn fill_gaps(samples: &[Option<f64>]) -> Result<Vec<f64>, DataError> {
    let known: Vec<(usize, f64)> = samples
        .iter()
        .enumerate()
        .filter_map(|(idx, v)| v.map(|v| (idx, v)))
        .collect();

    if known.len() < 2 {
        return Err(DataError::InsufficientData { found: known.len() });
    }
    if samples[0].is_none() {
        return Err(DataError::OutOfDomain { index: 0 });
    }
    let last = samples.len() - 1;
    if samples[last].is_none() {
        return Err(DataError::OutOfDomain { index: last });
    }

    let mut filled = Vec::with_capacity(samples.len());
    for pair in known.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        let slope = (y1 - y0) / (x1 - x0) as f64;
        filled.push(y0);
        for x in (x0 + 1)..x1 {
            filled.push(y0 + slope * (x - x0) as f64);
        }
    }
    filled.push(known[known.len() - 1].1);

    debug!(
        "Filled {} of {} samples",
        samples.len() - known.len(),
        samples.len()
    );
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-9, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_single_gap() {
        let filled = fill_missing_data(&[1.0, 0.0, 3.0]).unwrap();
        assert_eq!(filled, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_linear_ramp_is_exact() {
        // Even indices hold a ramp, odd indices are missing
        let ramp: Vec<f64> = (0..21).map(|i| 10.0 + 2.5 * i as f64).collect();
        let sparse: Vec<f64> = ramp
            .iter()
            .enumerate()
            .map(|(i, v)| if i % 2 == 0 { *v } else { 0.0 })
            .collect();
        assert_close(&fill_missing_data(&sparse).unwrap(), &ramp);
    }

    #[test]
    fn test_idempotent() {
        let once = fill_missing_data(&[4.0, 0.0, 0.0, 7.0, 0.0, -2.0]).unwrap();
        let twice = fill_missing_data(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_uneven_gaps() {
        let filled = fill_missing_data(&[1.0, 0.0, 0.0, 4.0, 0.0, 2.0]).unwrap();
        assert_close(&filled, &[1.0, 2.0, 3.0, 4.0, 3.0, 2.0]);
    }

    #[test]
    fn test_known_values_pass_through() {
        let input = [3.3, 0.0, 9.1, 1.7];
        let filled = fill_missing_data(&input).unwrap();
        assert_eq!(filled[0], 3.3);
        assert_eq!(filled[2], 9.1);
        assert_eq!(filled[3], 1.7);
    }

    #[test]
    fn test_missing_first_sample() {
        let err = fill_missing_data(&[0.0, 1.0, 2.0, 3.0, 0.0]).unwrap_err();
        assert!(matches!(err, DataError::OutOfDomain { index: 0 }));
    }

    #[test]
    fn test_missing_last_sample() {
        let err = fill_missing_data(&[1.0, 2.0, 0.0]).unwrap_err();
        assert!(matches!(err, DataError::OutOfDomain { index: 2 }));
    }

    #[test]
    fn test_insufficient_data() {
        assert!(matches!(
            fill_missing_data(&[0.0, 5.0, 0.0]),
            Err(DataError::InsufficientData { found: 1 })
        ));
        assert!(matches!(
            fill_missing_data(&[]),
            Err(DataError::InsufficientData { found: 0 })
        ));
    }

    #[test]
    fn test_explicit_marker_keeps_real_zero() {
        let filled = fill_gaps(&[Some(-1.0), Some(0.0), None, Some(2.0)]).unwrap();
        assert_close(&filled, &[-1.0, 0.0, 1.0, 2.0]);
    }
}
