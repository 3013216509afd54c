//! Detection of (nearly) duplicated values in small per-event sequences

use crate::numeric::Float;
use num_traits::NumCast;
use prefix_num_ops::real::*;

/// Default tolerance of [`remove_duplicates`]
pub const DEFAULT_TOLERANCE: Float = 1e-15;

/// Flag the values which do not duplicate an earlier value
///
/// Same as [`remove_duplicates_within`], using [`DEFAULT_TOLERANCE`].
///
pub fn remove_duplicates<T: NumCast + Copy>(values: &[T]) -> Vec<bool> {
    remove_duplicates_within(values, DEFAULT_TOLERANCE)
}

/// Flag the values which do not duplicate an earlier value
///
/// Entry `i` of the output is false if there is an earlier entry `j < i` such
/// that `|values[i] - values[j]| < tolerance`, and true otherwise. The first
/// value of each cluster of near-equal values is therefore kept.
///
/// Values are converted to [`Float`] before being compared, so that integer
/// differences cannot overflow. Values which cannot be represented as a
/// [`Float`] are never considered to be duplicates.
///
/// Every value is compared with all the values before it, so this is
/// quadratic in the input length. It is meant for short candidate lists.
///
pub fn remove_duplicates_within<T: NumCast + Copy>(
    values: &[T],
    tolerance: Float,
) -> Vec<bool> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            !values[..i]
                .iter()
                .any(|&earlier| is_within(value, earlier, tolerance))
        })
        .collect()
}

/// Truth that two values differ by less than the tolerance
fn is_within<T: NumCast>(value: T, earlier: T, tolerance: Float) -> bool {
    match (
        num_traits::cast::<T, Float>(value),
        num_traits::cast::<T, Float>(earlier),
    ) {
        (Some(value), Some(earlier)) => abs(value - earlier) < tolerance,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_of_each_cluster() {
        let values: [Float; 4] = [1.0, 1.0, 2.0, 1.0 + 5e-16];
        assert_eq!(
            remove_duplicates_within(&values, 1e-15),
            vec![true, false, true, false]
        );
        assert_eq!(remove_duplicates(&values), vec![true, false, true, false]);
    }

    #[test]
    fn empty_input_gives_empty_mask() {
        assert!(remove_duplicates::<Float>(&[]).is_empty());
        assert!(remove_duplicates_within::<Float>(&[], 0.5).is_empty());
    }

    #[test]
    fn mask_has_input_length() {
        let values: Vec<Float> = (0..17).map(|i| (i % 5) as Float).collect();
        let mask = remove_duplicates(&values);
        assert_eq!(mask.len(), values.len());
        assert_eq!(mask.iter().filter(|&&keep| keep).count(), 5);
    }

    #[test]
    fn tolerance_is_strict() {
        assert_eq!(
            remove_duplicates_within(&[0., 0.5, 1.25], 0.5),
            vec![true, true, true]
        );
        assert_eq!(
            remove_duplicates_within(&[0., 0.4, 0.8], 0.5),
            vec![true, false, false]
        );
    }

    #[test]
    fn integers_are_supported() {
        assert_eq!(
            remove_duplicates(&[3, -3, 3, 4, -3]),
            vec![true, true, false, true, false]
        );
    }

    #[test]
    fn extreme_integers_do_not_overflow() {
        assert_eq!(remove_duplicates(&[i32::MAX, -1]), vec![true, true]);
        assert_eq!(
            remove_duplicates(&[i32::MIN, i32::MAX, i32::MIN, 0]),
            vec![true, true, false, true]
        );
        assert_eq!(remove_duplicates(&[0u8, 255, 0]), vec![true, true, false]);
    }

    #[test]
    fn nan_is_never_a_duplicate() {
        let mask = remove_duplicates(&[Float::NAN, Float::NAN, 1.]);
        assert_eq!(mask, vec![true, true, true]);
    }
}
