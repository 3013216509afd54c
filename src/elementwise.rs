//! Elementwise operations and small reductions over numeric sequences

use crate::numeric::Float;
use prefix_num_ops::real::*;

/// Apply a binary function to matching elements of two sequences
///
/// The output has the length of `v1`. Like the rest of this crate, this does
/// not check that both sequences have the same length, but indexing `v2` past
/// its end panics.
///
pub(crate) fn zip_map<T: Copy, U>(v1: &[T], v2: &[T], f: impl Fn(T, T) -> U) -> Vec<U> {
    let v2 = &v2[..v1.len()];
    v1.iter().zip(v2).map(|(&x1, &x2)| f(x1, x2)).collect()
}

/// Arguments of a 4-way maximum, each of which defaults to zero
///
/// Because the running maximum starts from zero, the result is the maximum of
/// the supplied values *and zero*. In particular, the maximum of only negative
/// values is zero. Analyses depend on that floor, so keep it.
///
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Max4 {
    /// First value
    pub v1: Float,

    /// Second value
    pub v2: Float,

    /// Third value
    pub v3: Float,

    /// Fourth value
    pub v4: Float,
}
//
impl Max4 {
    /// Take up to four values, the missing ones being zero
    pub fn from_slice(values: &[Float]) -> Self {
        assert!(values.len() <= 4, "Max4 takes at most four values");
        let mut padded = [0.; 4];
        padded[..values.len()].copy_from_slice(values);
        let [v1, v2, v3, v4] = padded;
        Self { v1, v2, v3, v4 }
    }

    /// Compute the maximum
    ///
    /// A candidate replaces the running maximum only if the latter compares
    /// less than it, so NaN candidates are ignored.
    ///
    pub fn max(self) -> Float {
        [self.v1, self.v2, self.v3, self.v4]
            .into_iter()
            .fold(0., |best, v| if best < v { v } else { best })
    }
}

/// Maximum of four values and zero, see [`Max4`]
pub fn max4(v1: Float, v2: Float, v3: Float, v4: Float) -> Float {
    Max4 { v1, v2, v3, v4 }.max()
}

/// Elementwise maximum of two sequences
///
/// `v2[i]` is picked only when `v1[i] < v2[i]`, so incomparable elements
/// (like NaN) resolve to `v1[i]`.
///
/// # Panics
///
/// If `v2` is shorter than `v1`.
///
pub fn max_from<T: PartialOrd + Copy>(v1: &[T], v2: &[T]) -> Vec<T> {
    zip_map(v1, v2, |x1, x2| if x1 < x2 { x2 } else { x1 })
}

/// Euclidean norm of (x, y), computed as sqrt(x² + y²)
pub fn radius<T: num_traits::Float>(x: T, y: T) -> T {
    sqrt(x * x + y * y)
}

/// Elementwise version of [`radius`]
///
/// # Panics
///
/// If `y` is shorter than `x`.
///
pub fn radius_vec<T: num_traits::Float>(x: &[T], y: &[T]) -> Vec<T> {
    zip_map(x, y, radius::<T>)
}

/// Keep the elements of `values` whose mask entry is true
///
/// # Panics
///
/// If `mask` is shorter than `values`.
///
pub fn masked<T: Copy>(values: &[T], mask: &[bool]) -> Vec<T> {
    let mask = &mask[..values.len()];
    values
        .iter()
        .zip(mask)
        .filter_map(|(&v, &keep)| keep.then_some(v))
        .collect()
}
