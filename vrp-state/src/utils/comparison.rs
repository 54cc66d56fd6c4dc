#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::models::common::Float;
use std::cmp::Ordering;

/// Compares floating point numbers treating `NaN` as the greatest value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Compares floating point references, see [`compare_floats`].
#[inline]
pub fn compare_floats_refs(a: &Float, b: &Float) -> Ordering {
    compare_floats(*a, *b)
}

/// Checks whether two floats are equal within a small tolerance.
#[inline]
pub fn is_close(a: Float, b: Float) -> bool {
    a == b || (a - b).abs() < Float::EPSILON * a.abs().max(b.abs()).max(1.)
}
