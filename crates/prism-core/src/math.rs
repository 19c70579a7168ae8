//! Numeric comparison helpers for test assertions.

/// Compare two numeric sequences elementwise within an absolute tolerance.
///
/// Returns `false` immediately when the lengths differ, regardless of
/// content. With `epsilon == 0.0` the comparison demands exact equality.
#[must_use]
pub fn num_array_equals(a: &[f64], b: &[f64], epsilon: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| (x - y).abs() <= epsilon)
}

/// Elementwise comparison with the default tolerance of machine epsilon.
#[must_use]
pub fn num_array_equals_default(a: &[f64], b: &[f64]) -> bool {
    num_array_equals(a, b, f64::EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_within_tolerance() {
        assert!(num_array_equals(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], 0.0));
        assert!(num_array_equals(&[1.0, 2.0], &[1.001, 1.999], 0.01));
        assert!(!num_array_equals(&[1.0, 2.0], &[1.1, 2.0], 0.01));
    }

    #[test]
    fn length_mismatch_is_false() {
        assert!(!num_array_equals(&[1.0, 2.0], &[1.0, 2.0, 3.0], 100.0));
        assert!(!num_array_equals(&[1.0], &[], 100.0));
    }

    #[test]
    fn empty_sequences_are_equal() {
        assert!(num_array_equals(&[], &[], 0.0));
    }

    #[test]
    fn symmetric() {
        let a = [0.5, -1.25, 3.0];
        let b = [0.501, -1.249, 3.0];
        assert_eq!(
            num_array_equals(&a, &b, 0.01),
            num_array_equals(&b, &a, 0.01)
        );
        assert_eq!(
            num_array_equals(&a, &b, 0.0001),
            num_array_equals(&b, &a, 0.0001)
        );
    }

    #[test]
    fn default_tolerance_is_machine_epsilon() {
        assert!(num_array_equals_default(&[0.1 + 0.2], &[0.3]));
        assert!(!num_array_equals_default(&[0.1], &[0.100001]));
    }
}
