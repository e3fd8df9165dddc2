//! Rounding helpers shared by the calculators
//!
//! Targets and progress figures are shown to users as whole kcal/grams or
//! one-decimal kilograms. Halves always round toward positive infinity, so
//! `-0.25` rounds to `-0.2` and `171.5` rounds to `172`.

/// Round to the nearest integer, halves up
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, halves up
pub fn round_one_decimal(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Round to the nearest integer and narrow to `i32`
pub fn round_to_i32(value: f64) -> i32 {
    round_half_up(value) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(171.75, 172.0)]
    #[case(171.5, 172.0)]
    #[case(171.49, 171.0)]
    #[case(-2.5, -2.0)]
    #[case(-2.51, -3.0)]
    fn test_round_half_up(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(round_half_up(input), expected);
    }

    #[test]
    fn test_round_one_decimal() {
        assert!((round_one_decimal(2.34) - 2.3).abs() < 1e-9);
        assert!((round_one_decimal(2.36) - 2.4).abs() < 1e-9);
        assert!((round_one_decimal(-0.25) + 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_round_to_i32() {
        assert_eq!(round_to_i32(1797.4875), 1797);
        assert_eq!(round_to_i32(49.9167), 50);
    }
}
