use crate::domain::model::{MAX_ARABIC, MIN_ARABIC, NUMERAL_TABLE};
use crate::utils::error::{CalcError, Result};

/// Checks that `value` lies in the convertible domain and narrows it.
pub fn validate_arabic(value: i64) -> Result<u16> {
    if !(MIN_ARABIC..=MAX_ARABIC).contains(&value) {
        return Err(CalcError::invalid_input(
            value,
            format!("Input must be in range {}-{}", MIN_ARABIC, MAX_ARABIC),
        ));
    }
    // 已確認在 1..=3999 之內
    Ok(value as u16)
}

/// Parses user-entered text into a convertible value.
///
/// Only optionally signed decimal integers are accepted; fractions, `NaN`,
/// `inf` and blank input are rejected the same way as out-of-range numbers.
pub fn parse_arabic(input: &str) -> Result<u16> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CalcError::invalid_input(input, "Expected a number"));
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| CalcError::invalid_input(input, "Expected a whole number"))?;

    validate_arabic(value)
}

/// Converts a value into additive ("old") Roman notation, e.g. 9 -> `VIIII`.
pub fn convert_to_old_roman(value: i64) -> Result<String> {
    let value = validate_arabic(value)?;

    let mut remaining = u32::from(value);
    let mut result = String::new();

    for &(symbol_value, symbol) in NUMERAL_TABLE.iter() {
        if remaining == 0 {
            break;
        }
        while remaining >= symbol_value {
            result.push(symbol);
            remaining -= symbol_value;
        }
    }

    tracing::trace!(value, numeral = %result, "converted to old roman");
    Ok(result)
}

/// Same as [`convert_to_old_roman`] for floating point input.
pub fn convert_f64(value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(value, "Expected a finite number"));
    }
    if value.fract() != 0.0 {
        return Err(CalcError::invalid_input(value, "Expected a whole number"));
    }
    if value < MIN_ARABIC as f64 || value > MAX_ARABIC as f64 {
        return Err(CalcError::invalid_input(
            value,
            format!("Input must be in range {}-{}", MIN_ARABIC, MAX_ARABIC),
        ));
    }
    convert_to_old_roman(value as i64)
}

/// Sums the symbol values of an additive numeral.
pub fn additive_value(numeral: &str) -> Result<u32> {
    if numeral.is_empty() {
        return Err(CalcError::invalid_input(numeral, "Numeral cannot be empty"));
    }

    numeral.chars().try_fold(0u32, |total, c| {
        NUMERAL_TABLE
            .iter()
            .find(|(_, symbol)| *symbol == c)
            .ok_or_else(|| {
                CalcError::invalid_input(numeral, format!("Unknown numeral symbol '{}'", c))
            })
            .and_then(|(value, _)| {
                total
                    .checked_add(*value)
                    .ok_or_else(|| CalcError::invalid_input(numeral, "Numeral value too large"))
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol_value(c: char) -> u32 {
        NUMERAL_TABLE
            .iter()
            .find(|(_, s)| *s == c)
            .map(|(v, _)| *v)
            .unwrap()
    }

    #[test]
    fn test_single_symbols() {
        assert_eq!(convert_to_old_roman(1).unwrap(), "I");
        assert_eq!(convert_to_old_roman(5).unwrap(), "V");
        assert_eq!(convert_to_old_roman(10).unwrap(), "X");
        assert_eq!(convert_to_old_roman(50).unwrap(), "L");
        assert_eq!(convert_to_old_roman(100).unwrap(), "C");
        assert_eq!(convert_to_old_roman(1000).unwrap(), "M");
    }

    #[test]
    fn test_additive_repetition() {
        assert_eq!(convert_to_old_roman(2).unwrap(), "II");
        assert_eq!(convert_to_old_roman(4).unwrap(), "IIII");
        assert_eq!(convert_to_old_roman(9).unwrap(), "VIIII");
        assert_eq!(convert_to_old_roman(49).unwrap(), "XXXXVIIII");
        assert_eq!(convert_to_old_roman(99).unwrap(), "LXXXXVIIII");
        assert_eq!(convert_to_old_roman(500).unwrap(), "CCCCC");
    }

    #[test]
    fn test_max_value() {
        let numeral = convert_to_old_roman(3999).unwrap();
        assert_eq!(numeral, "MMMCCCCCCCCCLXXXXVIIII");
        assert!(numeral.len() <= 36);
    }

    #[test]
    fn test_out_of_range_is_invalid_input() {
        for value in [0, -1, 4000, i64::MIN, i64::MAX] {
            let err = convert_to_old_roman(value).unwrap_err();
            assert!(err.is_invalid_input(), "{} should be rejected", value);
        }
    }

    #[test]
    fn test_non_integral_floats_are_invalid_input() {
        for value in [1.5, 1.001, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, 4000.0] {
            assert!(convert_f64(value).unwrap_err().is_invalid_input());
        }
        assert_eq!(convert_f64(9.0).unwrap(), "VIIII");
    }

    #[test]
    fn test_parse_arabic() {
        assert_eq!(parse_arabic("42").unwrap(), 42);
        assert_eq!(parse_arabic("  3999\n").unwrap(), 3999);
        for input in ["", "   ", "1.5", "abc", "NaN", "inf", "0", "-1", "4000", "99999999999999999999"] {
            assert!(parse_arabic(input).unwrap_err().is_invalid_input(), "{:?}", input);
        }
    }

    #[test]
    fn test_every_value_round_trips_by_summation() {
        for n in MIN_ARABIC..=MAX_ARABIC {
            let numeral = convert_to_old_roman(n).unwrap();
            assert!(!numeral.is_empty());
            assert!(numeral.chars().all(|c| "MCLXVI".contains(c)));

            let values: Vec<u32> = numeral.chars().map(symbol_value).collect();
            assert!(values.windows(2).all(|w| w[0] >= w[1]), "{} -> {}", n, numeral);

            assert_eq!(additive_value(&numeral).unwrap(), n as u32);
        }
    }

    #[test]
    fn test_additive_value_rejects_unknown_symbols() {
        assert!(additive_value("IV").is_ok());
        assert!(additive_value("XD").unwrap_err().is_invalid_input());
        assert!(additive_value("").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_additive_value_overflow_is_invalid_input() {
        let numeral = "M".repeat(4_294_968);
        let err = additive_value(&numeral).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("Numeral value too large"));

        assert_eq!(additive_value(&"M".repeat(4_294_967)).unwrap(), 4_294_967_000);
    }

    #[test]
    fn test_conversion_is_pure() {
        assert_eq!(convert_to_old_roman(1987).unwrap(), convert_to_old_roman(1987).unwrap());
    }
}
