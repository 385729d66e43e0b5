use roman_calc::core::credentials::{is_valid_email_value, verify_password_value};
use roman_calc::{convert_to_old_roman, is_valid_email, parse_arabic, verify_password};
use serde_json::json;

#[test]
fn test_documented_conversions() {
    let cases = [
        (1, "I"),
        (4, "IIII"),
        (9, "VIIII"),
        (49, "XXXXVIIII"),
        (99, "LXXXXVIIII"),
        (1000, "M"),
        (3999, "MMMCCCCCCCCCLXXXXVIIII"),
    ];
    for (value, expected) in cases {
        assert_eq!(convert_to_old_roman(value).unwrap(), expected);
    }
}

#[test]
fn test_rejected_inputs() {
    for value in [0, -1, 4000] {
        assert!(convert_to_old_roman(value).unwrap_err().is_invalid_input());
    }
    assert!(roman_calc::core::numeral::convert_f64(1.5)
        .unwrap_err()
        .is_invalid_input());
    assert!(parse_arabic("1.5").unwrap_err().is_invalid_input());
}

#[test]
fn test_documented_email_cases() {
    assert!(is_valid_email("first_Part@GMAIL.com"));
    assert!(!is_valid_email("@gmail.com"));
    assert!(!is_valid_email_value(&json!(5)));
}

#[test]
fn test_documented_password_cases() {
    assert!(verify_password("goodPassword2Use!").pass);
    assert_eq!(verify_password("badPass").length, Some(false));
    assert!(!verify_password("").pass);
    assert!(!verify_password_value(&json!(null)).pass);
}
