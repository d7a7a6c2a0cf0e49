use caixa_core::currency::{format_amount, format_currency, parse_amount};

#[test]
fn parses_locale_formatted_strings() {
    assert_eq!(parse_amount("R$ 1.234,56"), Some(1234.56));
    assert_eq!(parse_amount("150,00"), Some(150.0));
    assert_eq!(parse_amount("R$ 12.345.678,90"), Some(12345678.9));
    assert_eq!(parse_amount("-10,50"), Some(-10.5));
    assert_eq!(parse_amount("75"), Some(75.0));
}

#[test]
fn rejects_non_numeric_content() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("   "), None);
    assert_eq!(parse_amount("R$"), None);
    assert_eq!(parse_amount("indisponível"), None);
}

#[test]
fn formats_amounts_with_brazilian_separators() {
    assert_eq!(format_amount(1234.56), "1.234,56");
    assert_eq!(format_amount(75.0), "75,00");
    assert_eq!(format_amount(1234567.8), "1.234.567,80");
}

#[test]
fn formats_currency_with_symbol_and_sign() {
    assert_eq!(format_currency(1234.56), "R$ 1.234,56");
    assert_eq!(format_currency(-1234.56), "-R$ 1.234,56");
}

#[test]
fn parse_and_format_round_trip_to_two_decimals() {
    for value in [0.99, 75.0, 150.0, 1234.56, 999999.99] {
        let formatted = format_amount(value);
        let parsed = parse_amount(&formatted).expect("formatted value parses");
        assert!((parsed - value).abs() < 0.005, "{value} -> {formatted} -> {parsed}");
    }
}
