//! pt-BR number formatting for the metrics list

/// `1234567` -> `"1.234.567"`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// One fractional digit, comma separator: `29.38` -> `"29,4"`
pub fn format_decimal(value: f64) -> String {
    format!("{:.1}", value).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(1234567), "1.234.567");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(29.38), "29,4");
        assert_eq!(format_decimal(0.0), "0,0");
        assert_eq!(format_decimal(3.5), "3,5");
    }
}
