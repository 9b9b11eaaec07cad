/// Normalizes one raw phone string, or drops it.
///
/// Calling-code-1 numbers (10 digits, or 11 starting with `1`, with or
/// without a leading `+`) render as `(NNN) NNN-NNNN`. Other `+`-prefixed
/// numbers of 8 to 15 digits pass through as `+{digits}`. Anything else
/// yields no entry.
pub fn format_phone(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let has_plus = trimmed.starts_with('+');
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();

    if has_plus {
        // Under calling code 1 the number must be a plausible NANP number.
        if let Some(rest) = digits.strip_prefix('1') {
            return format_nanp(rest);
        }
        if (8..=15).contains(&digits.len()) {
            return Some(format!("+{digits}"));
        }
        return None;
    }

    match digits.len() {
        11 => digits.strip_prefix('1').and_then(format_nanp),
        10 => format_nanp(&digits),
        _ => None,
    }
}

/// `(NNN) NNN-NNNN` when the 10 digits look like a real NANP number:
/// area code and exchange must not begin with 0 or 1.
fn format_nanp(digits: &str) -> Option<String> {
    if digits.len() != 10 {
        return None;
    }
    let bytes = digits.as_bytes();
    if !(b'2'..=b'9').contains(&bytes[0]) || !(b'2'..=b'9').contains(&bytes[3]) {
        return None;
    }
    Some(format!(
        "({}) {}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_bare_ten_digit_number() {
        assert_eq!(format_phone("2125551234"), Some("(212) 555-1234".into()));
    }

    #[test]
    fn strips_punctuation_before_formatting() {
        assert_eq!(
            format_phone("(212) 555-1234"),
            Some("(212) 555-1234".into())
        );
        assert_eq!(format_phone("212.555.1234"), Some("(212) 555-1234".into()));
        assert_eq!(format_phone("212 555 1234"), Some("(212) 555-1234".into()));
    }

    #[test]
    fn strips_leading_country_code_one() {
        assert_eq!(format_phone("1-212-555-1234"), Some("(212) 555-1234".into()));
        assert_eq!(
            format_phone("+1 212 555 1234"),
            Some("(212) 555-1234".into())
        );
    }

    #[test]
    fn other_country_codes_pass_through_unformatted() {
        assert_eq!(
            format_phone("+44 20 7946 0958"),
            Some("+442079460958".into())
        );
        assert_eq!(format_phone("+31612345678"), Some("+31612345678".into()));
    }

    #[test]
    fn rejects_implausible_area_code_or_exchange() {
        // Area code starting with 1.
        assert_eq!(format_phone("1125551234"), None);
        // Exchange starting with 0.
        assert_eq!(format_phone("2120551234"), None);
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(format_phone("555-1234"), None);
        assert_eq!(format_phone("21255512345"), None);
        assert_eq!(format_phone("+1 555 123"), None);
        assert_eq!(format_phone("+123"), None);
    }

    #[test]
    fn rejects_non_numeric_garbage() {
        assert_eq!(format_phone(""), None);
        assert_eq!(format_phone("call me"), None);
    }
}
