use chrono::NaiveDate;

/// Returns true iff `value` is a real calendar date written exactly as
/// `YYYY-MM-DD`.
///
/// chrono accepts variable-width numeric fields (`24-1-1` parses with
/// `%Y-%m-%d`), so the fixed ten-byte shape is checked first.
pub fn is_valid_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, byte)| i == 4 || i == 7 || byte.is_ascii_digit());
    if !digits_ok {
        return false;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_dates() {
        assert!(is_valid_date("2024-01-05"));
        assert!(is_valid_date("2000-02-29")); // leap day
        assert!(is_valid_date("1999-12-31"));
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("2024-00-10"));
        assert!(!is_valid_date("2024-02-30"));
        assert!(!is_valid_date("2023-02-29")); // not a leap year
    }

    #[test]
    fn rejects_wrong_widths() {
        assert!(!is_valid_date("24-1-1"));
        assert!(!is_valid_date("2024-1-01"));
        assert!(!is_valid_date("2024-01-5"));
        assert!(!is_valid_date("02024-01-05"));
    }

    #[test]
    fn rejects_non_dates() {
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("not-a-date"));
        assert!(!is_valid_date("2024/01/05"));
        assert!(!is_valid_date(" 2024-01-05"));
        assert!(!is_valid_date("2024-01-05 "));
    }
}
