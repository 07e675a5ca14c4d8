use crate::utils::error::{PingPingError, Result};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::str::FromStr;

/// `dd-MM-yyyy HH:mm:ss`, as printed in the transaction table.
pub const TRANSACTION_DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";
pub const TRANSACTION_DATE_LAYOUT: &str = "dd-MM-yyyy HH:mm:ss";
pub const TRANSACTION_DATE_WIDTH: usize = 19;

/// `dd/MM/yyyy HH:mm:ss`, as printed in the session table.
pub const SESSION_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
pub const SESSION_DATE_LAYOUT: &str = "dd/MM/yyyy HH:mm:ss";

/// Date format of the transaction search form.
pub const FORM_DATE_FORMAT: &str = "%d-%m-%Y";

/// Checks `value` character by character against `layout`: every letter of
/// the layout stands for one ASCII digit, anything else must match exactly.
fn matches_layout(value: &str, layout: &str) -> bool {
    value.len() == layout.len()
        && value.bytes().zip(layout.bytes()).all(|(v, l)| {
            if l.is_ascii_alphabetic() {
                v.is_ascii_digit()
            } else {
                v == l
            }
        })
}

// chrono accepts unpadded fields, so the layout is checked first.
fn parse_date(value: &str, format: &str, layout: &'static str) -> Result<NaiveDateTime> {
    let invalid = |source| PingPingError::InvalidDate {
        value: value.to_string(),
        layout,
        source,
    };

    if !matches_layout(value, layout) {
        return Err(invalid(None));
    }
    NaiveDateTime::parse_from_str(value, format).map_err(|e| invalid(Some(e)))
}

pub fn parse_transaction_date(value: &str) -> Result<NaiveDateTime> {
    parse_date(value, TRANSACTION_DATE_FORMAT, TRANSACTION_DATE_LAYOUT)
}

pub fn parse_session_date(value: &str) -> Result<NaiveDateTime> {
    parse_date(value, SESSION_DATE_FORMAT, SESSION_DATE_LAYOUT)
}

/// Parses a Belgian-formatted amount such as `-1.234,56 €`.
///
/// `.` groups thousands and `,` separates decimals. A leading `-` (or the
/// Unicode minus sign) makes the amount negative.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let invalid = || PingPingError::InvalidAmount {
        value: raw.to_string(),
    };

    let cleaned: String = raw
        .replace("&euro;", "")
        .replace("&nbsp;", "")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '€')
        .collect();

    let (negative, digits) = match cleaned
        .strip_prefix('-')
        .or_else(|| cleaned.strip_prefix('\u{2212}'))
    {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };

    let (whole, fraction) = match digits.split_once(',') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    if !is_grouped_integer(whole)
        || fraction.is_some_and(|f| f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(invalid());
    }

    let mut normalized = whole.replace('.', "");
    if let Some(fraction) = fraction {
        normalized.push('.');
        normalized.push_str(fraction);
    }
    let value = Decimal::from_str(&normalized).map_err(|_| invalid())?;

    Ok(if negative { -value } else { value })
}

/// `1234`, or `1.234` with every `.` followed by exactly three digits.
fn is_grouped_integer(whole: &str) -> bool {
    let mut groups = whole.split('.');
    let lead = groups.next().unwrap_or_default();
    let all_digits = |group: &str| group.bytes().all(|b| b.is_ascii_digit());

    if lead.is_empty() || !all_digits(lead) {
        return false;
    }
    if !whole.contains('.') {
        return true;
    }
    lead.len() <= 3 && groups.all(|group| group.len() == 3 && all_digits(group))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_transaction_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(parse_transaction_date("05-03-2024 14:30:00").unwrap(), expected);
    }

    #[test]
    fn test_transaction_date_rejects_other_layouts() {
        assert!(parse_transaction_date("2024-03-05 14:30:00").is_err());
        assert!(parse_transaction_date("05/03/2024 14:30:00").is_err());
        assert!(parse_transaction_date("05-03-2024T14:30:0").is_err());
        assert!(parse_transaction_date("5-3-2024 14:30:00  ").is_err());
        assert!(parse_transaction_date(" 5-03-2024 14:30:00").is_err());
        assert!(parse_transaction_date("05-03-2024 14:30:00 ").is_err());
        assert!(parse_transaction_date("05-03-2024 1:30:00 ").is_err());
    }

    #[test]
    fn test_impossible_date_keeps_chrono_error() {
        let err = parse_transaction_date("31-02-2024 14:30:00").unwrap_err();
        assert!(matches!(
            err,
            PingPingError::InvalidDate {
                source: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_session_date() {
        let expected = NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 1)
            .unwrap();
        assert_eq!(parse_session_date("31/12/2023 23:59:01").unwrap(), expected);
        assert!(parse_session_date("31-12-2023 23:59:01").is_err());
        assert!(parse_session_date("1/1/2023 23:59:01   ").is_err());
        assert!(parse_session_date(" 31/12/2023 23:59:01").is_err());
    }

    #[test]
    fn test_amounts() {
        assert_eq!(parse_amount("-12,50").unwrap(), dec!(-12.50));
        assert_eq!(parse_amount("34,00").unwrap(), dec!(34));
        assert_eq!(parse_amount("+ 1.234,56 €").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("&euro;&nbsp;7,05").unwrap(), dec!(7.05));
        assert_eq!(parse_amount("\u{2212}3,10").unwrap(), dec!(-3.10));
    }

    #[test]
    fn test_invalid_amounts() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("-").is_err());
        assert!(parse_amount("12,50 EUR").is_err());
        assert!(parse_amount("1,2,3").is_err());
        assert!(parse_amount("<span>3,00").is_err());
        assert!(parse_amount("1.2,5").is_err());
        assert!(parse_amount("1234.567,00").is_err());
        assert!(parse_amount("1..234,00").is_err());
        assert!(parse_amount("12,").is_err());
    }

    #[test]
    fn test_thousands_groups() {
        assert_eq!(parse_amount("1.234.567,89").unwrap(), dec!(1234567.89));
        assert_eq!(parse_amount("-1.005,20").unwrap(), dec!(-1005.20));
        assert_eq!(parse_amount("1234,5").unwrap(), dec!(1234.5));
    }
}
