//! Slicing primitive shared by every field extraction: locate a prefix, then
//! take a fixed width, take up to a terminator, or take the rest of the line.
//!
//! `field` names the value being sliced and only shows up in errors.

use crate::utils::error::{PingPingError, Result};

/// Text following the first occurrence of `prefix`.
pub fn slice_after<'a>(text: &'a str, prefix: &str, field: &str) -> Result<&'a str> {
    text.find(prefix)
        .map(|idx| &text[idx + prefix.len()..])
        .ok_or_else(|| PingPingError::missing_marker(field, prefix))
}

/// Text before the first occurrence of `terminator`.
pub fn take_until<'a>(text: &'a str, terminator: &str, field: &str) -> Result<&'a str> {
    text.find(terminator)
        .map(|idx| &text[..idx])
        .ok_or_else(|| PingPingError::missing_marker(field, terminator))
}

/// Exactly `width` characters from the start of `text`.
pub fn take_width<'a>(text: &'a str, width: usize, field: &str) -> Result<&'a str> {
    let end = text
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .nth(width);

    match end {
        Some(end) => Ok(&text[..end]),
        None => Err(PingPingError::FieldTooShort {
            field: field.to_string(),
            expected: width,
            value: text.to_string(),
        }),
    }
}

/// Text up to the end of the current line.
pub fn take_line(text: &str) -> &str {
    let line = text.split('\n').next().unwrap_or_default();
    line.strip_suffix('\r').unwrap_or(line)
}

pub fn field_fixed<'a>(text: &'a str, prefix: &str, width: usize, field: &str) -> Result<&'a str> {
    take_width(slice_after(text, prefix, field)?, width, field)
}

pub fn field_until<'a>(
    text: &'a str,
    prefix: &str,
    terminator: &str,
    field: &str,
) -> Result<&'a str> {
    take_until(slice_after(text, prefix, field)?, terminator, field)
}

pub fn field_to_end<'a>(text: &'a str, prefix: &str, field: &str) -> Result<&'a str> {
    Ok(take_line(slice_after(text, prefix, field)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_until() {
        let line = "<td>Cafetaria Campus</td>";
        assert_eq!(
            field_until(line, "<td>", "</td>", "location").unwrap(),
            "Cafetaria Campus"
        );
    }

    #[test]
    fn test_missing_prefix_is_an_error() {
        let err = field_until("<th>x</th>", "<td>", "</td>", "location").unwrap_err();
        assert!(matches!(err, PingPingError::MissingMarker { ref field, .. } if field == "location"));
    }

    #[test]
    fn test_missing_terminator_is_an_error() {
        assert!(field_until("<td>open", "<td>", "</td>", "location").is_err());
    }

    #[test]
    fn test_fixed_width_counts_characters() {
        assert_eq!(field_fixed("<td>ééé€x", "<td>", 4, "date").unwrap(), "ééé€");
        assert_eq!(take_width("abc", 3, "date").unwrap(), "abc");
        assert!(matches!(
            take_width("abc", 4, "date"),
            Err(PingPingError::FieldTooShort { expected: 4, .. })
        ));
    }

    #[test]
    fn test_field_to_end_stops_at_newline() {
        assert_eq!(
            field_to_end("<td class=\"\">-12,50\r\n</td>", "<td class=\"\">", "price").unwrap(),
            "-12,50"
        );
    }
}
