use crate::parser::markers::ROW_END;
use crate::utils::error::{PingPingError, Result};

/// Concatenates, in page order, the body of every row opened by `signature`:
/// the text between the signature and the next `</tr>`.
///
/// Signatures are matched verbatim so the odd and even row styles never
/// match each other. Any copy of the signature left inside a body is
/// removed from the result.
pub fn extract_rows(signature: &str, page: &str) -> Result<String> {
    if signature.is_empty() {
        return Ok(String::new());
    }

    let mut blob = String::new();
    let mut cursor = 0;

    while let Some(found) = page[cursor..].find(signature) {
        let start = cursor + found + signature.len();
        let length = page[start..]
            .find(ROW_END)
            .ok_or_else(|| PingPingError::missing_marker("row", ROW_END))?;

        blob.push_str(&page[start..start + length]);
        cursor = start + length + ROW_END.len();
    }

    Ok(blob.replace(signature, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::markers::{EVEN_ROW, ODD_ROW};

    const PAGE: &str = "<table>\
<tr class=\"\" >A1</tr>\
<tr class=\"even \" >B1</tr>\
<tr class=\"\" >A2</tr>\
<tr class=\"even \" >B2</tr>\
</table>";

    #[test]
    fn test_rows_concatenated_in_page_order() {
        assert_eq!(extract_rows(ODD_ROW, PAGE).unwrap(), "A1A2");
        assert_eq!(extract_rows(EVEN_ROW, PAGE).unwrap(), "B1B2");
    }

    #[test]
    fn test_absent_signature_yields_empty_text() {
        assert_eq!(extract_rows("<tr class=\"odd\">", PAGE).unwrap(), "");
        assert_eq!(extract_rows(ODD_ROW, "").unwrap(), "");
    }

    #[test]
    fn test_unclosed_row_is_an_error() {
        let page = "<tr class=\"\" >A1";
        assert!(matches!(
            extract_rows(ODD_ROW, page),
            Err(PingPingError::MissingMarker { .. })
        ));
    }

    #[test]
    fn test_signature_inside_body_is_stripped() {
        let page = "<tr class=\"\" >x<tr class=\"\" >y</tr>";
        assert_eq!(extract_rows(ODD_ROW, page).unwrap(), "xy");
    }
}
