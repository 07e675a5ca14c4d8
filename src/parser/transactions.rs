use crate::domain::model::{DatedTransactionsModel, TransactionModel};
use crate::parser::format::{parse_amount, parse_transaction_date, TRANSACTION_DATE_WIDTH};
use crate::parser::markers::{
    CELL, CELL_END, CREDIT_HIGHLIGHT, DESCRIPTION_CELL, EVEN_ROW, HIGHLIGHT_END, ODD_ROW,
    PRICE_CELL,
};
use crate::parser::rows::extract_rows;
use crate::parser::scan::{field_fixed, field_to_end, field_until};
use crate::utils::error::{PingPingError, Result};
use chrono::NaiveDateTime;

const LINES_PER_TRANSACTION: usize = 4;

/// Splits a row blob into the line records consumed by
/// [`decode_transactions`].
///
/// The first line is the remainder of the row's opening tag and the price
/// cell closes on a line of its own; both are dropped.
pub fn row_lines(blob: &str) -> Vec<&str> {
    blob.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .skip(1)
        .filter(|line| *line != CELL_END)
        .collect()
}

/// Decodes consecutive groups of date, location, description and price
/// lines. Any malformed group fails the whole call.
pub fn decode_transactions(rows: &[&str]) -> Result<Vec<TransactionModel>> {
    rows.chunks(LINES_PER_TRANSACTION)
        .map(decode_transaction)
        .collect()
}

fn decode_transaction(group: &[&str]) -> Result<TransactionModel> {
    let [date, location, description, price] = group else {
        return Err(PingPingError::IncompleteTransaction { found: group.len() });
    };

    let date = field_fixed(date, CELL, TRANSACTION_DATE_WIDTH, "date")?;
    let location = field_until(location, CELL, CELL_END, "location")?;
    let description = field_until(description, DESCRIPTION_CELL, CELL_END, "description")?;
    let price = field_to_end(price, PRICE_CELL, "price")?;

    Ok(TransactionModel {
        date: parse_transaction_date(date)?,
        location: location.to_string(),
        description: description.to_string(),
        price: parse_amount(&strip_highlight(price))?,
    })
}

fn strip_highlight(price: &str) -> String {
    let price = price.find(CELL_END).map_or(price, |idx| &price[..idx]);
    price.replace(CREDIT_HIGHLIGHT, "").replace(HIGHLIGHT_END, "")
}

/// Reads the transaction table of the transaction page.
pub fn parse_transactions_by_date(
    page: &str,
    from_date: NaiveDateTime,
) -> Result<DatedTransactionsModel> {
    let page = page.replace('\t', "");

    let mut transactions = Vec::new();
    for signature in [ODD_ROW, EVEN_ROW] {
        let blob = extract_rows(signature, &page)?;
        transactions.extend(decode_transactions(&row_lines(&blob))?);
    }

    Ok(DatedTransactionsModel::new(from_date).with_transactions(transactions))
}
