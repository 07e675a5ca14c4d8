use crate::domain::model::TransactionModel;
use crate::utils::error::Result;
use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Transactions as CSV with a `date,location,description,price` header.
pub fn transactions_to_csv(transactions: &[TransactionModel]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if transactions.is_empty() {
        writer.write_record(["date", "location", "description", "price"])?;
    }
    for transaction in transactions {
        writer.serialize(transaction)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_transactions_csv() {
        let transactions = vec![TransactionModel {
            date: NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            location: "Kantine, campus Noord".to_string(),
            description: "Broodje".to_string(),
            price: dec!(-12.50),
        }];

        let csv = transactions_to_csv(&transactions).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "date,location,description,price");
        assert_eq!(
            lines[1],
            "2024-03-05T14:30:00,\"Kantine, campus Noord\",Broodje,-12.5"
        );
    }

    #[test]
    fn test_empty_csv_keeps_header() {
        let csv = transactions_to_csv(&[]).unwrap();
        assert_eq!(csv.trim_end(), "date,location,description,price");
    }
}
