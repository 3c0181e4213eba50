use csv::{ReaderBuilder, StringRecord, Trim};
use shared::models::LineItem;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::ledger::{Ledger, LedgerKind};
use crate::error::EngineError;

// Amounts as people type them: "50,000", "₹1,25,000.50", " 800 ".
pub mod amount_format {
    use anyhow::{anyhow, Result};
    use std::str::FromStr;

    pub fn parse_amount(s: &str) -> Result<f64> {
        let normalized: String = s
            .trim()
            .trim_start_matches('₹')
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect();

        if normalized.is_empty() {
            return Err(anyhow!("Empty amount"));
        }

        let value = f64::from_str(&normalized).map_err(|e| anyhow!("Failed to parse amount '{}': {}", s, e))?;
        if !value.is_finite() {
            return Err(anyhow!("Amount '{}' is not a finite number", s));
        }
        if value < 0.0 {
            return Err(anyhow!("Amount '{}' is negative; enter liabilities as positive amounts", s));
        }
        Ok(value)
    }

}

pub struct LedgerCsvParser;

impl LedgerCsvParser {
    // CSV Header: kind;name;amount
    // Example Row: expense;Housing/Rent;15,000
    pub fn load_from_path(file_path: impl AsRef<Path>) -> Result<Ledger, EngineError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let ledger = Self::load_from_reader(BufReader::new(file))?;
        tracing::info!(path = %file_path.display(), items = ledger.len(), "Loaded ledger");
        Ok(ledger)
    }

    pub fn load_from_reader<R: Read>(reader: R) -> Result<Ledger, EngineError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let kind_col = Self::column(&headers, "kind")?;
        let name_col = Self::column(&headers, "name")?;
        let amount_col = Self::column(&headers, "amount")?;

        let mut ledger = Ledger::default();
        for (idx, result) in rdr.records().enumerate() {
            // header is line 1
            let line = idx + 2;
            let record = result?;

            let kind_str = Self::get_field(&record, kind_col, "kind", line)?;
            let name = Self::get_field(&record, name_col, "name", line)?;
            let amount_str = Self::get_field(&record, amount_col, "amount", line)?;

            let kind: LedgerKind = kind_str.parse().map_err(|e| {
                EngineError::LedgerFormatError(format!("Error parsing 'kind' at line {}: {}", line, e))
            })?;
            let amount = amount_format::parse_amount(amount_str).map_err(|e| {
                EngineError::LedgerFormatError(format!("Error parsing 'amount' at line {}: {}", line, e))
            })?;

            ledger.push(kind, LineItem::new(name, amount));
        }
        Ok(ledger)
    }

    fn column(headers: &StringRecord, name: &str) -> Result<usize, EngineError> {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
            .ok_or_else(|| EngineError::LedgerFormatError(format!("Missing '{}' column in ledger header", name)))
    }

    fn get_field<'a>(record: &'a StringRecord, col: usize, name: &str, line: usize) -> Result<&'a str, EngineError> {
        match record.get(col) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(EngineError::LedgerFormatError(format!(
                "Missing '{}' field in ledger record at line {}",
                name, line
            ))),
        }
    }
}
