//! Bill table loading
//!
//! Reads the monthly bill table from CSV. Columns are located by header name so
//! the table may carry extra columns (notes, account, ...) in any order.
//! Rows without an amount are treated as malformed and dropped before any
//! computation; rows without a due day are living expenses.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{PaycheckError, PaycheckResult};
use crate::models::{Bill, Money, MAX_RECURRENCE_DAY};

/// Header of the amount column
pub const AMOUNT_COLUMN: &str = "Amount";

/// Header of the due-day column
pub const DAY_COLUMN: &str = "Day-recurring";

/// Headers accepted for the optional label column
const NAME_COLUMNS: [&str; 3] = ["name", "bill", "description"];

/// Positions of the columns of interest within a header record
#[derive(Debug, Clone, Copy)]
struct ColumnMapping {
    amount: usize,
    day: usize,
    name: Option<usize>,
}

impl ColumnMapping {
    /// Locate the columns by header name (case-insensitive)
    fn from_headers(headers: &StringRecord) -> PaycheckResult<Self> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        };

        let amount = find(AMOUNT_COLUMN).ok_or_else(|| {
            PaycheckError::Import(format!("Missing '{}' column", AMOUNT_COLUMN))
        })?;
        let day = find(DAY_COLUMN)
            .ok_or_else(|| PaycheckError::Import(format!("Missing '{}' column", DAY_COLUMN)))?;
        let name = NAME_COLUMNS.iter().find_map(|&n| find(n));

        Ok(Self { amount, day, name })
    }
}

/// The bill table for one run, already cleaned of rows without an amount
#[derive(Debug, Clone, Default)]
pub struct BillLedger {
    bills: Vec<Bill>,
    dropped_rows: usize,
}

impl BillLedger {
    /// Build a ledger from bills that are already known to be valid
    pub fn from_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills,
            dropped_rows: 0,
        }
    }

    /// Load the bill table from a CSV file
    ///
    /// A missing or unreadable file is fatal.
    pub fn load(path: impl AsRef<Path>) -> PaycheckResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PaycheckError::Io(format!(
                "Failed to open bill table {}: {}",
                path.display(),
                e
            ))
        })?;

        let ledger = Self::from_reader(file)?;
        debug!(
            path = %path.display(),
            bills = ledger.len(),
            dropped = ledger.dropped_rows,
            "loaded bill table"
        );
        Ok(ledger)
    }

    /// Parse a bill table from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> PaycheckResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mapping = ColumnMapping::from_headers(reader.headers()?)?;

        let mut bills = Vec::new();
        let mut dropped_rows = 0;

        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let row = idx + 1;

            match parse_record(&record, row, &mapping)? {
                Some(bill) => bills.push(bill),
                None => {
                    debug!(row, "dropping bill row without an amount");
                    dropped_rows += 1;
                }
            }
        }

        Ok(Self {
            bills,
            dropped_rows,
        })
    }

    /// The loaded bills, in table order
    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn len(&self) -> usize {
        self.bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }

    /// Number of rows discarded for lacking an amount
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Sum of every bill in the table
    pub fn total(&self) -> Money {
        self.bills.iter().map(|b| b.amount).sum()
    }
}

/// Parse one data row; `Ok(None)` means the row has no amount and is skipped
fn parse_record(
    record: &StringRecord,
    row: usize,
    mapping: &ColumnMapping,
) -> PaycheckResult<Option<Bill>> {
    let amount_str = cell(record, mapping.amount);
    if amount_str.is_empty() {
        return Ok(None);
    }

    let amount = Money::parse(amount_str).map_err(|e| PaycheckError::bad_row(row, e))?;
    let recurrence_day =
        parse_day(cell(record, mapping.day)).map_err(|e| PaycheckError::bad_row(row, e))?;
    let name = mapping
        .name
        .map(|col| cell(record, col))
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(Some(Bill {
        name,
        amount,
        recurrence_day,
    }))
}

/// Get a trimmed cell, treating short rows as blank
fn cell(record: &StringRecord, col: usize) -> &str {
    record.get(col).map(str::trim).unwrap_or("")
}

/// Parse a day-of-month cell
///
/// Spreadsheet exports write integer columns that contain blanks as floats
/// ("5.0"), so whole-valued floats are accepted.
fn parse_day(s: &str) -> Result<Option<u32>, String> {
    if s.is_empty() {
        return Ok(None);
    }

    let day = match s.parse::<u32>() {
        Ok(day) => day,
        Err(_) => {
            let value: f64 = s
                .parse()
                .map_err(|_| format!("invalid {} '{}'", DAY_COLUMN, s))?;
            if value.fract() != 0.0 || value < 0.0 {
                return Err(format!("invalid {} '{}'", DAY_COLUMN, s));
            }
            value as u32
        }
    };

    if !(1..=MAX_RECURRENCE_DAY).contains(&day) {
        return Err(format!(
            "{} must be between 1 and {}, got {}",
            DAY_COLUMN, MAX_RECURRENCE_DAY, day
        ));
    }

    Ok(Some(day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn ledger(csv: &str) -> PaycheckResult<BillLedger> {
        BillLedger::from_reader(csv.as_bytes())
    }

    #[test]
    fn test_parse_basic_table() {
        let ledger = ledger("Amount,Day-recurring\n100,5\n50,20\n30,\n").unwrap();

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.bills()[0], Bill::due_on(Money::from_dollars(100), 5));
        assert_eq!(ledger.bills()[1], Bill::due_on(Money::from_dollars(50), 20));
        assert_eq!(ledger.bills()[2], Bill::leftover(Money::from_dollars(30)));
        assert_eq!(ledger.total(), Money::from_dollars(180));
        assert_eq!(ledger.dropped_rows(), 0);
    }

    #[test]
    fn test_rows_without_amount_are_dropped() {
        let ledger = ledger("Amount,Day-recurring\n100,5\n,12\n,\n25.50,\n").unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.dropped_rows(), 2);
        assert!(ledger.bills().iter().all(|b| b.recurrence_day != Some(12)));
        assert_eq!(ledger.total(), Money::from_cents(12550));
    }

    #[test]
    fn test_columns_found_by_name_in_any_order() {
        let csv = "Name,Notes,Day-recurring,Amount\nRent,,1,1200\nGroceries,weekly shop,,400\n";
        let ledger = ledger(csv).unwrap();

        assert_eq!(
            ledger.bills()[0],
            Bill::due_on(Money::from_dollars(1200), 1).with_name("Rent")
        );
        assert_eq!(
            ledger.bills()[1],
            Bill::leftover(Money::from_dollars(400)).with_name("Groceries")
        );
    }

    #[test]
    fn test_float_days_from_spreadsheet_exports() {
        let ledger = ledger("Amount,Day-recurring\n100.0,5.0\n30.0,\n").unwrap();
        assert_eq!(ledger.bills()[0].recurrence_day, Some(5));
        assert_eq!(ledger.bills()[1].recurrence_day, None);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let err = ledger("Amount,Due\n100,5\n").unwrap_err();
        assert!(err.is_import());
        assert!(err.to_string().contains("Day-recurring"));

        let err = ledger("Cost,Day-recurring\n100,5\n").unwrap_err();
        assert!(err.to_string().contains("Amount"));
    }

    #[test]
    fn test_bad_cells_name_the_row() {
        let err = ledger("Amount,Day-recurring\n100,5\nabc,6\n").unwrap_err();
        assert!(err.is_import());
        assert!(err.to_string().contains("row 2"));

        let err = ledger("Amount,Day-recurring\n100,32\n").unwrap_err();
        assert!(err.to_string().contains("between 1 and 31"));

        assert!(ledger("Amount,Day-recurring\n100,0\n").is_err());
        assert!(ledger("Amount,Day-recurring\n100,5.5\n").is_err());
        assert!(ledger("Amount,Day-recurring\n100,soon\n").is_err());
    }

    #[test]
    fn test_amount_too_large_names_the_row() {
        let err = ledger("Amount,Day-recurring\n100,5\n99999999999999999,5\n").unwrap_err();
        assert!(err.is_import());
        assert!(err.to_string().contains("row 2"));
        assert!(err.to_string().contains("99999999999999999"));
    }

    #[test]
    fn test_lone_decimal_point_is_not_a_bill() {
        let err = ledger("Amount,Day-recurring\n.,5\n").unwrap_err();
        assert!(err.is_import());
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_short_rows_are_blank() {
        let ledger = ledger("Amount,Day-recurring\n75\n").unwrap();
        assert_eq!(ledger.bills()[0], Bill::leftover(Money::from_dollars(75)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Amount,Day-recurring").unwrap();
        writeln!(file, "100,5").unwrap();
        file.flush().unwrap();

        let ledger = BillLedger::load(file.path()).unwrap();
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let err = BillLedger::load("/definitely/not/here/monthly_bills.csv").unwrap_err();
        assert!(matches!(err, PaycheckError::Io(_)));
    }

    #[test]
    fn test_empty_table() {
        let ledger = ledger("Amount,Day-recurring\n").unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), Money::zero());
    }
}
