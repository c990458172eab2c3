//! CSV transaction import
//!
//! Reads expense or income rows from CSV, for callers assembling a budget
//! from exported spreadsheet data. Columns are matched by header name,
//! case-insensitively; extra columns are ignored.
//!
//! Expense columns: `date`, `description`, `category`, `amount`.
//! Income columns: `date`, `description`, `source`, `amount`.

use std::io::Read;

use chrono::NaiveDate;
use csv::{Reader, StringRecord};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, ExpenseCategory, Income, IncomeSource, Money};

/// Date format accepted in CSV rows
const DATE_FORMAT: &str = "%Y-%m-%d";

fn column_index(headers: &StringRecord, name: &str) -> BudgetResult<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| BudgetError::Import(format!("missing column: {}", name)))
}

/// Import expenses from a CSV reader
///
/// Each imported entity gets a fresh id; ids never come from the file.
/// Rows that fail to parse or validate abort the import with the row number
/// (the header is row 1).
pub fn expenses_from_csv_reader<R: Read>(reader: R) -> BudgetResult<Vec<Expense>> {
    let mut rdr = Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| BudgetError::Import(e.to_string()))?
        .clone();

    let date_col = column_index(&headers, "date")?;
    let description_col = column_index(&headers, "description")?;
    let category_col = column_index(&headers, "category")?;
    let amount_col = column_index(&headers, "amount")?;

    let mut expenses = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 2;
        let record = result.map_err(|e| BudgetError::import_row(row, e))?;
        let field = |col: usize| record.get(col).unwrap_or("").trim();

        let date = NaiveDate::parse_from_str(field(date_col), DATE_FORMAT)
            .map_err(|e| BudgetError::import_row(row, e))?;
        let category: ExpenseCategory = field(category_col)
            .parse()
            .map_err(|e| BudgetError::import_row(row, e))?;
        let amount =
            Money::parse(field(amount_col)).map_err(|e| BudgetError::import_row(row, e))?;

        let expense = Expense::new(amount, field(description_col), category, date);
        expense
            .validate()
            .map_err(|e| BudgetError::Validation(format!("row {}: {}", row, e)))?;

        expenses.push(expense);
    }

    Ok(expenses)
}

/// Import income entries from a CSV reader
pub fn incomes_from_csv_reader<R: Read>(reader: R) -> BudgetResult<Vec<Income>> {
    let mut rdr = Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| BudgetError::Import(e.to_string()))?
        .clone();

    let date_col = column_index(&headers, "date")?;
    let description_col = column_index(&headers, "description")?;
    let source_col = column_index(&headers, "source")?;
    let amount_col = column_index(&headers, "amount")?;

    let mut incomes = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 2;
        let record = result.map_err(|e| BudgetError::import_row(row, e))?;
        let field = |col: usize| record.get(col).unwrap_or("").trim();

        let date = NaiveDate::parse_from_str(field(date_col), DATE_FORMAT)
            .map_err(|e| BudgetError::import_row(row, e))?;
        let source: IncomeSource = field(source_col)
            .parse()
            .map_err(|e| BudgetError::import_row(row, e))?;
        let amount =
            Money::parse(field(amount_col)).map_err(|e| BudgetError::import_row(row, e))?;

        let income = Income::new(amount, field(description_col), source, date);
        income
            .validate()
            .map_err(|e| BudgetError::Validation(format!("row {}: {}", row, e)))?;

        incomes.push(income);
    }

    Ok(incomes)
}
