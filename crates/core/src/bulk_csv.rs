//! Positional CSV readers for bulk record import.
//!
//! Uploaded files carry no reliable header names, so rows are mapped by
//! column position: 0 → name, 1 → designation (faculty) or roll number
//! (students), 2 → branch. The first row is always discarded as a header;
//! a file without one loses its first data row. Rows with fewer than three
//! columns still map positionally, yielding empty fields; extra columns
//! are ignored.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{Result, RollbookError};
use crate::models::{faculty::NewFaculty, student::NewStudent};

/// Read a faculty CSV file into records ready for batch insert.
pub fn read_faculty_csv(path: &Path) -> Result<Vec<NewFaculty>> {
    let rows = read_rows(path)?;
    Ok(rows
        .iter()
        .map(|row| NewFaculty {
            name: field(row, 0),
            designation: field(row, 1),
            branch: field(row, 2),
        })
        .collect())
}

/// Read a student CSV file into records ready for batch insert.
pub fn read_student_csv(path: &Path) -> Result<Vec<NewStudent>> {
    let rows = read_rows(path)?;
    Ok(rows
        .iter()
        .map(|row| NewStudent {
            name: field(row, 0),
            roll_number: field(row, 1),
            branch: field(row, 2),
        })
        .collect())
}

/// Read all rows from a CSV file and drop the first one unconditionally.
fn read_rows(path: &Path) -> Result<Vec<StringRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| RollbookError::Csv(format!("cannot open {}: {e}", path.display())))?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let row = result.map_err(|e| {
            RollbookError::Csv(format!("parse error in {}: {e}", path.display()))
        })?;
        rows.push(row);
    }

    if !rows.is_empty() {
        rows.remove(0);
    }
    Ok(rows)
}

fn field(row: &StringRecord, index: usize) -> String {
    row.get(index).unwrap_or_default().to_string()
}
