//! Spreadsheet export of the rows currently on screen.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};

use crate::presenter::{DisplayRow, COLUMNS};

/// Extension appended when the user types a bare file name.
pub const EXPORT_EXTENSION: &str = "xlsx";

/// Turn the text typed into the save prompt into a destination path. Blank
/// input means the user cancelled.
pub fn normalize_export_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut path = PathBuf::from(trimmed);
    if path.extension().is_none() {
        path.set_extension(EXPORT_EXTENSION);
    }
    Some(path)
}

/// Write a header row plus one row per displayed record to `path`, replacing
/// any existing file. ID and year go out as numbers; price is written as the
/// grouped text shown in the table.
pub fn export_rows(rows: &[DisplayRow], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Cars")
        .context("failed to name export worksheet")?;

    for (col, title) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *title, &header)
            .context("failed to write export header")?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let line = idx as u32 + 1;
        worksheet
            .write_number(line, 0, row.id as f64)
            .and_then(|sheet| sheet.write_string(line, 1, &row.make))
            .and_then(|sheet| sheet.write_string(line, 2, &row.model))
            .and_then(|sheet| sheet.write_number(line, 3, row.year as f64))
            .and_then(|sheet| sheet.write_string(line, 4, &row.price))
            .with_context(|| format!("failed to write export row {line}"))?;
    }

    worksheet
        .set_column_width(1, 16)
        .and_then(|sheet| sheet.set_column_width(2, 16))
        .and_then(|sheet| sheet.set_column_width(4, 14))
        .context("failed to size export columns")?;

    workbook
        .save(path)
        .with_context(|| format!("failed to save export to {}", path.display()))?;
    log::info!("exported {} rows to {}", rows.len(), path.display());
    Ok(())
}
