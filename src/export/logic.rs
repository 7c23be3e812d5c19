// src/export/logic.rs

use crate::core::store::RecordStore;
use crate::db::backend::RecordBackend;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::to_export_rows;
use crate::ui::messages::warning;
use std::path::Path;

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every record to `file` in `format`.
    ///
    /// Returns the number of rows written; `0` means the store was empty and
    /// no file was created. Read failures are returned, not swallowed.
    pub fn export<B: RecordBackend>(
        store: &RecordStore<B>,
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(file, force)?;

        let records = store.try_list_all()?;
        if records.is_empty() {
            warning("No records to export.");
            return Ok(0);
        }

        let rows = to_export_rows(&records);
        match format {
            ExportFormat::Csv => export_csv(&rows, file)?,
            ExportFormat::Json => export_json(&rows, file)?,
        }

        Ok(rows.len())
    }
}
