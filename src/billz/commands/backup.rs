use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::backup::Backup;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BillzError, Result};
use crate::store::KvStore;

/// Write a full backup (invoices + settings) as a JSON document.
pub fn export<S: KvStore>(store: &S, out: Option<PathBuf>, today: NaiveDate) -> Result<CmdResult> {
    let backup = Backup::capture(store);
    let path = out.unwrap_or_else(|| PathBuf::from(format!("billz_backup_{}.json", today)));
    let json = serde_json::to_string_pretty(&backup)?;
    fs::write(&path, json).map_err(BillzError::Io)?;

    let count = backup.invoices.as_ref().map_or(0, |v| v.len());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Backed up {} invoice(s) to {}",
        count,
        path.display()
    )));
    Ok(result.with_export_path(path))
}

/// Restore from a backup file. A malformed file is reported and leaves the
/// stored state untouched; sections missing from the file are skipped.
pub fn import<S: KvStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            result.add_message(CmdMessage::error(format!(
                "Could not read {}: {}",
                path.display(),
                e
            )));
            return Ok(result);
        }
    };

    let backup: Backup = match serde_json::from_str(&raw) {
        Ok(backup) => backup,
        Err(e) => {
            result.add_message(CmdMessage::error(format!("Invalid backup file: {}", e)));
            return Ok(result);
        }
    };

    backup.apply(store)?;

    let restored = backup.invoices.as_ref().map_or(0, |v| v.len());
    result.add_message(CmdMessage::success(format!(
        "Restored {} invoice(s) from {}",
        restored,
        path.display()
    )));
    if backup.settings.is_none() {
        result.add_message(CmdMessage::info(
            "Backup carried no settings; stored settings left as-is.",
        ));
    }
    Ok(result)
}
