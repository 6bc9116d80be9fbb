use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BillzError, Result};
use crate::settings::Settings;
use crate::store::{keys, KvStore};

#[derive(Debug, Clone)]
pub enum SettingsAction {
    ShowAll,
    SetSheetUrl(String),
    SetUpiId(String),
    /// Read an image file and store it as a base64 data URI.
    SetLogo(PathBuf),
}

pub fn run<S: KvStore>(store: &mut S, action: SettingsAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        SettingsAction::ShowAll => {}
        SettingsAction::SetSheetUrl(url) => {
            store.set(keys::SHEET_URL, url.trim())?;
            result.add_message(CmdMessage::success("Spreadsheet endpoint saved"));
        }
        SettingsAction::SetUpiId(upi) => {
            store.set(keys::UPI_ID, upi.trim())?;
            result.add_message(CmdMessage::success("UPI id saved"));
        }
        SettingsAction::SetLogo(path) => {
            let data_uri = logo_data_uri(&path)?;
            store.set(keys::LOGO, &data_uri)?;
            result.add_message(CmdMessage::success(format!(
                "Logo loaded from {}",
                path.display()
            )));
        }
    }

    Ok(result.with_settings(Settings::load(store)))
}

fn logo_data_uri(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(BillzError::Io)?;
    let mime = match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    };
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}
