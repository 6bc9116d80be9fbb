use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::{keys, KvStore};

/// User settings, each stored under its own key so one can change without
/// rewriting the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Spreadsheet endpoint the sync notifier posts to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_url: Option<String>,

    /// UPI payment id shown on the printable invoice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,

    /// Logo image as a data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Settings {
    /// Load whatever settings are present; unreadable keys count as unset.
    pub fn load<S: KvStore>(store: &S) -> Self {
        Self {
            sheet_url: store.get(keys::SHEET_URL).ok().flatten(),
            upi_id: store.get(keys::UPI_ID).ok().flatten(),
            logo: store.get(keys::LOGO).ok().flatten(),
        }
    }

    /// Write only the values that are set, leaving stored values for the
    /// unset ones untouched.
    pub fn save<S: KvStore>(&self, store: &mut S) -> Result<()> {
        if let Some(url) = &self.sheet_url {
            store.set(keys::SHEET_URL, url)?;
        }
        if let Some(upi) = &self.upi_id {
            store.set(keys::UPI_ID, upi)?;
        }
        if let Some(logo) = &self.logo {
            store.set(keys::LOGO, logo)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn load_on_empty_store_is_all_unset() {
        let store = InMemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let mut store = InMemoryStore::new();
        let settings = Settings {
            sheet_url: Some("https://example.com/sheet".into()),
            upi_id: Some("acme@upi".into()),
            logo: None,
        };
        settings.save(&mut store).unwrap();
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn save_merges_only_present_values() {
        let mut store = InMemoryStore::new();
        Settings {
            upi_id: Some("acme@upi".into()),
            ..Default::default()
        }
        .save(&mut store)
        .unwrap();

        // A later save without upi_id must not erase the stored one.
        Settings {
            sheet_url: Some("https://example.com/sheet".into()),
            ..Default::default()
        }
        .save(&mut store)
        .unwrap();

        let loaded = Settings::load(&store);
        assert_eq!(loaded.upi_id.as_deref(), Some("acme@upi"));
        assert_eq!(loaded.sheet_url.as_deref(), Some("https://example.com/sheet"));
    }
}
