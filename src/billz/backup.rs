use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Invoice;
use crate::repo;
use crate::settings::Settings;
use crate::store::{keys, KvStore};

pub const BACKUP_VERSION: &str = "1.1";

/// On-disk backup document: the invoice collection plus settings, with a
/// version tag. Every section is optional so imports from partial or older
/// backups apply only what is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoices: Option<Vec<Invoice>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
}

impl Backup {
    /// Snapshot the current store contents.
    pub fn capture<S: KvStore>(store: &S) -> Self {
        Self {
            version: BACKUP_VERSION.to_string(),
            invoices: Some(repo::list(store)),
            settings: Some(Settings::load(store)),
        }
    }

    /// Apply the backup to the store. Sections missing from the document
    /// leave the corresponding stored state untouched.
    pub fn apply<S: KvStore>(&self, store: &mut S) -> Result<()> {
        if let Some(invoices) = &self.invoices {
            let raw = serde_json::to_string(invoices)?;
            store.set(keys::INVOICES, &raw)?;
        }
        if let Some(settings) = &self.settings {
            settings.save(store)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Draft, LineItem};
    use crate::store::memory::InMemoryStore;
    use chrono::{NaiveDate, Utc};

    fn invoice(id: &str) -> Invoice {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut draft = Draft::new(date);
        draft.items = vec![LineItem::new("Work", 500.0, 1.0)];
        draft.into_invoice(id.to_string(), Utc::now())
    }

    #[test]
    fn capture_and_apply_roundtrip() {
        let mut source = InMemoryStore::new();
        repo::upsert(&mut source, invoice("BL-25-06-01")).unwrap();
        Settings {
            upi_id: Some("acme@upi".into()),
            ..Default::default()
        }
        .save(&mut source)
        .unwrap();

        let backup = Backup::capture(&source);
        let json = serde_json::to_string(&backup).unwrap();
        let parsed: Backup = serde_json::from_str(&json).unwrap();

        let mut target = InMemoryStore::new();
        parsed.apply(&mut target).unwrap();

        assert_eq!(repo::list(&target).len(), 1);
        assert_eq!(Settings::load(&target).upi_id.as_deref(), Some("acme@upi"));
    }

    #[test]
    fn import_without_settings_leaves_stored_settings_untouched() {
        let mut store = InMemoryStore::new();
        Settings {
            sheet_url: Some("https://example.com/sheet".into()),
            ..Default::default()
        }
        .save(&mut store)
        .unwrap();

        let json = format!(
            r#"{{"version": "1.1", "invoices": [{}]}}"#,
            serde_json::to_string(&invoice("BL-25-06-02")).unwrap()
        );
        let backup: Backup = serde_json::from_str(&json).unwrap();
        backup.apply(&mut store).unwrap();

        assert_eq!(repo::list(&store).len(), 1);
        assert_eq!(
            Settings::load(&store).sheet_url.as_deref(),
            Some("https://example.com/sheet")
        );
    }

    #[test]
    fn import_replaces_the_invoice_collection() {
        let mut store = InMemoryStore::new();
        repo::upsert(&mut store, invoice("BL-25-05-09")).unwrap();

        let backup = Backup {
            version: BACKUP_VERSION.into(),
            invoices: Some(vec![invoice("BL-25-06-01")]),
            settings: None,
        };
        backup.apply(&mut store).unwrap();

        let ids: Vec<String> = repo::list(&store).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["BL-25-06-01".to_string()]);
    }

    #[test]
    fn malformed_document_fails_to_parse() {
        let result: std::result::Result<Backup, _> = serde_json::from_str("{broken");
        assert!(result.is_err());
    }
}
