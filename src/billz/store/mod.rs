//! # Storage Layer
//!
//! This module defines the storage abstraction for billz. The [`KvStore`]
//! trait models the flat key-value namespace everything persists into.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! A failed read or write comes back as an `Err`, never a panic: the caller
//! decides whether that is fatal, and for this application it never is (the
//! worst outcome is an unsaved edit).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage, one file per key under
//!   the data directory
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── invoices      # JSON array of invoice records
//! ├── sheet_url     # spreadsheet endpoint URL (plain string)
//! ├── upi_id        # UPI payment id (plain string)
//! └── logo          # logo image as a data URI
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Well-known keys in the storage namespace.
pub mod keys {
    /// The invoice collection, a JSON-encoded array.
    pub const INVOICES: &str = "invoices";
    /// Spreadsheet endpoint URL for the external sync.
    pub const SHEET_URL: &str = "sheet_url";
    /// UPI payment id shown on the printable invoice.
    pub const UPI_ID: &str = "upi_id";
    /// Logo image, stored as a data URI.
    pub const LOGO: &str = "logo";
}

/// Abstract interface for the flat key-value store.
pub trait KvStore {
    /// Read the value for a key; `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
