//! # Billz Architecture
//!
//! Billz is a **UI-agnostic invoicing library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions beyond the injected store/notifier    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract KvStore trait                                   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! User feedback travels as leveled `CmdMessage` values inside `CmdResult`;
//! recoverable failures (a denied storage write, a failed spreadsheet sync,
//! a malformed backup) are messages, never panics. The external sync is
//! fire-and-forget by contract: the notifier posts and nothing downstream
//! depends on the response.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`repo`]: CRUD over the stored invoice collection
//! - [`model`]: Core data types (`Invoice`, `LineItem`, `Draft`, `Status`)
//! - [`totals`]: Pure totals calculator (subtotal, tax, grand total)
//! - [`numbering`]: Monthly-scoped invoice id generation
//! - [`dashboard`]: Revenue aggregation over the history
//! - [`sync`]: Best-effort spreadsheet sync notifier
//! - [`settings`]: User settings (endpoint URL, UPI id, logo)
//! - [`backup`]: Backup/restore document format
//! - [`error`]: Error types

pub mod api;
pub mod backup;
pub mod commands;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod numbering;
pub mod repo;
pub mod settings;
pub mod store;
pub mod sync;
pub mod totals;
