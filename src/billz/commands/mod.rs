use std::path::PathBuf;

use crate::dashboard::Revenue;
use crate::model::Invoice;
use crate::settings::Settings;

pub mod backup;
pub mod clear;
pub mod dashboard;
pub mod delete;
pub mod duplicate;
pub mod export;
pub mod get;
pub mod list;
pub mod new;
pub mod save;
pub mod settings;
pub mod status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command, for any UI to render.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_invoices: Vec<Invoice>,
    pub listed_invoices: Vec<Invoice>,
    pub revenue: Option<Revenue>,
    pub settings: Option<Settings>,
    pub next_id: Option<String>,
    pub export_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_invoices(mut self, invoices: Vec<Invoice>) -> Self {
        self.affected_invoices = invoices;
        self
    }

    pub fn with_listed_invoices(mut self, invoices: Vec<Invoice>) -> Self {
        self.listed_invoices = invoices;
        self
    }

    pub fn with_revenue(mut self, revenue: Revenue) -> Self {
        self.revenue = Some(revenue);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_next_id(mut self, id: String) -> Self {
        self.next_id = Some(id);
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    /// Whether any message reports a failure.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
