use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "billz")]
#[command(about = "Local-first invoice manager for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save an invoice (updates in place when --id matches an existing one)
    #[command(alias = "s")]
    Save {
        /// Invoice id; generated from the monthly sequence when omitted
        #[arg(long)]
        id: Option<String>,

        /// Invoice date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Client name
        #[arg(short, long)]
        client: Option<String>,

        /// Client address
        #[arg(long)]
        address: Option<String>,

        /// Line item as name:price[:qty], repeatable
        #[arg(short, long = "item")]
        items: Vec<String>,

        /// Tax rate in percent
        #[arg(long, default_value_t = 0.0)]
        tax: f64,

        /// Flat discount amount
        #[arg(long, default_value_t = 0.0)]
        discount: f64,

        /// Mark the invoice as paid
        #[arg(long)]
        paid: bool,
    },

    /// List invoice history, newest first
    #[command(alias = "ls")]
    List {
        /// Filter by id or client name
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one invoice in full
    #[command(alias = "v")]
    Show {
        /// Invoice id
        id: String,
    },

    /// Print the id the next saved invoice would get
    New,

    /// Clone an invoice with a fresh id and today's date
    #[command(alias = "dup")]
    Duplicate {
        /// Id of the invoice to clone
        id: String,
    },

    /// Delete an invoice from history
    #[command(alias = "rm")]
    Delete {
        /// Invoice id
        id: String,
    },

    /// Set or toggle an invoice's paid status
    Status {
        /// Invoice id
        id: String,

        /// Mark as paid
        #[arg(long, conflicts_with = "pending")]
        paid: bool,

        /// Mark as pending
        #[arg(long)]
        pending: bool,
    },

    /// Clear the entire invoice history
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show total and current-month revenue
    #[command(alias = "dash")]
    Dashboard,

    /// Export the history as CSV
    Export {
        /// Output file (defaults to invoices_export_<date>.csv)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write a JSON backup of invoices and settings
    Backup {
        /// Output file (defaults to billz_backup_<date>.json)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Restore invoices and settings from a backup file
    Restore {
        /// Backup file produced by `billz backup`
        file: PathBuf,
    },

    /// Get or set configuration (sheet-url, upi-id, logo)
    Config {
        /// Configuration key (e.g., sheet-url)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
