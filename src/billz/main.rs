use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;

use billz::api::{BillzApi, CmdMessage, MessageLevel, SettingsAction};
use billz::error::{BillzError, Result};
use billz::model::{Draft, Invoice, LineItem, Status};
use billz::settings::Settings;
use billz::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api()?;
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Save {
            id,
            date,
            client,
            address,
            items,
            tax,
            discount,
            paid,
        }) => {
            let draft = build_draft(date.unwrap_or(today), client, address, &items, tax, discount, paid);
            let result = api.save_invoice(draft, id)?;
            print_messages(&result.messages);
        }
        Some(Commands::List { search }) => {
            let result = api.list_invoices(search.as_deref())?;
            print_invoices(&result.listed_invoices);
            print_messages(&result.messages);
        }
        Some(Commands::Show { id }) => {
            let result = api.get_invoice(&id)?;
            for inv in &result.affected_invoices {
                print_invoice_detail(inv);
            }
            print_messages(&result.messages);
        }
        Some(Commands::New) => {
            let result = api.next_invoice_id(today)?;
            print_messages(&result.messages);
        }
        Some(Commands::Duplicate { id }) => {
            let result = api.duplicate_invoice(&id, today)?;
            print_messages(&result.messages);
        }
        Some(Commands::Delete { id }) => {
            let result = api.delete_invoice(&id)?;
            print_messages(&result.messages);
        }
        Some(Commands::Status { id, paid, pending }) => {
            let status = if paid {
                Some(Status::Paid)
            } else if pending {
                Some(Status::Pending)
            } else {
                None
            };
            let result = api.set_status(&id, status)?;
            print_messages(&result.messages);
        }
        Some(Commands::Clear { yes }) => {
            if !yes {
                println!("This deletes the entire invoice history. Re-run with --yes to confirm.");
                return Ok(());
            }
            let result = api.clear_history()?;
            print_messages(&result.messages);
        }
        Some(Commands::Dashboard) => {
            let result = api.dashboard(today)?;
            if let Some(revenue) = result.revenue {
                println!("Total revenue:   {:>12.2}", revenue.total);
                println!("This month:      {:>12.2}", revenue.monthly);
            }
            print_messages(&result.messages);
        }
        Some(Commands::Export { out }) => {
            let result = api.export_csv(out, today)?;
            print_messages(&result.messages);
        }
        Some(Commands::Backup { out }) => {
            let result = api.backup(out, today)?;
            print_messages(&result.messages);
        }
        Some(Commands::Restore { file }) => {
            let result = api.restore(&file)?;
            print_messages(&result.messages);
        }
        Some(Commands::Config { key, value }) => {
            handle_config(&mut api, key, value)?;
        }
        None => {
            let result = api.list_invoices(None)?;
            print_invoices(&result.listed_invoices);
            print_messages(&result.messages);
        }
    }

    Ok(())
}

fn init_api() -> Result<BillzApi<FileStore>> {
    let data_dir = match std::env::var_os("BILLZ_HOME") {
        Some(home) => PathBuf::from(home),
        None => ProjectDirs::from("com", "billz", "billz")
            .ok_or_else(|| BillzError::Store("Could not determine data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };
    Ok(BillzApi::new(FileStore::new(data_dir)))
}

fn build_draft(
    date: NaiveDate,
    client: Option<String>,
    address: Option<String>,
    items: &[String],
    tax: f64,
    discount: f64,
    paid: bool,
) -> Draft {
    let mut draft = Draft::new(date);
    draft.client_name = client.unwrap_or_default();
    draft.client_address = address.unwrap_or_default();
    draft.items = items.iter().map(|s| parse_item(s)).collect();
    draft.tax_rate_percent = tax;
    draft.discount_amount = discount;
    draft.status = paid.then_some(Status::Paid);
    draft
}

/// Parse `name:price[:qty]`. Non-numeric price falls back to 0 and qty to 1,
/// the same parse-or-default policy applied everywhere else.
fn parse_item(raw: &str) -> LineItem {
    let mut parts = raw.splitn(3, ':');
    let name = parts.next().unwrap_or_default().to_string();
    let unit_price = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0.0);
    let quantity = parts.next().and_then(|q| q.parse().ok()).unwrap_or(1.0);
    LineItem::new(name, unit_price, quantity)
}

fn handle_config(
    api: &mut BillzApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => SettingsAction::ShowAll,
        (Some("sheet-url"), Some(v)) => SettingsAction::SetSheetUrl(v),
        (Some("upi-id"), Some(v)) => SettingsAction::SetUpiId(v),
        (Some("logo"), Some(v)) => SettingsAction::SetLogo(PathBuf::from(v)),
        (Some(key), None) => {
            let result = api.config(SettingsAction::ShowAll)?;
            if let Some(settings) = &result.settings {
                print_config_value(key, settings);
            }
            return Ok(());
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = api.config(action)?;
    if key.is_none() {
        if let Some(settings) = &result.settings {
            print_config_value("sheet-url", settings);
            print_config_value("upi-id", settings);
            print_config_value("logo", settings);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_config_value(key: &str, settings: &Settings) {
    match key {
        "sheet-url" => println!("sheet-url = {}", settings.sheet_url.as_deref().unwrap_or("")),
        "upi-id" => println!("upi-id = {}", settings.upi_id.as_deref().unwrap_or("")),
        "logo" => match &settings.logo {
            Some(data_uri) => println!("logo = <data uri, {} chars>", data_uri.len()),
            None => println!("logo ="),
        },
        other => println!("Unknown config key: {}", other),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_invoices(invoices: &[Invoice]) {
    if invoices.is_empty() {
        println!("No invoices found.");
        return;
    }

    for inv in invoices {
        let status = match inv.display_status() {
            Status::Paid => "PAID".green(),
            Status::Pending => "PENDING".yellow(),
        };
        let client = if inv.client_name.is_empty() {
            "Unknown Client".dimmed()
        } else {
            inv.client_name.normal()
        };
        println!(
            "{:<14} {}  {:<24} {:>12.2}  {}",
            inv.id.bold(),
            inv.date,
            client,
            inv.items_total(),
            status
        );
    }
}

fn print_invoice_detail(inv: &Invoice) {
    println!("{} {}", inv.id.bold(), inv.display_status());
    println!("Date:    {}", inv.date);
    if !inv.client_name.is_empty() {
        println!("Client:  {}", inv.client_name);
    }
    if !inv.client_address.is_empty() {
        println!("Address: {}", inv.client_address);
    }
    println!("--------------------------------");
    for item in &inv.items {
        println!(
            "{:<30} {:>6} x {:>10.2} = {:>12.2}",
            item.name,
            item.quantity,
            item.unit_price,
            item.line_total()
        );
    }
    println!("--------------------------------");
    println!("Subtotal:    {:>12.2}", inv.subtotal.unwrap_or_else(|| inv.items_total()));
    if inv.tax_rate_percent > 0.0 {
        println!(
            "Tax ({}%):   {:>12.2}",
            inv.tax_rate_percent,
            inv.tax_amount.unwrap_or(0.0)
        );
    }
    if inv.discount_amount > 0.0 {
        println!("Discount:   -{:>12.2}", inv.discount_amount);
    }
    println!(
        "Total:       {:>12.2}",
        inv.grand_total.unwrap_or_else(|| inv.items_total())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_item_full_spec() {
        let item = parse_item("Logo design:1500:2");
        assert_eq!(item.name, "Logo design");
        assert_eq!(item.unit_price, 1500.0);
        assert_eq!(item.quantity, 2.0);
    }

    #[test]
    fn parse_item_defaults_qty_to_one() {
        let item = parse_item("Hosting:99.5");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.line_total(), 99.5);
    }

    #[test]
    fn parse_item_non_numeric_price_falls_back_to_zero() {
        let item = parse_item("Consulting:abc:3");
        assert_eq!(item.unit_price, 0.0);
        assert_eq!(item.quantity, 3.0);
    }

    #[test]
    fn parse_item_name_only() {
        let item = parse_item("Placeholder");
        assert_eq!(item.name, "Placeholder");
        assert_eq!(item.unit_price, 0.0);
        assert_eq!(item.quantity, 1.0);
    }
}
