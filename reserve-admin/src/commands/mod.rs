//! Command-line surface
//!
//! One subcommand group per page: bookings, customers, tables and time
//! slots. Each command drives the page's workflow exactly as staff would
//! through the form.

use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use reserve_client::ReservationClient;
use shared::models::{Customer, Table, TimeSlot};
use shared::util;

use crate::core::config::GlobalArgs;
use crate::core::{AppConfig, Confirm, ConsoleNotifier, Notifier, StdinConfirm};

pub mod bookings;
pub mod catalog;
pub mod render;

pub use bookings::BookingCommand;
pub use catalog::{CatalogAction, CustomerCommand, SlotCommand, TableCommand};

/// Restaurant reservation administration
#[derive(Debug, Parser)]
#[command(name = "reserve-admin", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Make, change and cancel reservations
    #[command(subcommand)]
    Bookings(BookingCommand),

    /// Manage customers
    #[command(subcommand)]
    Customers(CustomerCommand),

    /// Manage tables
    #[command(subcommand)]
    Tables(TableCommand),

    /// Manage time slots
    #[command(subcommand)]
    Slots(SlotCommand),
}

/// What every command needs
pub struct Context {
    pub api: Arc<ReservationClient>,
    pub notifier: Arc<dyn Notifier>,
    pub confirm: Arc<dyn Confirm>,
    pub today: NaiveDate,
}

impl Context {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            api: Arc::new(config.client.build_api()?),
            notifier: Arc::new(ConsoleNotifier),
            confirm: Arc::new(StdinConfirm::new(config.assume_yes)),
            today: util::today(),
        })
    }
}

/// Dispatch a parsed command
pub async fn run(command: Command, ctx: &Context) -> anyhow::Result<()> {
    match command {
        Command::Bookings(cmd) => bookings::run(cmd, ctx).await,
        Command::Customers(cmd) => catalog::run::<Customer>(cmd.into(), ctx).await,
        Command::Tables(cmd) => catalog::run::<Table>(cmd.into(), ctx).await,
        Command::Slots(cmd) => catalog::run::<TimeSlot>(cmd.into(), ctx).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_booking_create() {
        let cli = Cli::try_parse_from([
            "reserve-admin",
            "--api-url",
            "http://localhost:5000/api",
            "bookings",
            "create",
            "--customer",
            "3",
            "--table",
            "5",
            "--slot",
            "2",
            "--date",
            "2025-06-01",
            "--people",
            "4",
        ])
        .unwrap();
        assert_eq!(cli.global.api_url, "http://localhost:5000/api");
        assert!(matches!(
            cli.command,
            Command::Bookings(BookingCommand::Create(_))
        ));
    }

    #[test]
    fn test_parse_global_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["reserve-admin", "tables", "delete", "4", "--yes"]).unwrap();
        assert!(cli.global.yes);
        assert!(matches!(
            cli.command,
            Command::Tables(TableCommand::Delete { id: 4 })
        ));
    }
}
