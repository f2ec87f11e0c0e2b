//! `reserve-admin bookings ...`

use anyhow::{anyhow, bail};
use clap::{Args, Subcommand};

use super::{render, Context};
use crate::display::BookingRow;
use crate::forms::BookingForm;
use crate::workflow::{BookingWorkflow, DeleteOutcome};

#[derive(Debug, Subcommand)]
pub enum BookingCommand {
    /// List all bookings
    List,

    /// Make a reservation
    Create(BookingArgs),

    /// Change a reservation; the customer stays the same
    Update {
        id: i64,
        #[command(flatten)]
        changes: BookingChanges,
    },

    /// Cancel a reservation
    Delete { id: i64 },

    /// List one customer's bookings
    ByCustomer { customer_id: i64 },
}

/// Reservation fields as typed
#[derive(Debug, Clone, Args)]
pub struct BookingArgs {
    #[arg(long)]
    pub customer: String,
    #[arg(long)]
    pub table: String,
    #[arg(long)]
    pub slot: String,
    /// Booking date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    #[arg(long)]
    pub people: String,
    #[arg(long)]
    pub request: Option<String>,
}

impl From<BookingArgs> for BookingForm {
    fn from(args: BookingArgs) -> Self {
        BookingForm {
            customer_id: args.customer,
            table_id: args.table,
            booking_slot_id: args.slot,
            booking_date: args.date,
            number_of_people: args.people,
            special_request: args.request,
        }
    }
}

/// Fields to replace; the rest keep the booking's current values
#[derive(Debug, Clone, Args)]
pub struct BookingChanges {
    #[arg(long)]
    pub table: Option<String>,
    #[arg(long)]
    pub slot: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub people: Option<String>,
    #[arg(long)]
    pub request: Option<String>,
}

impl BookingChanges {
    /// Apply to the prefilled edit form. The date is never prefilled, so it
    /// falls back to the stored booking date.
    fn apply(self, mut form: BookingForm, stored_date: &str) -> BookingForm {
        if let Some(table) = self.table {
            form.table_id = table;
        }
        if let Some(slot) = self.slot {
            form.booking_slot_id = slot;
        }
        if let Some(people) = self.people {
            form.number_of_people = people;
        }
        if let Some(request) = self.request {
            form.special_request = Some(request);
        }
        form.booking_date = match self.date {
            Some(date) => date,
            None if form.booking_date.is_empty() => stored_date.to_string(),
            None => form.booking_date,
        };
        form
    }
}

fn print_rows(rows: &[BookingRow], empty: &str) {
    let cells: Vec<Vec<String>> = rows.iter().map(BookingRow::cells).collect();
    print!("{}", render::table(&BookingRow::HEADERS, &cells, empty));
}

pub async fn run(command: BookingCommand, ctx: &Context) -> anyhow::Result<()> {
    let workflow = BookingWorkflow::new(ctx.api.clone(), ctx.notifier.clone(), ctx.confirm.clone());
    workflow.load().await?;

    match command {
        BookingCommand::List => {
            for missing in workflow.missing_prerequisites().await {
                eprintln!("{}", missing);
            }
            print_rows(&workflow.rows(ctx.today).await, "No bookings found");
        }
        BookingCommand::Create(args) => {
            let missing = workflow.missing_prerequisites().await;
            if !missing.is_empty() {
                bail!("{}", missing.join(" "));
            }
            let saved = workflow.submit(args.into()).await?;
            if let Some(number) = saved.booking_number {
                println!("Booking #{}", number);
            }
        }
        BookingCommand::Update { id, changes } => {
            let booking = workflow
                .find(id)
                .await
                .ok_or_else(|| anyhow!("Booking {} not found", id))?;
            workflow.begin_edit(&booking).await?;
            let form = workflow.snapshot().await.form;
            workflow
                .submit(changes.apply(form, &booking.booking_date))
                .await?;
        }
        BookingCommand::Delete { id } => {
            let booking = workflow
                .find(id)
                .await
                .ok_or_else(|| anyhow!("Booking {} not found", id))?;
            if workflow.delete(&booking).await? == DeleteOutcome::Cancelled {
                eprintln!("Cancelled");
            }
        }
        BookingCommand::ByCustomer { customer_id } => {
            workflow.select_customer(Some(customer_id)).await;
            print_rows(
                &workflow.customer_rows(ctx.today).await,
                "No bookings found for this customer",
            );
        }
    }
    Ok(())
}
