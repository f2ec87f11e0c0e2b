//! `reserve-admin customers|tables|slots ...`

use anyhow::anyhow;
use clap::{Args, Subcommand};

use super::{render, Context};
use crate::forms::{CustomerForm, TableForm, TimeSlotForm};
use crate::workflow::{CatalogEntity, CatalogWorkflow, DeleteOutcome};

/// A catalog command with its form already built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction<F> {
    List,
    Create(F),
    Update { id: i64, form: F },
    Delete { id: i64 },
}

// ============ Customers ============

#[derive(Debug, Clone, Args)]
pub struct CustomerArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
}

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    List,
    Create(CustomerArgs),
    Update {
        id: i64,
        #[command(flatten)]
        args: CustomerArgs,
    },
    Delete {
        id: i64,
    },
}

impl From<CustomerArgs> for CustomerForm {
    fn from(args: CustomerArgs) -> Self {
        CustomerForm {
            name: args.name,
            phone_number: args.phone,
            email: args.email,
        }
    }
}

impl From<CustomerCommand> for CatalogAction<CustomerForm> {
    fn from(command: CustomerCommand) -> Self {
        match command {
            CustomerCommand::List => CatalogAction::List,
            CustomerCommand::Create(args) => CatalogAction::Create(args.into()),
            CustomerCommand::Update { id, args } => CatalogAction::Update {
                id,
                form: args.into(),
            },
            CustomerCommand::Delete { id } => CatalogAction::Delete { id },
        }
    }
}

// ============ Tables ============

#[derive(Debug, Clone, Args)]
pub struct TableArgs {
    #[arg(long)]
    pub number: String,
    #[arg(long)]
    pub seats: String,
}

#[derive(Debug, Subcommand)]
pub enum TableCommand {
    List,
    Create(TableArgs),
    Update {
        id: i64,
        #[command(flatten)]
        args: TableArgs,
    },
    Delete {
        id: i64,
    },
}

impl From<TableArgs> for TableForm {
    fn from(args: TableArgs) -> Self {
        TableForm {
            table_number: args.number,
            number_of_seats: args.seats,
        }
    }
}

impl From<TableCommand> for CatalogAction<TableForm> {
    fn from(command: TableCommand) -> Self {
        match command {
            TableCommand::List => CatalogAction::List,
            TableCommand::Create(args) => CatalogAction::Create(args.into()),
            TableCommand::Update { id, args } => CatalogAction::Update {
                id,
                form: args.into(),
            },
            TableCommand::Delete { id } => CatalogAction::Delete { id },
        }
    }
}

// ============ Time Slots ============

#[derive(Debug, Clone, Args)]
pub struct SlotArgs {
    #[arg(long = "slot-id")]
    pub slot_id: String,
    /// `18:30`, `18:30:00` or `6:30 PM`
    #[arg(long)]
    pub time: String,
}

#[derive(Debug, Subcommand)]
pub enum SlotCommand {
    List,
    Create(SlotArgs),
    Update {
        id: i64,
        #[command(flatten)]
        args: SlotArgs,
    },
    Delete {
        id: i64,
    },
}

impl From<SlotArgs> for TimeSlotForm {
    fn from(args: SlotArgs) -> Self {
        TimeSlotForm {
            slot_id: args.slot_id,
            time: args.time,
        }
    }
}

impl From<SlotCommand> for CatalogAction<TimeSlotForm> {
    fn from(command: SlotCommand) -> Self {
        match command {
            SlotCommand::List => CatalogAction::List,
            SlotCommand::Create(args) => CatalogAction::Create(args.into()),
            SlotCommand::Update { id, args } => CatalogAction::Update {
                id,
                form: args.into(),
            },
            SlotCommand::Delete { id } => CatalogAction::Delete { id },
        }
    }
}

pub async fn run<E: CatalogEntity>(action: CatalogAction<E::Form>, ctx: &Context) -> anyhow::Result<()> {
    let workflow: CatalogWorkflow<E, _> =
        CatalogWorkflow::new(ctx.api.clone(), ctx.notifier.clone(), ctx.confirm.clone());
    workflow.load().await?;

    let not_found = |id: i64| anyhow!("No {} with ID {}", E::LABEL, id);

    match action {
        CatalogAction::List => {
            let rows = workflow.rows(ctx.today).await;
            print!("{}", render::table(E::HEADERS, &rows, render::NO_DATA));
        }
        CatalogAction::Create(form) => {
            workflow.submit(form).await?;
        }
        CatalogAction::Update { id, form } => {
            let item = workflow.find(id).await.ok_or_else(|| not_found(id))?;
            workflow.begin_edit(&item, ctx.today).await?;
            workflow.submit(form).await?;
        }
        CatalogAction::Delete { id } => {
            let item = workflow.find(id).await.ok_or_else(|| not_found(id))?;
            if workflow.delete(&item).await? == DeleteOutcome::Cancelled {
                eprintln!("Cancelled");
            }
        }
    }
    Ok(())
}
