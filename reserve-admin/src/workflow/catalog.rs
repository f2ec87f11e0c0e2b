//! Customer, table and time slot pages
//!
//! The three pages share one pattern: a list, a form that either adds a
//! record or replaces the one being edited, and confirmed deletes. What
//! differs per record type lives in [`CatalogEntity`].

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use reserve_client::ReservationApi;
use shared::models::serde_helpers::parse_lenient;
use shared::models::{Customer, Resource, Table, TimeSlot};
use shared::util::{format_time_of_day, normalize_time_of_day};
use tokio::sync::RwLock;
use validator::Validate;

use super::{submit_label, DeleteOutcome, LoadState, SubmitGuard};
use crate::core::{Confirm, FieldErrors, Notification, Notifier, WorkflowError};
use crate::display;
use crate::forms::{self, CustomerForm, TableForm, TimeSlotForm};

/// A record type managed by a [`CatalogWorkflow`]
pub trait CatalogEntity: Resource + fmt::Debug {
    type Form: Validate + Clone + Default + fmt::Debug + Send + Sync;

    /// Heading noun, e.g. `Time Slot`
    const TITLE: &'static str;
    const PLURAL: &'static str;
    const HEADERS: &'static [&'static str];

    /// Record from a validated form
    fn from_form(form: &Self::Form) -> Result<Self, FieldErrors>;

    /// Form prefilled for editing
    fn to_form(&self, today: NaiveDate) -> Self::Form;

    /// Cells in [`Self::HEADERS`] order
    fn cells(&self, today: NaiveDate) -> Vec<String>;
}

/// `time slot` -> `Time slot`
fn sentence_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl CatalogEntity for Customer {
    type Form = CustomerForm;

    const TITLE: &'static str = "Customer";
    const PLURAL: &'static str = "customers";
    const HEADERS: &'static [&'static str] = &["Name", "Phone", "Email"];

    fn from_form(form: &CustomerForm) -> Result<Self, FieldErrors> {
        Ok(Customer::new(
            form.name.trim(),
            form.phone_number.trim(),
            form.email.trim(),
        ))
    }

    fn to_form(&self, _today: NaiveDate) -> CustomerForm {
        CustomerForm {
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
        }
    }

    fn cells(&self, _today: NaiveDate) -> Vec<String> {
        vec![
            self.name.clone(),
            self.phone_number.clone(),
            self.email.clone(),
        ]
    }
}

impl CatalogEntity for Table {
    type Form = TableForm;

    const TITLE: &'static str = "Table";
    const PLURAL: &'static str = "tables";
    const HEADERS: &'static [&'static str] = &["Table Number", "Seats"];

    fn from_form(form: &TableForm) -> Result<Self, FieldErrors> {
        let seats = parse_lenient(&form.number_of_seats).and_then(|n| i32::try_from(n).ok());
        match seats {
            Some(seats) => Ok(Table::new(form.table_number.trim(), seats)),
            None => {
                let mut errors = FieldErrors::new();
                errors.insert("number_of_seats", "Must be a whole number");
                Err(errors)
            }
        }
    }

    fn to_form(&self, _today: NaiveDate) -> TableForm {
        TableForm {
            table_number: self.table_number.clone(),
            number_of_seats: self.number_of_seats.to_string(),
        }
    }

    fn cells(&self, _today: NaiveDate) -> Vec<String> {
        vec![self.table_number.clone(), self.number_of_seats.to_string()]
    }
}

impl CatalogEntity for TimeSlot {
    type Form = TimeSlotForm;

    const TITLE: &'static str = "Time Slot";
    const PLURAL: &'static str = "time slots";
    const HEADERS: &'static [&'static str] = &["Slot ID", "Time"];

    /// Stores the time as `HH:MM:SS` whichever accepted form was typed
    fn from_form(form: &TimeSlotForm) -> Result<Self, FieldErrors> {
        match normalize_time_of_day(&form.time) {
            Some(time) => Ok(TimeSlot::new(form.slot_id.trim(), time)),
            None => {
                let mut errors = FieldErrors::new();
                errors.insert("time", shared::util::INVALID_TIME);
                Err(errors)
            }
        }
    }

    /// Time shown on the 12-hour clock, as listed
    fn to_form(&self, today: NaiveDate) -> TimeSlotForm {
        let time = if self.time.trim().is_empty() {
            String::new()
        } else {
            format_time_of_day(&self.time, today)
        };
        TimeSlotForm {
            slot_id: self.slot_id.clone(),
            time,
        }
    }

    fn cells(&self, today: NaiveDate) -> Vec<String> {
        vec![self.slot_id.clone(), display::slot_time_label(self, today)]
    }
}

/// One catalog page's state
#[derive(Debug, Clone)]
pub struct CatalogPage<E: CatalogEntity> {
    pub items: Vec<E>,
    pub form: E::Form,
    pub errors: FieldErrors,
    /// Identity of the record being edited
    pub editing: Option<i64>,
    pub load_state: LoadState,
}

impl<E: CatalogEntity> Default for CatalogPage<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            form: E::Form::default(),
            errors: FieldErrors::new(),
            editing: None,
            load_state: LoadState::default(),
        }
    }
}

/// Catalog page controller
pub struct CatalogWorkflow<E: CatalogEntity, A> {
    api: Arc<A>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn Confirm>,
    state: RwLock<CatalogPage<E>>,
    submitting: AtomicBool,
}

impl<E: CatalogEntity, A: ReservationApi> CatalogWorkflow<E, A> {
    pub fn new(api: Arc<A>, notifier: Arc<dyn Notifier>, confirm: Arc<dyn Confirm>) -> Self {
        Self {
            api,
            notifier,
            confirm,
            state: RwLock::new(CatalogPage::default()),
            submitting: AtomicBool::new(false),
        }
    }

    pub async fn snapshot(&self) -> CatalogPage<E> {
        self.state.read().await.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub fn submit_label(&self) -> &'static str {
        submit_label(self.is_submitting(), "Save")
    }

    /// `Edit Table` / `Add New Table`
    pub async fn title(&self) -> String {
        if self.state.read().await.editing.is_some() {
            format!("Edit {}", E::TITLE)
        } else {
            format!("Add New {}", E::TITLE)
        }
    }

    /// Fetch the list; on failure the previous list stays
    pub async fn load(&self) -> Result<(), WorkflowError> {
        match self.api.list::<E>().await {
            Ok(items) => {
                tracing::debug!(resource = E::PATH, count = items.len(), "Loaded");
                let mut page = self.state.write().await;
                page.items = items;
                page.load_state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                let message = format!("Failed to fetch {}", E::PLURAL);
                tracing::error!(resource = E::PATH, error = %e, "{}", message);
                self.notifier.notify(Notification::error(message.clone()));
                self.state.write().await.load_state = LoadState::Failed { message };
                Err(e.into())
            }
        }
    }

    /// Validate, then add or replace; reload and clear the form on success
    pub async fn submit(&self, form: E::Form) -> Result<E, WorkflowError> {
        let _guard = SubmitGuard::try_acquire(&self.submitting).ok_or_else(|| {
            tracing::warn!(resource = E::PATH, "Submit already in progress");
            WorkflowError::SubmitInFlight
        })?;

        let (editing, record) = {
            let mut page = self.state.write().await;
            page.form = form.clone();
            match forms::check(&form).and_then(|_| E::from_form(&form)) {
                Ok(record) => {
                    page.errors.clear();
                    (page.editing, record)
                }
                Err(errors) => {
                    tracing::debug!(resource = E::PATH, errors = %errors, "Form rejected");
                    page.errors = errors.clone();
                    return Err(WorkflowError::Validation(errors));
                }
            }
        };

        let saved = match editing {
            Some(id) => self.api.update(id, record).await,
            None => self.api.create(&record).await,
        };
        let saved = match saved {
            Ok(saved) => saved,
            Err(e) => {
                tracing::error!(resource = E::PATH, error = %e, "Save failed");
                self.notifier
                    .notify(Notification::error(format!("Failed to save {}", E::LABEL)));
                return Err(e.into());
            }
        };

        let done = if editing.is_some() { "updated" } else { "created" };
        self.notifier.notify(Notification::success(format!(
            "{} {} successfully",
            sentence_case(E::LABEL),
            done
        )));

        if let Err(e) = self.load().await {
            tracing::warn!(resource = E::PATH, error = %e, "Reload after save failed");
        }
        let mut page = self.state.write().await;
        page.editing = None;
        page.form = E::Form::default();
        Ok(saved)
    }

    /// Prefill the form from an existing record
    pub async fn begin_edit(&self, item: &E, today: NaiveDate) -> Result<(), WorkflowError> {
        let Some(id) = item.id() else {
            self.notifier.notify(Notification::error(format!(
                "Cannot edit {} without ID",
                E::LABEL
            )));
            return Err(WorkflowError::MissingIdentity {
                action: "edit",
                entity: E::LABEL,
            });
        };

        let mut page = self.state.write().await;
        page.form = item.to_form(today);
        page.errors.clear();
        page.editing = Some(id);
        tracing::debug!(resource = E::PATH, id, "Editing");
        Ok(())
    }

    pub async fn cancel_edit(&self) {
        let mut page = self.state.write().await;
        page.editing = None;
        page.form = E::Form::default();
        page.errors.clear();
    }

    /// Delete after confirmation, then reload.
    ///
    /// Bookings that still reference the record are not checked.
    pub async fn delete(&self, item: &E) -> Result<DeleteOutcome, WorkflowError> {
        let Some(id) = item.id() else {
            self.notifier.notify(Notification::error(format!(
                "Cannot delete {} without ID",
                E::LABEL
            )));
            return Err(WorkflowError::MissingIdentity {
                action: "delete",
                entity: E::LABEL,
            });
        };

        let prompt = format!("Are you sure you want to delete this {}?", E::LABEL);
        if !self.confirm.confirm(&prompt) {
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(e) = self.api.delete::<E>(id).await {
            tracing::error!(resource = E::PATH, id, error = %e, "Delete failed");
            self.notifier
                .notify(Notification::error(format!("Failed to delete {}", E::LABEL)));
            return Err(e.into());
        }

        tracing::info!(resource = E::PATH, id, "Deleted");
        self.notifier.notify(Notification::success(format!(
            "{} deleted successfully",
            sentence_case(E::LABEL)
        )));
        if let Err(e) = self.load().await {
            tracing::warn!(resource = E::PATH, error = %e, "Reload after delete failed");
        }
        Ok(DeleteOutcome::Deleted)
    }

    /// Listed records as display cells
    pub async fn rows(&self, today: NaiveDate) -> Vec<Vec<String>> {
        self.state
            .read()
            .await
            .items
            .iter()
            .map(|item| item.cells(today))
            .collect()
    }

    /// Loaded record by identity
    pub async fn find(&self, id: i64) -> Option<E> {
        self.state
            .read()
            .await
            .items
            .iter()
            .find(|item| item.id() == Some(id))
            .cloned()
    }
}
