//! Booking page controller
//!
//! Loads everything a reservation refers to, runs the create/edit state
//! machine over [`BookingForm`], and reloads after every successful change.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use reserve_client::{ClientError, ReservationApi};
use shared::models::serde_helpers::parse_lenient;
use shared::models::{Booking, BookingDraft, Customer, Resource, Table, TimeSlot};
use tokio::sync::RwLock;

use super::{submit_label, DeleteOutcome, LoadState, SubmitGuard};
use crate::core::{Confirm, FieldErrors, Notification, Notifier, WorkflowError};
use crate::display::{BookingRow, Lookups};
use crate::forms::{self, BookingForm};

pub const BOOK_TABLE: &str = "Book Table";
pub const LOAD_FAILED: &str = "Failed to load booking data";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this booking?";

/// Whether the form makes a new booking or replaces an existing one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    /// The customer of the edited booking is fixed for the whole edit
    Edit { booking_id: i64, customer_id: i64 },
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self {
            FormMode::Edit { booking_id, .. } => Some(*booking_id),
            FormMode::Create => None,
        }
    }
}

/// Everything the booking page shows
#[derive(Debug, Clone, Default)]
pub struct BookingPage {
    pub mode: FormMode,
    pub form: BookingForm,
    pub errors: FieldErrors,
    pub load_state: LoadState,
    pub customers: Vec<Customer>,
    pub tables: Vec<Table>,
    pub time_slots: Vec<TimeSlot>,
    pub bookings: Vec<Booking>,
    /// Customer whose bookings are listed separately
    pub customer_filter: Option<i64>,
    pub customer_bookings: Vec<Booking>,
}

impl BookingPage {
    pub fn lookups(&self, today: NaiveDate) -> Lookups<'_> {
        Lookups {
            customers: &self.customers,
            tables: &self.tables,
            time_slots: &self.time_slots,
            today,
        }
    }
}

/// Typed form values into the wire record's fields.
///
/// Runs after validation, so a failure here only means a number that does
/// not fit the wire type.
fn draft_from(form: &BookingForm, mode: FormMode) -> Result<BookingDraft, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut reference = |field: &'static str, value: &str| match parse_lenient(value) {
        Some(n) => n,
        None => {
            errors.insert(field, "Must be a whole number");
            0
        }
    };

    let customer_id = match mode {
        FormMode::Edit { customer_id, .. } => customer_id,
        FormMode::Create => reference("customer_id", &form.customer_id),
    };
    let table_id = reference("table_id", &form.table_id);
    let booking_slot_id = reference("booking_slot_id", &form.booking_slot_id);
    let people = reference("number_of_people", &form.number_of_people);

    let number_of_people = i32::try_from(people).unwrap_or_else(|_| {
        errors.insert("number_of_people", "Must be a whole number");
        0
    });

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(BookingDraft {
        customer_id,
        table_id,
        booking_slot_id,
        booking_date: form.booking_date.trim().to_string(),
        number_of_people,
        special_request: form.special_request.clone().unwrap_or_default(),
    })
}

/// Booking page controller
pub struct BookingWorkflow<A> {
    api: Arc<A>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn Confirm>,
    state: RwLock<BookingPage>,
    submitting: AtomicBool,
}

impl<A: ReservationApi> BookingWorkflow<A> {
    pub fn new(api: Arc<A>, notifier: Arc<dyn Notifier>, confirm: Arc<dyn Confirm>) -> Self {
        Self {
            api,
            notifier,
            confirm,
            state: RwLock::new(BookingPage::default()),
            submitting: AtomicBool::new(false),
        }
    }

    /// Copy of the current page state
    pub async fn snapshot(&self) -> BookingPage {
        self.state.read().await.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub fn submit_label(&self) -> &'static str {
        submit_label(self.is_submitting(), BOOK_TABLE)
    }

    /// Initial load
    pub async fn load(&self) -> Result<(), WorkflowError> {
        self.refresh_all().await
    }

    /// Fetch customers, tables, time slots and all bookings together, plus
    /// the selected customer's bookings.
    ///
    /// On failure the page reads as failed and the previous lists stay.
    pub async fn refresh_all(&self) -> Result<(), WorkflowError> {
        let filter = {
            let mut page = self.state.write().await;
            page.load_state = LoadState::Loading;
            page.customer_filter
        };

        let scoped = async {
            match filter {
                Some(customer_id) => Some(self.api.list_bookings_by_customer(customer_id).await),
                None => None,
            }
        };
        let (customers, tables, time_slots, bookings, customer_bookings) = tokio::join!(
            self.api.list::<Customer>(),
            self.api.list::<Table>(),
            self.api.list::<TimeSlot>(),
            self.api.list::<Booking>(),
            scoped,
        );

        let mut page = self.state.write().await;
        if let Some(customer_bookings) = customer_bookings {
            page.customer_bookings = customer_bookings;
        }

        let loaded = (|| -> Result<_, ClientError> {
            Ok((customers?, tables?, time_slots?, bookings?))
        })();
        match loaded {
            Ok((customers, tables, time_slots, bookings)) => {
                tracing::debug!(
                    customers = customers.len(),
                    tables = tables.len(),
                    time_slots = time_slots.len(),
                    bookings = bookings.len(),
                    "Booking data loaded"
                );
                page.customers = customers;
                page.tables = tables;
                page.time_slots = time_slots;
                page.bookings = bookings;
                page.load_state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load booking data");
                page.load_state = LoadState::Failed {
                    message: LOAD_FAILED.to_string(),
                };
                Err(e.into())
            }
        }
    }

    /// What must exist before a booking can be made
    pub async fn missing_prerequisites(&self) -> Vec<&'static str> {
        let page = self.state.read().await;
        if !page.load_state.is_ready() {
            return Vec::new();
        }

        let mut missing = Vec::new();
        if page.customers.is_empty() {
            missing.push("No customers available.");
        }
        if page.tables.is_empty() {
            missing.push("No tables available.");
        }
        if page.time_slots.is_empty() {
            missing.push("No time slots available.");
        }
        missing
    }

    /// Pick the form's customer and list that customer's bookings.
    ///
    /// Ignored while editing; the edited booking keeps its customer.
    pub async fn select_customer(&self, customer_id: Option<i64>) -> Vec<Booking> {
        {
            let mut page = self.state.write().await;
            if page.mode.is_edit() {
                tracing::debug!("Customer is locked while editing");
                return page.customer_bookings.clone();
            }
            page.form.customer_id = customer_id.map(|id| id.to_string()).unwrap_or_default();
            page.customer_filter = customer_id;
            if customer_id.is_none() {
                page.customer_bookings.clear();
                return Vec::new();
            }
        }

        self.refresh_customer_bookings().await
    }

    async fn refresh_customer_bookings(&self) -> Vec<Booking> {
        let Some(customer_id) = self.state.read().await.customer_filter else {
            return Vec::new();
        };
        let bookings = self.api.list_bookings_by_customer(customer_id).await;

        let mut page = self.state.write().await;
        // Selection may have moved on while the query ran
        if page.customer_filter == Some(customer_id) {
            page.customer_bookings = bookings.clone();
        }
        bookings
    }

    /// Validate and save the form.
    ///
    /// Creates or updates depending on the mode. On success the page returns
    /// to an empty create form and reloads; on failure the form is kept as
    /// entered.
    pub async fn submit(&self, form: BookingForm) -> Result<Booking, WorkflowError> {
        let _guard = SubmitGuard::try_acquire(&self.submitting).ok_or_else(|| {
            tracing::warn!("Booking submit already in progress");
            WorkflowError::SubmitInFlight
        })?;

        let (mode, draft) = {
            let mut page = self.state.write().await;
            page.form = form.clone();
            let checked = forms::check(&form).and_then(|_| draft_from(&form, page.mode));
            match checked {
                Ok(draft) => {
                    page.errors.clear();
                    (page.mode, draft)
                }
                Err(errors) => {
                    tracing::debug!(errors = %errors, "Booking form rejected");
                    page.errors = errors.clone();
                    return Err(WorkflowError::Validation(errors));
                }
            }
        };
        let customer_id = draft.customer_id;
        let record = draft.into_booking();

        let saved = match mode {
            FormMode::Edit { booking_id, .. } => self.api.update(booking_id, record).await,
            FormMode::Create => self.api.create(&record).await,
        };
        let (verb, done) = match mode {
            FormMode::Edit { .. } => ("update", "Booking updated successfully"),
            FormMode::Create => ("create", "Booking created successfully"),
        };

        let saved = match saved {
            Ok(saved) => saved,
            Err(e) => {
                tracing::error!(error = %e, "Failed to {} booking", verb);
                self.notifier
                    .notify(Notification::error(format!("Failed to {} booking", verb)));
                return Err(e.into());
            }
        };

        match mode {
            FormMode::Edit { booking_id, .. } => tracing::info!(booking_id, "Booking updated"),
            FormMode::Create => tracing::info!(booking_id = ?saved.id, "Booking created"),
        }

        {
            let mut page = self.state.write().await;
            page.mode = FormMode::Create;
            page.form = BookingForm::default();
            page.errors.clear();
            page.customer_filter = Some(customer_id);
        }
        self.notifier.notify(Notification::success(done));

        // A failed reload shows on the page; the booking is saved either way
        if let Err(e) = self.refresh_all().await {
            tracing::warn!(error = %e, "Reload after booking save failed");
        }
        Ok(saved)
    }

    /// Load a booking into the form for editing.
    ///
    /// The booking date is left as it was in the form.
    pub async fn begin_edit(&self, booking: &Booking) -> Result<(), WorkflowError> {
        let Some(booking_id) = booking.id() else {
            self.notifier
                .notify(Notification::error("Cannot edit booking without ID"));
            return Err(WorkflowError::MissingIdentity {
                action: "edit",
                entity: "booking",
            });
        };

        {
            let mut page = self.state.write().await;
            page.form.customer_id = booking.customer_id.to_string();
            page.form.table_id = booking.table_id.to_string();
            page.form.booking_slot_id = booking.booking_slot_id.to_string();
            page.form.number_of_people = booking.number_of_people.to_string();
            page.form.special_request = Some(booking.special_request.clone());
            page.errors.clear();
            page.mode = FormMode::Edit {
                booking_id,
                customer_id: booking.customer_id,
            };
            page.customer_filter = Some(booking.customer_id);
        }
        tracing::debug!(booking_id, "Editing booking");

        self.refresh_customer_bookings().await;
        Ok(())
    }

    /// Leave edit mode with an empty form
    pub async fn cancel_edit(&self) {
        let mut page = self.state.write().await;
        page.mode = FormMode::Create;
        page.form = BookingForm::default();
        page.errors.clear();
    }

    /// Delete a booking after confirmation, then reload
    pub async fn delete(&self, booking: &Booking) -> Result<DeleteOutcome, WorkflowError> {
        let Some(booking_id) = booking.id() else {
            self.notifier
                .notify(Notification::error("Cannot delete booking without ID"));
            return Err(WorkflowError::MissingIdentity {
                action: "delete",
                entity: "booking",
            });
        };

        if !self.confirm.confirm(CONFIRM_DELETE) {
            tracing::debug!(booking_id, "Booking delete declined");
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(e) = self.api.delete::<Booking>(booking_id).await {
            tracing::error!(booking_id, error = %e, "Failed to delete booking");
            self.notifier
                .notify(Notification::error("Failed to delete booking"));
            return Err(e.into());
        }

        tracing::info!(booking_id, "Booking deleted");
        self.notifier
            .notify(Notification::success("Booking deleted successfully"));
        if let Err(e) = self.refresh_all().await {
            tracing::warn!(error = %e, "Reload after booking delete failed");
        }
        Ok(DeleteOutcome::Deleted)
    }

    /// All bookings, resolved for display
    pub async fn rows(&self, today: NaiveDate) -> Vec<BookingRow> {
        let page = self.state.read().await;
        let lookups = page.lookups(today);
        page.bookings
            .iter()
            .map(|b| BookingRow::resolve(b, &lookups))
            .collect()
    }

    /// The selected customer's bookings, resolved for display
    pub async fn customer_rows(&self, today: NaiveDate) -> Vec<BookingRow> {
        let page = self.state.read().await;
        let lookups = page.lookups(today);
        page.customer_bookings
            .iter()
            .map(|b| BookingRow::resolve(b, &lookups))
            .collect()
    }

    /// Loaded booking by identity
    pub async fn find(&self, booking_id: i64) -> Option<Booking> {
        self.state
            .read()
            .await
            .bookings
            .iter()
            .find(|b| b.id() == Some(booking_id))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> BookingForm {
        BookingForm {
            customer_id: "3".into(),
            table_id: "5".into(),
            booking_slot_id: "2".into(),
            booking_date: "2025-06-01".into(),
            number_of_people: "4".into(),
            special_request: None,
        }
    }

    #[test]
    fn test_draft_coerces_form_strings() {
        let draft = draft_from(&form(), FormMode::Create).unwrap();
        assert_eq!(draft.customer_id, 3);
        assert_eq!(draft.table_id, 5);
        assert_eq!(draft.booking_slot_id, 2);
        assert_eq!(draft.number_of_people, 4);
        assert_eq!(draft.special_request, "");
    }

    #[test]
    fn test_draft_uses_locked_customer_when_editing() {
        let mut form = form();
        form.customer_id = "8".into();
        let mode = FormMode::Edit {
            booking_id: 17,
            customer_id: 3,
        };
        assert_eq!(draft_from(&form, mode).unwrap().customer_id, 3);
    }

    #[test]
    fn test_draft_rejects_oversized_party() {
        let mut form = form();
        form.number_of_people = "99999999999".into();
        let errors = draft_from(&form, FormMode::Create).unwrap_err();
        assert_eq!(errors.get("number_of_people"), Some("Must be a whole number"));
    }

    #[test]
    fn test_form_mode() {
        assert!(!FormMode::Create.is_edit());
        let edit = FormMode::Edit {
            booking_id: 4,
            customer_id: 1,
        };
        assert!(edit.is_edit());
        assert_eq!(edit.editing_id(), Some(4));
        assert_eq!(FormMode::default(), FormMode::Create);
    }
}
