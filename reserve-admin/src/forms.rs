//! Staff input forms
//!
//! Fields hold exactly what was typed or selected, as strings. Validation
//! runs before any request is made; numeric coercion happens afterwards, in
//! the workflow that owns the form.

use std::borrow::Cow;

use chrono::NaiveDate;
use shared::models::serde_helpers::parse_lenient;
use shared::util;
use validator::{Validate, ValidationError};

use crate::core::FieldErrors;

/// Wire layout of `bookingDate`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Whitespace-only input counts as missing, under the `length` code
fn present<'a>(value: &'a str, missing: &'static str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(invalid("length", missing))
    } else {
        Ok(value)
    }
}

fn whole_number(value: &str, missing: &'static str) -> Result<i64, ValidationError> {
    let value = present(value, missing)?;
    parse_lenient(value).ok_or_else(|| invalid("whole_number", "Must be a whole number"))
}

/// A whole number of at least one
fn positive_count(
    value: &str,
    missing: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    match whole_number(value, missing)? {
        n if n < 1 => Err(invalid("range", message)),
        _ => Ok(()),
    }
}

fn customer_ref(value: &str) -> Result<(), ValidationError> {
    whole_number(value, "Customer is required").map(drop)
}

fn table_ref(value: &str) -> Result<(), ValidationError> {
    whole_number(value, "Table is required").map(drop)
}

fn slot_ref(value: &str) -> Result<(), ValidationError> {
    whole_number(value, "Time slot is required").map(drop)
}

fn party_size(value: &str) -> Result<(), ValidationError> {
    positive_count(value, "Number of people is required", "At least 1 person is required")
}

fn seat_count(value: &str) -> Result<(), ValidationError> {
    positive_count(value, "Number of seats is required", "At least 1 seat is required")
}

/// `YYYY-MM-DD`, today or later
fn booking_date(value: &str) -> Result<(), ValidationError> {
    let value = present(value, "Booking date is required")?;
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| invalid("date", "Invalid date"))?;
    if date < util::today() {
        return Err(invalid("date_in_past", "Booking date cannot be in the past"));
    }
    Ok(())
}

/// Run the derived rules and flatten them for inline display
pub fn check<F: Validate>(form: &F) -> Result<(), FieldErrors> {
    form.validate().map_err(FieldErrors::from)
}

// ============ Booking ============

/// Reservation form
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct BookingForm {
    #[validate(
        length(min = 1, message = "Customer is required"),
        custom(function = "customer_ref")
    )]
    pub customer_id: String,

    #[validate(
        length(min = 1, message = "Table is required"),
        custom(function = "table_ref")
    )]
    pub table_id: String,

    #[validate(
        length(min = 1, message = "Time slot is required"),
        custom(function = "slot_ref")
    )]
    pub booking_slot_id: String,

    #[validate(
        length(min = 1, message = "Booking date is required"),
        custom(function = "booking_date")
    )]
    pub booking_date: String,

    #[validate(
        length(min = 1, message = "Number of people is required"),
        custom(function = "party_size")
    )]
    pub number_of_people: String,

    pub special_request: Option<String>,
}

// ============ Customers ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct CustomerForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,
}

// ============ Tables ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct TableForm {
    #[validate(length(min = 1, message = "Table number is required"))]
    pub table_number: String,

    #[validate(
        length(min = 1, message = "Number of seats is required"),
        custom(function = "seat_count")
    )]
    pub number_of_seats: String,
}

// ============ Time Slots ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct TimeSlotForm {
    #[validate(length(min = 1, message = "Slot ID is required"))]
    pub slot_id: String,

    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,
}
