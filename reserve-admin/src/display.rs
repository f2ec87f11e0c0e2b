//! Booking display resolution
//!
//! Bookings hold only references. Everything shown to staff is resolved
//! here against the loaded collections, with fixed placeholders when a
//! reference matches nothing. All functions are pure; time formatting takes
//! the calendar day explicitly.

use chrono::NaiveDate;
use shared::models::{Booking, Customer, Table, TimeSlot};
use shared::util::format_time_of_day;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_TIME_AVAILABLE: &str = "No time available";
pub const NO_SPECIAL_REQUEST: &str = "None";
pub const NO_BOOKING_NUMBER: &str = "-";

/// Customer name, or `N/A`
pub fn customer_label(booking: &Booking, customers: &[Customer]) -> String {
    customers
        .iter()
        .find(|c| c.id == Some(booking.customer_id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `Table 4 (6 seats)`
pub fn describe_table(table: &Table) -> String {
    format!("Table {} ({} seats)", table.table_number, table.number_of_seats)
}

pub fn table_label(booking: &Booking, tables: &[Table]) -> String {
    tables
        .iter()
        .find(|t| t.id == Some(booking.table_id))
        .map(describe_table)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Slot time on a 12-hour clock; empty time reads as unavailable
pub fn slot_time_label(slot: &TimeSlot, today: NaiveDate) -> String {
    if slot.time.trim().is_empty() {
        NO_TIME_AVAILABLE.to_string()
    } else {
        format_time_of_day(&slot.time, today)
    }
}

pub fn time_label(booking: &Booking, slots: &[TimeSlot], today: NaiveDate) -> String {
    slots
        .iter()
        .find(|s| s.id == Some(booking.booking_slot_id))
        .map(|s| slot_time_label(s, today))
        .unwrap_or_else(|| NO_TIME_AVAILABLE.to_string())
}

pub fn status_label(booking: &Booking) -> &'static str {
    if booking.is_confirmed {
        "Confirmed"
    } else {
        "Pending"
    }
}

pub fn special_request_label(booking: &Booking) -> &str {
    if booking.special_request.is_empty() {
        NO_SPECIAL_REQUEST
    } else {
        &booking.special_request
    }
}

// ============ Select options ============

/// `Ada (555-0100)`
pub fn customer_option(customer: &Customer) -> String {
    format!("{} ({})", customer.name, customer.phone_number)
}

pub fn table_option(table: &Table) -> String {
    describe_table(table)
}

/// `A1 - 2:30 PM`
pub fn slot_option(slot: &TimeSlot, today: NaiveDate) -> String {
    format!("{} - {}", slot.slot_id, slot_time_label(slot, today))
}

// ============ Rows ============

/// Collections a booking's references resolve against
#[derive(Debug, Clone, Copy)]
pub struct Lookups<'a> {
    pub customers: &'a [Customer],
    pub tables: &'a [Table],
    pub time_slots: &'a [TimeSlot],
    pub today: NaiveDate,
}

/// One booking as listed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRow {
    pub id: Option<i64>,
    pub booking_number: String,
    pub customer: String,
    pub people: String,
    pub time: String,
    pub table: String,
    pub status: String,
    pub special_request: String,
}

impl BookingRow {
    pub const HEADERS: [&'static str; 7] = [
        "Booking #",
        "Customer",
        "People",
        "Time",
        "Table",
        "Status",
        "Special Request",
    ];

    pub fn resolve(booking: &Booking, lookups: &Lookups<'_>) -> Self {
        Self {
            id: shared::Resource::id(booking),
            booking_number: booking
                .booking_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| NO_BOOKING_NUMBER.to_string()),
            customer: customer_label(booking, lookups.customers),
            people: booking.number_of_people.to_string(),
            time: time_label(booking, lookups.time_slots, lookups.today),
            table: table_label(booking, lookups.tables),
            status: status_label(booking).to_string(),
            special_request: special_request_label(booking).to_string(),
        }
    }

    /// Cells in [`Self::HEADERS`] order
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.booking_number.clone(),
            self.customer.clone(),
            self.people.clone(),
            self.time.clone(),
            self.table.clone(),
            self.status.clone(),
            self.special_request.clone(),
        ]
    }
}
