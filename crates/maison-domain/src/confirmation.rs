use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{booking::GuestCounts, catalog::RoomCatalogEntry};

/// Immutable snapshot of a successfully submitted booking.
///
/// This is the payload handed to the reservation service and the data shown
/// on the confirmation view. Fields are read through accessors so a
/// confirmation cannot be altered once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Confirmation {
    reference: Uuid,
    guest_name: String,
    email: String,
    phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    special_requests: String,
    room: RoomCatalogEntry,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: GuestCounts,
    nights: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    estimated_total: Option<u64>,
    submitted_at: DateTime<Utc>,
}

/// Field bundle used to assemble a [`Confirmation`].
#[derive(Debug, Clone)]
pub struct ConfirmationParts {
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
    pub room: RoomCatalogEntry,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: GuestCounts,
    pub nights: u32,
    pub estimated_total: Option<u64>,
}

impl Confirmation {
    pub fn new(parts: ConfirmationParts, submitted_at: DateTime<Utc>) -> Self {
        Self {
            reference: Uuid::new_v4(),
            guest_name: parts.guest_name,
            email: parts.email,
            phone: parts.phone,
            special_requests: parts.special_requests,
            room: parts.room,
            check_in: parts.check_in,
            check_out: parts.check_out,
            guests: parts.guests,
            nights: parts.nights,
            estimated_total: parts.estimated_total,
            submitted_at,
        }
    }

    pub fn reference(&self) -> Uuid {
        self.reference
    }

    /// First eight hex digits of the reference, upper-cased for display.
    pub fn short_reference(&self) -> String {
        let mut short = self.reference.simple().to_string();
        short.truncate(8);
        short.to_ascii_uppercase()
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn special_requests(&self) -> &str {
        &self.special_requests
    }

    pub fn room(&self) -> &RoomCatalogEntry {
        &self.room
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn guests(&self) -> GuestCounts {
        self.guests
    }

    pub fn nights(&self) -> u32 {
        self.nights
    }

    pub fn estimated_total(&self) -> Option<u64> {
        self.estimated_total
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}
