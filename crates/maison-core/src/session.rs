//! One booking form session: the draft, its catalog and the terminal flag.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use maison_domain::{
    BookingDraft, Confirmation, ContactField, Direction, GuestCounts, GuestKind, RoomCatalog,
    RoomCatalogEntry, Step,
};

use crate::{
    deep_link::room_from_query,
    dispatch::ReservationDispatcher,
    guest_counter::GuestCounter,
    night_calculator::NightCalculator,
    pricing::estimate_total,
    step_controller::StepController,
    submission_handler::SubmissionHandler,
    validation::ValidationFailure,
    CoreError,
};

/// Owns a single draft for its whole lifetime.
///
/// Edits return `false` when they were ignored, which happens only once the
/// booking has been submitted. After that the session is read-only and
/// exposes its [`Confirmation`].
#[derive(Debug, Clone)]
pub struct BookingSession {
    draft: BookingDraft,
    catalog: Arc<RoomCatalog>,
    confirmation: Option<Confirmation>,
}

impl BookingSession {
    pub fn new(catalog: Arc<RoomCatalog>) -> Self {
        Self {
            draft: BookingDraft::new(),
            catalog,
            confirmation: None,
        }
    }

    /// Starts a session with the room from a deep link pre-selected. Unknown
    /// rooms leave the selection empty.
    pub fn from_deep_link(catalog: Arc<RoomCatalog>, query: &str) -> Self {
        let mut session = Self::new(catalog);
        if let Some(key) = room_from_query(query) {
            if !session.select_room(&key) {
                tracing::warn!(room = %key, "deep-linked room not found in catalog");
            }
        }
        session
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    pub fn step(&self) -> Step {
        self.draft.step
    }

    pub fn is_submitted(&self) -> bool {
        self.confirmation.is_some()
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn nights(&self) -> u32 {
        NightCalculator::nights(self.draft.check_in, self.draft.check_out)
    }

    pub fn guests(&self) -> GuestCounts {
        self.draft.guests
    }

    pub fn selected_room(&self) -> Option<&RoomCatalogEntry> {
        self.draft
            .selected_room_id
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn estimated_total(&self) -> Option<u64> {
        self.selected_room()
            .and_then(|room| estimate_total(room, self.nights()))
    }

    /// Whether the selected room sleeps the current party. `None` without a
    /// selection. Advisory only; the room step does not enforce it.
    pub fn selected_room_fits(&self) -> Option<bool> {
        self.selected_room()
            .map(|room| room.fits(self.draft.guests.total()))
    }

    /// Catalog rooms large enough for the current party.
    pub fn rooms_for_party(&self) -> Vec<&RoomCatalogEntry> {
        self.catalog.fitting(self.draft.guests.total()).collect()
    }

    pub fn set_check_in(&mut self, date: Option<NaiveDate>) -> bool {
        self.edit(|draft| draft.check_in = date)
    }

    pub fn set_check_out(&mut self, date: Option<NaiveDate>) -> bool {
        self.edit(|draft| draft.check_out = date)
    }

    pub fn set_dates(&mut self, check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> bool {
        self.edit(|draft| {
            draft.check_in = check_in;
            draft.check_out = check_out;
        })
    }

    pub fn change_guest_count(&mut self, kind: GuestKind, direction: Direction) -> bool {
        self.edit(|draft| {
            draft.guests = GuestCounter::change_guest_count(draft.guests, kind, direction);
        })
    }

    pub fn set_guest_count(&mut self, kind: GuestKind, value: u8) -> bool {
        self.edit(|draft| {
            draft.guests = GuestCounter::set_guest_count(draft.guests, kind, value);
        })
    }

    /// Selects a room by id or slug and stores its canonical id. Returns
    /// `false`, leaving the selection empty, when the key does not resolve.
    pub fn select_room(&mut self, key: &str) -> bool {
        if self.is_submitted() {
            return false;
        }
        let resolved = self.catalog.resolve(key).map(|room| room.id.clone());
        let found = resolved.is_some();
        self.draft.selected_room_id = resolved;
        found
    }

    pub fn clear_room(&mut self) -> bool {
        self.edit(|draft| draft.selected_room_id = None)
    }

    pub fn set_contact_field(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        let value = value.into();
        self.edit(|draft| draft.contact.set(field, value))
    }

    pub fn can_advance(&self) -> bool {
        !self.is_submitted() && StepController::can_advance(&self.draft, &self.catalog)
    }

    /// Fields blocking the current step.
    pub fn issues(&self) -> ValidationFailure {
        StepController::issues(&self.draft, &self.catalog)
    }

    pub fn advance(&mut self) -> bool {
        if self.is_submitted() {
            return false;
        }
        let from = self.draft.step;
        let moved = StepController::advance(&mut self.draft, &self.catalog);
        if moved {
            tracing::debug!(from = %from, to = %self.draft.step, "wizard advanced");
        }
        moved
    }

    pub fn retreat(&mut self) -> bool {
        if self.is_submitted() {
            return false;
        }
        let from = self.draft.step;
        let moved = StepController::retreat(&mut self.draft);
        if moved {
            tracing::debug!(from = %from, to = %self.draft.step, "wizard went back");
        }
        moved
    }

    pub fn submit(&mut self, dispatcher: &dyn ReservationDispatcher) -> Result<&Confirmation, CoreError> {
        self.submit_at(dispatcher, Utc::now())
    }

    /// Dispatches the booking and only then freezes the session. A failed
    /// submission leaves the draft and the flag untouched.
    pub fn submit_at(
        &mut self,
        dispatcher: &dyn ReservationDispatcher,
        submitted_at: DateTime<Utc>,
    ) -> Result<&Confirmation, CoreError> {
        if self.is_submitted() {
            return Err(CoreError::AlreadySubmitted);
        }
        let confirmation =
            SubmissionHandler::submit(&self.draft, &self.catalog, dispatcher, submitted_at)?;
        tracing::info!(
            reference = %confirmation.reference(),
            nights = confirmation.nights(),
            "booking submitted"
        );
        Ok(&*self.confirmation.insert(confirmation))
    }

    fn edit(&mut self, apply: impl FnOnce(&mut BookingDraft)) -> bool {
        if self.is_submitted() {
            tracing::debug!("ignoring edit on a submitted booking");
            return false;
        }
        apply(&mut self.draft);
        true
    }
}
