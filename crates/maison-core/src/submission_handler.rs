use chrono::{DateTime, Utc};
use maison_domain::{BookingDraft, Confirmation, ConfirmationParts, RoomCatalog, Step};

use crate::{
    dispatch::ReservationDispatcher,
    night_calculator::NightCalculator,
    pricing::estimate_total,
    validation::{validate_all, DraftField, IssueKind, ValidationFailure},
    CoreError,
};

/// Terminal transition of the wizard.
pub struct SubmissionHandler;

impl SubmissionHandler {
    /// Re-checks the whole draft. Callers can reach `submit` without going
    /// through the step controller, so every step's predicate is evaluated
    /// again, not just the Details one.
    pub fn validate(draft: &BookingDraft, catalog: &RoomCatalog) -> Result<(), CoreError> {
        if draft.step != Step::Details {
            return Err(CoreError::StepIncomplete(draft.step));
        }
        validate_all(draft, catalog).into_result()?;
        Ok(())
    }

    /// Builds the immutable confirmation for a valid draft.
    pub fn build_confirmation(
        draft: &BookingDraft,
        catalog: &RoomCatalog,
        submitted_at: DateTime<Utc>,
    ) -> Result<Confirmation, CoreError> {
        Self::validate(draft, catalog)?;

        let room = draft
            .selected_room_id
            .as_deref()
            .and_then(|id| catalog.get(id.trim()))
            .cloned()
            .ok_or_else(|| single_issue(DraftField::Room, IssueKind::Invalid))?;
        let (check_in, check_out) = match (draft.check_in, draft.check_out) {
            (Some(check_in), Some(check_out)) => (check_in, check_out),
            _ => return Err(single_issue(DraftField::CheckIn, IssueKind::Missing)),
        };
        let nights = NightCalculator::nights(draft.check_in, draft.check_out);
        let contact = &draft.contact;

        Ok(Confirmation::new(
            ConfirmationParts {
                guest_name: contact.full_name(),
                email: contact.email.trim().to_string(),
                phone: contact.phone.trim().to_string(),
                special_requests: contact.special_requests.trim().to_string(),
                estimated_total: estimate_total(&room, nights),
                room,
                check_in,
                check_out,
                guests: draft.guests,
                nights,
            },
            submitted_at,
        ))
    }

    /// Validates, builds the confirmation and hands it to `dispatcher` once.
    /// On failure nothing is dispatched.
    pub fn submit(
        draft: &BookingDraft,
        catalog: &RoomCatalog,
        dispatcher: &dyn ReservationDispatcher,
        submitted_at: DateTime<Utc>,
    ) -> Result<Confirmation, CoreError> {
        let confirmation = Self::build_confirmation(draft, catalog, submitted_at)?;
        dispatcher.dispatch(&confirmation);
        Ok(confirmation)
    }
}

fn single_issue(field: DraftField, kind: IssueKind) -> CoreError {
    let mut failure = ValidationFailure::new();
    failure.insert(field, kind);
    CoreError::Validation(failure)
}
