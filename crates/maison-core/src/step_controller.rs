use maison_domain::{BookingDraft, RoomCatalog};

use crate::validation::{validate_step, ValidationFailure};

/// Moves the wizard between its three screens.
pub struct StepController;

impl StepController {
    /// Fields blocking the current step.
    pub fn issues(draft: &BookingDraft, catalog: &RoomCatalog) -> ValidationFailure {
        validate_step(draft, catalog, draft.step)
    }

    pub fn can_advance(draft: &BookingDraft, catalog: &RoomCatalog) -> bool {
        Self::issues(draft, catalog).is_empty()
    }

    /// Moves forward when the current step is valid. Returns whether the step
    /// changed; the draft is untouched otherwise.
    pub fn advance(draft: &mut BookingDraft, catalog: &RoomCatalog) -> bool {
        let Some(next) = draft.step.next() else {
            return false;
        };
        if !Self::can_advance(draft, catalog) {
            return false;
        }
        draft.step = next;
        true
    }

    /// Moves back one step without validating or clearing anything.
    pub fn retreat(draft: &mut BookingDraft) -> bool {
        match draft.step.previous() {
            Some(previous) => {
                draft.step = previous;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use maison_domain::{RoomCatalogEntry, Step};

    use super::*;

    fn catalog() -> RoomCatalog {
        RoomCatalog::new(vec![RoomCatalogEntry::new("loft", "loft", "Loft", 4, 40)])
    }

    fn dated_draft() -> BookingDraft {
        let mut draft = BookingDraft::new();
        draft.check_in = NaiveDate::from_ymd_opt(2025, 6, 10);
        draft.check_out = NaiveDate::from_ymd_opt(2025, 6, 13);
        draft
    }

    #[test]
    fn advance_without_dates_is_rejected() {
        let mut draft = BookingDraft::new();
        let before = draft.clone();
        assert!(!StepController::advance(&mut draft, &catalog()));
        assert_eq!(draft, before);
    }

    #[test]
    fn advance_without_room_stays_on_room_step() {
        let mut draft = dated_draft();
        assert!(StepController::advance(&mut draft, &catalog()));
        assert_eq!(draft.step, Step::RoomSelect);

        assert!(!StepController::advance(&mut draft, &catalog()));
        assert_eq!(draft.step, Step::RoomSelect);

        draft.selected_room_id = Some("loft".into());
        assert!(StepController::advance(&mut draft, &catalog()));
        assert_eq!(draft.step, Step::Details);
    }

    #[test]
    fn details_is_the_last_advanceable_step() {
        let mut draft = dated_draft().with_room("loft");
        draft.step = Step::Details;
        draft.contact.first_name = "Ana".into();
        draft.contact.last_name = "Silva".into();
        draft.contact.email = "ana@example.com".into();
        draft.contact.phone = "555".into();
        assert!(StepController::can_advance(&draft, &catalog()));
        assert!(!StepController::advance(&mut draft, &catalog()));
        assert_eq!(draft.step, Step::Details);
    }

    #[test]
    fn retreat_then_advance_preserves_data() {
        let mut draft = dated_draft().with_room("loft");
        assert!(StepController::advance(&mut draft, &catalog()));
        assert!(StepController::advance(&mut draft, &catalog()));
        draft.contact.first_name = "Ana".into();
        let snapshot = draft.clone();

        assert!(StepController::retreat(&mut draft));
        assert_eq!(draft.step, Step::RoomSelect);
        assert!(StepController::advance(&mut draft, &catalog()));
        assert_eq!(draft, snapshot);
    }

    #[test]
    fn retreat_at_first_step_is_a_no_op() {
        let mut draft = BookingDraft::new();
        assert!(!StepController::retreat(&mut draft));
        assert_eq!(draft.step, Step::DatesGuests);
    }
}
