//! Booking draft state and the enums describing wizard navigation.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::contact::ContactDetails;

pub const ADULTS_MIN: u8 = 1;
pub const ADULTS_MAX: u8 = 6;
pub const CHILDREN_MIN: u8 = 0;
pub const CHILDREN_MAX: u8 = 4;

/// Ordered screens of the booking wizard.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Step {
    #[default]
    DatesGuests,
    RoomSelect,
    Details,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::DatesGuests, Step::RoomSelect, Step::Details];

    /// One-based position, as shown in "Step n of 3".
    pub fn number(self) -> usize {
        match self {
            Step::DatesGuests => 1,
            Step::RoomSelect => 2,
            Step::Details => 3,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::DatesGuests => Some(Step::RoomSelect),
            Step::RoomSelect => Some(Step::Details),
            Step::Details => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::DatesGuests => None,
            Step::RoomSelect => Some(Step::DatesGuests),
            Step::Details => Some(Step::RoomSelect),
        }
    }

    pub fn is_first(self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Step::DatesGuests => "dates & guests",
            Step::RoomSelect => "room",
            Step::Details => "details",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuestKind {
    Adults,
    Children,
}

impl GuestKind {
    /// Inclusive `(min, max)` bounds for the counter.
    pub fn bounds(self) -> (u8, u8) {
        match self {
            GuestKind::Adults => (ADULTS_MIN, ADULTS_MAX),
            GuestKind::Children => (CHILDREN_MIN, CHILDREN_MAX),
        }
    }
}

impl fmt::Display for GuestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestKind::Adults => f.write_str("adults"),
            GuestKind::Children => f.write_str("children"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Increment,
    Decrement,
}

/// Party composition. Construct through [`GuestCounts::new`] to keep the
/// counts inside their bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawGuestCounts")]
pub struct GuestCounts {
    adults: u8,
    children: u8,
}

impl GuestCounts {
    /// Builds a party, clamping both counts into their bounds.
    pub fn new(adults: u8, children: u8) -> Self {
        Self {
            adults: adults.clamp(ADULTS_MIN, ADULTS_MAX),
            children: children.clamp(CHILDREN_MIN, CHILDREN_MAX),
        }
    }

    pub fn adults(&self) -> u8 {
        self.adults
    }

    pub fn children(&self) -> u8 {
        self.children
    }

    pub fn get(&self, kind: GuestKind) -> u8 {
        match kind {
            GuestKind::Adults => self.adults,
            GuestKind::Children => self.children,
        }
    }

    /// Returns a copy with `kind` set to `value` clamped into its bounds.
    pub fn with(self, kind: GuestKind, value: u8) -> Self {
        match kind {
            GuestKind::Adults => Self::new(value, self.children),
            GuestKind::Children => Self::new(self.adults, value),
        }
    }

    pub fn total(&self) -> u8 {
        self.adults + self.children
    }
}

#[derive(Deserialize)]
struct RawGuestCounts {
    adults: u8,
    children: u8,
}

impl From<RawGuestCounts> for GuestCounts {
    fn from(raw: RawGuestCounts) -> Self {
        Self::new(raw.adults, raw.children)
    }
}

impl Default for GuestCounts {
    fn default() -> Self {
        Self::new(2, 0)
    }
}

impl fmt::Display for GuestCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let adult_label = if self.adults == 1 { "adult" } else { "adults" };
        if self.children == 0 {
            write!(f, "{} {}", self.adults, adult_label)
        } else {
            let child_label = if self.children == 1 { "child" } else { "children" };
            write!(
                f,
                "{} {}, {} {}",
                self.adults, adult_label, self.children, child_label
            )
        }
    }
}

/// In-progress booking form owned by a single session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingDraft {
    pub step: Step,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: GuestCounts,
    pub selected_room_id: Option<String>,
    pub contact: ContactDetails,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.selected_room_id = Some(room_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_walk_in_order() {
        assert_eq!(Step::DatesGuests.next(), Some(Step::RoomSelect));
        assert_eq!(Step::Details.next(), None);
        assert_eq!(Step::RoomSelect.previous(), Some(Step::DatesGuests));
        assert!(Step::DatesGuests.is_first());
        assert_eq!(
            Step::ALL.iter().map(|s| s.number()).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn guest_counts_clamp_on_construction() {
        let counts = GuestCounts::new(0, 9);
        assert_eq!(counts.adults(), ADULTS_MIN);
        assert_eq!(counts.children(), CHILDREN_MAX);
        assert_eq!(counts.with(GuestKind::Adults, 42).adults(), ADULTS_MAX);
    }

    #[test]
    fn deserialized_counts_are_clamped() {
        let counts: GuestCounts =
            serde_json::from_str(r#"{"adults":12,"children":0}"#).unwrap();
        assert_eq!(counts.adults(), ADULTS_MAX);
    }

    #[test]
    fn guest_counts_display_pluralizes() {
        assert_eq!(GuestCounts::new(1, 0).to_string(), "1 adult");
        assert_eq!(GuestCounts::new(2, 1).to_string(), "2 adults, 1 child");
    }

    #[test]
    fn default_draft_starts_empty() {
        let draft = BookingDraft::new();
        assert_eq!(draft.step, Step::DatesGuests);
        assert!(draft.check_in.is_none());
        assert!(draft.selected_room_id.is_none());
        assert_eq!(draft.guests, GuestCounts::new(2, 0));
    }
}
