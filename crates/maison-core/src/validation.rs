//! Per-step validity predicates and the field-level failure report.

use std::{collections::BTreeMap, fmt};

use maison_domain::{BookingDraft, ContactDetails, ContactField, RoomCatalog, Step};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::night_calculator::NightCalculator;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Basic `local@domain.tld` shape check. Surrounding whitespace is ignored.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_SHAPE.is_match(input.trim())
}

/// Draft inputs that can block a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    CheckIn,
    CheckOut,
    Room,
    Contact(ContactField),
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftField::CheckIn => f.write_str("check-in"),
            DraftField::CheckOut => f.write_str("check-out"),
            DraftField::Room => f.write_str("room"),
            DraftField::Contact(field) => write!(f, "{}", field),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    Invalid,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Missing => f.write_str("missing"),
            IssueKind::Invalid => f.write_str("invalid"),
        }
    }
}

/// Set of failing fields, ordered by their position in the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationFailure {
    issues: BTreeMap<DraftField, IssueKind>,
}

impl ValidationFailure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: DraftField, kind: IssueKind) {
        self.issues.insert(field, kind);
    }

    pub fn merge(&mut self, other: ValidationFailure) {
        self.issues.extend(other.issues);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.issues.contains_key(&field)
    }

    pub fn issue(&self, field: DraftField) -> Option<IssueKind> {
        self.issues.get(&field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = DraftField> + '_ {
        self.issues.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, IssueKind)> + '_ {
        self.issues.iter().map(|(field, kind)| (*field, *kind))
    }

    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return f.write_str("no issues");
        }
        let parts: Vec<String> = self
            .issues
            .iter()
            .map(|(field, kind)| format!("{} is {}", field, kind))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Dates & Guests predicate: both dates set and at least one night between them.
pub fn validate_dates(draft: &BookingDraft) -> ValidationFailure {
    let mut failure = ValidationFailure::new();
    if draft.check_in.is_none() {
        failure.insert(DraftField::CheckIn, IssueKind::Missing);
    }
    if draft.check_out.is_none() {
        failure.insert(DraftField::CheckOut, IssueKind::Missing);
    }
    if draft.check_in.is_some()
        && draft.check_out.is_some()
        && NightCalculator::nights(draft.check_in, draft.check_out) < 1
    {
        failure.insert(DraftField::CheckOut, IssueKind::Invalid);
    }
    failure
}

/// Room predicate: a selection that is a canonical catalog id, the same exact
/// lookup `BookingSession::selected_room` uses.
pub fn validate_room(draft: &BookingDraft, catalog: &RoomCatalog) -> ValidationFailure {
    let mut failure = ValidationFailure::new();
    match draft.selected_room_id.as_deref() {
        None | Some("") => failure.insert(DraftField::Room, IssueKind::Missing),
        Some(id) if !catalog.contains(id) => failure.insert(DraftField::Room, IssueKind::Invalid),
        Some(_) => {}
    }
    failure
}

/// Details predicate: required contact fields present and a well-formed email.
pub fn validate_contact(contact: &ContactDetails) -> ValidationFailure {
    let mut failure = ValidationFailure::new();
    for field in ContactField::REQUIRED {
        if contact.get(field).trim().is_empty() {
            failure.insert(DraftField::Contact(field), IssueKind::Missing);
        }
    }
    if !contact.email.trim().is_empty() && !is_valid_email(&contact.email) {
        failure.insert(DraftField::Contact(ContactField::Email), IssueKind::Invalid);
    }
    failure
}

pub fn validate_step(draft: &BookingDraft, catalog: &RoomCatalog, step: Step) -> ValidationFailure {
    match step {
        Step::DatesGuests => validate_dates(draft),
        Step::RoomSelect => validate_room(draft, catalog),
        Step::Details => validate_contact(&draft.contact),
    }
}

/// Union of every step's predicate.
pub fn validate_all(draft: &BookingDraft, catalog: &RoomCatalog) -> ValidationFailure {
    let mut failure = ValidationFailure::new();
    for step in Step::ALL {
        failure.merge(validate_step(draft, catalog, step));
    }
    failure
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use insta::assert_snapshot;
    use maison_domain::RoomCatalogEntry;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn email_shape_accepts_common_addresses() {
        assert!(is_valid_email("guest@example.com"));
        assert!(is_valid_email("  first.last+tag@mail.example.org "));
        assert!(!is_valid_email("guest@example"));
        assert!(!is_valid_email("guest example@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn dates_report_missing_and_reversed_ranges() {
        let mut draft = BookingDraft::new();
        let failure = validate_dates(&draft);
        assert_eq!(failure.issue(DraftField::CheckIn), Some(IssueKind::Missing));
        assert_eq!(failure.issue(DraftField::CheckOut), Some(IssueKind::Missing));

        draft.check_in = Some(date(2025, 6, 13));
        draft.check_out = Some(date(2025, 6, 10));
        let failure = validate_dates(&draft);
        assert_eq!(failure.len(), 1);
        assert_eq!(failure.issue(DraftField::CheckOut), Some(IssueKind::Invalid));

        draft.check_out = Some(date(2025, 6, 14));
        assert!(validate_dates(&draft).is_empty());
    }

    #[test]
    fn room_must_resolve_in_catalog() {
        let catalog = RoomCatalog::new(vec![RoomCatalogEntry::new("a", "a", "A", 2, 20)]);
        let draft = BookingDraft::new();
        assert_eq!(
            validate_room(&draft, &catalog).issue(DraftField::Room),
            Some(IssueKind::Missing)
        );
        let draft = BookingDraft::new().with_room("ghost");
        assert_eq!(
            validate_room(&draft, &catalog).issue(DraftField::Room),
            Some(IssueKind::Invalid)
        );
        let draft = BookingDraft::new().with_room("a");
        assert!(validate_room(&draft, &catalog).is_empty());
        let draft = BookingDraft::new().with_room(" a ");
        assert_eq!(
            validate_room(&draft, &catalog).issue(DraftField::Room),
            Some(IssueKind::Invalid)
        );
    }

    #[test]
    fn special_requests_are_optional() {
        let contact = ContactDetails {
            first_name: "Ana".into(),
            last_name: "Silva".into(),
            email: "ana@example.com".into(),
            phone: "+351 900 000 000".into(),
            special_requests: String::new(),
        };
        assert!(validate_contact(&contact).is_empty());
    }

    #[test]
    fn failure_message_lists_fields_in_wizard_order() {
        let contact = ContactDetails {
            first_name: "  ".into(),
            email: "not-an-email".into(),
            ..ContactDetails::default()
        };
        let mut failure = validate_contact(&contact);
        failure.insert(DraftField::Room, IssueKind::Missing);
        assert_snapshot!(
            failure.to_string(),
            @"room is missing; first-name is missing; last-name is missing; email is invalid; phone is missing"
        );
    }
}
