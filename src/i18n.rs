//! Locale text tables.
//!
//! Every user-facing label is a [`Text`] variant and every locale answers
//! every variant through an exhaustive `match`, so a missing translation is
//! a compile error instead of a raw key on screen.

use std::{fmt, str::FromStr};

use maison_core::DraftField;
use maison_domain::{ContactField, GuestKind, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// Resolves a BCP-47 style tag (`en`, `en-GB`, `fr_FR`) by its language
    /// part; unknown languages fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    pub fn text(self, text: Text) -> &'static str {
        match self {
            Locale::En => english(text),
            Locale::Fr => french(text),
        }
    }

    pub fn step_title(self, step: Step) -> &'static str {
        self.text(match step {
            Step::DatesGuests => Text::StepDatesGuests,
            Step::RoomSelect => Text::StepRoom,
            Step::Details => Text::StepDetails,
        })
    }

    pub fn contact_label(self, field: ContactField) -> &'static str {
        self.text(match field {
            ContactField::FirstName => Text::FirstName,
            ContactField::LastName => Text::LastName,
            ContactField::Email => Text::Email,
            ContactField::Phone => Text::Phone,
            ContactField::SpecialRequests => Text::SpecialRequests,
        })
    }

    pub fn guest_label(self, kind: GuestKind) -> &'static str {
        self.text(match kind {
            GuestKind::Adults => Text::Adults,
            GuestKind::Children => Text::Children,
        })
    }

    pub fn field_label(self, field: DraftField) -> &'static str {
        match field {
            DraftField::CheckIn => self.text(Text::CheckIn),
            DraftField::CheckOut => self.text(Text::CheckOut),
            DraftField::Room => self.text(Text::Room),
            DraftField::Contact(field) => self.contact_label(field),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLocale(pub String);

impl fmt::Display for UnsupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale `{}`", self.0)
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let language = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            _ => Err(UnsupportedLocale(tag.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    StepDatesGuests,
    StepRoom,
    StepDetails,
    StepCounter,
    CheckIn,
    CheckOut,
    Nights,
    Adults,
    Children,
    Room,
    FirstName,
    LastName,
    Email,
    Phone,
    SpecialRequests,
    EstimatedTotal,
    PerNight,
    UpTo,
    Guests,
    GuestName,
    NotSet,
    Missing,
    Invalid,
    TooSmallForParty,
    Selected,
    BookingConfirmed,
    Reference,
    ThankYou,
}

fn english(text: Text) -> &'static str {
    match text {
        Text::StepDatesGuests => "Dates & guests",
        Text::StepRoom => "Room",
        Text::StepDetails => "Your details",
        Text::StepCounter => "Step",
        Text::CheckIn => "Check-in",
        Text::CheckOut => "Check-out",
        Text::Nights => "Nights",
        Text::Adults => "Adults",
        Text::Children => "Children",
        Text::Room => "Room",
        Text::FirstName => "First name",
        Text::LastName => "Last name",
        Text::Email => "Email",
        Text::Phone => "Phone",
        Text::SpecialRequests => "Special requests",
        Text::EstimatedTotal => "Estimated total",
        Text::PerNight => "per night",
        Text::UpTo => "up to",
        Text::Guests => "guests",
        Text::GuestName => "Guest",
        Text::NotSet => "not set",
        Text::Missing => "is required",
        Text::Invalid => "is not valid",
        Text::TooSmallForParty => "too small for your party",
        Text::Selected => "selected",
        Text::BookingConfirmed => "Booking confirmed",
        Text::Reference => "Reference",
        Text::ThankYou => "Thank you, we look forward to welcoming you.",
    }
}

fn french(text: Text) -> &'static str {
    match text {
        Text::StepDatesGuests => "Dates et voyageurs",
        Text::StepRoom => "Chambre",
        Text::StepDetails => "Vos coordonnées",
        Text::StepCounter => "Étape",
        Text::CheckIn => "Arrivée",
        Text::CheckOut => "Départ",
        Text::Nights => "Nuits",
        Text::Adults => "Adultes",
        Text::Children => "Enfants",
        Text::Room => "Chambre",
        Text::FirstName => "Prénom",
        Text::LastName => "Nom",
        Text::Email => "E-mail",
        Text::Phone => "Téléphone",
        Text::SpecialRequests => "Demandes particulières",
        Text::EstimatedTotal => "Total estimé",
        Text::PerNight => "par nuit",
        Text::UpTo => "jusqu'à",
        Text::Guests => "personnes",
        Text::GuestName => "Client",
        Text::NotSet => "non renseigné",
        Text::Missing => "est obligatoire",
        Text::Invalid => "n'est pas valide",
        Text::TooSmallForParty => "trop petite pour votre groupe",
        Text::Selected => "sélectionnée",
        Text::BookingConfirmed => "Réservation confirmée",
        Text::Reference => "Référence",
        Text::ThankYou => "Merci, nous avons hâte de vous accueillir.",
    }
}
