//! Text views of the booking session: step banner, status sheet, room list
//! and confirmation. Builders return strings so they can be snapshot tested;
//! `print_*` wrappers send them through the output helpers.

use maison_core::{IssueKind, ValidationFailure};
use maison_domain::{Confirmation, ContactField, GuestKind, RoomCatalogEntry, Step};

use crate::cli::core::{format_date, ShellContext};
use crate::cli::output;
use crate::i18n::{Locale, Text};

/// `Step 2/3 · Room`
pub fn step_banner(locale: Locale, step: Step) -> String {
    format!(
        "{} {}/{} · {}",
        locale.text(Text::StepCounter),
        step.number(),
        Step::ALL.len(),
        locale.step_title(step)
    )
}

pub fn format_amount(amount: u64, currency: &str) -> String {
    format!("{} {}", amount, currency)
}

/// One line of the room list. `*` marks the selection.
pub fn room_line(
    locale: Locale,
    currency: &str,
    room: &RoomCatalogEntry,
    party: u8,
    selected: bool,
) -> String {
    let mut line = format!(
        "{} {:<16} {} · {} m² · {} {} {}",
        if selected { "*" } else { " " },
        room.id,
        room.name,
        room.size,
        locale.text(Text::UpTo),
        room.capacity,
        locale.text(Text::Guests)
    );
    if let Some(rate) = room.nightly_rate {
        line.push_str(&format!(
            " · {} {}",
            format_amount(u64::from(rate), currency),
            locale.text(Text::PerNight)
        ));
    }
    if !room.fits(party) {
        line.push_str(&format!(" ({})", locale.text(Text::TooSmallForParty)));
    }
    line
}

pub fn issue_line(locale: Locale, field: maison_core::DraftField, kind: IssueKind) -> String {
    let verdict = match kind {
        IssueKind::Missing => Text::Missing,
        IssueKind::Invalid => Text::Invalid,
    };
    format!("{} {}", locale.field_label(field), locale.text(verdict))
}

pub fn print_welcome(context: &ShellContext) {
    output::section("Maison · booking");
    output::info(format!(
        "{} rooms available. Type `help` for commands, `status` to see your booking.",
        context.catalog.len()
    ));
    print_step(context);
}

pub fn print_step(context: &ShellContext) {
    output::section(step_banner(context.locale, context.session.step()));
}

pub fn print_issues(locale: Locale, failure: &ValidationFailure) {
    for (field, kind) in failure.iter() {
        output::warning(issue_line(locale, field, kind));
    }
}

pub fn print_status(context: &ShellContext) {
    let locale = context.locale;
    let session = &context.session;
    let draft = session.draft();
    let not_set = || locale.text(Text::NotSet).to_string();

    print_step(context);

    let room = match session.selected_room() {
        Some(room) if session.selected_room_fits() == Some(false) => {
            format!("{} ({})", room.name, locale.text(Text::TooSmallForParty))
        }
        Some(room) => room.name.clone(),
        None => not_set(),
    };

    let mut rows: Vec<(&str, String)> = vec![
        (
            locale.text(Text::CheckIn),
            draft.check_in.map(format_date).unwrap_or_else(not_set),
        ),
        (
            locale.text(Text::CheckOut),
            draft.check_out.map(format_date).unwrap_or_else(not_set),
        ),
        (locale.text(Text::Nights), session.nights().to_string()),
        (
            locale.guest_label(GuestKind::Adults),
            session.guests().adults().to_string(),
        ),
        (
            locale.guest_label(GuestKind::Children),
            session.guests().children().to_string(),
        ),
        (locale.text(Text::Room), room),
    ];
    if let Some(total) = session.estimated_total() {
        rows.push((
            locale.text(Text::EstimatedTotal),
            format_amount(total, context.currency()),
        ));
    }
    if session.step() == Step::Details {
        for field in ContactField::ALL {
            let value = draft.contact.get(field);
            let shown = if value.trim().is_empty() {
                not_set()
            } else {
                value.to_string()
            };
            rows.push((locale.contact_label(field), shown));
        }
    }
    print_rows(&rows);

    if session.is_submitted() {
        output::hint("Booking submitted. Use `confirmation` to review it.");
        return;
    }
    let issues = session.issues();
    if issues.is_empty() {
        if session.step().is_last() {
            output::hint("Ready. Use `submit` to send the booking.");
        } else {
            output::hint("Ready. Use `next` to continue.");
        }
    } else {
        print_issues(locale, &issues);
    }
}

pub fn print_rooms(context: &ShellContext) {
    let locale = context.locale;
    let session = &context.session;
    let party = session.guests().total();
    let selected = session.draft().selected_room_id.as_deref();

    output::section(locale.text(Text::Room));
    for room in session.catalog() {
        output::info(room_line(
            locale,
            context.currency(),
            room,
            party,
            selected == Some(room.id.as_str()),
        ));
    }
    if session.rooms_for_party().is_empty() {
        output::warning(format!("No room sleeps a party of {}.", party));
    }
}

pub fn print_room_details(locale: Locale, currency: &str, room: &RoomCatalogEntry) {
    output::section(&room.name);
    if !room.tagline.is_empty() {
        output::info(format!("  {}", room.tagline));
    }
    let mut rows = vec![
        ("Id", room.id.clone()),
        ("Size", format!("{} m²", room.size)),
        (locale.text(Text::Guests), format!("{}", room.capacity)),
    ];
    if let Some(rate) = room.nightly_rate {
        rows.push((
            locale.text(Text::PerNight),
            format_amount(u64::from(rate), currency),
        ));
    }
    if !room.features.is_empty() {
        rows.push(("Features", room.features.join(", ")));
    }
    print_rows(&rows);
}

pub fn print_confirmation(locale: Locale, currency: &str, confirmation: &Confirmation) {
    output::success(locale.text(Text::BookingConfirmed));
    let guests = confirmation.guests();
    let mut rows = vec![
        (locale.text(Text::Reference), confirmation.short_reference()),
        (locale.text(Text::Room), confirmation.room().name.clone()),
        (locale.text(Text::CheckIn), format_date(confirmation.check_in())),
        (locale.text(Text::CheckOut), format_date(confirmation.check_out())),
        (locale.text(Text::Nights), confirmation.nights().to_string()),
        (
            locale.guest_label(GuestKind::Adults),
            guests.adults().to_string(),
        ),
        (
            locale.guest_label(GuestKind::Children),
            guests.children().to_string(),
        ),
        (
            locale.text(Text::GuestName),
            confirmation.guest_name().to_string(),
        ),
        (
            locale.contact_label(ContactField::Email),
            confirmation.email().to_string(),
        ),
        (
            locale.contact_label(ContactField::Phone),
            confirmation.phone().to_string(),
        ),
    ];
    if !confirmation.special_requests().is_empty() {
        rows.push((
            locale.contact_label(ContactField::SpecialRequests),
            confirmation.special_requests().to_string(),
        ));
    }
    if let Some(total) = confirmation.estimated_total() {
        rows.push((
            locale.text(Text::EstimatedTotal),
            format_amount(total, currency),
        ));
    }
    print_rows(&rows);
    output::info(locale.text(Text::ThankYou));
}

fn print_rows(rows: &[(&str, String)]) {
    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in rows {
        output::field(label, value, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maison_core::DraftField;
    use maison_domain::RoomCatalog;

    #[test]
    fn banner_counts_steps() {
        insta::assert_snapshot!(step_banner(Locale::En, Step::RoomSelect), @"Step 2/3 · Room");
        insta::assert_snapshot!(
            step_banner(Locale::Fr, Step::Details),
            @"Étape 3/3 · Vos coordonnées"
        );
    }

    #[test]
    fn room_line_marks_selection_and_small_rooms() {
        let catalog = RoomCatalog::seed();
        let room = catalog.get("junior-suite").expect("seeded room");
        insta::assert_snapshot!(
            room_line(Locale::En, "EUR", room, 5, true),
            @"* junior-suite     Junior Suite · 38 m² · up to 3 guests · 240 EUR per night (too small for your party)"
        );
    }

    #[test]
    fn issue_lines_use_locale_labels() {
        assert_eq!(
            issue_line(Locale::En, DraftField::Room, IssueKind::Missing),
            "Room is required"
        );
        assert_eq!(
            issue_line(
                Locale::Fr,
                DraftField::Contact(ContactField::Email),
                IssueKind::Invalid
            ),
            "E-mail n'est pas valide"
        );
    }

    #[test]
    fn amounts_carry_the_currency_code() {
        assert_eq!(format_amount(870, "EUR"), "870 EUR");
    }
}
