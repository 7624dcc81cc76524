use maison_domain::{ContactField, Direction, GuestKind, Step};

use crate::cli::core::{parse_date, CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::render;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "start",
            "Begin a new booking, optionally from a deep link",
            "start [?room=<id>]",
            cmd_start,
        ),
        CommandEntry::new(
            "dates",
            "Set check-in and check-out (step 1)",
            "dates <YYYY-MM-DD|-> <YYYY-MM-DD|->",
            cmd_dates,
        ),
        CommandEntry::new(
            "guests",
            "Change the party size (step 1)",
            "guests <adults|children> <+|-|count>",
            cmd_guests,
        ),
        CommandEntry::new(
            "room",
            "Choose a room by id or slug (step 2)",
            "room <id|slug|none>",
            cmd_room,
        ),
        CommandEntry::new(
            "contact",
            "Fill in a contact field (step 3)",
            "contact <first-name|last-name|email|phone|requests> <value...>",
            cmd_contact,
        ),
        CommandEntry::new("next", "Continue to the next step", "next", cmd_next)
            .with_aliases(&["n"]),
        CommandEntry::new("back", "Return to the previous step", "back", cmd_back)
            .with_aliases(&["b"]),
        CommandEntry::new("status", "Show the booking so far", "status", cmd_status)
            .with_aliases(&["s"]),
        CommandEntry::new("submit", "Send the booking", "submit", cmd_submit),
        CommandEntry::new(
            "confirmation",
            "Show the confirmation of a submitted booking",
            "confirmation",
            cmd_confirmation,
        ),
    ]
}

fn cmd_start(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if context.mode == CliMode::Interactive
        && context.has_unsubmitted_progress()
        && !io::confirm_action("Discard the booking in progress?", false)?
    {
        io::print_info("Keeping the current booking.");
        return Ok(());
    }

    let query = (!args.is_empty()).then(|| args.join("&"));
    context.start_session(query.as_deref());

    if let Some(query) = &query {
        match context.session.selected_room() {
            Some(room) => io::print_success(format!("Room pre-selected: {}", room.name)),
            None => io::print_warning(format!(
                "No room matches `{}`; pick one on step 2.",
                query
            )),
        }
    }
    render::print_step(context);
    Ok(())
}

fn cmd_dates(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_step(Step::DatesGuests)?;
    let [check_in, check_out] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: dates <YYYY-MM-DD|-> <YYYY-MM-DD|->".into(),
        ));
    };
    let check_in = parse_date(check_in)?;
    let check_out = parse_date(check_out)?;
    context.session.set_dates(check_in, check_out);

    let nights = context.session.nights();
    if check_in.is_some() && check_out.is_some() && nights == 0 {
        io::print_warning("Check-out must be at least one day after check-in.");
    } else if nights > 0 {
        io::print_success(format!(
            "{} night{}",
            nights,
            if nights == 1 { "" } else { "s" }
        ));
    }
    Ok(())
}

fn parse_guest_kind(input: &str) -> Result<GuestKind, CommandError> {
    match input.to_ascii_lowercase().as_str() {
        "adults" | "adult" | "a" => Ok(GuestKind::Adults),
        "children" | "child" | "kids" | "c" => Ok(GuestKind::Children),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown guest kind `{}`; use adults or children",
            other
        ))),
    }
}

fn cmd_guests(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_step(Step::DatesGuests)?;
    let [kind, change] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: guests <adults|children> <+|-|count>".into(),
        ));
    };
    let kind = parse_guest_kind(kind)?;
    let (min, max) = kind.bounds();
    let before = context.session.guests().get(kind);

    match *change {
        "+" => {
            context.session.change_guest_count(kind, Direction::Increment);
        }
        "-" => {
            context.session.change_guest_count(kind, Direction::Decrement);
        }
        value => {
            let requested: u8 = value.parse().map_err(|_| {
                CommandError::InvalidArguments(format!(
                    "`{}` is not a count; use +, - or a number",
                    value
                ))
            })?;
            context.session.set_guest_count(kind, requested);
            if requested != context.session.guests().get(kind) {
                io::print_warning(format!("{} must be between {} and {}.", kind, min, max));
            }
        }
    }

    let after = context.session.guests().get(kind);
    if after == before && (*change == "+" || *change == "-") {
        let limit = if *change == "+" { "maximum" } else { "minimum" };
        io::print_hint(format!("{} already at the {} of {}.", kind, limit, after));
    }
    io::print_info(format!(
        "{}: {} ({})",
        context.locale.guest_label(kind),
        after,
        context.session.guests()
    ));
    warn_if_room_too_small(context);
    Ok(())
}

fn cmd_room(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_step(Step::RoomSelect)?;
    let Some(key) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "usage: room <id|slug|none>".into(),
        ));
    };

    if key.eq_ignore_ascii_case("none") {
        context.session.clear_room();
        io::print_info("Room selection cleared.");
        return Ok(());
    }

    if !context.session.select_room(key) {
        return Err(CommandError::InvalidArguments(format!(
            "no room `{}`; use `rooms` to list them",
            key
        )));
    }
    if let Some(room) = context.session.selected_room() {
        io::print_success(format!("Selected {}", room.name));
    }
    warn_if_room_too_small(context);
    Ok(())
}

fn cmd_contact(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_step(Step::Details)?;
    let Some((field, value)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: contact <field> <value...>".into(),
        ));
    };
    let field: ContactField = field
        .parse()
        .map_err(|err| CommandError::InvalidArguments(format!("{}", err)))?;
    let value = value.join(" ");
    context.session.set_contact_field(field, value.trim());

    let label = context.locale.contact_label(field);
    if value.trim().is_empty() {
        io::print_info(format!("{} cleared.", label));
    } else {
        io::print_info(format!("{}: {}", label, value.trim()));
    }
    Ok(())
}

fn cmd_next(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.require_open()?;
    if context.session.step().is_last() {
        io::print_hint("This is the last step. Use `submit` to send the booking.");
        return Ok(());
    }
    if context.session.advance() {
        render::print_step(context);
    } else {
        io::print_warning("This step is not complete yet.");
        render::print_issues(context.locale, &context.session.issues());
    }
    Ok(())
}

fn cmd_back(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.require_open()?;
    if context.session.retreat() {
        render::print_step(context);
    } else {
        io::print_hint("Already on the first step.");
    }
    Ok(())
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    render::print_status(context);
    Ok(())
}

fn cmd_submit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.mode == CliMode::Interactive
        && context.session.step() == Step::Details
        && context.session.issues().is_empty()
        && !context.session.is_submitted()
        && !io::confirm_action("Send this booking?", true)?
    {
        io::print_info("Booking not sent.");
        return Ok(());
    }

    context.session.submit(&*context.dispatcher)?;

    if let Some(confirmation) = context.session.confirmation() {
        render::print_confirmation(context.locale, context.currency(), confirmation);
    }
    Ok(())
}

fn cmd_confirmation(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.session.confirmation() {
        Some(confirmation) => {
            render::print_confirmation(context.locale, context.currency(), confirmation)
        }
        None => io::print_info("Nothing submitted yet."),
    }
    Ok(())
}

fn warn_if_room_too_small(context: &ShellContext) {
    if let (Some(room), Some(false)) = (
        context.session.selected_room(),
        context.session.selected_room_fits(),
    ) {
        io::print_warning(format!(
            "{} sleeps up to {}; your party is {}.",
            room.name,
            room.capacity,
            context.session.guests().total()
        ));
    }
}
