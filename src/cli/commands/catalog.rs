use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::render;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "rooms",
        "List rooms, or describe one",
        "rooms [id|slug]",
        cmd_rooms,
    )]
}

fn cmd_rooms(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(key) = args.first() else {
        render::print_rooms(context);
        return Ok(());
    };
    let room = context.session.catalog().resolve(key).ok_or_else(|| {
        CommandError::InvalidArguments(format!("no room `{}` in the catalog", key))
    })?;
    render::print_room_details(context.locale, context.currency(), room);
    Ok(())
}
