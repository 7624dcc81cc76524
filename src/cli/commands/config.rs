use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use maison_config::Config;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change shell preferences",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_ascii_lowercase()).as_deref() {
        None | Some("show") => show_config(context),
        Some("set") => {
            let [_, key, value @ ..] = args else {
                return Err(usage());
            };
            if value.is_empty() {
                return Err(usage());
            }
            set_config_value(context, key, &value.join(" "))
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{}`",
            other
        ))),
    }
}

fn usage() -> CommandError {
    CommandError::InvalidArguments(format!(
        "usage: config set <{}> <value>",
        Config::KEYS.join("|")
    ))
}

fn show_config(context: &ShellContext) -> CommandResult {
    let entries = context.config.entries();
    let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    output::section("Configuration");
    for (key, value) in entries {
        output::field(key, value, width);
    }
    io::print_info(format!(
        "  Stored in {}",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set_value(key, value)?;

    let previous = std::mem::replace(&mut context.config, updated);
    if let Err(err) = context.reload_collaborators() {
        context.config = previous;
        context.reload_collaborators()?;
        return Err(err);
    }
    context.persist_config()?;

    tracing::info!(key, "configuration updated");
    io::print_success(format!("Set {} = {}", key, value.trim()));
    if key.eq_ignore_ascii_case("catalog") {
        io::print_hint("The new catalog applies from the next `start`.");
    }
    Ok(())
}
