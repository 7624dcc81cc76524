use assert_cmd::Command;
use tempfile::TempDir;

/// `maison_cli` in script mode with an isolated `MAISON_HOME` and no colors.
pub fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("maison_cli").expect("binary built");
    cmd.env("MAISON_CLI_SCRIPT", "1")
        .env("MAISON_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

pub const BOOKING_FLOW: [&str; 10] = [
    "dates 2025-06-10 2025-06-13",
    "guests children +",
    "next",
    "room garden-suite",
    "next",
    "contact first-name Ana",
    "contact last-name \"da Silva\"",
    "contact email ana@example.pt",
    "contact phone \"+351 21 000 0000\"",
    "submit",
];
