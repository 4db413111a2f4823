use colored::Colorize;

// Everything here writes to stderr: stdout carries the action outputs.

pub fn log_section(title: &str) {
    eprintln!("{}", "━".repeat(50).bright_black());
    eprintln!("{}", title.bright_blue().bold());
    eprintln!("{}", "━".repeat(50).bright_black());
}

pub fn log_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

pub fn log_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message);
}

pub fn log_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

pub fn log_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.red());
}

/// Logs `<channel>: <from> => <to>`, e.g. `Prod: v1.0.0 => v1.0.1`.
pub fn log_transition(channel: &str, from: &str, to: &str) {
    eprintln!(
        "{} {}: {} => {}",
        "ℹ".blue(),
        channel.bold(),
        from.bright_black(),
        to.green()
    );
}
