//! Cargo-style status lines and spinners, all on stderr so stdout stays
//! clean for command output (`--dry-run` commands, `--json`, settings XML).

use std::io::Write;
use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

fn emit(style: Style, label: &str, message: &str) {
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        style.bold().apply_to(label)
    );
}

/// `   Deploying com.example:app 1.2.0 RELEASE to Maven Central`, green label.
pub fn status(label: &str, message: &str) {
    emit(Style::new().green(), label, message);
}

/// Cyan label, for lines that report rather than act.
pub fn status_info(label: &str, message: &str) {
    emit(Style::new().cyan(), label, message);
}

/// Yellow label.
pub fn status_warn(label: &str, message: &str) {
    emit(Style::new().yellow(), label, message);
}

/// A ticking spinner showing elapsed time, for waits of unknown length.
///
/// Hidden automatically when stderr is not a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
