//! Step summary lines for terminal output.

use console::Style;

use crate::job::Step;

/// Icon for a step that ran and passed.
pub const PASSED_ICON: &str = "✓";

/// Icon for a step that ran and failed.
pub const FAILED_ICON: &str = "✗";

/// Icon for a step skipped after a failure.
pub const SKIPPED_ICON: &str = "⊘";

/// Summary line for a finished step, e.g. `✓ Build (1.2s)`.
pub fn finished_line(step: &Step) -> String {
    let icon = if step.exit_is_failure() {
        FAILED_ICON
    } else {
        PASSED_ICON
    };
    let label = label(step);
    let duration = format_duration(step.duration);

    if step.exit_code == 0 {
        format!("{} {} ({})", icon, label, duration)
    } else {
        format!("{} {} - exit {} ({})", icon, label, step.exit_code, duration)
    }
}

/// Summary line for a skipped step.
pub fn skipped_line(step: &Step) -> String {
    format!("{} {} (skipped)", SKIPPED_ICON, label(step))
}

/// Print a finished step's line to stderr, styled by outcome.
pub fn show_finished(step: &Step) {
    let style = if step.exit_is_failure() {
        Style::new().red().bold()
    } else {
        Style::new().green()
    };
    eprintln!("  {}", style.apply_to(finished_line(step)));
}

/// Print a skipped step's line to stderr.
pub fn show_skipped(step: &Step) {
    eprintln!("  {}", Style::new().dim().apply_to(skipped_line(step)));
}

fn label(step: &Step) -> &str {
    if step.title.is_empty() {
        &step.slug
    } else {
        &step.title
    }
}

/// Format a duration given in seconds.
pub fn format_duration(seconds: f64) -> String {
    let millis = (seconds * 1000.0).round() as u64;
    let secs = millis / 1000;

    if secs == 0 {
        format!("{}ms", millis)
    } else if secs < 60 {
        format!("{}.{}s", secs, (millis % 1000) / 100)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
