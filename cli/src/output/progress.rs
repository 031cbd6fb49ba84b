//! Spinners for the slow host probes, using indicatif.

#![allow(clippy::expect_used)] // Templates are compile-time constants

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::output::OutputContext;

/// Start a spinner when the terminal can show one, `None` otherwise.
///
/// # Panics
///
/// Panics if the template string is invalid (it is a compile-time constant).
#[must_use]
pub fn spinner(ctx: &OutputContext, msg: &str) -> Option<ProgressBar> {
    if !ctx.show_progress() {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "])
            .template("  {spinner:.cyan} {msg}")
            .expect("valid template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}

/// Finish a spinner, replacing it with `✓ msg`.
pub fn finish_ok(pb: Option<ProgressBar>, msg: &str) {
    if let Some(pb) = pb {
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("  {prefix} {msg}")
                .expect("valid template"),
        );
        pb.set_prefix("✓");
        pb.finish_with_message(msg.to_string());
    }
}

/// Remove a spinner without leaving a line behind.
pub fn clear(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}
