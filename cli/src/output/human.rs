//! Human-readable terminal renderer.

use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize as _;

use crate::application::services::identity::{FieldValue, is_consistent};
use crate::domain::{NamesyncConfig, TransactionResult};
use crate::output::OutputContext;

/// Placeholder shown for a field with no value.
pub const NOT_SET: &str = "(not set)";

/// Renders results as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        if !self.ctx.quiet {
            println!("namesync {version}");
        }
    }

    /// Render the identity fields and whether they agree.
    pub fn render_identity(&self, values: &[FieldValue]) {
        for f in values {
            self.ctx
                .kv(&format!("{:<15}", format!("{}:", f.field)), f.value.as_deref().unwrap_or(NOT_SET));
        }
        if is_consistent(values) {
            self.ctx.success("All names match");
        } else {
            self.ctx.warn("Names differ. Run: namesync apply");
        }
    }

    /// Render the outcome of a rename.
    ///
    /// Rollback details go to stderr and are never suppressed by `--quiet`.
    ///
    /// # Errors
    ///
    /// Returns an error if stderr cannot be written.
    pub fn render_outcome(&self, value: &str, result: &TransactionResult) -> Result<()> {
        match result {
            TransactionResult::Committed => {
                self.ctx.success(&format!("Hostname is now {value}"));
                Ok(())
            }
            TransactionResult::RolledBack { .. } => {
                self.write_rollback(&mut std::io::stderr().lock(), result)
            }
        }
    }

    /// Write the rollback report for `result` to `out`, regardless of
    /// `quiet`. Nothing is written for a committed result.
    ///
    /// # Errors
    ///
    /// Returns an error if `out` cannot be written.
    pub fn write_rollback(&self, out: &mut impl Write, result: &TransactionResult) -> Result<()> {
        let TransactionResult::RolledBack {
            failed_field,
            cause,
            restore_failures,
        } = result
        else {
            return Ok(());
        };
        let styles = &self.ctx.styles;
        writeln!(
            out,
            "  {} {failed_field}: {cause}. Change rolled back.",
            "✗".style(styles.error)
        )?;
        if restore_failures.is_empty() {
            writeln!(
                out,
                "  {} All fields were restored to their previous values.",
                "ℹ".style(styles.info)
            )?;
            return Ok(());
        }
        writeln!(
            out,
            "  {} {} field(s) could not be restored and need manual repair:",
            "✗".style(styles.error),
            restore_failures.len()
        )?;
        for f in restore_failures {
            writeln!(out, "      {} {}", f.field.style(styles.bold), f.error)?;
        }
        writeln!(out, "      Check with: namesync show")?;
        Ok(())
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &NamesyncConfig, path: &std::path::Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<24} {}", "naming.department:", config.naming.department);
        println!(
            "  {:<24} {}",
            "webhook.url:",
            config.webhook.url.as_deref().unwrap_or(NOT_SET)
        );
        println!("  {:<24} {}", "webhook.timeout_secs:", config.webhook.timeout_secs);
        println!("  {:<24} {}", "store.sudo:", config.store.sudo);
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in ["NAMESYNC_CONFIG", "NAMESYNC_OPERATOR", "NAMESYNC_LOG", "NO_COLOR"] {
            println!(
                "    {:<20} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }
}
