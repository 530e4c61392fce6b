//! Shared terminal output helpers

use console::style;

use crate::export::{self, ClipboardSink};

/// Print a generated README between rules
pub fn print_preview(readme: &str) {
    let rule = style("─".repeat(60)).dim();
    println!("\n{}", rule);
    print!("{}", readme);
    if !readme.ends_with('\n') {
        println!();
    }
    println!("{}\n", rule);
}

/// Print a one-time failure notice for an export action
pub fn report_failure(action: &str, err: &dyn std::fmt::Display) {
    tracing::warn!("{} failed: {}", action, err);
    eprintln!("{} {} failed: {}", style("✗").red(), action, err);
}

/// Copy `readme` right before the process exits, holding the clipboard where
/// its contents would otherwise vanish with the process
pub fn copy_before_exit(sink: &mut dyn ClipboardSink, readme: &str) {
    if !sink.outlives_process() {
        eprintln!(
            "{} README copied to clipboard. Keeping it available until something else is copied (Ctrl-C to stop)...",
            style("→").cyan()
        );
    }

    match export::copy_and_hold(sink, readme) {
        Ok(false) => eprintln!("{} README copied to clipboard!", style("✓").green()),
        Ok(true) => {}
        Err(e) => report_failure("Copy", &e),
    }
}

/// Print a colored unified diff
pub fn print_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", style(line).bold());
        } else if line.starts_with('+') {
            println!("{}", style(line).green());
        } else if line.starts_with('-') {
            println!("{}", style(line).red());
        } else if line.starts_with("@@") {
            println!("{}", style(line).cyan());
        } else {
            println!("{}", line);
        }
    }
}
