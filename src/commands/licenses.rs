//! Licenses Command
//!
//! Implements `readmegen licenses`.

use anyhow::Result;
use console::style;

use crate::metadata::License;

/// Execute the licenses command
pub fn execute_licenses(json: bool) -> Result<()> {
    if json {
        let ids: Vec<&str> = License::all().iter().map(|l| l.id()).collect();
        println!("{}", serde_json::to_string_pretty(&ids)?);
        return Ok(());
    }

    for license in License::all() {
        println!("  {:<14} {}", style(license.id()).cyan(), license.label());
    }

    Ok(())
}
