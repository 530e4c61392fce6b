//! Init Command
//!
//! Implements `readmegen init`: write a config file with form defaults.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::config::{Config, Defaults};
use crate::metadata::License;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Config file to write
    pub path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
    /// Default author
    pub author: Option<String>,
    /// Default license, `None` inside means no license
    pub license: Option<Option<License>>,
    /// Turn badges off by default
    pub no_badges: bool,
    /// Skip interactive prompts
    pub yes: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        eprintln!(
            "{} Config file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        std::process::exit(1);
    }

    let mut config = Config::default();

    // Interactive mode if no CLI options and not using --yes
    let interactive = !options.yes
        && options.author.is_none()
        && options.license.is_none()
        && !options.no_badges;

    if interactive {
        run_interactive_init(&mut config.defaults)?;
    } else {
        apply_cli_options(&mut config.defaults, &options);
    }

    config.save(&options.path)?;
    println!("{} Created {}", style("✓").green(), options.path.display());

    println!("\n{}", style("Next steps:").bold());
    println!("  1. Run {} to fill in the form", style("readmegen new").cyan());
    println!(
        "  2. Or run {} to render without prompts",
        style("readmegen render --title \"My Project\"").cyan()
    );

    Ok(())
}

fn run_interactive_init(defaults: &mut Defaults) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{} readmegen setup\n", style("→").cyan());

    defaults.author = Input::with_theme(&theme)
        .with_prompt("Default author")
        .allow_empty(true)
        .interact_text()?;

    let mut items: Vec<&str> = License::all().iter().map(|l| l.label()).collect();
    items.push("None");
    let idx = Select::with_theme(&theme)
        .with_prompt("Default license")
        .items(&items)
        .default(0)
        .interact()?;
    defaults.license = License::all().get(idx).copied();

    defaults.badges = Confirm::with_theme(&theme)
        .with_prompt("Include badges by default?")
        .default(true)
        .interact()?;

    Ok(())
}

fn apply_cli_options(defaults: &mut Defaults, options: &InitOptions) {
    if let Some(author) = &options.author {
        defaults.author = author.clone();
    }
    if let Some(license) = options.license {
        defaults.license = license;
    }
    if options.no_badges {
        defaults.badges = false;
    }
}
