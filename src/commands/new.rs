//! Interactive form
//!
//! Implements `readmegen new`: prompt for every field, then loop over the
//! form actions until the user quits.

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use super::output::{copy_before_exit, print_diff, print_preview, report_failure};
use crate::config::Config;
use crate::export::{
    diff_against_existing, ClipboardSink, SystemClipboard, README_FILE_NAME, README_MIME_TYPE,
};
use crate::form::FormState;
use crate::metadata::{Field, License, ProjectMetadata, Update};

/// Options for the new command
#[derive(Debug, Clone)]
pub struct NewOptions {
    /// Directory the download action writes README.md into
    pub dir: PathBuf,
    /// Replace an existing README.md without asking
    pub force: bool,
}

impl Default for NewOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            force: false,
        }
    }
}

/// Actions offered after the fields are filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Generate,
    EditField,
    Preview,
    Copy,
    Download,
    Quit,
}

impl FormAction {
    /// Actions available in the current state. Preview, Copy and Download
    /// only appear once a README has been generated.
    pub fn available(generated: bool) -> Vec<FormAction> {
        [
            FormAction::Generate,
            FormAction::EditField,
            FormAction::Preview,
            FormAction::Copy,
            FormAction::Download,
            FormAction::Quit,
        ]
        .into_iter()
        .filter(|a| generated || !a.needs_readme())
        .collect()
    }

    fn needs_readme(&self) -> bool {
        matches!(self, FormAction::Preview | FormAction::Copy | FormAction::Download)
    }
}

impl fmt::Display for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormAction::Generate => "Generate README ✨",
            FormAction::EditField => "Edit a field",
            FormAction::Preview => "Preview",
            FormAction::Copy => "📋 Copy",
            FormAction::Download => "💾 Download",
            FormAction::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Execute the new command
pub fn execute_new(options: NewOptions, config: &Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut form = FormState::new(config.seed_metadata());
    let mut clipboard: Option<SystemClipboard> = None;
    let mut last_copied: Option<String> = None;

    println!("{} README Generator\n", style("→").cyan());
    println!("{}", style("Project Details").bold());

    for field in Field::ALL {
        let update = prompt_field(&theme, field, form.metadata())?;
        form.update(update);
    }
    println!();

    loop {
        let actions = FormAction::available(form.has_readme());
        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&actions)
            .default(0)
            .interact()?;

        match actions[choice] {
            FormAction::Generate => {
                let readme = form.generate();
                print_preview(readme);
            }
            FormAction::EditField => {
                let labels: Vec<&str> = Field::ALL.iter().map(|f| f.label()).collect();
                let idx = Select::with_theme(&theme)
                    .with_prompt("Field")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                let update = prompt_field(&theme, Field::ALL[idx], form.metadata())?;
                form.update(update);
            }
            FormAction::Preview => {
                if let Some(readme) = form.readme() {
                    print_preview(readme);
                }
            }
            FormAction::Copy => {
                if let Some(copied) = copy_action(&form, &mut clipboard) {
                    last_copied = Some(copied);
                }
            }
            FormAction::Download => download_action(&form, &options, &theme)?,
            FormAction::Quit => break,
        }
    }

    if let (Some(text), Some(sink)) = (&last_copied, clipboard.as_mut()) {
        hold_copied_on_quit(sink, text, &theme)?;
    }

    Ok(())
}

/// Offer to keep the last copy available when the clipboard would lose it on exit
fn hold_copied_on_quit(
    sink: &mut dyn ClipboardSink,
    text: &str,
    theme: &ColorfulTheme,
) -> Result<()> {
    if sink.outlives_process() {
        return Ok(());
    }

    let keep = Confirm::with_theme(theme)
        .with_prompt("The copied README disappears from the clipboard on exit. Keep it available?")
        .default(true)
        .interact()?;

    if keep {
        copy_before_exit(sink, text);
    }
    Ok(())
}

/// Returns the copied text on success
fn copy_action(form: &FormState, clipboard: &mut Option<SystemClipboard>) -> Option<String> {
    // The clipboard is kept for the whole session: on some platforms the
    // contents disappear when the owning handle is dropped.
    if clipboard.is_none() {
        match SystemClipboard::new() {
            Ok(c) => *clipboard = Some(c),
            Err(e) => {
                report_failure("Copy", &e);
                return None;
            }
        }
    }

    let sink = clipboard.as_mut()?;

    match form.copy(sink) {
        Ok(true) => {
            println!("{} README copied to clipboard!", style("✓").green());
            form.readme().map(str::to_string)
        }
        Ok(false) => None,
        Err(e) => {
            report_failure("Copy", &e);
            None
        }
    }
}

fn download_action(form: &FormState, options: &NewOptions, theme: &ColorfulTheme) -> Result<()> {
    let Some(readme) = form.readme() else {
        return Ok(());
    };

    let path = options.dir.join(README_FILE_NAME);
    let mut overwrite = options.force;

    if path.exists() && !overwrite {
        match diff_against_existing(&path, readme) {
            Some(diff) => {
                println!("{} {} already exists:\n", style("!").yellow(), path.display());
                print_diff(&diff);
            }
            None => {
                println!("{} {} is already up to date", style("✓").green(), path.display());
                return Ok(());
            }
        }

        overwrite = Confirm::with_theme(theme)
            .with_prompt(format!("Overwrite {}?", path.display()))
            .default(false)
            .interact()?;

        if !overwrite {
            println!("{} Skipped {}", style("!").yellow(), path.display());
            return Ok(());
        }
    }

    match form.download(&options.dir, overwrite) {
        Ok(Some(written)) => println!(
            "{} Saved {} ({})",
            style("✓").green(),
            written.display(),
            README_MIME_TYPE
        ),
        Ok(None) => {}
        Err(e) => report_failure("Download", &e),
    }

    Ok(())
}

fn prompt_field(theme: &ColorfulTheme, field: Field, current: &ProjectMetadata) -> Result<Update> {
    let update = match field {
        Field::License => {
            let mut items: Vec<&str> = License::all().iter().map(|l| l.label()).collect();
            items.push("None");
            let default = current
                .license
                .and_then(|c| License::all().iter().position(|l| *l == c))
                .unwrap_or(items.len() - 1);
            let idx = Select::with_theme(theme)
                .with_prompt(field.label())
                .items(&items)
                .default(default)
                .interact()?;
            Update::License(License::all().get(idx).copied())
        }
        Field::Badges => {
            let include = Confirm::with_theme(theme)
                .with_prompt(field.label())
                .default(current.badges)
                .interact()?;
            Update::Badges(include)
        }
        _ if field.is_multiline() => {
            let text = prompt_multiline(theme, field, current.text(field).unwrap_or_default())?;
            Update::parse(field, &text)?
        }
        _ => {
            let text: String = Input::with_theme(theme)
                .with_prompt(field.label())
                .with_initial_text(current.display_value(field))
                .allow_empty(true)
                .interact_text()?;
            Update::parse(field, &text)?
        }
    };
    Ok(update)
}

/// Ends multi-line entry when typed alone on a line
const END_OF_TEXT: &str = ".";

/// Empties the field when typed as the first line
const CLEAR_FIELD: &str = ".clear";

fn prompt_multiline(theme: &ColorfulTheme, field: Field, current: &str) -> Result<String> {
    println!(
        "{} {}",
        style(field.label()).bold(),
        style("(`.` alone on a line finishes, `..` starts a line with a dot)").dim()
    );
    if current.is_empty() {
        for example in field.placeholder().lines() {
            println!("  {}", style(example).dim());
        }
    } else {
        println!("{}", style("  Current value (`.` keeps it, `.clear` empties it):").dim());
        for line in current.lines() {
            println!("  {}", style(line).dim());
        }
    }

    let lines = std::iter::from_fn(|| {
        Some(
            Input::<String>::with_theme(theme)
                .with_prompt(">")
                .allow_empty(true)
                .interact_text()
                .map_err(anyhow::Error::from),
        )
    });
    collect_multiline(current, lines)
}

/// Assemble a multi-line value from entered lines.
///
/// Blank lines are kept. `.` alone ends the entry and, before any other line,
/// keeps `current`. `.clear` as the first line empties the field. A line
/// starting with `..` stands for the same line starting with a single `.`.
fn collect_multiline<I>(current: &str, lines: I) -> Result<String>
where
    I: IntoIterator<Item = Result<String>>,
{
    let mut collected: Vec<String> = Vec::new();
    for line in lines {
        let line = line?;
        if line == END_OF_TEXT {
            if collected.is_empty() {
                return Ok(current.to_string());
            }
            break;
        }
        if collected.is_empty() && line == CLEAR_FIELD {
            return Ok(String::new());
        }
        let line = match line.strip_prefix("..") {
            Some(rest) => format!(".{rest}"),
            None => line,
        };
        collected.push(line);
    }
    Ok(collected.join("\n"))
}
