#![forbid(unsafe_code)]
//! readmegen Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use readmegen::commands::{
    execute_init, execute_licenses, execute_new, execute_render, InitOptions, NewOptions,
    RenderOptions,
};
use readmegen::config::CONFIG_FILE_NAME;
use readmegen::metadata::license::parse_optional as parse_license;
use readmegen::{Config, Update};

#[derive(Parser)]
#[command(name = "readmegen")]
#[command(about = "Generate a project README from a short form")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the README form interactively
    New {
        /// Directory the README.md is downloaded into
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing README.md without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Render a README without prompts
    Render {
        /// Metadata file to start from (JSON, or YAML by .yaml/.yml extension)
        #[arg(long)]
        from: Option<PathBuf>,

        /// Project title
        #[arg(long)]
        title: Option<String>,

        /// Project description
        #[arg(long)]
        description: Option<String>,

        /// Tech stack
        #[arg(long)]
        tech_stack: Option<String>,

        /// Features
        #[arg(long)]
        features: Option<String>,

        /// Installation commands
        #[arg(long)]
        installation: Option<String>,

        /// Usage commands
        #[arg(long)]
        usage: Option<String>,

        /// Contributing notes
        #[arg(long)]
        contributing: Option<String>,

        /// License id (MIT, Apache-2.0, GPL-3.0, BSD-3-Clause, ISC); empty for none
        #[arg(long)]
        license: Option<String>,

        /// Author
        #[arg(long)]
        author: Option<String>,

        /// Leave out the license badge
        #[arg(long)]
        no_badges: bool,

        /// Set any field as FIELD=VALUE (repeatable; `\n` is a newline, `\\n` a literal `\n`)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Save to the configured output path
        #[arg(long, conflicts_with = "output")]
        save: bool,

        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,

        /// Copy the README to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Write a config file with form defaults
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Default author
        #[arg(long)]
        author: Option<String>,

        /// Default license id; empty for none
        #[arg(long)]
        license: Option<String>,

        /// Turn badges off by default
        #[arg(long)]
        no_badges: bool,

        /// Skip interactive prompts (use defaults + CLI args)
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List supported licenses
    Licenses {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::New { dir, force } => {
            let config = Config::discover(&cli.config)?;
            execute_new(NewOptions { dir, force }, &config)?;
        }

        Commands::Render {
            from,
            title,
            description,
            tech_stack,
            features,
            installation,
            usage,
            contributing,
            license,
            author,
            no_badges,
            set,
            output,
            save,
            force,
            copy,
        } => {
            let config = Config::discover(&cli.config)?;

            // Explicit flags first, then --set pairs in order
            let mut updates: Vec<Update> = [
                title.map(Update::Title),
                description.map(Update::Description),
                tech_stack.map(Update::TechStack),
                features.map(Update::Features),
                installation.map(Update::Installation),
                usage.map(Update::Usage),
                contributing.map(Update::Contributing),
                author.map(Update::Author),
            ]
            .into_iter()
            .flatten()
            .collect();

            if let Some(raw) = license {
                updates.push(Update::License(parse_license(&raw)?));
            }
            if no_badges {
                updates.push(Update::Badges(false));
            }
            for assignment in &set {
                updates.push(Update::parse_assignment(assignment)?);
            }

            let options = RenderOptions {
                from,
                updates,
                output,
                save,
                force,
                copy,
            };
            execute_render(options, &config)?;
        }

        Commands::Init { force, author, license, no_badges, yes } => {
            let license = license
                .map(|raw| parse_license(&raw))
                .transpose()?;
            let options = InitOptions {
                path: cli.config,
                force,
                author,
                license,
                no_badges,
                yes,
            };
            execute_init(options)?;
        }

        Commands::Licenses { json } => {
            execute_licenses(json)?;
        }
    }

    Ok(())
}
