//! Schemagen CLI - resolve schema snapshots for code generation
//!
//! Usage:
//!   schemagen resolve --schema <schema.json> [--config <schemagen.toml>] [--output <file>]
//!   schemagen inflect <plural|singular> <word> [--config <schemagen.toml>]
//!   schemagen check --schema <schema.json> [--config <schemagen.toml>]
//!
//! Examples:
//!   schemagen resolve --schema db.json --config schemagen.toml --output resolved.json
//!   schemagen inflect plural category
//!   RUST_LOG=debug schemagen check --schema db.json

use clap::{Parser, Subcommand, ValueEnum};
use schemagen::config::GeneratorConfig;
use schemagen::driver::SnapshotDriver;
use schemagen::pipeline::Pipeline;
use schemagen::render::{JsonRenderer, Renderer, TemplateSource};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schemagen")]
#[command(about = "Schemagen - resolve database schemas into code generation models")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a schema snapshot and write the model as JSON
    Resolve {
        /// Path to the schema snapshot (JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Generator configuration (defaults to $SCHEMAGEN_CONFIG or ./schemagen.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Template files passed through to the renderer
        #[arg(short, long = "template")]
        templates: Vec<PathBuf>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show the plural or singular form of a word
    Inflect {
        form: Form,

        word: String,

        /// Generator configuration providing inflection overrides
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate configuration against a schema without rendering
    Check {
        /// Path to the schema snapshot (JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Generator configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, ValueEnum)]
enum Form {
    Plural,
    Singular,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            schema,
            config,
            output,
            templates,
            compact,
        } => cmd_resolve(&schema, config.as_deref(), output, templates, compact),
        Commands::Inflect { form, word, config } => cmd_inflect(form, &word, config.as_deref()),
        Commands::Check { schema, config } => cmd_check(&schema, config.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Option<GeneratorConfig> {
    let result = match path {
        Some(path) => GeneratorConfig::from_file(path),
        None => GeneratorConfig::load(),
    };

    match result {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            None
        }
    }
}

fn load_driver(schema: &Path) -> Option<SnapshotDriver> {
    match SnapshotDriver::from_path(schema) {
        Ok(driver) => Some(driver),
        Err(e) => {
            eprintln!("Error reading schema '{}': {}", schema.display(), e);
            None
        }
    }
}

fn cmd_resolve(
    schema: &Path,
    config: Option<&Path>,
    output: Option<PathBuf>,
    templates: Vec<PathBuf>,
    compact: bool,
) -> ExitCode {
    let Some(config) = load_config(config) else {
        return ExitCode::FAILURE;
    };
    let Some(driver) = load_driver(schema) else {
        return ExitCode::FAILURE;
    };

    let writer: Box<dyn Write> = match &output {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(e) => {
                eprintln!("Error creating '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(io::stdout().lock()),
    };

    let mut renderer = JsonRenderer::new(writer);
    if compact {
        renderer = renderer.compact();
    }

    let pipeline = Pipeline::new(config)
        .with_templates(templates.into_iter().map(TemplateSource::Path).collect());

    match pipeline.run(&driver, &mut renderer) {
        Ok(summary) => {
            if let Some(path) = &output {
                eprintln!(
                    "Wrote {} tables to {} ({})",
                    summary.tables,
                    path.display(),
                    &summary.fingerprint[..12]
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Generation failed {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_inflect(form: Form, word: &str, config: Option<&Path>) -> ExitCode {
    let config = match config {
        Some(_) => match load_config(config) {
            Some(config) => config,
            None => return ExitCode::FAILURE,
        },
        None => GeneratorConfig::default(),
    };

    let inflector = match config.inflector() {
        Ok(inflector) => inflector,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match form {
        Form::Plural => inflector.plural(word),
        Form::Singular => inflector.singular(word),
    };
    println!("{}", result);
    ExitCode::SUCCESS
}

fn cmd_check(schema: &Path, config: Option<&Path>) -> ExitCode {
    let Some(config) = load_config(config) else {
        return ExitCode::FAILURE;
    };
    let Some(driver) = load_driver(schema) else {
        return ExitCode::FAILURE;
    };

    let mut sink = NullRenderer;
    match Pipeline::new(config).run(&driver, &mut sink) {
        Ok(summary) => {
            println!("OK: {} is valid", schema.display());
            println!("  tables:        {}", summary.tables);
            println!("  columns:       {}", summary.columns);
            println!("  replacements:  {} matches", summary.replacements.matches);
            println!(
                "  relationships: {} derived, {} explicit, {} synthesized",
                summary.relationships.derived,
                summary.relationships.explicit,
                summary.relationships.synthesized
            );
            println!("  fingerprint:   {}", summary.fingerprint);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Validation failed {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Discards the finalized model.
struct NullRenderer;

impl Renderer for NullRenderer {
    fn name(&self) -> &str {
        "none"
    }

    fn render(&mut self, _input: schemagen::render::RenderInput) -> schemagen::render::RenderResult<()> {
        Ok(())
    }
}
