use clap::{Parser, Subcommand};
use pn_algorithms::AlgorithmKind;
use pn_settings::{Mapping, SettingsError, SettingsView, Value};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pn-cli")]
#[command(about = "porenet CLI - inspect and check simulation settings files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a settings file as a table
    Show {
        /// Path to a YAML or JSON settings file
        path: PathBuf,
        /// Override an option (repeatable), e.g. --set newton_maxiter=200
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_override)]
        overrides: Vec<(String, Value)>,
    },
    /// Print the description and defaults of a built-in schema
    Schema {
        /// Schema name (algorithm, transport, stokes_flow, fickian_diffusion, reactive_transport)
        kind: AlgorithmKind,
    },
    /// Apply a settings file onto a built-in schema and report type errors
    Check {
        /// Schema name
        kind: AlgorithmKind,
        /// Path to a YAML or JSON settings file
        path: PathBuf,
        /// Override an option after the file is applied (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_override)]
        overrides: Vec<(String, Value)>,
    },
}

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Invalid override '{raw}': {reason}")]
    Override { raw: String, reason: String },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { path, overrides } => cmd_show(&path, overrides),
        Commands::Schema { kind } => cmd_schema(kind),
        Commands::Check {
            kind,
            path,
            overrides,
        } => cmd_check(kind, &path, overrides),
    }
}

fn cmd_show(path: &Path, overrides: Vec<(String, Value)>) -> CliResult<()> {
    let view = show_settings(path, overrides)?;
    println!("{}", view);
    Ok(())
}

fn cmd_schema(kind: AlgorithmKind) -> CliResult<()> {
    let view = kind.settings()?;
    println!("{}\n", kind);
    println!("{}\n", view.doc());
    println!("{}", view);
    Ok(())
}

fn cmd_check(kind: AlgorithmKind, path: &Path, overrides: Vec<(String, Value)>) -> CliResult<()> {
    println!("Checking {} against {}", path.display(), kind);
    let (view, unknown) = check_settings(kind, path, overrides)?;
    println!("✓ Settings are valid");
    if !unknown.is_empty() {
        println!("  Added options not in schema: {}", unknown.join(", "));
    }
    println!("{}", view);
    Ok(())
}

/// Load a settings file and apply `--set` overrides on top of it.
fn show_settings(path: &Path, overrides: Vec<(String, Value)>) -> CliResult<SettingsView> {
    let mapping = load_settings(path)?;
    Ok(SettingsView::from_mapping(mapping)?.with_overrides(overrides)?)
}

/// Apply a settings file and overrides onto a schema.
///
/// Returns the resulting view and the names the schema does not declare.
fn check_settings(
    kind: AlgorithmKind,
    path: &Path,
    overrides: Vec<(String, Value)>,
) -> CliResult<(SettingsView, Vec<String>)> {
    let view = kind.settings()?;
    let mapping = load_settings(path)?;

    let unknown: Vec<String> = mapping
        .iter()
        .map(|(name, _)| name.clone())
        .filter(|name| !view.contains(name))
        .collect();
    for name in &unknown {
        tracing::warn!(option = %name, schema = %kind, "option not declared by schema");
    }

    view.merge(mapping)?;
    view.merge(overrides)?;
    Ok((view, unknown))
}

fn load_settings(path: &Path) -> CliResult<Mapping> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let mapping = if is_json {
        pn_settings::load_json(path)?
    } else {
        pn_settings::load_yaml(path)?
    };
    Ok(mapping)
}

/// Parse `NAME=VALUE`; the value is read as a YAML scalar or sequence.
fn parse_override(raw: &str) -> CliResult<(String, Value)> {
    let Some((name, value)) = raw.split_once('=') else {
        return Err(CliError::Override {
            raw: raw.to_string(),
            reason: "expected NAME=VALUE".to_string(),
        });
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::Override {
            raw: raw.to_string(),
            reason: "empty option name".to_string(),
        });
    }
    let value = if value.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str::<Value>(value).map_err(|e| CliError::Override {
            raw: raw.to_string(),
            reason: e.to_string(),
        })?
    };
    Ok((name.to_string(), value))
}
