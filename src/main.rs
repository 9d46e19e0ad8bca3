use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pixelc::{
    ast::statements::Program,
    compiler::{compiler::compile, config::CompilerOptions},
    display_error,
};

/// Lowers a typed pixel program to host source
#[derive(Parser, Debug)]
#[command(name = "pixelc")]
#[command(author, version, about = "Lower typed image programs to Java source")]
struct Cli {
    /// Typed program as JSON, stdin when omitted
    input: Option<PathBuf>,

    /// Output file, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with compiler options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Package clause of the emitted unit
    #[arg(long)]
    package: Option<String>,

    /// Emit the unit into the default package
    #[arg(long, conflicts_with = "package")]
    no_package: bool,

    /// Package the runtime classes are imported from
    #[arg(long)]
    runtime_package: Option<String>,

    /// Name of the static entry method
    #[arg(long)]
    entry_point: Option<String>,

    /// Bound on block and expression nesting
    #[arg(long)]
    max_depth: Option<usize>,

    /// Skip re-indentation
    #[arg(long)]
    no_pretty: bool,

    /// Write the declaration table as JSON to this file
    #[arg(long)]
    emit_declarations: Option<PathBuf>,
}

fn load_options(cli: &Cli) -> Result<CompilerOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            CompilerOptions::from_toml_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => CompilerOptions::default(),
    };

    if let Some(package) = &cli.package {
        options.package = Some(package.clone());
    }
    if cli.no_package {
        options.package = None;
    }
    if let Some(runtime_package) = &cli.runtime_package {
        options.runtime_package = runtime_package.clone();
    }
    if let Some(entry_point) = &cli.entry_point {
        options.entry_point = entry_point.clone();
    }
    if let Some(max_depth) = cli.max_depth {
        options.max_nesting_depth = max_depth;
    }
    if cli.no_pretty {
        options.pretty = false;
    }

    Ok(options)
}

/// Returns the display name of the input and its contents.
fn read_input(input: Option<&Path>) -> Result<(String, String)> {
    match input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok((String::from("stdin"), text))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let options = load_options(&cli)?;

    let (input_name, text) = read_input(cli.input.as_deref())?;
    let program: Program = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a typed program", input_name))?;

    let start = Instant::now();
    let compilation = match compile(&program, options) {
        Ok(compilation) => compilation,
        Err(error) => {
            display_error(&error, &input_name);
            process::exit(1);
        }
    };
    info!("lowered `{}` in {:?}", compilation.class_name, start.elapsed());

    match &cli.output {
        Some(path) => fs::write(path, &compilation.source)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", compilation.source),
    }

    if let Some(path) = &cli.emit_declarations {
        let table = serde_json::to_string_pretty(&compilation.declarations)?;
        fs::write(path, table).with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
