use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};

use swag_core::CodeGenerator;
use swag_core::config::{self, CONFIG_FILE_NAME, SwagConfig};
use swag_core::ir::IrSpec;
use swag_core::parse;
use swag_core::transform::{self, TransformOptions};
use swag_csharp::CSharpGenerator;

#[derive(Parser)]
#[command(
    name = "swag-gen",
    about = "Generate C# data models from a Swagger 2.0 JSON schema",
    version
)]
struct Cli {
    /// Path to the Swagger JSON file; only the first input is used
    inputs: Vec<PathBuf>,

    /// The output for generated code (stdout when empty)
    #[arg(long, default_value = "")]
    output: String,

    /// Path to a YAML config file (defaults to ./.swag-gen.yaml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// C# namespace for the generated types
    #[arg(long)]
    namespace: Option<String>,

    /// Print the normalized schema instead of generating code
    #[arg(long)]
    inspect: Option<InspectFormat>,
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(input) = cli.inputs.first() else {
        println!("No input file found.\n");
        Cli::command().print_help()?;
        return Ok(());
    };
    if cli.inputs.len() > 1 {
        log::debug!("ignoring {} extra inputs", cli.inputs.len() - 1);
    }

    let mut cfg = resolve_config(cli.config.as_deref())?;
    if let Some(namespace) = cli.namespace {
        cfg.namespace = namespace;
    }

    let ir = load_spec(input, &cfg)?;

    if let Some(format) = cli.inspect {
        return cmd_inspect(&ir, format);
    }

    // Render fully before touching the destination.
    let code = CSharpGenerator::from_config(&cfg)
        .generate(&ir)
        .context("failed to render template")?;

    write_output(&cli.output, &code)
}

/// Load the explicit config file, or the default one from the current directory.
fn resolve_config(path: Option<&Path>) -> Result<SwagConfig> {
    match path {
        Some(path) => config::load_config(path)?
            .with_context(|| format!("config file {} not found", path.display())),
        None => Ok(config::load_config(Path::new(CONFIG_FILE_NAME))?.unwrap_or_default()),
    }
}

fn load_spec(path: &Path, cfg: &SwagConfig) -> Result<IrSpec> {
    let document = parse::load_file(path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let options = TransformOptions {
        ordering: cfg.ordering,
    };

    Ok(transform::transform_with_options(&document, &options))
}

/// Write generated code to stdout, or through a buffered writer to `output`.
fn write_output(output: &str, code: &str) -> Result<()> {
    if output.is_empty() {
        let mut stdout = io::stdout().lock();
        stdout.write_all(code.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let path = Path::new(output);
    let file = File::create(path)
        .with_context(|| format!("unable to create file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(code.as_bytes())
        .and_then(|()| writer.flush())
        .with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("  wrote {}", path.display());
    Ok(())
}

fn cmd_inspect(ir: &IrSpec, format: InspectFormat) -> Result<()> {
    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(ir)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(ir)?;
            println!("{}", json);
        }
    }

    Ok(())
}
