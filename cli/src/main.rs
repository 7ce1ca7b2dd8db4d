//! phpgen CLI - renders the demo PHP programs

mod demo;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use phpgen::{Document, IndentStyle, NamespaceName, RenderOptions};

#[derive(Parser)]
#[command(name = "phpgen")]
#[command(author = "phpgen contributors")]
#[command(version)]
#[command(about = "Render PHP source files built with phpgen", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the feature tour
    Example {
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render the class demo
    Class {
        /// Namespace of the generated file
        #[arg(short, long, default_value = "Example\\Demo")]
        namespace: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct RenderArgs {
    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Render options as JSON
    #[arg(short, long, value_name = "FILE", env = "PHPGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Indent with tabs
    #[arg(long, conflicts_with = "indent")]
    tabs: bool,

    /// Spaces per indentation level
    #[arg(long, value_name = "N")]
    indent: Option<u8>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Example { render } => cmd_example(&render),
        Commands::Class { namespace, render } => cmd_class(&namespace, &render),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_example(args: &RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = Document::new()
        .with_namespace(NamespaceName::new("Example\\Demo")?)
        .with_options(build_options(args)?);

    let lines = demo::feature_tour(&document)?;
    write_output(&document.render_file(lines), args.output.as_deref())
}

fn cmd_class(namespace: &str, args: &RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = Document::new()
        .with_namespace(NamespaceName::new(namespace)?)
        .with_options(build_options(args)?);

    let lines = demo::class_demo(&document)?;
    write_output(&document.render_file(lines), args.output.as_deref())
}

fn cmd_version() {
    println!("{} {}", "phpgen".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Composable PHP source generation");
}

/// Load options from the config file, then apply command-line overrides.
fn build_options(args: &RenderArgs) -> Result<RenderOptions, Box<dyn std::error::Error>> {
    let mut options = match &args.config {
        Some(path) => {
            log::debug!("loading render options from {}", path.display());
            RenderOptions::from_json(&fs::read_to_string(path)?)?
        }
        None => RenderOptions::default(),
    };

    if args.tabs {
        options = options.with_indent(IndentStyle::Tabs);
    } else if let Some(width) = args.indent {
        options = options.with_indent(IndentStyle::Spaces(width));
    }

    Ok(options)
}

fn write_output(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("{} {}", "Saved to".green(), path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
