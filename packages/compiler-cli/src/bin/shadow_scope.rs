/**
 * shadow-scope
 *
 * Rewrites component stylesheets so their selectors and keyframes are
 * scoped to one component.
 */
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use shadow_scope_cli::compiler::selector::tokenize;
use shadow_scope_cli::compiler::ScopeOptions;
use shadow_scope_cli::config::resolve_options;
use shadow_scope_cli::perform_compile::{
    compile_files, compile_source, expand_inputs, write_outputs,
};
use shadow_scope_cli::version::VERSION;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shadow-scope", version = VERSION, about = "Component-scoped CSS")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scope stylesheets (reads stdin when no files are given)
    Scope(ScopeArgs),
    /// Print the fragments of a selector as JSON
    Tokenize {
        selector: String,
    },
}

#[derive(Args)]
struct ScopeArgs {
    /// Files or glob patterns
    inputs: Vec<String>,

    /// Scope identifier
    #[arg(short, long)]
    scope: Option<String>,

    /// Component name, substituted for `:host`
    #[arg(short, long)]
    component: Option<String>,

    /// Element token template, e.g. "[data-{scope}]"
    #[arg(long, value_name = "TEMPLATE")]
    element_token: Option<String>,

    /// Host token template, e.g. "[{scope}-host]"
    #[arg(long, value_name = "TEMPLATE")]
    host_token: Option<String>,

    /// JSON options file; flags override its values
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Scope every compound part, not only the first and last
    #[arg(long)]
    all_parts: bool,

    /// Write each stylesheet to DIR instead of stdout
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
}

impl ScopeArgs {
    fn overrides(&self) -> ScopeOptions {
        ScopeOptions {
            scope: self.scope.clone(),
            component: self.component.clone(),
            element_token: self.element_token.clone(),
            host_token: self.host_token.clone(),
            scope_all_parts: self.all_parts,
        }
    }
}

fn main() {
    // stdout carries the CSS, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scope(args) => run_scope(args),
        Commands::Tokenize { selector } => run_tokenize(&selector),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run_scope(args: ScopeArgs) -> anyhow::Result<()> {
    let options = resolve_options(args.options.as_deref(), args.overrides())?;

    let outputs = if args.inputs.is_empty() {
        let mut css = String::new();
        io::stdin()
            .read_to_string(&mut css)
            .context("failed to read stdin")?;
        vec![compile_source(&css, &options)?]
    } else {
        let files = expand_inputs(&args.inputs)?;
        compile_files(&files, &options)?
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_outputs(&outputs, args.out_dir.as_deref(), &mut out)?;
    out.flush()?;
    Ok(())
}

fn run_tokenize(selector: &str) -> anyhow::Result<()> {
    let fragments = tokenize(selector);
    println!("{}", serde_json::to_string_pretty(&fragments)?);
    Ok(())
}
