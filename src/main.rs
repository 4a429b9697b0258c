use std::io;

use clap::{Parser, Subcommand};

use cgi_scripts::cgi::{read_body, InputSource};
use cgi_scripts::config::{self, Config};
use cgi_scripts::handler::{self, Script};
use cgi_scripts::{logger, server};

#[derive(Parser)]
#[command(
    name = "cgi-scripts",
    about = "CGI-style calculator, greeting and temperature scripts",
    version
)]
struct Cli {
    /// Config file path (extension optional)
    #[arg(short, long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Arithmetic on num1 and num2 (query-string fragments as arguments)
    Calculadora {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        fragments: Vec<String>,
    },
    /// Greet the `nombre` parameter (query-string fragments as arguments)
    Hola {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        fragments: Vec<String>,
    },
    /// Convert a Celsius temperature read from standard input
    ConvertirTemp,
    /// Serve the scripts over HTTP for local development
    Serve,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (script, fragments) = match cli.command {
        Commands::Serve => return run_server(&cli.config),
        Commands::Calculadora { fragments } => (Script::Calculadora, Some(fragments)),
        Commands::Hola { fragments } => (Script::Hola, Some(fragments)),
        Commands::ConvertirTemp => (Script::ConvertirTemp, None),
    };

    run_script(&cli.config, script, fragments);
    Ok(())
}

/// Single-shot CGI run; always exits successfully
fn run_script(config_path: &str, script: Script, fragments: Option<Vec<String>>) {
    let cfg = load_config_lenient(config_path);
    if let Err(e) = logger::init(&cfg) {
        logger::log_warning(&format!("Logging to stderr: {e}"));
    }

    let input = match fragments {
        Some(fragments) => InputSource::Arguments(fragments),
        None => match read_body(io::stdin().lock()) {
            Ok(body) => InputSource::Body(body),
            Err(e) => {
                logger::log_error(&format!("Failed to read request body: {e}"));
                InputSource::Body(String::new())
            }
        },
    };

    let output = handler::handle(script, &input, &cfg.scripts);
    if let Err(e) = output.emit(&mut io::stdout().lock()) {
        logger::log_error(&format!("Failed to write response: {e}"));
    }
}

/// Config for script mode: a broken config must not break the response
fn load_config_lenient(config_path: &str) -> Config {
    Config::load_from(config_path).unwrap_or_else(|e| {
        logger::log_warning(&format!("Ignoring configuration ({e}), using defaults"));
        Config::default()
    })
}

fn run_server(config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_from(config_path)?;
    logger::init(&cfg)?;

    // Create Tokio runtime, sizing worker threads from config
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(server::serve(cfg))
}
