//! Larder CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use larder_engine::GroceryCatalog;
use larder_runtime::Shell;
use larder_storage::FileStore;

/// Where the catalog is saved unless `--data` says otherwise.
const DEFAULT_DATA_FILE: &str = "larder.msgpack";

/// CLI configuration parsed from arguments.
struct CliConfig {
    data_file: PathBuf,
    log_filter: Option<String>,
    show_help: bool,
    show_version: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_filter: None,
            show_help: false,
            show_version: false,
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--data" => {
                i += 1;
                if i >= args.len() {
                    return Err("--data requires a path".into());
                }
                config.data_file = PathBuf::from(&args[i]);
            }
            "--log" => {
                i += 1;
                if i >= args.len() {
                    return Err("--log requires a filter (e.g. info, larder_engine=debug)".into());
                }
                config.log_filter = Some(args[i].clone());
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("larder {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Some(filter) = &config.log_filter {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .init();
    }

    // Load whatever was saved last time and wire the catalog back up.
    let store = FileStore::new(&config.data_file);
    let snapshot = store.load_or_default()?;
    let catalog = GroceryCatalog::from_parts(snapshot.groceries, snapshot.locations, store);

    let mut shell = Shell::new(catalog)?;
    shell.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mLarder\x1b[0m - Text-command household tracker

\x1b[1mUSAGE:\x1b[0m
    larder [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --data PATH        Catalog save file (default: {DEFAULT_DATA_FILE})
    --log FILTER       Enable logging to stderr (e.g. info, larder_engine=debug)

\x1b[1mMODES:\x1b[0m
    grocery            Track groceries (default)
    calories           Track calorie intake
    profile            Manage your profile

Type 'help' inside the shell for the active mode's commands."
    );
}
