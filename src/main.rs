use clap::{ArgGroup, Parser};
use cryptovault::core::catalog::Catalog;
use cryptovault::core::config::{self, ResolvedConfig};
use cryptovault::{report, tui};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cryptovault", about = "Reference viewer for modern encryption algorithms")]
#[command(group(ArgGroup::new("mode").args(["list", "show"])))]
struct Args {
    /// Algorithm to open with (e.g. "aes")
    #[arg(short, long, value_name = "KEY")]
    select: Option<String>,

    /// Print the catalog keys and exit
    #[arg(long)]
    list: bool,

    /// Print one entry and exit
    #[arg(long, value_name = "KEY")]
    show: Option<String>,

    /// Print --list/--show output as JSON
    #[arg(long, requires = "mode")]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Resolve first: the logger's level and file come from config
    let (file_config, config_error) = config::or_defaults(config::load_config());
    let config = config::resolve(&file_config, args.select.as_deref());
    init_logger(&config);

    log::info!("CryptoVault starting up");
    if let Some(e) = config_error {
        log::warn!("{e}; using defaults");
    }

    match run(&args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("cryptovault: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: ResolvedConfig) -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::builtin();
    let out = if args.list {
        report::list(catalog, args.json)?
    } else if let Some(key) = args.show.as_deref() {
        report::show(catalog, key, args.json)?
    } else {
        return Ok(tui::run(config)?);
    };
    std::io::stdout().write_all(out.as_bytes())?;
    Ok(())
}

/// File logger: the terminal belongs to the TUI.
fn init_logger(config: &ResolvedConfig) {
    let level = config
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}
