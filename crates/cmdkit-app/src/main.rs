//! cmdkit demo entry point.
//!
//! Every command-line argument after the program name is dispatched as a
//! command: `cmdkit add-two-values 13 15 version help`. Set `CMDKIT_CONFIG`
//! to a TOML file to override the application info, enable
//! `halt_on_unrecognized`, or request a JSON run report on stderr.

mod commands;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use cmdkit_dispatch::{CommandRegistry, Processor, ProcessorConfig};
use cmdkit_types::{DispatchConfig, ReportFormat};

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let config = load_config()?;
    let registry = CommandRegistry::with_registrars(config.info(), commands::REGISTRARS);
    let processor = Processor::new(ProcessorConfig {
        halt_on_unrecognized: config.halt_on_unrecognized,
    });

    let args: Vec<String> = std::env::args().collect();
    log::info!(
        "Processing {} argument(s) against {} commands",
        args.len().saturating_sub(1),
        registry.len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = processor.run(&registry, &args, &mut out);
    let _ = out.flush();

    if config.report == ReportFormat::Json {
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    }

    log::info!("Finished with exit code {}", report.exit_code);
    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Read `CMDKIT_CONFIG` if set, filling in the package name and version
/// where the file leaves them blank.
fn load_config() -> Result<DispatchConfig> {
    let mut config = match std::env::var_os("CMDKIT_CONFIG") {
        Some(path) => {
            let path = Path::new(&path);
            DispatchConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?
        },
        None => DispatchConfig::default(),
    };
    if config.app_name.is_empty() {
        config.app_name = env!("CARGO_BIN_NAME").to_string();
    }
    if config.version.is_empty() {
        config.version = env!("CARGO_PKG_VERSION").to_string();
    }
    Ok(config)
}
