mod args;
mod commands;

use crate::args::{Cli, Command, RoutesAction};
use anyhow::Context;
use clap::Parser;
use orbit::kernel::config::load_console_config;
use orbit_logger::{LevelFilter, Logger};
use std::io::Write;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cfg = load_console_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        cfg.log.level.parse().with_context(|| format!("invalid log level '{}'", cfg.log.level))?
    };
    let mut logger = Logger::builder(env!("CARGO_PKG_NAME")).level(level);
    if let Some(path) = &cfg.log.path {
        logger = logger.path(path).json(cfg.log.json);
    }
    let _log = logger.init()?;

    let (console, writer) = orbit::bootstrap(&cfg)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Command::Routes { action } => match action {
            RoutesAction::List { module } => commands::list_routes(&console, module, &mut out)?,
            RoutesAction::Check {} => {
                if !commands::check_routes(&console, &mut out)? {
                    out.flush()?;
                    return Ok(ExitCode::FAILURE);
                }
            }
            RoutesAction::Url { route, params, query } => {
                commands::route_url(&console, &route, params, query, &mut out)?;
            }
        },
        Command::Render { path } => commands::render(&console, &writer, &path, &mut out)?,
        Command::Landing { module } => commands::landing(&console, module, &mut out)?,
        Command::Modules {} => commands::modules(&console, &mut out)?,
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
