//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use orbit::domain::module::ModuleName;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "orbit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect the console's composed modules, routes and pages")]
pub(crate) struct Cli {
    /// Configuration file (TOML, YAML or JSON); `ORBIT__*` variables override it
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Inspect the aggregated route table
    Routes {
        #[command(subcommand)]
        action: RoutesAction,
    },
    /// Render the page matching a concrete path (query string allowed)
    Render { path: String },
    /// Render a module's landing dashboard
    Landing { module: ModuleName },
    /// List module switcher entries
    Modules {},
}

#[derive(Debug, Subcommand)]
pub(crate) enum RoutesAction {
    /// Print name, page id, path and title of every route
    List {
        /// Only routes owned by this module
        #[arg(short, long)]
        module: Option<ModuleName>,
    },
    /// Fail with exit code 1 if two routes share a path or a page id
    Check {},
    /// Build a concrete URL for a route
    Url {
        route: String,
        /// Path parameter, `name=value`
        #[arg(short, long = "param", value_parser = parse_pair)]
        params: Vec<(String, String)>,
        /// Query parameter, `name=value`
        #[arg(short, long = "query", value_parser = parse_pair)]
        query: Vec<(String, String)>,
    },
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs() {
        assert_eq!(parse_pair("accountId=acc"), Ok(("accountId".to_owned(), "acc".to_owned())));
        assert_eq!(parse_pair("q=a=b"), Ok(("q".to_owned(), "a=b".to_owned())));
        assert!(parse_pair("novalue").is_err());
        assert!(parse_pair("=x").is_err());
    }

    #[test]
    fn parses_url_command() {
        let cli = Cli::try_parse_from([
            "orbit", "-v", "routes", "url", "cd-home", "-p", "accountId=acc", "-q", "tab=all",
        ])
        .expect("valid args");
        assert!(cli.verbose);
        let Command::Routes { action: RoutesAction::Url { route, params, query } } = cli.command else {
            panic!("expected routes url");
        };
        assert_eq!(route, "cd-home");
        assert_eq!(params, vec![("accountId".to_owned(), "acc".to_owned())]);
        assert_eq!(query, vec![("tab".to_owned(), "all".to_owned())]);
    }

    #[test]
    fn module_names_are_case_insensitive() {
        let cli = Cli::try_parse_from(["orbit", "landing", "cd"]).expect("valid args");
        assert!(matches!(cli.command, Command::Landing { module: ModuleName::Cd }));
    }
}
