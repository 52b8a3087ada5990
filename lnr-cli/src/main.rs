// ABOUTME: Main entry point for the lnr ticket creator
// ABOUTME: Parses flags, sources the API credential once, and drives the session

use clap::Parser;
use owo_colors::OwoColorize;
use secrecy::SecretString;
use std::env;
use std::process::ExitCode;

use lnr_cli::cache::CacheStore;
use lnr_cli::config::Config;
use lnr_cli::session;
use lnr_sdk::LnrClient;

#[derive(Parser)]
#[command(name = "lnr")]
#[command(about = "Interactive form for creating Linear tickets", long_about = None)]
struct Cli {
    /// Clear cached reference data and exit
    #[arg(long)]
    clear_cache: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let cache = match CacheStore::open() {
        Ok(cache) => cache,
        Err(err) => {
            eprintln!("{} {err:#}", "✗".red());
            return ExitCode::FAILURE;
        }
    };

    // Clearing the cache needs no credential.
    if cli.clear_cache {
        return match cache.clear() {
            Ok(()) => {
                println!("{} Cache cleared", "✓".green());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{} {err:#}", "✗".red());
                ExitCode::FAILURE
            }
        };
    }

    let api_key = match env::var("LINEAR_API_KEY") {
        Ok(key) if !key.is_empty() => SecretString::new(key.into_boxed_str()),
        _ => {
            eprintln!("{} LINEAR_API_KEY environment variable not set", "✗".red());
            eprintln!();
            eprintln!("Set your Linear API key to create tickets:");
            eprintln!("  export LINEAR_API_KEY='lin_api_xxxxx'");
            eprintln!();
            eprintln!("Get your API key from: https://linear.app/settings/api");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(api_key, &cache).await {
        eprintln!("{} {err:#}", "✗".red());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(api_key: SecretString, cache: &CacheStore) -> anyhow::Result<()> {
    let config = Config::load()?;

    let client = LnrClient::builder()
        .auth_token(api_key)
        .base_url(config.api_url.clone())
        .build()?;

    session::run(&client, cache, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "lnr");

        let clear_arg = cli
            .get_arguments()
            .find(|arg| arg.get_id() == "clear_cache")
            .expect("clear-cache argument should exist");
        assert!(!clear_arg.is_required_set());
    }

    #[test]
    fn test_parse_clear_cache_flag() {
        let cli = Cli::try_parse_from(["lnr"]).unwrap();
        assert!(!cli.clear_cache);

        let cli = Cli::try_parse_from(["lnr", "--clear-cache"]).unwrap();
        assert!(cli.clear_cache);
    }
}
