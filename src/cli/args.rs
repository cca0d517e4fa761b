use clap::Parser;
use std::env;

use crate::cli::command::Command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Keep a local quote collection and reconcile it with a remote quote source",
    long_about = "Stores quotes in a local SQLite key-value store, serves random quotes by category, and periodically merges quotes from a remote JSON endpoint (add if not present). Runs as a daemon with a REST API when no command is given.",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    #[arg(
        long,
        env = "QUOTESYNC_DATA_DIR",
        default_value = ".quotesync/",
        value_name = "DIR",
        help = "Directory to store persistent data"
    )]
    pub data_dir: String,

    #[arg(
        long,
        default_value_t = false,
        help = "Reset all persisted state (delete the SQLite database) before starting"
    )]
    pub reset: bool,

    #[arg(
        long,
        env = "QUOTESYNC_REMOTE_URL",
        default_value = "https://jsonplaceholder.typicode.com/posts",
        value_name = "URL",
        help = "Remote endpoint to fetch quotes from"
    )]
    pub remote_url: url::Url,

    #[arg(
        long,
        env = "QUOTESYNC_PUSH_URL",
        value_name = "URL",
        help = "Remote endpoint to push the local quotes to (defaults to --remote-url)"
    )]
    pub push_url: Option<url::Url>,

    #[arg(
        long = "sync-interval",
        env = "QUOTESYNC_SYNC_INTERVAL",
        default_value_t = 30u64,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds between periodic syncs"
    )]
    pub sync_interval: u64,

    #[arg(
        long = "http-timeout",
        env = "QUOTESYNC_HTTP_TIMEOUT",
        default_value_t = 10u64,
        value_name = "SECS",
        help = "Timeout for each remote request"
    )]
    pub http_timeout: u64,

    #[arg(
        long = "log-file",
        env = "QUOTESYNC_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[arg(
        long = "api-listen",
        env = "QUOTESYNC_API_LISTEN",
        value_name = "ADDR",
        default_value = "127.0.0.1:8083",
        help = "REST API listen address (host:port)"
    )]
    pub api_listen: std::net::SocketAddr,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();

    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_arguments() {
        let cli = Cli::try_parse_from(["quotesync"]).unwrap();
        assert_eq!(cli.data_dir, ".quotesync/");
        assert_eq!(cli.sync_interval, 30);
        assert_eq!(cli.http_timeout, 10);
        assert_eq!(
            cli.remote_url.as_str(),
            "https://jsonplaceholder.typicode.com/posts"
        );
        assert!(cli.push_url.is_none());
        assert!(cli.cmd.is_none());
    }

    #[test]
    fn add_command_parses_text_and_category() {
        let cli = Cli::try_parse_from([
            "quotesync",
            "add",
            "--text",
            "Be yourself",
            "--category",
            "Life",
        ])
        .unwrap();
        match cli.cmd {
            Some(Command::Add { text, category }) => {
                assert_eq!(text, "Be yourself");
                assert_eq!(category, "Life");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn zero_sync_interval_is_rejected() {
        assert!(Cli::try_parse_from(["quotesync", "--sync-interval", "0"]).is_err());
    }

    #[test]
    fn invalid_remote_url_is_rejected() {
        assert!(Cli::try_parse_from(["quotesync", "--remote-url", "not a url"]).is_err());
    }
}
