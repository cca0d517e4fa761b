use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Runtime settings resolved from the CLI and environment.
#[derive(Clone, Debug)]
pub struct Context {
    pub data_dir: PathBuf,
    pub reset: bool,
    pub remote_url: Url,
    pub push_url: Url,
    pub sync_interval: Duration,
    pub http_timeout: Duration,
    pub log_file: Option<PathBuf>,
    pub api_listen: SocketAddr,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        Self {
            data_dir: PathBuf::from(&cli.data_dir),
            reset: cli.reset,
            remote_url: cli.remote_url.clone(),
            push_url: cli
                .push_url
                .clone()
                .unwrap_or_else(|| cli.remote_url.clone()),
            sync_interval: Duration::from_secs(cli.sync_interval),
            http_timeout: Duration::from_secs(cli.http_timeout),
            log_file: cli.log_file.as_ref().map(PathBuf::from),
            api_listen: cli.api_listen,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("quotes.sqlite")
    }
}
