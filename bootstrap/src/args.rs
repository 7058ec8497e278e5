use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// JSON file mapping role ids to the members that should receive them
    #[arg(long, env = "ROLE_DATA_PATH", default_value = "./role_user.json")]
    pub role_data_path: PathBuf,
    /// File that JSON log lines are appended to, next to stdout
    #[arg(long, env = "LOG_FILE", default_value = "bot.log")]
    pub log_file: PathBuf,
    #[arg(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
    #[arg(long, env = "SENTRY_ENVIRONMENT")]
    pub sentry_environment: Option<String>,
    /// Parsed when Sentry starts; an invalid value disables Sentry instead of aborting startup
    #[arg(long, env = "SENTRY_SAMPLE_RATE")]
    pub sentry_sample_rate: Option<String>,
    #[arg(long, env = "SENTRY_TRACES_SAMPLE_RATE")]
    pub sentry_traces_sample_rate: Option<String>,
}
