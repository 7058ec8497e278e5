use crate::args::CommonArgs;
use anyhow::Context;
use sentry::types::Dsn;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Starts the Sentry client when a DSN is configured. The guard flushes pending events on drop.
pub fn init_sentry(common_args: &CommonArgs) -> anyhow::Result<Option<sentry::ClientInitGuard>> {
    let Some(dsn) = common_args.sentry_dsn.as_deref() else {
        return Ok(None);
    };
    let dsn = dsn.parse::<Dsn>().context("Invalid SENTRY_DSN")?;
    let sample_rate = parse_rate("SENTRY_SAMPLE_RATE", common_args.sentry_sample_rate.as_deref())?;
    let traces_sample_rate =
        parse_rate(
        "SENTRY_TRACES_SAMPLE_RATE",
        common_args.sentry_traces_sample_rate.as_deref(),
    )?;

    let guard = sentry::init(sentry::ClientOptions {
        dsn: Some(dsn),
        release: sentry::release_name!(),
        environment: common_args.sentry_environment.clone().map(Into::into),
        sample_rate: sample_rate.unwrap_or(1.0),
        traces_sample_rate: traces_sample_rate.unwrap_or(0.0),
        ..Default::default()
    });

    Ok(Some(guard))
}

fn parse_rate(name: &str, value: Option<&str>) -> anyhow::Result<Option<f32>> {
    value
        .map(|value| {
            value
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|rate| (0.0..=1.0).contains(rate))
                .with_context(|| format!("{name} must be a number between 0 and 1, got {value:?}"))
        })
        .transpose()
}

/// Installs JSON logging to stdout and, when it can be opened, to `log_file`.
///
/// Stdout logging is installed even when the log file cannot be opened; the open error is
/// still returned so the caller can report it.
pub fn setup_logging(log_file: &Path, with_sentry: bool) -> anyhow::Result<()> {
    let (file, file_error) = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => (Some(Arc::new(file)), None),
        Err(err) => (None, Some(err)),
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stdout);
    let file_layer = file.map(|file| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(file)
    });
    let sentry_layer = with_sentry.then(|| sentry_tracing::layer());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .with(sentry_layer)
        .try_init()
        .context("Cannot install the tracing subscriber")?;

    match file_error {
        Some(err) => {
            Err(err).with_context(|| format!("Cannot open log file {}", log_file.display()))
        }
        None => Ok(()),
    }
}
