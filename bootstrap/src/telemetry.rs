use crate::args::CommonArgs;
use sentry::types::Dsn;
use sentry::ClientInitGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Sentry is only enabled when a DSN is
/// configured; the returned guard must live until the process exits.
pub fn init(common_args: &CommonArgs) -> anyhow::Result<Option<ClientInitGuard>> {
    let sentry_guard = match &common_args.sentry_dsn {
        Some(dsn) => Some(sentry::init(sentry::ClientOptions {
            dsn: Some(dsn.parse::<Dsn>()?),
            release: sentry::release_name!(),
            environment: common_args.sentry_environment.clone().map(Into::into),
            sample_rate: common_args.sentry_sample_rate.unwrap_or(1.0),
            traces_sample_rate: common_args.sentry_traces_sample_rate.unwrap_or(0.0),
            ..Default::default()
        })),
        None => None,
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(sentry_guard.as_ref().map(|_| sentry_tracing::layer()))
        .init();

    Ok(sentry_guard)
}
