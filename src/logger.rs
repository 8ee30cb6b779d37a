use tracing_subscriber::prelude::*;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
};

const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the global subscriber. `RUST_LOG` overrides the default `info`
/// level.
pub fn init() {
    init_with_default(DEFAULT_DIRECTIVE);
}

/// Like [`init`], with `directive` used when `RUST_LOG` is unset or invalid.
/// At debug level, span close events report how long each filter stage took.
pub fn init_with_default(directive: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    let stage_events = stage_span_events(&env_filter);

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(stage_events);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn stage_span_events(filter: &EnvFilter) -> FmtSpan {
    let debug = filter.to_string().contains("debug")
        || std::env::var("RUST_LOG").unwrap_or_default().contains("debug");
    if debug { FmtSpan::CLOSE } else { FmtSpan::NONE }
}
