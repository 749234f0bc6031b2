//! Tracing setup for the todos backend: one JSON line per event on stdout,
//! filtered through `RUST_LOG` when set.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is absent. The persistence stack logs every
/// statement at info, which drowns the request lines; keep it at warn.
const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Request context (method, path, trace id) is carried as fields by the
    // logging middleware, so the emitter location adds nothing.
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
