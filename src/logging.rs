// src/logging.rs
//! Process-wide tracing + metrics descriptions. Both are set up at most once,
//! no matter how many loaders or sections call in.

use metrics::{describe_counter, describe_histogram};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "portfolio_cms=info,warn";

/// Install the fmt subscriber. Returns `true` only for the call that installed it.
///
/// Honors `RUST_LOG`; set `CMS_LOG_JSON=1` for JSON lines instead of the compact format.
pub fn init() -> bool {
    static INIT: OnceCell<()> = OnceCell::new();
    let mut installed = false;
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let json = std::env::var("CMS_LOG_JSON").ok().as_deref() == Some("1");

        // try_init: a host app may already own the global subscriber.
        let res = if json {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json())
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact())
                .try_init()
        };
        installed = res.is_ok();
    });
    installed
}

/// One-time metrics registration (so series show up once a recorder exists).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("cms_fetch_total", "CMS requests issued by the content loader.");
        describe_counter!(
            "cms_fetch_errors_total",
            "CMS requests that failed (label kind = transport|status|decode)."
        );
        describe_counter!(
            "cms_fallback_total",
            "Loads that resolved with static fallback content."
        );
        describe_counter!(
            "cms_placeholder_total",
            "Loads reclassified as pre-provisioning (403/404)."
        );
        describe_histogram!("cms_fetch_ms", "CMS round-trip time in milliseconds.");
    });
}
