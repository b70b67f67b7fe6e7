pub mod config;
pub mod report;

pub use config::{CatalogSource, Config};
pub use report::{build_report, exit_code, render, InvestableSummary};

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str =
    "sip_advisor=info,cli=info,sip_engine=info,catalog_loader=info";

/// Initialize tracing on stderr so stdout carries only JSON
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
