use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// --- Module Structure ---

// Core portal services and components.
pub mod auth;
pub mod config;
pub mod guards;
pub mod interpreter;
pub mod models;
pub mod table;

// Per-page table-control configs, segregated by role audience
// (Student, Lecturer, Staff).
pub mod pages;

// --- Public Re-exports ---

// Makes the core surface easily accessible to page/route collaborators.
pub use auth::{AppRole, Session, SessionUser, has_role, map_role, resolve_current_role};
pub use config::{Env, PortalConfig};
pub use guards::{Redirect, SessionSource, SessionState, require_guest, require_role};
pub use interpreter::{
    CellValue, SortDirection, SortSelection, TableRow, TableState, TableView, Viewport, interpret,
};
pub use table::{ConfigError, TableControlConfig};

/// init_tracing
///
/// Initializes the structured-logging subscriber for the embedding application.
/// The log level honors RUST_LOG first, falling back to a sensible default for
/// local development. The output format follows the runtime environment:
/// human-readable pretty output in Local, JSON in Production for ingestion by
/// centralized log aggregators.
///
/// Call once at startup; a second call panics inside tracing-subscriber, which
/// is why tests use their own ad hoc subscribers instead.
pub fn init_tracing(config: &PortalConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kpi_portal=debug".into());

    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("portal core initialized in {:?} mode", config.env);
}
