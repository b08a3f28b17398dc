use std::env;

/// PortalConfig
///
/// Holds the portal core's configuration state. The struct is immutable once loaded
/// and shared read-only with the guard layer, which reads the redirect destinations,
/// and with `init_tracing`, which reads the runtime environment marker.
#[derive(Clone, Debug)]
pub struct PortalConfig {
    // Runtime environment marker. Controls the structured-log output format.
    pub env: Env,
    // Destination for unauthenticated visitors hitting a protected route.
    pub login_path: String,
    // Destination for authenticated users whose role is not in the allowed set.
    pub forbidden_path: String,
    // Destination for authenticated users landing on guest-only routes.
    pub dashboard_path: String,
}

/// Env
///
/// Defines the runtime context. Local selects human-readable log output;
/// Production selects JSON output for log aggregation.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for PortalConfig {
    /// default
    ///
    /// Provides a non-panicking PortalConfig instance primarily used for test setup.
    /// Uses the same redirect destinations `load` falls back to when the
    /// environment variables are unset.
    fn default() -> Self {
        Self {
            env: Env::Local,
            login_path: "/login".to_string(),
            forbidden_path: "/forbidden".to_string(),
            dashboard_path: "/dashboard".to_string(),
        }
    }
}

impl PortalConfig {
    /// load
    ///
    /// The canonical function for initializing the portal configuration at startup.
    /// Reads all parameters from environment variables. Unlike a server-side config
    /// there are no mandatory secrets at this layer, so every variable has a safe
    /// fallback and `load` never panics.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        Self {
            env,
            login_path: env::var("PORTAL_LOGIN_PATH").unwrap_or_else(|_| "/login".to_string()),
            forbidden_path: env::var("PORTAL_FORBIDDEN_PATH")
                .unwrap_or_else(|_| "/forbidden".to_string()),
            dashboard_path: env::var("PORTAL_DASHBOARD_PATH")
                .unwrap_or_else(|_| "/dashboard".to_string()),
        }
    }
}
