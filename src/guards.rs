use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    auth::{AppRole, Session, has_role},
    config::PortalConfig,
};

/// SessionSource
///
/// Abstract contract for resolving the current session, implemented by the
/// external query-cache collaborator (and by mocks in tests). Resolution may
/// suspend while the cache fetches; the guards below await it to completion
/// before anything route-specific happens.
///
/// **Send + Sync + async_trait** make the trait object (`Arc<dyn SessionSource>`)
/// safely shareable across asynchronous task boundaries.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Resolves the current session snapshot, or None when unauthenticated.
    async fn current_session(&self) -> Option<Session>;
}

/// SessionState
///
/// The concrete type used to share session access across route collaborators.
pub type SessionState = Arc<dyn SessionSource>;

/// Redirect
///
/// The guard's denial signal: the destination the caller must navigate to
/// instead of rendering the route. A redirect is navigational, not exceptional;
/// it is never surfaced as an application error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
}

impl Redirect {
    fn to(path: &str) -> Self {
        Self {
            to: path.to_string(),
        }
    }
}

/// require_role
///
/// Gates entry into a protected navigation branch. The session is resolved and
/// checked before this function returns, so callers that only issue their data
/// queries after an `Ok` cannot leak protected requests on the denial path.
///
/// Denial destinations:
/// - no session at all: the login page;
/// - authenticated but role not in `allowed`: the forbidden page.
///
/// On success the resolved session is handed back so the route loader does not
/// fetch it a second time.
pub async fn require_role(
    source: &dyn SessionSource,
    config: &PortalConfig,
    allowed: &[AppRole],
) -> Result<Session, Redirect> {
    match source.current_session().await {
        Some(session) if has_role(Some(&session), allowed) => Ok(session),
        None => {
            tracing::debug!(allowed = ?allowed, "unauthenticated visitor, redirecting to login");
            Err(Redirect::to(&config.login_path))
        }
        Some(session) => {
            tracing::debug!(
                raw_role = %session.user.role,
                allowed = ?allowed,
                "role not permitted, redirecting to forbidden page"
            );
            Err(Redirect::to(&config.forbidden_path))
        }
    }
}

/// require_guest
///
/// The inverse check for guest-only areas (login, register): an authenticated
/// session is redirected to the dashboard instead of seeing the guest page.
pub async fn require_guest(
    source: &dyn SessionSource,
    config: &PortalConfig,
) -> Result<(), Redirect> {
    match source.current_session().await {
        Some(_) => {
            tracing::debug!("authenticated session on guest-only route, redirecting to dashboard");
            Err(Redirect::to(&config.dashboard_path))
        }
        None => Ok(()),
    }
}
