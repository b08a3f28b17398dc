use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// SessionUser
///
/// The identity payload inside a session snapshot, as issued by the external
/// authentication collaborator. The `role` field carries the backend's raw role
/// string; it is never interpreted directly — all authorization decisions go
/// through `map_role` first.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    // The RBAC field as spelled by the backend, e.g. 'student' or 'staff'.
    pub role: String,
}

/// Session
///
/// A read-only snapshot of the authenticated session. The portal core never
/// mutates or caches it; the owning authentication layer may replace it between
/// calls (e.g. after re-authentication), so role resolution is recomputed on
/// every access.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct Session {
    pub user: SessionUser,
}

impl Session {
    /// Convenience constructor used by tests and embedding callers: a session
    /// carrying only a raw role string, with a fresh user id.
    pub fn with_role(role: &str) -> Self {
        Self {
            user: SessionUser {
                id: Uuid::new_v4(),
                email: String::new(),
                role: role.to_string(),
            },
        }
    }
}

/// AppRole
///
/// The normalized application role enumeration. This is a closed set: any raw
/// role string outside the known vocabulary resolves to no role at all rather
/// than to a catch-all variant, so every caller handles the "no role" case
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AppRole {
    Student,
    Lecturer,
    Staff,
}

impl AppRole {
    /// The canonical backend spelling of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppRole::Student => "student",
            AppRole::Lecturer => "lecturer",
            AppRole::Staff => "staff",
        }
    }
}

/// map_role
///
/// Translates a raw, backend-defined role identifier into the normalized
/// enumeration. Pure and total: unknown spellings return None, never an error.
/// Matching is trimmed and case-insensitive.
///
/// One documented many-to-one mapping exists: earlier portal releases issued
/// 'admin' for what the backend now spells 'staff'. Both resolve to Staff so
/// sessions minted before the rename keep working.
pub fn map_role(raw: &str) -> Option<AppRole> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "student" => Some(AppRole::Student),
        "lecturer" => Some(AppRole::Lecturer),
        "staff" | "admin" => Some(AppRole::Staff),
        _ => None,
    }
}

/// resolve_current_role
///
/// Resolves the normalized role for the supplied session snapshot.
/// An absent session resolves to None, identically to an unrecognized role.
pub fn resolve_current_role(session: Option<&Session>) -> Option<AppRole> {
    session.and_then(|s| map_role(&s.user.role))
}

/// has_role
///
/// Answers the authorization query: does the session resolve to one of the
/// allowed roles? False whenever resolution yields None (absent session or
/// unknown role string), so a failed resolution can never grant access.
pub fn has_role(session: Option<&Session>, allowed: &[AppRole]) -> bool {
    match resolve_current_role(session) {
        Some(role) => allowed.contains(&role),
        None => false,
    }
}
