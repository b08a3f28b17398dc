//! Page Configuration Index
//!
//! Organizes the per-page table-control configs into role-audience modules.
//! Each function returns the immutable `TableControlConfig` literal its listing
//! page hands to the shared interpreter; none of them embed behavior. Access to
//! the pages themselves is enforced separately by the route guards.
//!
//! The three modules map directly to the portal's role audiences.

use serde::Serialize;
use ts_rs::TS;

use crate::auth::AppRole;

/// Listing pages administered by staff (lecturers, students, intakes, challenges).
pub mod staff;

/// Listing pages for a lecturer's own mentees and their KPI records.
pub mod lecturer;

/// Listing pages a student sees over their own data.
pub mod student;

/// RowAction
///
/// An action control rendered in a row's actions column. Which actions appear
/// depends on the viewer's resolved role, never on per-page bespoke checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

/// academic_record_actions
///
/// Action group for academic record rows. Staff own the records and may mutate
/// them; lecturers see their mentees' records read-only; students see their own
/// read-only. An unresolved role gets no actions at all.
pub fn academic_record_actions(role: Option<AppRole>) -> &'static [RowAction] {
    match role {
        Some(AppRole::Staff) => &[RowAction::View, RowAction::Edit, RowAction::Delete],
        Some(AppRole::Lecturer) | Some(AppRole::Student) => &[RowAction::View],
        None => &[],
    }
}

/// kpi_record_actions
///
/// Action group for KPI record rows. Lecturers record KPI data points for their
/// mentees, so they keep Edit; only staff may delete.
pub fn kpi_record_actions(role: Option<AppRole>) -> &'static [RowAction] {
    match role {
        Some(AppRole::Staff) => &[RowAction::View, RowAction::Edit, RowAction::Delete],
        Some(AppRole::Lecturer) => &[RowAction::View, RowAction::Edit],
        Some(AppRole::Student) => &[RowAction::View],
        None => &[],
    }
}
