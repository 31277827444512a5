//! Employees slice state.

use crate::models::EmployeeMap;
use crate::store::AsyncValue;

/// Roster state: the cached employee collection and the lifecycle of the
/// subscription that fills it.
///
/// When the roster is `Complete` its value is always a map; a null
/// payload upstream is normalized to an empty map by the reducer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeesState {
    /// Lifecycle and payload of the roster subscription.
    pub roster: AsyncValue<EmployeeMap>,
}
