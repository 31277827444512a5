//! Employees slice reducer.

use super::state::EmployeesState;
use crate::store::{Action, AsyncValue};

/// Applies an action to the employees slice, returning the next state.
///
/// Pure: the previous state is consumed by value and never mutated in
/// place. Unrecognized actions (including store bootstrap) return the
/// previous state unchanged.
pub fn reduce(state: EmployeesState, action: &Action) -> EmployeesState {
    match action {
        Action::WatchStart => EmployeesState {
            roster: AsyncValue::InProgress,
        },
        // Each payload fully replaces the cache; a null payload is an
        // empty collection, not an error.
        Action::EmployeesFetched(payload) => EmployeesState {
            roster: AsyncValue::Complete(payload.clone().unwrap_or_default()),
        },
        Action::Unsubscribe => EmployeesState::default(),
        _ => state,
    }
}
