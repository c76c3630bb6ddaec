//! Work-item lifecycle state machine.
//!
//! Once a work item is assigned, its life is the cross product of the timer
//! axis (open time entry or not) and the three sub-statuses. Every transition
//! is executed by a stored procedure in the external data service; this
//! module's job is to pick the legal ones and refuse the rest *before* any
//! network call. These guards are a courtesy against redundant calls — the
//! claim protocol's atomicity lives server-side, not here.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Timer / finalization transitions a technician can request on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkAction {
    /// Open the first time entry.
    Start,
    /// Close the open time entry.
    Pause,
    /// Open a new time entry after a pause. Same guard as [`Start`]; the
    /// external procedure distinguishes the two for bookkeeping.
    ///
    /// [`Start`]: WorkAction::Start
    Resume,
    /// Set the actual-finish timestamp; the item becomes immutable.
    Finalize,
}

// ---------------------------------------------------------------------------
// Observed state
// ---------------------------------------------------------------------------

/// The guard-relevant facts about one work item, derived from the latest
/// fetched state. Never cached across mutations.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkItemState {
    /// An open time entry exists for this item.
    pub open_entry: bool,
    /// The actual-finish timestamp is set; no further transitions allowed.
    pub finalized: bool,
    /// All three sub-statuses carry the terminal value.
    pub substatuses_terminal: bool,
}

// ---------------------------------------------------------------------------
// Guard errors
// ---------------------------------------------------------------------------

/// A transition refused client-side. No network call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("task is already finalized")]
    AlreadyFinalized,

    #[error("task already has an open time entry")]
    TimerAlreadyOpen,

    #[error("task has no open time entry")]
    NoOpenTimer,

    #[error("task cannot be finalized while a time entry is open")]
    TimerStillOpen,

    #[error("task can only be finalized when API, test and documentation are all done")]
    SubStatusesIncomplete,
}

// ---------------------------------------------------------------------------
// Guards
// ---------------------------------------------------------------------------

/// Check whether `action` is legal in `state`.
///
/// `Ok(())` means the matching stored procedure may be called; an error names
/// the first violated guard and must be surfaced without any network call.
pub fn validate_action(action: WorkAction, state: WorkItemState) -> Result<(), LifecycleError> {
    if state.finalized {
        return Err(LifecycleError::AlreadyFinalized);
    }

    match action {
        WorkAction::Start | WorkAction::Resume => {
            if state.open_entry {
                Err(LifecycleError::TimerAlreadyOpen)
            } else {
                Ok(())
            }
        }
        WorkAction::Pause => {
            if state.open_entry {
                Ok(())
            } else {
                Err(LifecycleError::NoOpenTimer)
            }
        }
        WorkAction::Finalize => {
            if state.open_entry {
                Err(LifecycleError::TimerStillOpen)
            } else if !state.substatuses_terminal {
                Err(LifecycleError::SubStatusesIncomplete)
            } else {
                Ok(())
            }
        }
    }
}

/// Check whether a sub-status may still be edited.
///
/// This is the only mutation that can flip finalize-eligibility; it stays
/// legal until the item is finalized.
pub fn validate_substatus_change(state: WorkItemState) -> Result<(), LifecycleError> {
    if state.finalized {
        Err(LifecycleError::AlreadyFinalized)
    } else {
        Ok(())
    }
}

/// The actions currently legal in `state`, for presentation.
pub fn allowed_actions(state: WorkItemState) -> Vec<WorkAction> {
    [
        WorkAction::Start,
        WorkAction::Pause,
        WorkAction::Resume,
        WorkAction::Finalize,
    ]
    .into_iter()
    .filter(|&a| validate_action(a, state).is_ok())
    .collect()
}
