//! Actions and effects for the panel reducer.
//!
//! All state changes in the application happen through actions, dispatched
//! from key events. Side effects are returned by the reducer as [`Effect`]
//! values and executed by the run loop.

use crate::options::OptionsAction;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Domain action forwarded to the options reducer.
    Options(OptionsAction),

    // Focus navigation
    FocusNext,
    FocusPrevious,

    // Text editing on the focused field
    StartEditing,
    EditInput(char),
    EditBackspace,
    CommitEdit,
    CancelEdit,

    // Cycle the focused selector / step the focused numeric control
    CycleLeft,
    CycleRight,

    /// Generate the shareable link (gated on border-radius validation).
    Generate,

    Quit,
}

/// Side effects produced by the reducer, executed by the run loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Hand the generated link to the injected `set_link` capability.
    PublishLink(String),
}
