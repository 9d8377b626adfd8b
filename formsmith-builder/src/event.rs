//! Store change events
//!
//! Every successful mutation emits one event on the store's broadcast channel
//! before the mutating call returns, so subscribers observe changes
//! synchronously with the call. Reactive consumers (the builder UI, the
//! renderer) subscribe instead of polling.

use serde::{Deserialize, Serialize};

/// A change to the builder store's observable state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StoreEvent {
    /// A field was appended to the collection.
    FieldAdded { name: String },
    /// A field was removed from the collection.
    FieldRemoved { name: String },
    /// A committed edit replaced a field in place. `new_name` differs from
    /// `name` when the edit renamed the field.
    FieldReplaced { name: String, new_name: String },
    /// The palette selection changed.
    SelectionChanged,
    /// An edit session opened (or replaced a previous one).
    EditStarted { name: String },
    /// An edit session was discarded without committing.
    EditCancelled { name: String },
}
