//! Builder session store
//!
//! `formsmith-builder` owns the state of one form-authoring session: the
//! ordered collection of committed field definitions, the palette selection,
//! and the edit/draft/commit workflow. The builder UI mutates through the six
//! store operations; the renderer reads the committed list only and never
//! sees a draft.
//!
//! Construct one [`BuilderStore`] per session and pass it to consumers —
//! there is no process-wide instance. Consumers that want push-style updates
//! call [`BuilderStore::subscribe`]; every mutation emits a [`StoreEvent`]
//! before the call returns.

pub mod error;
pub mod event;
pub mod store;

pub use error::{Result, StoreError};
pub use event::StoreEvent;
pub use store::{BuilderStore, EditSession};
