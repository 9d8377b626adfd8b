//! BuilderStore — the single source of truth for one authoring session.
//!
//! Owns the ordered field collection, the palette selection, and the
//! edit/draft/commit state machine. One store per authoring session; no
//! globals. Every operation is synchronous and completes on the calling
//! thread, so no locking is needed for the single-consumer shape. A caller
//! that shares a store across threads wraps it in its own lock.

use formsmith_fields::{FieldDefinition, Selection};
use tokio::sync::broadcast;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::event::StoreEvent;

/// Events buffered per subscriber before the oldest are dropped.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// One in-flight edit: the field name captured at [`BuilderStore::start_edit`]
/// and the working copy being edited.
///
/// The session exists iff an edit is in progress — the captured name and the
/// draft are set and cleared together.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    name: String,
    draft: FieldDefinition,
}

impl EditSession {
    /// The name of the field this session targets, as captured at start.
    /// Commits match on this name even if the draft is renamed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The working copy under edit.
    pub fn draft(&self) -> &FieldDefinition {
        &self.draft
    }
}

/// The authoring-session store.
///
/// State machine for editing:
/// `Idle --start_edit--> Editing --apply_edit|cancel_edit--> Idle`, where
/// `start_edit` from `Editing` replaces the draft (last call wins).
#[derive(Debug)]
pub struct BuilderStore {
    fields: Vec<FieldDefinition>,
    selection: Selection,
    session: Option<EditSession>,
    events: broadcast::Sender<StoreEvent>,
}

impl BuilderStore {
    /// An empty store: no fields, default selection, no edit session.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            fields: Vec::new(),
            selection: Selection::default(),
            session: None,
            events,
        }
    }

    /// Rebuild a store from a previously serialized field list.
    ///
    /// Each definition is re-validated and name uniqueness is re-checked, so a
    /// hand-edited or stale list cannot smuggle duplicates in.
    pub fn from_fields(fields: Vec<FieldDefinition>) -> Result<Self> {
        let mut store = Self::new();
        for field in fields {
            store.add_field(field)?;
        }
        Ok(store)
    }

    /// Subscribe to change events. Events are sent synchronously, before the
    /// mutating call returns. Multiple subscribers can coexist.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    // --- Reads ---

    /// The committed fields, in authoring order. Drafts are never visible
    /// here — this is the sequence the renderer consumes.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Look up a committed field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The current palette selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The active edit session, if any.
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Whether an edit session is active.
    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// The name captured when the active session started.
    pub fn editing_name(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.name.as_str())
    }

    /// The working copy under edit.
    pub fn draft(&self) -> Option<&FieldDefinition> {
        self.session.as_ref().map(|s| &s.draft)
    }

    /// Mutable access to the working copy. Changes here never touch the
    /// committed collection until [`Self::commit_draft`] or
    /// [`Self::apply_edit`].
    pub fn draft_mut(&mut self) -> Option<&mut FieldDefinition> {
        self.session.as_mut().map(|s| &mut s.draft)
    }

    /// An owned copy of the committed field list, for serialization.
    pub fn snapshot(&self) -> Vec<FieldDefinition> {
        self.fields.clone()
    }

    // --- Mutations ---

    /// Append a field to the end of the collection.
    ///
    /// The definition is shape-validated and the name must not collide with
    /// an existing field. Existing entries keep their order.
    pub fn add_field(&mut self, field: FieldDefinition) -> Result<()> {
        field.validate()?;
        if self.fields.iter().any(|f| f.name == field.name) {
            return Err(StoreError::DuplicateName { name: field.name });
        }
        let name = field.name.clone();
        debug!(name = %name, kind = field.kind(), "field added");
        self.fields.push(field);
        self.emit(StoreEvent::FieldAdded { name });
        Ok(())
    }

    /// Remove the field with the given name, preserving the relative order of
    /// the rest. Returns the removed definition.
    pub fn remove_field(&mut self, name: &str) -> Result<FieldDefinition> {
        let idx = self
            .fields
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| StoreError::FieldNotFound { name: name.into() })?;
        let removed = self.fields.remove(idx);
        debug!(name = %name, "field removed");
        self.emit(StoreEvent::FieldRemoved { name: name.into() });
        Ok(removed)
    }

    /// Unconditionally replace the palette selection.
    ///
    /// The selected kind need not exist in the committed collection.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        self.emit(StoreEvent::SelectionChanged);
    }

    /// Open an edit session on the given field.
    ///
    /// Captures the field's name and an independent copy as the draft.
    /// Calling while a session is already active replaces it — the previous
    /// draft is discarded without error.
    pub fn start_edit(&mut self, field: &FieldDefinition) {
        debug!(name = %field.name, "edit started");
        self.session = Some(EditSession {
            name: field.name.clone(),
            draft: field.clone(),
        });
        self.emit(StoreEvent::EditStarted {
            name: field.name.clone(),
        });
    }

    /// Commit an edit: replace, in place, the field whose name equals the
    /// session's captured name.
    ///
    /// Matching uses the captured name, not `updated.name` — a differing
    /// `updated.name` renames the field while its position is preserved
    /// (rejected if it collides with another field). The session ends on
    /// every path, success or error.
    pub fn apply_edit(&mut self, updated: FieldDefinition) -> Result<()> {
        let session = self.session.take().ok_or(StoreError::NotEditing)?;
        self.replace_field(&session.name, updated)
    }

    /// Commit the current draft. Shorthand for `apply_edit(draft.clone())`.
    pub fn commit_draft(&mut self) -> Result<()> {
        let draft = self.draft().cloned().ok_or(StoreError::NotEditing)?;
        self.apply_edit(draft)
    }

    /// Discard the edit session, if any. Idempotent; the committed collection
    /// is never touched.
    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(name = %session.name, "edit cancelled");
            self.emit(StoreEvent::EditCancelled { name: session.name });
        }
    }

    fn replace_field(&mut self, name: &str, updated: FieldDefinition) -> Result<()> {
        updated.validate()?;
        let idx = self
            .fields
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| StoreError::FieldNotFound { name: name.into() })?;
        if updated.name != name && self.fields.iter().any(|f| f.name == updated.name) {
            return Err(StoreError::DuplicateName { name: updated.name });
        }
        let new_name = updated.name.clone();
        debug!(name = %name, new_name = %new_name, "field replaced");
        self.fields[idx] = updated;
        self.emit(StoreEvent::FieldReplaced {
            name: name.into(),
            new_name,
        });
        Ok(())
    }

    fn emit(&self, event: StoreEvent) {
        // No subscribers is fine; delivery is best-effort.
        let _ = self.events.send(event);
    }
}

impl Default for BuilderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_fields::{ChoiceOption, FieldError};

    #[test]
    fn add_rejects_duplicate_name() {
        let mut store = BuilderStore::new();
        store.add_field(FieldDefinition::text("email")).unwrap();
        let err = store.add_field(FieldDefinition::text("email")).unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateName {
                name: "email".into()
            }
        );
        assert_eq!(store.fields().len(), 1);
    }

    #[test]
    fn add_rejects_invalid_shape() {
        let mut store = BuilderStore::new();
        let err = store
            .add_field(FieldDefinition::radio("flavor", vec![]))
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::Invalid(FieldError::NoOptions {
                name: "flavor".into()
            })
        );
        assert!(store.fields().is_empty());
    }

    #[test]
    fn apply_without_session_is_not_editing() {
        let mut store = BuilderStore::new();
        store.add_field(FieldDefinition::text("email")).unwrap();
        let err = store.apply_edit(FieldDefinition::text("email")).unwrap_err();
        assert_eq!(err, StoreError::NotEditing);
        assert_eq!(store.fields().len(), 1);
    }

    #[test]
    fn rename_collision_is_rejected_and_session_ends() {
        let mut store = BuilderStore::new();
        store.add_field(FieldDefinition::text("a")).unwrap();
        store.add_field(FieldDefinition::text("b")).unwrap();

        let original = store.get_field("a").cloned().unwrap();
        store.start_edit(&original);
        let err = store.apply_edit(FieldDefinition::text("b")).unwrap_err();
        assert_eq!(err, StoreError::DuplicateName { name: "b".into() });
        // The commit did not land, but the session is over.
        assert!(!store.is_editing());
        assert_eq!(store.fields()[0].name, "a");
    }

    #[test]
    fn apply_after_target_removed_reports_not_found() {
        let mut store = BuilderStore::new();
        let field = FieldDefinition::radio("flavor", vec![ChoiceOption::new("V", "v")]);
        store.add_field(field.clone()).unwrap();
        store.start_edit(&field);
        store.remove_field("flavor").unwrap();

        let err = store.apply_edit(field).unwrap_err();
        assert_eq!(
            err,
            StoreError::FieldNotFound {
                name: "flavor".into()
            }
        );
        assert!(store.fields().is_empty());
        assert!(!store.is_editing());
    }

    #[test]
    fn from_fields_rechecks_uniqueness() {
        let fields = vec![FieldDefinition::text("a"), FieldDefinition::text("a")];
        let err = BuilderStore::from_fields(fields).unwrap_err();
        assert_eq!(err, StoreError::DuplicateName { name: "a".into() });
    }

    #[test]
    fn snapshot_is_independent_of_store() {
        let mut store = BuilderStore::new();
        store.add_field(FieldDefinition::text("a")).unwrap();
        let snapshot = store.snapshot();
        store.remove_field("a").unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(store.fields().is_empty());
    }
}
