//! Typed form-field schema
//!
//! `formsmith-fields` is a standalone, schema-only crate that describes form
//! field configurations. It knows nothing about the authoring UI or the
//! renderer — it owns the field definition union, the shapes each kind
//! requires, and the validation of those shapes.
//!
//! # Architecture
//!
//! - **Schema-only**: Owns field definitions, not field values or widgets
//! - **Tagged union**: Kind-specific shapes live in [`FieldControl`], keyed by
//!   `kind` on the wire, so each kind carries exactly its required sub-fields
//! - **Plain serialization**: A form is a plain ordered JSON list of
//!   definitions — the seam persistence or rendering layers build on

pub mod error;
pub mod types;

pub use error::{FieldError, Result};
pub use types::{
    ChoiceOption, DisplayText, FieldControl, FieldDefinition, InputProps, Layout, Prefill,
    Selection, ValueConstraints, Visibility,
};
