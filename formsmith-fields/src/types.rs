//! Core schema types for form fields.
//!
//! All types serialize to/from JSON via serde. A field definition carries the
//! metadata every field shares (name, display text, validation rule, layout)
//! plus a kind-specific control shape. The control is a tagged union keyed by
//! `kind`, flattened into the definition, so a serialized field is one plain
//! object and a serialized form is one plain ordered list.

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, Result};

/// A single choice in a radio or select field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: String,
    pub value: String,
}

impl ChoiceOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// User-facing text shown alongside a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayText {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// Attributes forwarded to the rendered input element.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

/// Numeric bounds for a number field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValueConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Decimal digits the value may carry. Zero means integers only.
    #[serde(default)]
    pub allow_decimal: u8,
}

/// How long a field stays active once rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Visibility {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

/// Initial value a field is rendered with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Prefill {
    /// No prefill — serializes as `null`.
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

/// How a field is laid out in the rendered form.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Normal,
    Compact,
}

/// The kind-specific part of a field — determines what shape the value takes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldControl {
    Text {
        #[serde(default)]
        props: InputProps,
        #[serde(default)]
        prefill: Prefill,
    },
    Number {
        #[serde(default)]
        prefill: Prefill,
        #[serde(default)]
        constraints: ValueConstraints,
        #[serde(default)]
        visibility: Visibility,
    },
    Radio {
        options: Vec<ChoiceOption>,
    },
    Select {
        options: Vec<ChoiceOption>,
    },
}

impl FieldControl {
    /// The `kind` tag this control serializes under.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldControl::Text { .. } => "text",
            FieldControl::Number { .. } => "number",
            FieldControl::Radio { .. } => "radio",
            FieldControl::Select { .. } => "select",
        }
    }
}

/// A field definition — the complete configuration of one form field.
///
/// `name` is the primary key: unique within a form and immutable once the
/// field is committed (renames go through the edit workflow, which preserves
/// the field's position).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(default)]
    pub display: DisplayText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// Which authoring widget produced and edits this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder_kind: Option<String>,
    #[serde(default)]
    pub layout: Layout,
    #[serde(flatten)]
    pub control: FieldControl,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, control: FieldControl) -> Self {
        Self {
            name: name.into(),
            display: DisplayText::default(),
            rule: None,
            builder_kind: None,
            layout: Layout::Normal,
            control,
        }
    }

    /// A text field with default props and no prefill.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldControl::Text {
                props: InputProps::default(),
                prefill: Prefill::Empty,
            },
        )
    }

    /// A number field with the given bounds.
    pub fn number(name: impl Into<String>, constraints: ValueConstraints) -> Self {
        Self::new(
            name,
            FieldControl::Number {
                prefill: Prefill::Empty,
                constraints,
                visibility: Visibility::default(),
            },
        )
    }

    /// A radio group over the given options.
    pub fn radio(name: impl Into<String>, options: Vec<ChoiceOption>) -> Self {
        Self::new(name, FieldControl::Radio { options })
    }

    /// A select over the given options.
    pub fn select(name: impl Into<String>, options: Vec<ChoiceOption>) -> Self {
        Self::new(name, FieldControl::Select { options })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.display.label = label.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.display.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    pub fn with_builder_kind(mut self, builder_kind: impl Into<String>) -> Self {
        self.builder_kind = Some(builder_kind.into());
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// The `kind` tag of this field.
    pub fn kind(&self) -> &'static str {
        self.control.kind()
    }

    /// Check the per-kind shape invariants.
    ///
    /// Choice fields need at least one option; number bounds must not exclude
    /// every value; the name must be non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FieldError::EmptyName);
        }
        match &self.control {
            FieldControl::Radio { options } | FieldControl::Select { options } => {
                if options.is_empty() {
                    return Err(FieldError::NoOptions {
                        name: self.name.clone(),
                    });
                }
            }
            FieldControl::Number { constraints, .. } => {
                if let (Some(min), Some(max)) = (constraints.minimum, constraints.maximum) {
                    if min > max {
                        return Err(FieldError::InvalidConstraints {
                            name: self.name.clone(),
                        });
                    }
                }
            }
            FieldControl::Text { .. } => {}
        }
        Ok(())
    }
}

/// Which field kind is currently highlighted in the authoring palette.
///
/// Independent of the edit workflow — the selected kind need not exist in the
/// committed collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    pub label: String,
    pub value: String,
}

impl Selection {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
