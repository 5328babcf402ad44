//! A single, reusable piece of prompt content.
//!
//! [`PromptUnit`] is the building block of weft. It holds content with
//! optional `$name` placeholders, optional prefix/suffix framing, an optional
//! explicit order, and an enabled flag, and knows how to render itself. Units
//! are independent and know nothing about other units — the
//! [`Assembler`](crate::assembler::Assembler) owns ordering and joining.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::substitute::{Substitutions, safe_substitute};

/// A named, independently renderable fragment of prompt text.
///
/// # Example
///
/// ```
/// use weft::{PromptUnit, Substitutions};
///
/// let unit = PromptUnit::new("greeting", "Hello $name!")
///     .prefix("=== START ===")
///     .order(10);
///
/// let subs = Substitutions::new().set("name", "World");
/// assert_eq!(unit.render(&subs), "=== START ===\nHello World!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptUnit {
    /// Identifier for lookup, enable/disable, and removal. Unique within an
    /// assembler's active set by convention, not enforced.
    pub name: String,
    /// The prompt text. May contain `$name` / `${name}` placeholders.
    #[serde(default)]
    pub content: String,
    /// Explicit position when assembling (lower = earlier). `None` defers to
    /// insertion order.
    #[serde(default)]
    pub order: Option<i64>,
    /// Optional header text joined above the content with a newline.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Optional footer text joined below the content with a newline.
    #[serde(default)]
    pub suffix: Option<String>,
    /// Whether this unit participates in rendering. Default: `true`.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl PromptUnit {
    /// Create an enabled unit with no explicit order, prefix, or suffix.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            order: None,
            prefix: None,
            suffix: None,
            enabled: true,
        }
    }

    /// Set the explicit order at construction time.
    pub fn order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the prefix at construction time.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the suffix at construction time.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Start the unit disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Render this unit to a string.
    ///
    /// A disabled unit renders to the empty string regardless of its other
    /// fields. Otherwise the present parts — prefix, substituted content,
    /// suffix — are joined with single newlines, and empty parts are
    /// omitted. When `subs` is empty the content is used raw, with no
    /// placeholder scan.
    ///
    /// Placeholders without a matching value are preserved verbatim; see
    /// [`safe_substitute`](crate::substitute::safe_substitute).
    pub fn render(&self, subs: &Substitutions) -> String {
        if !self.enabled {
            return String::new();
        }

        let mut parts: Vec<String> = Vec::with_capacity(3);

        if let Some(prefix) = &self.prefix
            && !prefix.is_empty()
        {
            parts.push(prefix.clone());
        }

        if !self.content.is_empty() {
            if subs.is_empty() {
                parts.push(self.content.clone());
            } else {
                parts.push(safe_substitute(&self.content, subs));
            }
        }

        if let Some(suffix) = &self.suffix
            && !suffix.is_empty()
        {
            parts.push(suffix.clone());
        }

        parts.join("\n")
    }

    /// Enable this unit in place. Returns `&mut self` for chaining.
    pub fn enable(&mut self) -> &mut Self {
        self.enabled = true;
        self
    }

    /// Disable this unit in place. Returns `&mut self` for chaining.
    pub fn disable(&mut self) -> &mut Self {
        self.enabled = false;
        self
    }

    /// Return a copy with different content. The receiver is unmodified.
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }

    /// Return a copy with a different order. The receiver is unmodified.
    pub fn with_order(&self, order: Option<i64>) -> Self {
        Self {
            order,
            ..self.clone()
        }
    }
}

impl fmt::Display for PromptUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.enabled { "enabled" } else { "disabled" };
        match self.order {
            Some(order) => write!(f, "PromptUnit({}, order={order}, {status})", self.name),
            None => write!(f, "PromptUnit({}, order=auto, {status})", self.name),
        }
    }
}
