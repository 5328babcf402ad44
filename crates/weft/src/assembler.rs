//! Ordered assembly of prompt units into a single string.
//!
//! [`Assembler`] holds units tagged with a monotonically increasing insertion
//! index. Rendering sorts a derived view — units with an explicit order come
//! first, ascending, and insertion order is the only tie-break — then filters
//! out disabled units, renders the rest, and joins the non-empty results with
//! the configured separator. The stored sequence itself is never reordered,
//! so lookup and iteration always reflect insertion order.
//!
//! Lookups and removals by an absent name are no-ops, and missing
//! substitution values leave their markers verbatim: a partial or malformed
//! configuration degrades to an incomplete prompt rather than an error.
//!
//! # Example
//!
//! ```
//! use weft::{Assembler, PromptUnit, Substitutions};
//!
//! let mut assembler = Assembler::new();
//! assembler
//!     .add(PromptUnit::new("task", "Task: $task"))
//!     .add(PromptUnit::new("role", "You are a helpful agent.").order(0));
//!
//! let subs = Substitutions::new().set("task", "summarize the log");
//! assert_eq!(
//!     assembler.render(&subs),
//!     "You are a helpful agent.\n\nTask: summarize the log"
//! );
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::substitute::Substitutions;
use crate::unit::PromptUnit;

#[derive(Debug, Clone)]
struct Entry {
    /// Insertion index, assigned at add time and never reused. The stable
    /// tie-break key for rendering.
    index: u64,
    unit: PromptUnit,
}

/// An ordered collection of [`PromptUnit`]s plus the logic to sort, filter,
/// render, and join them into one string.
#[derive(Debug, Clone)]
pub struct Assembler {
    entries: Vec<Entry>,
    next_index: u64,
    separator: String,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Assembler {
    /// Create an empty assembler joining units with `"\n\n"`.
    pub fn new() -> Self {
        Self::with_separator("\n\n")
    }

    /// Create an empty assembler with a custom separator.
    ///
    /// The separator is fixed for the assembler's lifetime.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            next_index: 0,
            separator: separator.into(),
        }
    }

    /// Append a unit. Always succeeds. Returns `&mut self` for chaining.
    pub fn add(&mut self, unit: PromptUnit) -> &mut Self {
        self.entries.push(Entry {
            index: self.next_index,
            unit,
        });
        self.next_index += 1;
        self
    }

    /// Append several units in the given sequence order.
    pub fn add_many(&mut self, units: impl IntoIterator<Item = PromptUnit>) -> &mut Self {
        for unit in units {
            self.add(unit);
        }
        self
    }

    /// First unit with the given name, in insertion order. Absent names are a
    /// normal outcome, not an error.
    pub fn get_unit(&self, name: &str) -> Option<&PromptUnit> {
        self.entries
            .iter()
            .find(|e| e.unit.name == name)
            .map(|e| &e.unit)
    }

    /// Mutable variant of [`get_unit`](Self::get_unit).
    pub fn get_unit_mut(&mut self, name: &str) -> Option<&mut PromptUnit> {
        self.entries
            .iter_mut()
            .find(|e| e.unit.name == name)
            .map(|e| &mut e.unit)
    }

    /// Remove every unit with the given name. No-op if none match.
    ///
    /// Insertion indices of the surviving entries are untouched, and the
    /// counter is not rewound: a unit added after a removal still sorts after
    /// everything added before it.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.entries.retain(|e| e.unit.name != name);
        self
    }

    /// Remove all units and reset the insertion counter.
    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self.next_index = 0;
        self
    }

    /// Enable the first unit with the given name. No-op if none match.
    pub fn enable(&mut self, name: &str) -> &mut Self {
        if let Some(unit) = self.get_unit_mut(name) {
            unit.enable();
        }
        self
    }

    /// Disable the first unit with the given name. No-op if none match.
    pub fn disable(&mut self, name: &str) -> &mut Self {
        if let Some(unit) = self.get_unit_mut(name) {
            unit.disable();
        }
        self
    }

    /// All units, in insertion order.
    pub fn units(&self) -> impl Iterator<Item = &PromptUnit> {
        self.entries.iter().map(|e| &e.unit)
    }

    /// Enabled units only, in insertion order.
    pub fn enabled_units(&self) -> impl Iterator<Item = &PromptUnit> {
        self.units().filter(|u| u.enabled)
    }

    /// Number of units currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the assembler holds no units.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The separator configured at construction.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Assemble all enabled units into a single string.
    ///
    /// Units with an explicit order sort by that value ascending, before all
    /// units without one; units without an explicit order keep insertion
    /// order among themselves; ties on an explicit order break by insertion
    /// order. Disabled units are skipped without rendering, and units that
    /// render to the empty string contribute no separator. An empty
    /// assembler, or one whose units are all disabled or all empty, renders
    /// to exactly `""`.
    ///
    /// Pure: the stored sequence is never reordered, and two calls with the
    /// same substitutions yield identical output.
    pub fn render(&self, subs: &Substitutions) -> String {
        let mut ordered: Vec<&Entry> = self.entries.iter().collect();
        ordered.sort_by_key(|e| (e.unit.order.is_none(), e.unit.order.unwrap_or(0), e.index));

        debug!(units = self.entries.len(), "rendering assembler");

        let rendered: Vec<String> = ordered
            .iter()
            .filter(|e| e.unit.enabled)
            .map(|e| {
                let text = e.unit.render(subs);
                trace!(unit = %e.unit.name, bytes = text.len(), "rendered unit");
                text
            })
            .filter(|text| !text.is_empty())
            .collect();

        rendered.join(&self.separator)
    }
}

impl fmt::Display for Assembler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let enabled = self.enabled_units().count();
        write!(f, "Assembler({enabled}/{} units enabled)", self.len())
    }
}
