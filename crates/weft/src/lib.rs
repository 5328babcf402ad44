//! Composable prompt assembly from reusable, orderable template units.
//!
//! `weft` assembles text prompts from small, named content fragments. The
//! core abstraction is the [`PromptUnit`] — an independently renderable piece
//! of prompt text with `$name` placeholders, optional prefix/suffix framing,
//! an optional explicit order, and an enabled flag. An [`Assembler`] collects
//! units, resolves their final ordering, filters by enabled state, and joins
//! the rendered results with a configurable separator.
//!
//! This is deliberately not a templating language: there are no
//! conditionals, loops, or nested templates. Units perform flat substitution
//! of named variables into otherwise static text, and the assembler performs
//! flat concatenation of the results.
//!
//! # Getting started
//!
//! ```
//! use weft::{Assembler, PromptUnit, Substitutions};
//!
//! let mut assembler = Assembler::new();
//! assembler
//!     .add(PromptUnit::new("task", "Review the following diff:\n$diff"))
//!     .add(PromptUnit::new("style", "Be terse."))
//!     .add(PromptUnit::new("role", "You are a code reviewer.").order(0));
//!
//! let prompt = assembler.render(&Substitutions::new().set("diff", "+ fn main() {}"));
//! assert!(prompt.starts_with("You are a code reviewer."));
//! assert!(prompt.contains("+ fn main() {}"));
//! ```
//!
//! # Where to find things
//!
//! - **Define a fragment:** [`PromptUnit`] in [`unit`] — construction
//!   builders, in-place enable/disable, copy-producing
//!   [`with_content`](unit::PromptUnit::with_content) /
//!   [`with_order`](unit::PromptUnit::with_order).
//!
//! - **Fill placeholders:** [`Substitutions`] and
//!   [`safe_substitute`](substitute::safe_substitute) in [`substitute`].
//!   Substitution is total — unknown markers pass through verbatim and `$$`
//!   escapes a literal `$`.
//!
//! - **Combine fragments:** [`Assembler`] in [`assembler`] — explicit orders
//!   first (ascending), insertion order as the only tie-break, disabled and
//!   empty units skipped, results joined with the separator.
//!
//! - **Enumerate variants:** [`Combinations`] in [`combinations`] — one
//!   fresh assembler per size-bounded subset, with
//!   [`count`](combinations::count) as the closed-form size of the sequence.
//!
//! # Design principles
//!
//! 1. **Permissive assembly.** Lookups, removals, and toggles on absent
//!    names are no-ops; missing substitution values leave their markers in
//!    place. A partial configuration degrades to a partial prompt, never an
//!    error. The only errors in the crate are the size-bound validations on
//!    [`Combinations`].
//!
//! 2. **Rendering is pure.** [`Assembler::render`] sorts a derived view and
//!    never mutates the stored sequence; calling it twice with the same
//!    substitutions yields identical output.
//!
//! 3. **Single-owner state.** Everything is synchronous and in-memory. Units
//!    are plain values — cloning one into several assemblers is the intended
//!    way to share it.

pub mod assembler;
pub mod combinations;
pub mod prelude;
pub mod substitute;
pub mod unit;

pub use assembler::Assembler;
pub use combinations::{CombinationError, Combinations};
pub use substitute::{Substitutions, safe_substitute};
pub use unit::PromptUnit;
