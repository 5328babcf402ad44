//! Convenience re-exports for common `weft` types.
//!
//! Meant to be glob-imported when composing prompts:
//!
//! ```
//! use weft::prelude::*;
//!
//! let unit = PromptUnit::new("greeting", "Hello $name!");
//! let subs = Substitutions::new().set("name", "World");
//! assert_eq!(unit.render(&subs), "Hello World!");
//! ```

pub use crate::assembler::Assembler;
pub use crate::combinations::{CombinationError, Combinations, count};
pub use crate::substitute::{Substitutions, safe_substitute};
pub use crate::unit::PromptUnit;
