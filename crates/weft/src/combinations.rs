//! Enumerate assemblers for every size-bounded subset of a set of units.
//!
//! [`Combinations`] yields one fresh [`Assembler`] per combination (unordered
//! subset, no repetition) of its input units, optionally seeded with base
//! units that appear in every assembler. Useful for exploring or testing all
//! variations of a prompt's composition.
//!
//! The sequence is lazy: each `(names, assembler)` pair is built on demand
//! and is independent of the others, so dropping the iterator early is
//! always safe.
//!
//! # Example
//!
//! ```
//! use weft::{Combinations, PromptUnit, Substitutions};
//!
//! let units = [
//!     PromptUnit::new("a", "Alpha"),
//!     PromptUnit::new("b", "Beta"),
//!     PromptUnit::new("c", "Gamma"),
//! ];
//!
//! let pairs: Vec<_> = Combinations::of(units)
//!     .min_size(2)
//!     .max_size(2)
//!     .generate()
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(pairs.len(), 3);
//! assert_eq!(pairs[0].0, ["a", "b"]);
//! assert_eq!(pairs[0].1.render(&Substitutions::new()), "Alpha\n\nBeta");
//! ```

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use crate::assembler::Assembler;
use crate::unit::PromptUnit;

/// Invalid size bounds passed to [`Combinations::generate`] or [`count`].
///
/// These are the only errors in the crate: everything else degrades to an
/// empty or no-op result by contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinationError {
    /// `min_size` was zero; a combination must have at least one unit.
    #[error("min_size must be at least 1")]
    MinSizeZero,
    /// `min_size` exceeded the effective `max_size` after clamping it to the
    /// number of input units.
    #[error("min_size {min} cannot be greater than max_size {max}")]
    MinExceedsMax { min: usize, max: usize },
}

/// Builder for combination enumeration over a set of units.
///
/// Defaults: `min_size = 1`, `max_size =` number of units, no base units,
/// separator `"\n\n"`. A `max_size` larger than the number of units is
/// silently clamped down; `min_size < 1` or `min_size > max_size` (after
/// clamping) are input errors surfaced by [`generate`](Self::generate) and
/// [`count`](Self::count).
#[derive(Debug, Clone)]
pub struct Combinations {
    units: Vec<PromptUnit>,
    min_size: usize,
    max_size: Option<usize>,
    base_units: Vec<PromptUnit>,
    separator: String,
}

impl Combinations {
    /// Start a combination run over the given units.
    pub fn of(units: impl IntoIterator<Item = PromptUnit>) -> Self {
        Self {
            units: units.into_iter().collect(),
            min_size: 1,
            max_size: None,
            base_units: Vec::new(),
            separator: "\n\n".to_string(),
        }
    }

    /// Minimum number of units per combination. Default: 1.
    pub fn min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    /// Maximum number of units per combination. Default: all of them.
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Units included at the front of every generated assembler, in the
    /// given order (e.g. a fixed header and footer).
    pub fn base_units(mut self, base_units: impl IntoIterator<Item = PromptUnit>) -> Self {
        self.base_units = base_units.into_iter().collect();
        self
    }

    /// Separator for the generated assemblers. Default: `"\n\n"`.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Number of combinations [`generate`](Self::generate) will yield.
    pub fn count(&self) -> Result<u64, CombinationError> {
        count(self.units.len(), self.min_size, self.max_size)
    }

    /// Produce the lazy sequence of `(unit_names, assembler)` pairs.
    ///
    /// Combinations are enumerated in increasing-size order and, within each
    /// size, in lexicographic order of input position. Each assembler is
    /// fresh: base units first (in their given order), then the
    /// combination's units (in their given order).
    ///
    /// Size bounds are validated here, before any item is produced.
    pub fn generate(
        self,
    ) -> Result<impl Iterator<Item = (Vec<String>, Assembler)>, CombinationError> {
        let max_size = validate(self.units.len(), self.min_size, self.max_size)?;
        let Self {
            units,
            min_size,
            base_units,
            separator,
            ..
        } = self;

        debug!(
            units = units.len(),
            min_size, max_size, "generating combinations"
        );

        Ok((min_size..=max_size).flat_map(move |size| {
            let base_units = base_units.clone();
            let separator = separator.clone();
            units
                .clone()
                .into_iter()
                .combinations(size)
                .map(move |combo| {
                    let names: Vec<String> = combo.iter().map(|u| u.name.clone()).collect();
                    let mut assembler = Assembler::with_separator(separator.clone());
                    assembler.add_many(base_units.iter().cloned());
                    assembler.add_many(combo);
                    (names, assembler)
                })
        }))
    }
}

/// Closed-form count of combinations of `n` units across the size range:
/// the sum of C(n, size) for size in `[min_size, max_size]`.
///
/// Applies the same clamping and validation as
/// [`Combinations::generate`], so for any input the two either both fail or
/// agree on the number of items.
pub fn count(
    n: usize,
    min_size: usize,
    max_size: Option<usize>,
) -> Result<u64, CombinationError> {
    let max_size = validate(n, min_size, max_size)?;
    Ok((min_size..=max_size)
        .map(|size| binomial(n as u64, size as u64))
        .sum())
}

fn validate(
    n: usize,
    min_size: usize,
    max_size: Option<usize>,
) -> Result<usize, CombinationError> {
    let max_size = max_size.unwrap_or(n).min(n);
    if min_size == 0 {
        return Err(CombinationError::MinSizeZero);
    }
    if min_size > max_size {
        return Err(CombinationError::MinExceedsMax {
            min: min_size,
            max: max_size,
        });
    }
    Ok(max_size)
}

/// C(n, k) via the multiplicative formula; exact at every step.
fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * u128::from(n - i) / u128::from(i + 1);
    }
    result as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitute::Substitutions;
    use pretty_assertions::assert_eq;

    fn abc() -> Vec<PromptUnit> {
        vec![
            PromptUnit::new("a", "Alpha"),
            PromptUnit::new("b", "Beta"),
            PromptUnit::new("c", "Gamma"),
        ]
    }

    fn names_of(pairs: &[(Vec<String>, Assembler)]) -> Vec<Vec<String>> {
        pairs.iter().map(|(names, _)| names.clone()).collect()
    }

    #[test]
    fn pairs_of_three() {
        let pairs: Vec<_> = Combinations::of(abc())
            .min_size(2)
            .max_size(2)
            .generate()
            .unwrap()
            .collect();

        assert_eq!(
            names_of(&pairs),
            [["a", "b"], ["a", "c"], ["b", "c"]]
        );
        assert_eq!(count(3, 2, Some(2)).unwrap(), 3);
    }

    #[test]
    fn full_range_sizes_ascending() {
        let pairs: Vec<_> = Combinations::of(abc()).generate().unwrap().collect();
        let sizes: Vec<usize> = pairs.iter().map(|(names, _)| names.len()).collect();
        assert_eq!(sizes, [1, 1, 1, 2, 2, 2, 3]);
        assert_eq!(pairs.len() as u64, count(3, 1, None).unwrap());
    }

    #[test]
    fn assemblers_render_their_subset() {
        let pairs: Vec<_> = Combinations::of(abc())
            .min_size(3)
            .generate()
            .unwrap()
            .collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(
            pairs[0].1.render(&Substitutions::new()),
            "Alpha\n\nBeta\n\nGamma"
        );
    }

    #[test]
    fn base_units_prepended_to_every_assembler() {
        let base = vec![PromptUnit::new("header", "HEAD")];
        let pairs: Vec<_> = Combinations::of(abc())
            .min_size(1)
            .max_size(1)
            .base_units(base)
            .generate()
            .unwrap()
            .collect();

        for (names, assembler) in &pairs {
            assert_eq!(names.len(), 1);
            assert!(
                assembler
                    .render(&Substitutions::new())
                    .starts_with("HEAD\n\n")
            );
        }
        // Base units are not part of the combination's name tuple.
        assert_eq!(names_of(&pairs), [["a"], ["b"], ["c"]]);
    }

    #[test]
    fn custom_separator_propagated() {
        let pairs: Vec<_> = Combinations::of(abc())
            .min_size(2)
            .max_size(2)
            .separator(" | ")
            .generate()
            .unwrap()
            .collect();
        assert_eq!(pairs[0].1.render(&Substitutions::new()), "Alpha | Beta");
    }

    #[test]
    fn each_assembler_is_independent() {
        let pairs: Vec<_> = Combinations::of(abc())
            .min_size(1)
            .max_size(1)
            .generate()
            .unwrap()
            .collect();

        let mut first = pairs[0].1.clone();
        first.disable("a");
        assert_eq!(pairs[1].1.render(&Substitutions::new()), "Beta");
    }

    #[test]
    fn min_size_zero_rejected() {
        assert_eq!(
            Combinations::of(abc()).min_size(0).generate().err(),
            Some(CombinationError::MinSizeZero)
        );
        assert_eq!(count(3, 0, None), Err(CombinationError::MinSizeZero));
    }

    #[test]
    fn min_greater_than_max_rejected() {
        assert_eq!(
            Combinations::of(abc()).min_size(3).max_size(2).generate().err(),
            Some(CombinationError::MinExceedsMax { min: 3, max: 2 })
        );
    }

    #[test]
    fn oversized_max_clamped_not_error() {
        let pairs: Vec<_> = Combinations::of(abc())
            .max_size(99)
            .generate()
            .unwrap()
            .collect();
        assert_eq!(pairs.len() as u64, count(3, 1, Some(99)).unwrap());
        assert_eq!(pairs.len(), 7);
    }

    #[test]
    fn min_beyond_unit_count_rejected_after_clamp() {
        // max clamps to |units| = 3, so min_size 4 cannot be satisfied.
        assert_eq!(
            Combinations::of(abc()).min_size(4).generate().err(),
            Some(CombinationError::MinExceedsMax { min: 4, max: 3 })
        );
    }

    #[test]
    fn empty_input_rejected_for_any_min() {
        assert_eq!(
            Combinations::of(Vec::new()).generate().err(),
            Some(CombinationError::MinExceedsMax { min: 1, max: 0 })
        );
        assert_eq!(
            count(0, 1, None),
            Err(CombinationError::MinExceedsMax { min: 1, max: 0 })
        );
    }

    #[test]
    fn count_matches_generated_for_small_n() {
        for n in [1usize, 3, 5] {
            let units: Vec<PromptUnit> = (0..n)
                .map(|i| PromptUnit::new(format!("u{i}"), "x"))
                .collect();
            for min_size in 1..=n {
                for max_size in min_size..=n {
                    let generated = Combinations::of(units.clone())
                        .min_size(min_size)
                        .max_size(max_size)
                        .generate()
                        .unwrap()
                        .count() as u64;
                    assert_eq!(
                        generated,
                        count(n, min_size, Some(max_size)).unwrap(),
                        "n={n} min={min_size} max={max_size}"
                    );
                }
            }
        }
    }

    #[test]
    fn builder_count_matches_free_count() {
        let combos = Combinations::of(abc()).min_size(2);
        assert_eq!(combos.count().unwrap(), count(3, 2, None).unwrap());
    }

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(5, 5), 1);
        assert_eq!(binomial(3, 4), 0);
        assert_eq!(binomial(20, 10), 184_756);
    }
}
