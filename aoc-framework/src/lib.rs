//! Traits, runner, and grid utilities for solving Advent of Code puzzles.
//!
//! A day's solution is split into a parse step ([`ParseData`]) and one [`Solution`] per part. The
//! [`runner`] module drives both steps and reports progress through an
//! [`OutputHandler`][runner::OutputHandler]. Most 2024 puzzles read a dense character map, which
//! the [`grid`] module models.
//!
//! # Quick Start
//!
//! Parse a character map into a [`Grid`][grid::Grid]:
//!
//! ```
//! # use aoc_framework::{DynamicResult, ParseData};
//! use aoc_framework::grid::Grid;
//!
//! struct Garden(Grid<char>);
//!
//! impl ParseData for Garden {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let grid = Grid::parse_chars(input, |_, plant| -> DynamicResult<_> { Ok(plant) })?;
//!         Ok(Self(grid))
//!     }
//! }
//! ```
//!
//! Then solve a part against the parsed input:
//!
//! ```
//! # use aoc_framework::{DynamicResult, ParseData, PartOne, Solution};
//! # use aoc_framework::grid::Grid;
//! #
//! # struct Garden(Grid<char>);
//! # impl ParseData for Garden {
//! #     fn parse(input: &str) -> DynamicResult<Self> {
//! #         Ok(Self(Grid::parse_chars(input, |_, plant| -> DynamicResult<_> { Ok(plant) })?))
//! #     }
//! # }
//! use aoc_framework::grid::region::find_regions;
//!
//! struct Day12;
//!
//! impl Solution<PartOne> for Day12 {
//!     type Input = Garden;
//!     type Output = usize;
//!
//!     fn solve(input: &Self::Input) -> DynamicResult<usize> {
//!         Ok(find_regions(&input.0).len())
//!     }
//! }
//!
//! let garden = Garden::parse("AAB\nABB\n")?;
//! assert_eq!(<Day12 as Solution<PartOne>>::solve(&garden)?, 2);
//! # Ok::<(), aoc_framework::DynamicError>(())
//! ```
//!
//! A solution that needs no parse step can take the raw string with `Input = str`:
//!
//! ```
//! use aoc_framework::{DynamicResult, PartOne, Solution};
//!
//! struct LineCount;
//!
//! impl Solution<PartOne> for LineCount {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.lines().count())
//!     }
//! }
//! ```

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod grid;
pub mod parsing;
pub mod runner;

mod private {
    /// Seals [`Part`][super::Part] so only the two puzzle parts exist.
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`DynamicError`] as an error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// An enum to identify a solution part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// A marker for which puzzle part a [`Solution`] answers.
pub trait Part: private::Sealed {
    /// Get the related [`PartKind`] for this part.
    fn kind() -> PartKind;
}

/// Marks a [`Solution`] for part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Marks a [`Solution`] for part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A solver for one [`Part`] of a day's puzzle.
///
/// A day usually implements this twice on the same struct, for [`PartOne`] and [`PartTwo`],
/// sharing one parsed [`Solution::Input`].
pub trait Solution<P: Part> {
    /// The input data type passed to the solution.
    ///
    /// Set to `str` to receive the raw input, or to a [`ParseData`] type.
    type Input: ?Sized;

    /// The answer type.
    type Output: Display;

    /// Solve the part for the given input.
    ///
    /// # Errors
    ///
    /// Invalid input or a failed precondition of the puzzle is returned as a dynamically
    /// dispatched error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// A data structure built by parsing the puzzle's input text.
pub trait ParseData {
    /// Parse an input string into an instance of self.
    ///
    /// # Errors
    ///
    /// If parsing fails, the resulting error is returned as a dynamically dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}
