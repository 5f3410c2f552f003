//! A fixed-size rectangular grid of cells addressed by [`Location`].
//!
//! Locations are [`Point2`]s where `x` is the column and `y` is the row, so the origin is the
//! top-left cell and [`Direction::South`] increases `y`. Moving a location never checks bounds;
//! use [`Grid::contains`] or the fallible [`Grid::get`] for that.

use std::fmt::Display;
use std::num::TryFromIntError;

use nalgebra::{Point2, Vector2};
use thiserror::Error;

use crate::parsing::parse_input_lines;
use crate::{DynamicError, DynamicResult};

pub mod region;

/// A location in a grid: `x` is the column and `y` is the row.
pub type Location = Point2<i32>;

/// A compass direction, including diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// An error turning a diagonal [`Direction`], which only cardinal directions support.
#[derive(Error, Debug)]
#[error("cannot turn from non-cardinal direction {0:?}")]
pub struct NotCardinalError(pub Direction);

impl Direction {
    /// The four cardinal directions, clockwise from north.
    pub const CARDINAL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// All eight directions, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// The unit offset of one step in this direction.
    #[must_use]
    pub fn to_vector2(self) -> Vector2<i32> {
        match self {
            Self::North => Vector2::new(0, -1),
            Self::NorthEast => Vector2::new(1, -1),
            Self::East => Vector2::new(1, 0),
            Self::SouthEast => Vector2::new(1, 1),
            Self::South => Vector2::new(0, 1),
            Self::SouthWest => Vector2::new(-1, 1),
            Self::West => Vector2::new(-1, 0),
            Self::NorthWest => Vector2::new(-1, -1),
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }

    #[must_use]
    pub fn is_cardinal(self) -> bool {
        Self::CARDINAL.contains(&self)
    }

    /// Rotate 90 degrees clockwise.
    ///
    /// # Errors
    ///
    /// A [`NotCardinalError`] is returned for diagonal directions.
    pub fn turn_right(self) -> Result<Self, NotCardinalError> {
        match self {
            Self::North => Ok(Self::East),
            Self::East => Ok(Self::South),
            Self::South => Ok(Self::West),
            Self::West => Ok(Self::North),
            _ => Err(NotCardinalError(self)),
        }
    }
}

/// Movement of a [`Location`] by [`Direction`]s, without any bounds checking.
pub trait Move: Copy {
    /// The location `distance` steps away in `direction`.
    #[must_use]
    fn moved_by(self, direction: Direction, distance: i32) -> Self;

    /// The adjacent location in `direction`.
    #[must_use]
    fn moved(self, direction: Direction) -> Self {
        self.moved_by(direction, 1)
    }

    /// The adjacent locations in each of `directions`, in the same order.
    fn neighbors(self, directions: &[Direction]) -> impl Iterator<Item = Self> {
        directions.iter().map(move |&direction| self.moved(direction))
    }
}

impl Move for Location {
    fn moved_by(self, direction: Direction, distance: i32) -> Self {
        self + direction.to_vector2() * distance
    }
}

/// An error constructing or accessing a [`Grid`].
#[derive(Error, Debug)]
pub enum GridError {
    #[error("too many rows to represent y coordinate")]
    RowIndexOverflow(#[source] TryFromIntError),

    #[error("too many columns to represent x coordinate")]
    ColumnIndexOverflow(#[source] TryFromIntError),

    #[error("expected grid width to be {expected} across rows, but row {row} has width {found}")]
    UnequalRowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("location is out of the grid bounds: {0}")]
    OutOfBounds(Location),
}

/// A rectangular, mutable 2D array of cells stored in row-major order.
///
/// Every row has the same width; this is checked when the grid is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// - [`GridError::UnequalRowWidth`] if any row differs in width from the first row.
    /// - [`GridError::RowIndexOverflow`] or [`GridError::ColumnIndexOverflow`] if a dimension
    ///   doesn't fit a [`Location`] coordinate.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width_opt = None;
        let mut row_count = 0;

        for (row_index, row) in rows.into_iter().enumerate() {
            let row_start = cells.len();
            cells.extend(row);
            let row_width = cells.len() - row_start;

            match width_opt {
                None => width_opt = Some(row_width),
                Some(expected) if expected != row_width => {
                    return Err(GridError::UnequalRowWidth {
                        row: row_index,
                        expected,
                        found: row_width,
                    });
                }
                Some(_) => {}
            }
            row_count = row_index + 1;
        }

        Ok(Self {
            // no rows means no width either
            width: i32::try_from(width_opt.unwrap_or(0))
                .map_err(GridError::ColumnIndexOverflow)?,
            height: i32::try_from(row_count).map_err(GridError::RowIndexOverflow)?,
            cells,
        })
    }

    /// Parse a dense character grid, one row per input line.
    ///
    /// `parse_cell` is called with each character and the location it will occupy.
    ///
    /// # Errors
    ///
    /// An error from `parse_cell` is returned wrapped with the failing line, as is any
    /// [`GridError`] from building the grid.
    pub fn parse_chars<E, F>(input: &str, mut parse_cell: F) -> DynamicResult<Self>
    where
        E: Into<DynamicError>,
        F: FnMut(Location, char) -> Result<T, E>,
    {
        let rows = parse_input_lines(input, |row_index, line| -> DynamicResult<Vec<T>> {
            let y = i32::try_from(row_index).map_err(GridError::RowIndexOverflow)?;
            line.chars()
                .enumerate()
                .map(|(column_index, character)| -> DynamicResult<T> {
                    let x = i32::try_from(column_index).map_err(GridError::ColumnIndexOverflow)?;
                    parse_cell(Location::new(x, y), character).map_err(Into::into)
                })
                .collect()
        })
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_rows(rows)?)
    }

    /// The number of columns.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The number of rows.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check whether the location lies within `[0, width) × [0, height)`.
    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        (0..self.width).contains(&location.x) && (0..self.height).contains(&location.y)
    }

    fn index_of(&self, location: Location) -> Option<usize> {
        if !self.contains(location) {
            return None;
        }
        let x = usize::try_from(location.x).ok()?;
        let y = usize::try_from(location.y).ok()?;
        let width = usize::try_from(self.width).ok()?;
        Some(y * width + x)
    }

    /// Get the cell at a location.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if the grid doesn't contain the location.
    pub fn get(&self, location: Location) -> Result<&T, GridError> {
        self.index_of(location)
            .and_then(|index| self.cells.get(index))
            .ok_or(GridError::OutOfBounds(location))
    }

    /// Get the cell at a location for mutation.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if the grid doesn't contain the location.
    pub fn get_mut(&mut self, location: Location) -> Result<&mut T, GridError> {
        self.index_of(location)
            .and_then(|index| self.cells.get_mut(index))
            .ok_or(GridError::OutOfBounds(location))
    }

    /// Replace the cell at a location, returning the previous cell.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if the grid doesn't contain the location.
    pub fn set(&mut self, location: Location, value: T) -> Result<T, GridError> {
        self.get_mut(location)
            .map(|cell| std::mem::replace(cell, value))
    }

    /// Collect `count` cells in a line, starting at `from` and stepping in `direction`.
    ///
    /// Returns `None` if the line leaves the grid before `count` cells are collected.
    #[must_use]
    pub fn collect_line(
        &self,
        from: Location,
        direction: Direction,
        count: usize,
    ) -> Option<Vec<&T>> {
        (0..count)
            .map(|step| {
                let distance = i32::try_from(step).ok()?;
                self.get(from.moved_by(direction, distance)).ok()
            })
            .collect()
    }

    /// Iterate every location in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + use<T> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Location::new(x, y)))
    }

    /// Iterate every location with its cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &T)> {
        self.locations().zip(&self.cells)
    }

    /// Visit every location with its cell exactly once, in row-major order.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(Location, &T),
    {
        for (location, cell) in self.iter() {
            visit(location, cell);
        }
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (location, cell) in self.iter() {
            if location.x == 0 && location.y > 0 {
                writeln!(f)?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> DynamicResult<Grid<char>> {
        Grid::parse_chars("abc\ndef\n", |_, c| -> DynamicResult<_> { Ok(c) })
    }

    #[test]
    fn get_returns_parsed_cells() -> DynamicResult<()> {
        let grid = letters()?;
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);

        let rows = ["abc", "def"];
        for (y, row) in rows.iter().enumerate() {
            for (x, expected) in row.chars().enumerate() {
                let location = Location::new(i32::try_from(x)?, i32::try_from(y)?);
                assert_eq!(*grid.get(location)?, expected);
            }
        }
        Ok(())
    }

    #[test]
    fn out_of_bounds_locations_are_rejected() -> DynamicResult<()> {
        let grid = letters()?;
        for location in [
            Location::new(-1, 0),
            Location::new(0, -1),
            Location::new(3, 0),
            Location::new(0, 2),
        ] {
            assert!(!grid.contains(location));
            assert!(matches!(grid.get(location), Err(GridError::OutOfBounds(l)) if l == location));
        }
        assert!(grid.contains(Location::new(2, 1)));
        Ok(())
    }

    #[test]
    fn unequal_rows_fail_to_build() {
        let result = Grid::from_rows([vec![1, 2], vec![3]]);
        assert!(matches!(
            result,
            Err(GridError::UnequalRowWidth {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn parse_failure_names_the_line() {
        let result = Grid::parse_chars("12\n3?", |_, c| c.to_string().parse::<u8>());
        let message = result.err().map(|e| e.to_string());
        assert_eq!(message.as_deref(), Some("failure parsing line 2"));
    }

    #[test]
    fn set_replaces_and_returns_previous() -> DynamicResult<()> {
        let mut grid = letters()?;
        let previous = grid.set(Location::new(1, 1), 'x')?;
        assert_eq!(previous, 'e');
        assert_eq!(grid.to_string(), "abc\ndxf");
        assert!(grid.set(Location::new(5, 5), 'y').is_err());
        Ok(())
    }

    #[test]
    fn collect_line_stops_at_edges() -> DynamicResult<()> {
        let grid = letters()?;
        let east = grid.collect_line(Location::new(0, 0), Direction::East, 3);
        assert_eq!(east, Some(vec![&'a', &'b', &'c']));

        let diagonal = grid.collect_line(Location::new(2, 0), Direction::SouthWest, 2);
        assert_eq!(diagonal, Some(vec![&'c', &'e']));

        assert_eq!(grid.collect_line(Location::new(1, 0), Direction::East, 3), None);
        assert_eq!(grid.collect_line(Location::new(0, 0), Direction::North, 2), None);
        Ok(())
    }

    #[test]
    fn traverse_visits_row_major_once() -> DynamicResult<()> {
        let grid = letters()?;
        let mut visited = Vec::new();
        grid.traverse(|location, &cell| visited.push((location, cell)));

        let expected: Vec<_> = "abcdef"
            .chars()
            .zip([(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)])
            .map(|(cell, (x, y))| (Location::new(x, y), cell))
            .collect();
        assert_eq!(visited, expected);
        Ok(())
    }

    #[test]
    fn moving_adds_direction_vectors() {
        let origin = Location::new(2, 2);
        assert_eq!(origin.moved(Direction::North), Location::new(2, 1));
        assert_eq!(origin.moved(Direction::SouthWest), Location::new(1, 3));
        assert_eq!(origin.moved_by(Direction::East, 3), Location::new(5, 2));
        // no bounds checking
        assert_eq!(origin.moved_by(Direction::NorthWest, 4), Location::new(-2, -2));
    }

    #[test]
    fn directions_turn_and_reverse() -> DynamicResult<()> {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            let sum = direction.to_vector2() + direction.opposite().to_vector2();
            assert_eq!(sum, Vector2::zeros());
        }

        let mut direction = Direction::North;
        for expected in [Direction::East, Direction::South, Direction::West, Direction::North] {
            direction = direction.turn_right()?;
            assert_eq!(direction, expected);
        }

        assert!(Direction::SouthEast.turn_right().is_err());
        assert!(!Direction::SouthEast.is_cardinal());
        Ok(())
    }
}
