//! Connected regions of alike cells in a [`Grid`], found by flood fill.

use std::collections::HashSet;

use super::{Direction, Grid, Location, Move};

/// For each corner of a cell, the two cardinal directions bordering it and the diagonal between
/// them.
const CORNERS: [(Direction, Direction, Direction); 4] = [
    (Direction::North, Direction::East, Direction::NorthEast),
    (Direction::East, Direction::South, Direction::SouthEast),
    (Direction::South, Direction::West, Direction::SouthWest),
    (Direction::West, Direction::North, Direction::NorthWest),
];

/// A maximal set of locations connected through cardinal neighbors with alike cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    locations: HashSet<Location>,
}

impl Region {
    /// The number of cells in the region.
    #[must_use]
    pub fn area(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        self.locations.contains(&location)
    }

    pub fn locations(&self) -> impl Iterator<Item = Location> {
        self.locations.iter().copied()
    }

    /// The length of the region's boundary: for every cell, 4 minus its neighbors in the region.
    #[must_use]
    pub fn perimeter(&self) -> usize {
        self.locations()
            .map(|location| {
                let inside = location
                    .neighbors(&Direction::CARDINAL)
                    .filter(|&neighbor| self.contains(neighbor))
                    .count();
                4 - inside
            })
            .sum()
    }

    /// The number of corners on the region's boundary, which equals its number of straight sides.
    ///
    /// A cell has a convex corner where both bordering neighbors are outside the region, and a
    /// concave corner where both are inside but the diagonal between them is outside.
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.locations()
            .map(|location| {
                CORNERS
                    .iter()
                    .filter(|&&(first, second, diagonal)| {
                        let first_inside = self.contains(location.moved(first));
                        let second_inside = self.contains(location.moved(second));
                        (!first_inside && !second_inside)
                            || (first_inside
                                && second_inside
                                && !self.contains(location.moved(diagonal)))
                    })
                    .count()
            })
            .sum()
    }
}

/// Partition a grid into regions of equal cells.
pub fn find_regions<T: PartialEq>(grid: &Grid<T>) -> Vec<Region> {
    find_regions_by(grid, T::eq)
}

/// Partition a grid into regions, where neighboring cells belong together when `alike` holds.
///
/// `alike` should be an equivalence relation. Every location ends up in exactly one region;
/// regions are ordered by their first location in row-major order.
pub fn find_regions_by<T, F>(grid: &Grid<T>, mut alike: F) -> Vec<Region>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut visited = HashSet::new();
    let mut regions = Vec::new();

    for (start, start_cell) in grid.iter() {
        if !visited.insert(start) {
            continue;
        }

        let mut locations = HashSet::from([start]);
        let mut stack = vec![start];
        while let Some(location) = stack.pop() {
            for neighbor in location.neighbors(&Direction::CARDINAL) {
                if let Ok(cell) = grid.get(neighbor)
                    && alike(start_cell, cell)
                    && visited.insert(neighbor)
                {
                    locations.insert(neighbor);
                    stack.push(neighbor);
                }
            }
        }

        regions.push(Region { locations });
    }

    regions
}
