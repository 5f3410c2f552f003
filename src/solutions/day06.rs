use std::collections::HashSet;

use aoc_framework::grid::{Direction, Grid, Location, Move};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use rayon::prelude::*;

#[solution_runner(
    name = "Day 6: Guard Gallivant",
    parsed = GuardMap,
    part_one = Day06,
    part_two = Day06
)]
impl super::AdventOfCode2024<6> {}

/*
Input is a character grid of a lab: `#` for obstacles, `.` for open floor, and `^` for the single
guard, who starts facing north.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Open,
    Obstacle,
}

#[derive(Debug, Clone)]
struct GuardMap {
    cells: Grid<Cell>,
    guard_start: Location,
}

#[derive(thiserror::Error, Debug)]
enum ParseGuardMapError {
    #[error("invalid character in lab map: {0:?}")]
    InvalidChar(char),

    #[error("no starting guard location in lab map")]
    MissingGuard,

    #[error("found a second guard at {second}, after the first at {first}")]
    SecondGuard { first: Location, second: Location },
}

impl ParseData for GuardMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut guard_opt = None;
        let cells = Grid::parse_chars(input, |location, character| match character {
            '.' => Ok(Cell::Open),
            '#' => Ok(Cell::Obstacle),
            '^' => {
                if let Some(first) = guard_opt {
                    return Err(ParseGuardMapError::SecondGuard {
                        first,
                        second: location,
                    });
                }
                guard_opt = Some(location);
                Ok(Cell::Open)
            }
            _ => Err(ParseGuardMapError::InvalidChar(character)),
        })?;

        Ok(Self {
            cells,
            guard_start: guard_opt.ok_or(ParseGuardMapError::MissingGuard)?,
        })
    }
}

/*
The guard walks forward until something is directly in front, then turns right 90 degrees. The
patrol ends once the guard steps off the map.

For part 1, count the distinct locations the guard visits, including the start.
*/

/// How a guard's patrol ends.
#[derive(Debug)]
enum Patrol {
    /// The guard left the map, having visited these locations.
    Exits(HashSet<Location>),
    /// The guard came back to a location facing the same way, so walks forever.
    Loops,
}

impl GuardMap {
    /// Walk the guard's patrol, optionally with one more obstacle placed on the map.
    fn patrol(&self, added_obstacle: Option<Location>) -> DynamicResult<Patrol> {
        let mut location = self.guard_start;
        let mut facing = Direction::North;
        let mut states = HashSet::from([(location, facing)]);

        loop {
            let ahead = location.moved(facing);
            if !self.cells.contains(ahead) {
                break;
            }

            if added_obstacle == Some(ahead) || *self.cells.get(ahead)? == Cell::Obstacle {
                facing = facing.turn_right()?;
            } else {
                location = ahead;
            }

            if !states.insert((location, facing)) {
                return Ok(Patrol::Loops);
            }
        }

        Ok(Patrol::Exits(
            states.into_iter().map(|(location, _)| location).collect(),
        ))
    }

    /// The locations visited on the unobstructed patrol.
    fn visited(&self) -> DynamicResult<HashSet<Location>> {
        match self.patrol(None)? {
            Patrol::Exits(visited) => Ok(visited),
            Patrol::Loops => Err("guard patrol loops without any added obstacle".into()),
        }
    }

    /// Open locations where an added obstacle could change the patrol.
    ///
    /// An obstacle off the unobstructed path is never walked into, and the guard's start is
    /// occupied.
    fn obstacle_candidates(&self) -> DynamicResult<Vec<Location>> {
        let mut candidates = self
            .visited()?
            .into_iter()
            .filter(|&location| location != self.guard_start)
            .collect::<Vec<_>>();
        candidates.sort_unstable_by_key(|location| (location.y, location.x));
        Ok(candidates)
    }

    fn loops_with_obstacle(&self, obstacle: Location) -> DynamicResult<bool> {
        Ok(matches!(self.patrol(Some(obstacle))?, Patrol::Loops))
    }
}

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = GuardMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.visited()?.len())
    }
}

/*
For part 2, count the locations where placing a single new obstacle would trap the guard in a loop.
The new obstacle can't be placed at the guard's starting location.
*/

impl Solution<PartTwo> for Day06 {
    type Input = GuardMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        // every candidate walks its own patrol against the shared map
        let loops = input
            .obstacle_candidates()?
            .into_par_iter()
            .map(|candidate| input.loops_with_obstacle(candidate))
            .collect::<DynamicResult<Vec<bool>>>()?;
        Ok(loops.into_iter().filter(|&looped| looped).count())
    }
}
