use std::collections::HashSet;

use aoc_framework::grid::{Direction, Grid, Location, Move};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 10: Hoof It",
    parsed = TopographicMap,
    part_one = Day10,
    part_two = Day10
)]
impl super::AdventOfCode2024<10> {}

/*
Input is a character grid of heights from 0 (lowest) to 9 (highest). Some maps mark impassable
tiles with `.` instead of a height.
*/

type Height = u8;

struct TopographicMap(Grid<Option<Height>>);

#[derive(thiserror::Error, Debug)]
#[error("invalid character in topographic map: {0:?}")]
struct InvalidHeightChar(char);

impl ParseData for TopographicMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let grid = Grid::parse_chars(input, |_, character| match character {
            '.' => Ok(None),
            _ => character
                .to_digit(10)
                .map(|digit| Some(Height::try_from(digit).expect("digit should fit in height")))
                .ok_or(InvalidHeightChar(character)),
        })?;
        Ok(Self(grid))
    }
}

/*
A hiking trail is any path that starts at height 0, ends at height 9, and always increases by a
height of exactly 1 at each step. Steps are only up, down, left, or right.

A trailhead is any position that starts one or more hiking trails.

For part 1, a trailhead's score is the number of 9-height positions reachable from it. Sum the
scores of all trailheads.
*/

impl TopographicMap {
    const TRAILHEAD: Height = 0;
    const SUMMIT: Height = 9;

    fn height(&self, location: Location) -> Option<Height> {
        self.0.get(location).ok().copied().flatten()
    }

    fn trailheads(&self) -> impl Iterator<Item = Location> {
        self.0
            .iter()
            .filter(|&(_, &height)| height == Some(Self::TRAILHEAD))
            .map(|(location, _)| location)
    }

    /// Push the end of every distinct trail continuing from `location`, one entry per trail.
    fn collect_trail_ends(&self, location: Location, ends: &mut Vec<Location>) {
        let Some(height) = self.height(location) else {
            return;
        };
        if height == Self::SUMMIT {
            ends.push(location);
            return;
        }

        for neighbor in location.neighbors(&Direction::CARDINAL) {
            if self.height(neighbor) == Some(height + 1) {
                self.collect_trail_ends(neighbor, ends);
            }
        }
    }

    fn trail_ends(&self, trailhead: Location) -> Vec<Location> {
        let mut ends = Vec::new();
        self.collect_trail_ends(trailhead, &mut ends);
        ends
    }
}

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = TopographicMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let score_sum = input
            .trailheads()
            .map(|trailhead| {
                input
                    .trail_ends(trailhead)
                    .into_iter()
                    .collect::<HashSet<_>>()
                    .len()
            })
            .sum();
        Ok(score_sum)
    }
}

/*
For part 2, a trailhead's rating is the number of distinct hiking trails which begin at it. Sum the
ratings of all trailheads.
*/

impl Solution<PartTwo> for Day10 {
    type Input = TopographicMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let rating_sum = input
            .trailheads()
            .map(|trailhead| input.trail_ends(trailhead).len())
            .sum();
        Ok(rating_sum)
    }
}
