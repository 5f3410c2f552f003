use aoc_framework::grid::Grid;
use aoc_framework::grid::region::{Region, find_regions};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "Day 12: Garden Groups",
    parsed = Garden,
    part_one = Day12,
    part_two = Day12
)]
impl super::AdventOfCode2024<12> {}

/*
Input is a character grid of garden plots, each letter being the plant type growing there.

Plots of the same plant type that touch horizontally or vertically form a region. The same plant
type can appear in multiple separate regions.
*/

struct Garden {
    regions: Vec<Region>,
}

#[derive(thiserror::Error, Debug)]
enum Day12Error {
    #[error("invalid plant in garden: {0:?}")]
    InvalidPlant(char),

    #[error("overflow pricing fences")]
    PriceOverflow,
}

impl ParseData for Garden {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let plots = Grid::parse_chars(input, |_, plant| {
            if plant.is_ascii_alphabetic() {
                Ok(plant)
            } else {
                Err(Day12Error::InvalidPlant(plant))
            }
        })?;
        Ok(Self {
            regions: find_regions(&plots),
        })
    }
}

impl Garden {
    /// Sum the price of fencing every region, where a region's price is its area times `measure`.
    fn total_price<F>(&self, mut measure: F) -> DynamicResult<usize>
    where
        F: FnMut(&Region) -> usize,
    {
        let price = self
            .regions
            .iter()
            .map(|region| region.area().checked_mul(measure(region)))
            .collect::<Option<Vec<_>>>()
            .and_then(|prices| prices.into_iter().checked_sum())
            .ok_or(Day12Error::PriceOverflow)?;
        Ok(price)
    }
}

/*
For part 1, the price of fence for a region is its area multiplied by its perimeter. The perimeter
is the number of sides of garden plots in the region that don't touch another plot in the same
region. Sum the fence prices of all regions.
*/

struct Day12;

impl Solution<PartOne> for Day12 {
    type Input = Garden;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input.total_price(Region::perimeter)
    }
}

/*
For part 2, a bulk discount prices a region's fence by its area multiplied by its number of sides.
Each straight section of fence counts as one side, however long it is.

A region has as many sides as it has corners.
*/

impl Solution<PartTwo> for Day12 {
    type Input = Garden;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input.total_price(Region::corner_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

    const SMALL_INPUT: &str = r"AAAA
BBCD
BBCC
EEEC
";

    const ENCLOSED_INPUT: &str = r"OOOOO
OXOXO
OOOOO
OXOXO
OOOOO
";

    #[test]
    fn finds_every_region() -> DynamicResult<()> {
        assert_eq!(Garden::parse(SMALL_INPUT)?.regions.len(), 5);
        assert_eq!(Garden::parse(EXAMPLE_INPUT)?.regions.len(), 11);
        Ok(())
    }

    #[test]
    fn part_one_solves_examples() -> DynamicResult<()> {
        for (input, expected) in [
            (SMALL_INPUT, 140),
            (ENCLOSED_INPUT, 772),
            (EXAMPLE_INPUT, 1930),
        ] {
            let parsed = Garden::parse(input)?;
            let result = <Day12 as Solution<PartOne>>::solve(&parsed)?;
            assert_eq!(result, expected);
        }
        Ok(())
    }

    #[test]
    fn part_two_solves_examples() -> DynamicResult<()> {
        let e_shape = "EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE\n";
        let inner_corners = "AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA\n";
        for (input, expected) in [
            (SMALL_INPUT, 80),
            (ENCLOSED_INPUT, 436),
            (e_shape, 236),
            (inner_corners, 368),
            (EXAMPLE_INPUT, 1206),
        ] {
            let parsed = Garden::parse(input)?;
            let result = <Day12 as Solution<PartTwo>>::solve(&parsed)?;
            assert_eq!(result, expected);
        }
        Ok(())
    }

    #[test]
    fn rejects_non_plants() {
        assert!(Garden::parse("AB\nA.\n").is_err());
    }
}
