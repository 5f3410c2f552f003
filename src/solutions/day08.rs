use std::collections::{BTreeMap, HashSet};

use aoc_framework::grid::{Grid, Location};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Vector2;

#[solution_runner(
    name = "Day 8: Resonant Collinearity",
    parsed = AntennaMap,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2024<8> {}

/*
Input is a character grid of antennas: each letter or digit is an antenna tuned to that frequency,
and `.` is empty space.
*/

#[derive(Debug)]
struct AntennaMap {
    /// The mapped area; cells hold the frequency of any antenna there.
    area: Grid<Option<char>>,
    /// Antenna locations grouped by frequency.
    antennas: BTreeMap<char, Vec<Location>>,
}

#[derive(thiserror::Error, Debug)]
#[error("invalid character in antenna map: {0:?}")]
struct InvalidAntennaChar(char);

impl ParseData for AntennaMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut antennas = BTreeMap::<char, Vec<Location>>::new();
        let area = Grid::parse_chars(input, |location, character| match character {
            '.' => Ok(None),
            _ if character.is_ascii_alphanumeric() => {
                antennas.entry(character).or_default().push(location);
                Ok(Some(character))
            }
            _ => Err(InvalidAntennaChar(character)),
        })?;
        Ok(Self { area, antennas })
    }
}

impl AntennaMap {
    /// Collect in-bounds antinodes over every ordered pair of same-frequency antennas.
    ///
    /// `antinodes_of` is given the pair as `(first, second)` and yields candidate locations; it
    /// should stop once a candidate leaves the area.
    fn count_antinodes<F, I>(&self, mut antinodes_of: F) -> usize
    where
        F: FnMut(Location, Location) -> I,
        I: IntoIterator<Item = Location>,
    {
        let mut antinodes = HashSet::new();
        for locations in self.antennas.values() {
            for &first in locations {
                for &second in locations {
                    if first == second {
                        continue;
                    }
                    antinodes.extend(
                        antinodes_of(first, second)
                            .into_iter()
                            .take_while(|&antinode| self.area.contains(antinode)),
                    );
                }
            }
        }
        antinodes.len()
    }
}

/*
An antinode occurs at any point perfectly in line with two antennas of the same frequency, where
one antenna is twice as far away as the other. So every pair of antennas has two antinodes, one on
either side of them.

For part 1, count the unique locations within the map's bounds that contain an antinode.
*/

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = AntennaMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        // the pair reversed gives the antinode on the other side
        Ok(input.count_antinodes(|first, second| [second + (second - first)]))
    }
}

/*
For part 2, an antinode occurs at any grid position exactly in line with at least two antennas of
the same frequency, regardless of distance. This includes the antennas themselves.
*/

impl Solution<PartTwo> for Day08 {
    type Input = AntennaMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.count_antinodes(|first, second| {
            let step: Vector2<i32> = second - first;
            std::iter::successors(Some(second), move |&antinode| Some(antinode + step))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn groups_antennas_by_frequency() -> DynamicResult<()> {
        let parsed = AntennaMap::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.antennas.len(), 2);
        assert_eq!(parsed.antennas[&'0'].len(), 4);
        assert_eq!(
            parsed.antennas[&'A'],
            [Location::new(6, 5), Location::new(8, 8), Location::new(9, 9)]
        );
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = AntennaMap::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 14);
        Ok(())
    }

    #[test]
    fn part_one_finds_both_sides_of_a_pair() -> DynamicResult<()> {
        let parsed = AntennaMap::parse("..........\n...a......\n.....a....\n..........\n")?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = AntennaMap::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 34);
        Ok(())
    }

    #[test]
    fn part_two_counts_lines_through_antennas() -> DynamicResult<()> {
        let input = r"T.........
...T......
.T........
..........
..........
..........
..........
..........
..........
..........
";
        let parsed = AntennaMap::parse(input)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 9);
        Ok(())
    }

    #[test]
    fn lone_antenna_has_no_antinodes() -> DynamicResult<()> {
        let parsed = AntennaMap::parse("...\n.x.\n...\n")?;
        assert_eq!(<Day08 as Solution<PartTwo>>::solve(&parsed)?, 0);
        Ok(())
    }
}
