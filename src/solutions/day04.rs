use aoc_framework::grid::{Direction, Grid, Location, Move};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 4: Ceres Search",
    parsed = WordSearch,
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2024<4> {}

/*
Input is a word search: a grid of uppercase letters.
*/

struct WordSearch(Grid<char>);

#[derive(thiserror::Error, Debug)]
enum ParseWordSearchError {
    #[error("word search should only contain uppercase letters, found {0:?}")]
    InvalidLetter(char),
}

impl ParseData for WordSearch {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let grid = Grid::parse_chars(input, |_, letter| {
            if letter.is_ascii_uppercase() {
                Ok(letter)
            } else {
                Err(ParseWordSearchError::InvalidLetter(letter))
            }
        })?;
        Ok(Self(grid))
    }
}

impl WordSearch {
    /// Check if `word` reads forwards or backwards from `start` stepping in `direction`.
    fn reads_either_way(&self, start: Location, direction: Direction, word: &str) -> bool {
        let Some(letters) = self.0.collect_line(start, direction, word.len()) else {
            return false;
        };
        let letters = || letters.iter().map(|&&letter| letter);
        letters().eq(word.chars()) || letters().eq(word.chars().rev())
    }
}

/*
For part 1, count every occurrence of `XMAS`. Words can be horizontal, vertical, diagonal, written
backwards, or overlap other words.
*/

struct Day04;

impl Day04 {
    const WORD: &str = "XMAS";

    /// Half of the compass; the other half is covered by reading each line backwards.
    const LINE_DIRECTIONS: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    const CROSS_WORD: &str = "MAS";
}

impl Solution<PartOne> for Day04 {
    type Input = WordSearch;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut count = 0;
        input.0.traverse(|location, _| {
            count += Self::LINE_DIRECTIONS
                .iter()
                .filter(|&&direction| input.reads_either_way(location, direction, Self::WORD))
                .count();
        });
        Ok(count)
    }
}

/*
For part 2, the puzzle is actually to find two `MAS` in the shape of an X, each of which can be
written backwards:

M.S
.A.
M.S
*/

impl Solution<PartTwo> for Day04 {
    type Input = WordSearch;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        // each location is the top-left corner of a candidate X
        let cross_width = i32::try_from(Self::CROSS_WORD.len())? - 1;
        let count = input
            .0
            .locations()
            .filter(|&location| {
                input.reads_either_way(location, Direction::SouthEast, Self::CROSS_WORD)
                    && input.reads_either_way(
                        location.moved_by(Direction::East, cross_width),
                        Direction::SouthWest,
                        Self::CROSS_WORD,
                    )
            })
            .count();
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = WordSearch::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 18);
        Ok(())
    }

    #[test]
    fn part_one_reads_all_directions() -> DynamicResult<()> {
        // forwards and backwards along the top row, then down both sides
        let input = "XMASAMX\nM.....M\nA.....A\nS.....S\n";
        let parsed = WordSearch::parse(&input.replace('.', "Z"))?;
        let result = <Day04 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 4);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = WordSearch::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 9);
        Ok(())
    }

    #[test]
    fn rejects_non_letters() {
        assert!(WordSearch::parse("XM\nA.\n").is_err());
    }
}
