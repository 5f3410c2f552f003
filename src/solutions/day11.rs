use std::collections::HashMap;

use aoc_framework::parsing::{InputScanner, parse_whitespace_separated};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "Day 11: Plutonian Pebbles",
    parsed = Stones,
    part_one = Day11,
    part_two = Day11
)]
impl super::AdventOfCode2024<11> {}

/*
Input is a single line of numbers engraved on stones, separated by spaces.
*/

type Stone = u64;

struct Stones(Vec<Stone>);

#[derive(thiserror::Error, Debug)]
enum Day11Error {
    #[error("input has no line of stones")]
    NoStones,

    #[error("expected a single line of stones, but found more on line {}", .0 + 1)]
    ExtraLine(usize),

    #[error("stone {0} is too large to multiply by 2024")]
    StoneOverflow(Stone),

    #[error("overflow counting stones")]
    CountOverflow,
}

impl ParseData for Stones {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);
        let stones = scanner
            .next_item(|_, line| parse_whitespace_separated(line))?
            .ok_or(Day11Error::NoStones)?;
        if let Some(line_index) = scanner.skip_empty() {
            return Err(Day11Error::ExtraLine(line_index).into());
        }
        Ok(Self(stones))
    }
}

/*
Every time you blink, the stones each simultaneously change according to the first applicable rule:
- If the stone is engraved with the number 0, it is replaced by a stone engraved with the number 1.
- If the stone is engraved with a number that has an even number of digits, it is replaced by two
  stones. The left half of the digits are engraved on the new left stone, and the right half of the
  digits are engraved on the new right stone. (Leading zeroes are dropped.)
- Otherwise, the stone is replaced by a new stone; the old stone's number multiplied by 2024 is
  engraved on the new stone.

Order is preserved, but doesn't matter for counting.

For part 1, count the stones after blinking 25 times.
*/

/// What a single stone becomes after one blink.
#[derive(Debug, PartialEq, Eq)]
enum Blinked {
    One(Stone),
    Two(Stone, Stone),
}

fn blink(stone: Stone) -> Result<Blinked, Day11Error> {
    if stone == 0 {
        return Ok(Blinked::One(1));
    }

    let digit_count = stone.ilog10() + 1;
    if digit_count % 2 == 0 {
        let half = 10_u64.pow(digit_count / 2);
        Ok(Blinked::Two(stone / half, stone % half))
    } else {
        stone
            .checked_mul(2024)
            .map(Blinked::One)
            .ok_or(Day11Error::StoneOverflow(stone))
    }
}

/// Blink once over every stone, expanding the row of stones literally.
fn blink_row(stones: &[Stone]) -> Result<Vec<Stone>, Day11Error> {
    let mut next = Vec::with_capacity(stones.len() * 2);
    for &stone in stones {
        match blink(stone)? {
            Blinked::One(stone) => next.push(stone),
            Blinked::Two(left, right) => next.extend([left, right]),
        }
    }
    Ok(next)
}

fn count_after_blinks_literally(stones: &[Stone], blinks: u8) -> Result<usize, Day11Error> {
    let mut row = stones.to_vec();
    for _ in 0..blinks {
        row = blink_row(&row)?;
    }
    Ok(row.len())
}

/// Counts the stones a stone becomes, remembering counts by stone and blinks remaining.
///
/// Stones never affect each other, and the same few numbers come up over and over.
#[derive(Debug, Default)]
struct StoneCounter {
    cache: HashMap<(Stone, u8), u64>,
}

impl StoneCounter {
    fn count(&mut self, stone: Stone, blinks: u8) -> Result<u64, Day11Error> {
        let Some(remaining) = blinks.checked_sub(1) else {
            return Ok(1);
        };
        if let Some(&count) = self.cache.get(&(stone, blinks)) {
            return Ok(count);
        }

        let count = match blink(stone)? {
            Blinked::One(stone) => self.count(stone, remaining)?,
            Blinked::Two(left, right) => self
                .count(left, remaining)?
                .checked_add(self.count(right, remaining)?)
                .ok_or(Day11Error::CountOverflow)?,
        };
        self.cache.insert((stone, blinks), count);
        Ok(count)
    }

    fn count_all(&mut self, stones: &[Stone], blinks: u8) -> Result<u64, Day11Error> {
        stones
            .iter()
            .map(|&stone| self.count(stone, blinks))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .checked_sum()
            .ok_or(Day11Error::CountOverflow)
    }
}

struct Day11;

impl Day11 {
    const PART_ONE_BLINKS: u8 = 25;
    const PART_TWO_BLINKS: u8 = 75;
}

impl Solution<PartOne> for Day11 {
    type Input = Stones;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(count_after_blinks_literally(&input.0, Self::PART_ONE_BLINKS)?)
    }
}

/*
For part 2, count the stones after blinking 75 times. The row of stones grows far too large to
expand literally.
*/

impl Solution<PartTwo> for Day11 {
    type Input = Stones;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut counter = StoneCounter::default();
        Ok(counter.count_all(&input.0, Self::PART_TWO_BLINKS)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"125 17
";

    #[test]
    fn blink_applies_first_matching_rule() -> DynamicResult<()> {
        let row = blink_row(&[0, 1, 10, 99, 999])?;
        assert_eq!(row, [1, 2024, 1, 0, 9, 9, 2_021_976]);
        assert_eq!(blink(1000)?, Blinked::Two(10, 0));
        Ok(())
    }

    #[test]
    fn blink_fails_on_overflow() {
        // 19 digits, so it gets multiplied
        assert!(matches!(
            blink(1_000_000_000_000_000_000),
            Err(Day11Error::StoneOverflow(_))
        ));
    }

    #[test]
    fn example_row_after_six_blinks() -> DynamicResult<()> {
        let parsed = Stones::parse(EXAMPLE_INPUT)?;
        let mut row = parsed.0;
        for _ in 0..6 {
            row = blink_row(&row)?;
        }
        assert_eq!(
            row,
            [
                2_097_446_912,
                14168,
                4048,
                2,
                0,
                2,
                4,
                40,
                48,
                2024,
                40,
                48,
                80,
                96,
                2,
                8,
                6,
                7,
                6,
                0,
                3,
                2
            ]
        );
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Stones::parse(EXAMPLE_INPUT)?;
        let result = <Day11 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 55312);
        Ok(())
    }

    #[test]
    fn memoized_count_agrees_with_literal_expansion() -> DynamicResult<()> {
        let parsed = Stones::parse(EXAMPLE_INPUT)?;
        let mut counter = StoneCounter::default();

        assert_eq!(counter.count(125, 6)?, 7);
        assert_eq!(
            counter.count_all(&parsed.0, 6)?,
            u64::try_from(count_after_blinks_literally(&parsed.0, 6)?)?
        );
        assert_eq!(counter.count_all(&parsed.0, 25)?, 55312);

        let others = [0, 1, 10, 99, 999, 2024];
        assert_eq!(
            counter.count_all(&others, 20)?,
            u64::try_from(count_after_blinks_literally(&others, 20)?)?
        );
        Ok(())
    }

    #[test]
    fn zero_blinks_keeps_every_stone() -> DynamicResult<()> {
        let mut counter = StoneCounter::default();
        assert_eq!(counter.count_all(&[5, 0, 12], 0)?, 3);
        assert_eq!(count_after_blinks_literally(&[5, 0, 12], 0)?, 3);
        Ok(())
    }

    #[test]
    fn repeated_counts_are_stable() -> DynamicResult<()> {
        let parsed = Stones::parse(EXAMPLE_INPUT)?;
        let first = <Day11 as Solution<PartTwo>>::solve(&parsed)?;
        let second = <Day11 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(first, second);
        assert!(first > 55312);
        Ok(())
    }

    #[test]
    fn parse_requires_one_line() {
        assert!(Stones::parse("").is_err());
        assert!(Stones::parse("1 2\n3\n").is_err());
        assert!(Stones::parse("1 x").is_err());
    }
}
