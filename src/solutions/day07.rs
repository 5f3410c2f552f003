use aoc_framework::parsing::{parse_input_lines, parse_whitespace_separated, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use regex::Regex;

#[solution_runner(
    name = "Day 7: Bridge Repair",
    parsed = Equations,
    part_one = Day07,
    part_two = Day07
)]
impl super::AdventOfCode2024<7> {}

/*
Input is a list of calibration equations, one per line: a test value, a colon, then the numbers to
combine with the operators that were stolen.

190: 10 19
*/

#[derive(Debug, Clone, PartialEq, Eq)]
struct Equation {
    test_value: u64,
    operands: Vec<u64>,
}

#[derive(thiserror::Error, Debug)]
enum Day07Error {
    #[error("line is not a calibration equation: {0:?}")]
    NotEquation(String),

    #[error("overflow summing test values")]
    SumOverflow,
}

struct EquationParser {
    /// Regex for capturing the test value & operand list.
    equation_re: Regex,
}

impl EquationParser {
    const EQUATION_PATTERN: &str = r"^(\d+):((?: +\d+)+)$";

    fn new() -> Self {
        let equation_re = Regex::new(Self::EQUATION_PATTERN).expect("pattern should be valid");
        Self { equation_re }
    }

    fn parse(&self, line: &str) -> DynamicResult<Equation> {
        let captures = self
            .equation_re
            .captures(line)
            .ok_or_else(|| Day07Error::NotEquation(line.to_owned()))?;
        let test_value_match = captures
            .get(1)
            .expect("test value should be in capture group 1");
        let operands_match = captures
            .get(2)
            .expect("operands should be in capture group 2");

        Ok(Equation {
            test_value: parse_with_context(test_value_match.as_str())?,
            operands: parse_whitespace_separated(operands_match.as_str())?,
        })
    }
}

struct Equations(Vec<Equation>);

impl ParseData for Equations {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let parser = EquationParser::new();
        let equations =
            parse_input_lines(input, |_, line| parser.parse(line)).collect::<Result<_, _>>()?;
        Ok(Self(equations))
    }
}

/*
Operators are always evaluated left-to-right, not according to precedence rules. Numbers in the
equations can't be rearranged.

For part 1, determine which equations could be true by placing add (`+`) or multiply (`*`) between
the numbers. Then, sum the test values of those equations.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Multiply,
    /// Join the digits of the left and right numbers, so `12 || 345` is `12345`.
    Concatenate,
}

/// The number of decimal digits in a number, where zero has one digit.
fn digit_count(number: u64) -> u32 {
    number.checked_ilog10().map_or(1, |log| log + 1)
}

impl Operator {
    /// Apply the operator, or `None` on overflow.
    fn apply(self, left: u64, right: u64) -> Option<u64> {
        match self {
            Self::Add => left.checked_add(right),
            Self::Multiply => left.checked_mul(right),
            Self::Concatenate => {
                let shift = 10_u64.checked_pow(digit_count(right))?;
                left.checked_mul(shift)?.checked_add(right)
            }
        }
    }
}

impl Equation {
    /// Check if some placement of `operators` between the operands evaluates to the test value.
    fn can_be_true(&self, operators: &[Operator]) -> bool {
        let Some((&first, rest)) = self.operands.split_first() else {
            return false;
        };
        // with no zero operand, no operator makes a running total smaller
        let prunable = !self.operands.contains(&0);
        self.search(first, rest, operators, prunable)
    }

    fn search(
        &self,
        total: u64,
        remaining: &[u64],
        operators: &[Operator],
        prunable: bool,
    ) -> bool {
        if prunable && total > self.test_value {
            return false;
        }

        match remaining.split_first() {
            None => total == self.test_value,
            Some((&next, rest)) => operators.iter().any(|operator| {
                operator
                    .apply(total, next)
                    .is_some_and(|new_total| self.search(new_total, rest, operators, prunable))
            }),
        }
    }
}

/// Sum the test values of equations that could be true with the given operators.
fn total_calibration(equations: &[Equation], operators: &[Operator]) -> DynamicResult<u64> {
    let total = equations
        .iter()
        .filter(|equation| equation.can_be_true(operators))
        .map(|equation| equation.test_value)
        .checked_sum()
        .ok_or(Day07Error::SumOverflow)?;
    Ok(total)
}

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = Equations;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        total_calibration(&input.0, &[Operator::Add, Operator::Multiply])
    }
}

/*
For part 2, a third operator is available: concatenation (`||`), which combines the digits of its
left and right inputs into a single number.
*/

impl Solution<PartTwo> for Day07 {
    type Input = Equations;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        total_calibration(
            &input.0,
            &[Operator::Add, Operator::Multiply, Operator::Concatenate],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    const ALL_OPERATORS: [Operator; 3] =
        [Operator::Add, Operator::Multiply, Operator::Concatenate];

    fn equation(test_value: u64, operands: &[u64]) -> Equation {
        Equation {
            test_value,
            operands: operands.to_vec(),
        }
    }

    #[test]
    fn parses_equations() -> DynamicResult<()> {
        let parsed = Equations::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.0.len(), 9);
        assert_eq!(parsed.0[4], equation(7290, &[6, 8, 6, 15]));
        assert!(Equations::parse("190 10 19").is_err());
        assert!(Equations::parse("190:").is_err());
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Equations::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3749);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Equations::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 11387);
        Ok(())
    }

    #[test]
    fn operators_evaluate_left_to_right() {
        let add_multiply = [Operator::Add, Operator::Multiply];
        assert!(equation(190, &[10, 19]).can_be_true(&add_multiply));
        // 11 + 6 * 16 + 20 read left to right
        assert!(equation(292, &[11, 6, 16, 20]).can_be_true(&add_multiply));
        assert!(!equation(11, &[9, 7, 18]).can_be_true(&ALL_OPERATORS));
    }

    #[test]
    fn concatenation_joins_digits() {
        assert_eq!(Operator::Concatenate.apply(12, 345), Some(12345));
        assert_eq!(Operator::Concatenate.apply(5, 0), Some(50));
        assert_eq!(Operator::Concatenate.apply(u64::MAX, 1), None);
        assert!(equation(156, &[15, 6]).can_be_true(&ALL_OPERATORS));
        assert!(!equation(156, &[15, 6]).can_be_true(&[Operator::Add, Operator::Multiply]));
    }

    #[test]
    fn single_operand_must_equal_test_value() {
        assert!(equation(7, &[7]).can_be_true(&ALL_OPERATORS));
        assert!(!equation(7, &[8]).can_be_true(&ALL_OPERATORS));
    }

    #[test]
    fn zero_operand_can_shrink_total() {
        // 9 * 0 + 3
        assert!(equation(3, &[9, 0, 3]).can_be_true(&[Operator::Add, Operator::Multiply]));
    }
}
