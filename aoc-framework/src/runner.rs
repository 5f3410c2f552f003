//! Running a day's parse step and both parts, reporting progress to an [`OutputHandler`].
//!
//! A day is made runnable with the [`#[solution_runner]`][solution_runner] attribute:
//!
//! ```
//! # use aoc_framework::runner::solution_runner;
//! # use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
//! #
//! struct Stones(Vec<u64>);
//! # impl ParseData for Stones {
//! #     fn parse(_input: &str) -> DynamicResult<Self> {
//! #         Ok(Self(Vec::new()))
//! #     }
//! # }
//!
//! struct Day11;
//!
//! impl Solution<PartOne> for Day11 {
//!     type Input = Stones;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(input: &Stones) -> DynamicResult<usize> {
//! #        Ok(input.0.len())
//! #    }
//! }
//! # impl Solution<PartTwo> for Day11 {
//! #    type Input = Stones;
//! #    type Output = usize;
//! #    fn solve(input: &Stones) -> DynamicResult<usize> {
//! #        Ok(input.0.len())
//! #    }
//! # }
//!
//! #[solution_runner(name = "Day 11", parsed = Stones, part_one = Day11, part_two = Day11)]
//! struct Day11Runner;
//! ```

use std::fmt::Display;
use std::time::Duration;

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

// re-export procedural macro
pub use aoc_framework_macros::solution_runner;

/// Receives the events of running a solution, for display or logging.
pub trait OutputHandler {
    /// Called first, with the display name of the solution.
    fn solution_name(&mut self, name: &str);

    /// Called before the input is parsed.
    fn parse_start(&mut self);

    /// Called after the input is parsed, with the parse duration when timing is enabled.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// Called before a part is solved.
    fn part_start(&mut self, part: PartKind);

    /// Called with a part's answer, and its duration when timing is enabled.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Evaluate an expression once, returning its result and the elapsed
/// [`Duration`][std::time::Duration].
macro_rules! measure_duration {
    ($expr:expr) => {{
        let start = ::std::time::Instant::now();
        let result = $expr;
        let elapsed = start.elapsed();
        (result, elapsed)
    }};
}

/// Evaluate an expression once, returning its result and, only when `$timed` is true, the elapsed
/// [`Duration`][std::time::Duration].
macro_rules! measure_with_optional_duration {
    ($expr:expr, $timed:expr) => {{
        if $timed {
            let (result, duration) = measure_duration!($expr);
            (result, Some(duration))
        } else {
            ($expr, None)
        }
    }};
}

/// Solve one part and send its answer to the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    handler.part_start(part);
    let (result, duration_opt) = measure_with_optional_duration!(S::solve(input), timed);
    let output = result?;
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

/// Parse the input, reporting the parse events to the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing is propagated.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    handler.parse_start();
    let (result, duration_opt) = measure_with_optional_duration!(D::parse(input), timed);
    let parsed = result?;
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Parse the input once, then solve both parts against the parsed data.
///
/// # Arguments
///
/// - `name` - The solution's display name.
/// - `input` - The raw puzzle input.
/// - `handler` - Receives the events of each step.
/// - `timed` - Measure each step and pass the durations to the handler.
///
/// # Errors
///
/// The first error from parsing or either part is propagated; later steps don't run.
pub fn solve_parsed_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A solution that can be run against raw input.
///
/// Implemented through the [`solution_runner`] attribute macro.
pub trait SolutionRunner {
    /// Run the solution.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from running the solution is propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DynamicError;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Name(String),
        ParseStart,
        ParseEnd { timed: bool },
        PartStart(PartKind),
        PartOutput { part: PartKind, output: String, timed: bool },
    }

    #[derive(Default)]
    struct RecordingHandler(Vec<Event>);

    impl OutputHandler for RecordingHandler {
        fn solution_name(&mut self, name: &str) {
            self.0.push(Event::Name(name.to_owned()));
        }

        fn parse_start(&mut self) {
            self.0.push(Event::ParseStart);
        }

        fn parse_end(&mut self, duration_opt: Option<Duration>) {
            self.0.push(Event::ParseEnd {
                timed: duration_opt.is_some(),
            });
        }

        fn part_start(&mut self, part: PartKind) {
            self.0.push(Event::PartStart(part));
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            duration_opt: Option<Duration>,
        ) {
            self.0.push(Event::PartOutput {
                part,
                output: output.to_string(),
                timed: duration_opt.is_some(),
            });
        }
    }

    struct Numbers(Vec<u32>);

    impl ParseData for Numbers {
        fn parse(input: &str) -> DynamicResult<Self> {
            let values = input
                .lines()
                .map(str::parse)
                .collect::<Result<_, _>>()?;
            Ok(Self(values))
        }
    }

    struct Totals;

    impl Solution<PartOne> for Totals {
        type Input = Numbers;
        type Output = u32;

        fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
            Ok(input.0.iter().sum())
        }
    }

    impl Solution<PartTwo> for Totals {
        type Input = Numbers;
        type Output = u32;

        fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
            input
                .0
                .iter()
                .max()
                .copied()
                .ok_or_else(|| DynamicError::from("no numbers"))
        }
    }

    #[test]
    fn events_arrive_in_order() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        solve_parsed_solution::<Numbers, Totals, Totals>("Totals", "3\n9\n4", &mut handler, true)?;

        assert_eq!(
            handler.0,
            [
                Event::Name("Totals".to_owned()),
                Event::ParseStart,
                Event::ParseEnd { timed: true },
                Event::PartStart(PartKind::One),
                Event::PartOutput {
                    part: PartKind::One,
                    output: "16".to_owned(),
                    timed: true
                },
                Event::PartStart(PartKind::Two),
                Event::PartOutput {
                    part: PartKind::Two,
                    output: "9".to_owned(),
                    timed: true
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn untimed_runs_pass_no_durations() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        solve_parsed_solution::<Numbers, Totals, Totals>("Totals", "1", &mut handler, false)?;

        assert!(handler.0.contains(&Event::ParseEnd { timed: false }));
        assert!(handler.0.iter().all(|event| !matches!(
            event,
            Event::PartOutput { timed: true, .. }
        )));
        Ok(())
    }

    #[test]
    fn parse_failure_stops_before_parts() {
        let mut handler = RecordingHandler::default();
        let result =
            solve_parsed_solution::<Numbers, Totals, Totals>("Totals", "1\nx", &mut handler, false);

        assert!(result.is_err());
        assert_eq!(handler.0, [Event::Name("Totals".to_owned()), Event::ParseStart]);
    }

    #[test]
    fn part_failure_is_propagated() {
        let mut handler = RecordingHandler::default();
        let result =
            solve_parsed_solution::<Numbers, Totals, Totals>("Totals", "", &mut handler, false);

        let message = result.err().map(|e| e.to_string());
        assert_eq!(message.as_deref(), Some("no numbers"));
        assert_eq!(handler.0.last(), Some(&Event::PartStart(PartKind::Two)));
    }
}
