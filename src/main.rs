#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Error, Result};
use aoc_framework::PartKind;
use aoc_framework::runner::OutputHandler;
use clap::{ArgAction, Parser};

mod solutions;

/// Advent of Code 2024 puzzle solver.
///
/// Solutions are available for days 4, 6, 7, 8, 10, 11, 12, and 15.
#[derive(Parser, Debug)]
struct Cli {
    /// The day's solution to run (e.g. 4, 6, etc).
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    day: u8,

    /// Sets an alternative input file to use over default input.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Directory holding default input files, named like `day04.txt`.
    #[arg(long, value_name = "DIR", default_value = "inputs")]
    inputs_dir: PathBuf,

    /// Measure and print the durations of parsing and solving parts.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Minimum duration (in milliseconds) required to print timing.
    /// 0 = always print.
    #[arg(long, value_name = "NUMBER", default_value_t)]
    min_timing_ms: u64,
}

impl Cli {
    /// The path of the default input file for the day.
    fn default_input_path(&self) -> PathBuf {
        self.inputs_dir.join(format!("day{:02}.txt", self.day))
    }

    /// Read the puzzle input, from the input file argument if given, else the default input file.
    fn read_input(&self) -> Result<String> {
        if let Some(input_file) = &self.input {
            return read_input_file(input_file);
        }

        let path = self.default_input_path();
        fs::read_to_string(&path).with_context(|| {
            format!(
                "default input file missing: {}\n\n\
                please create the file or provide the input file argument",
                path.display()
            )
        })
    }
}

fn read_input_file(input_file: &Path) -> Result<String> {
    fs::read_to_string(input_file)
        .with_context(|| format!("could not read input file at: {}", input_file.display()))
}

struct CliOutputHandler {
    /// Durations shorter than this aren't printed.
    min_duration: Duration,
}

impl CliOutputHandler {
    fn new(min_duration: Duration) -> Self {
        Self { min_duration }
    }

    fn format_duration(duration: Duration) -> String {
        const DECIMAL_PLACES: usize = 3;
        // largest unit first
        const UNITS: [(Duration, &str); 3] = [
            (Duration::from_secs(1), "seconds"),
            (Duration::from_millis(1), "milliseconds"),
            (Duration::from_micros(1), "microseconds"),
        ];

        UNITS
            .iter()
            .find(|&&(unit, _)| duration >= unit)
            .map_or_else(
                || format!("{} nanoseconds", duration.as_nanos()),
                |&(unit, name)| {
                    let amount = duration.as_secs_f64() / unit.as_secs_f64();
                    format!("{amount:.DECIMAL_PLACES$} {name}")
                },
            )
    }

    /// Format a duration if there is one and it's at least the minimum duration.
    fn format_duration_above_min(&self, duration_opt: Option<Duration>) -> Option<String> {
        duration_opt
            .filter(|&duration| duration >= self.min_duration)
            .map(Self::format_duration)
    }
}

impl OutputHandler for CliOutputHandler {
    fn solution_name(&mut self, name: &str) {
        println!("= {name} =");
    }

    fn parse_start(&mut self) {}

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        if let Some(formatted_duration) = self.format_duration_above_min(duration_opt) {
            println!("Input parsed in {formatted_duration}");
        }
    }

    fn part_start(&mut self, part: PartKind) {
        println!("-- {part} --");
    }

    fn part_output(
        &mut self,
        _part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        match self.format_duration_above_min(duration_opt) {
            Some(formatted_duration) => println!("{output} ({formatted_duration})"),
            None => println!("{output}"),
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let input = args.read_input()?;
    let mut handler = CliOutputHandler::new(Duration::from_millis(args.min_timing_ms));
    solutions::run_day(args.day, &input, &mut handler, args.timed)
        .map_err(|dyn_error| Error::from_boxed(dyn_error).context("failed to run solution"))
}
