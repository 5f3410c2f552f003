use std::collections::HashSet;
use std::fmt::Display;

use aoc_framework::grid::{Direction, Grid, GridError, Location, Move};
use aoc_framework::parsing::InputScanner;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "Day 15: Warehouse Woes",
    parsed = WarehouseInput,
    part_one = Day15,
    part_two = Day15
)]
impl super::AdventOfCode2024<15> {}

/*
Input is a character grid map of a warehouse, then an empty line, then the list of moves the robot
will attempt. The move list may be split across multiple lines.

On the map, `#` is a wall, `O` is a box, `@` is the robot, and `.` is open floor. Moves are `^`,
`v`, `<`, and `>` for north, south, west, and east.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Wall,
    Empty,
    Box,
    /// The west half of a wide box.
    BoxLeft,
    /// The east half of a wide box.
    BoxRight,
    Robot,
}

impl Tile {
    /// The two tiles replacing this one when the warehouse is widened.
    fn widened(self) -> Result<[Self; 2], ParseWarehouseError> {
        match self {
            Self::Wall => Ok([Self::Wall, Self::Wall]),
            Self::Empty => Ok([Self::Empty, Self::Empty]),
            Self::Box => Ok([Self::BoxLeft, Self::BoxRight]),
            Self::Robot => Ok([Self::Robot, Self::Empty]),
            Self::BoxLeft | Self::BoxRight => Err(ParseWarehouseError::AlreadyWide),
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = ParseWarehouseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '#' => Ok(Self::Wall),
            '.' => Ok(Self::Empty),
            'O' => Ok(Self::Box),
            '@' => Ok(Self::Robot),
            _ => Err(ParseWarehouseError::InvalidTile(value)),
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let character = match self {
            Self::Wall => '#',
            Self::Empty => '.',
            Self::Box => 'O',
            Self::BoxLeft => '[',
            Self::BoxRight => ']',
            Self::Robot => '@',
        };
        write!(f, "{character}")
    }
}

#[derive(Debug, Clone)]
struct Warehouse {
    tiles: Grid<Tile>,
    robot: Location,
}

#[derive(Debug)]
struct WarehouseInput {
    warehouse: Warehouse,
    moves: Vec<Direction>,
}

#[derive(thiserror::Error, Debug)]
enum ParseWarehouseError {
    #[error("invalid character in warehouse map: {0:?}")]
    InvalidTile(char),

    #[error("invalid move character: {0:?}")]
    InvalidMove(char),

    #[error("no robot found in warehouse")]
    MissingRobot,

    #[error("found a second robot at {second}, after the first at {first}")]
    SecondRobot { first: Location, second: Location },

    #[error("expected no more input after the moves, but found more on line {}", .0 + 1)]
    TrailingBlock(usize),

    #[error("warehouse is already wide")]
    AlreadyWide,
}

fn parse_move(character: char) -> Result<Direction, ParseWarehouseError> {
    match character {
        '^' => Ok(Direction::North),
        'v' => Ok(Direction::South),
        '<' => Ok(Direction::West),
        '>' => Ok(Direction::East),
        _ => Err(ParseWarehouseError::InvalidMove(character)),
    }
}

impl ParseData for WarehouseInput {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);
        let map_start = scanner.skip_empty().unwrap_or(0);

        let mut robot_opt = None;
        let rows = scanner.collect_sequence(|line_index, line| -> DynamicResult<_> {
            let y = i32::try_from(line_index - map_start).map_err(GridError::RowIndexOverflow)?;
            line.chars()
                .enumerate()
                .map(|(column_index, character)| -> DynamicResult<_> {
                    let tile = Tile::try_from(character)?;
                    if tile == Tile::Robot {
                        let x = i32::try_from(column_index)
                            .map_err(GridError::ColumnIndexOverflow)?;
                        let second = Location::new(x, y);
                        if let Some(first) = robot_opt {
                            return Err(ParseWarehouseError::SecondRobot { first, second }.into());
                        }
                        robot_opt = Some(second);
                    }
                    Ok(tile)
                })
                .collect::<DynamicResult<Vec<_>>>()
        })?;
        let tiles = Grid::from_rows(rows)?;
        let robot = robot_opt.ok_or(ParseWarehouseError::MissingRobot)?;

        scanner.skip_empty();
        let moves = scanner
            .collect_sequence(|_, line| {
                line.chars()
                    .map(parse_move)
                    .collect::<Result<Vec<_>, _>>()
            })?
            .into_iter()
            .flatten()
            .collect();
        if let Some(line_index) = scanner.skip_empty() {
            return Err(ParseWarehouseError::TrailingBlock(line_index).into());
        }

        Ok(Self {
            warehouse: Warehouse { tiles, robot },
            moves,
        })
    }
}

/*
The robot attempts each move in order. If there's a wall in the way, nothing moves. If there are
boxes in the way, the robot pushes them all, unless pushing would move a box into a wall; then
nothing moves.

Each box has a GPS coordinate of 100 times its distance from the top edge of the map plus its
distance from the left edge.

For part 1, sum the GPS coordinates of all boxes after the robot finishes moving.
*/

impl Warehouse {
    const GPS_ROW_FACTOR: usize = 100;

    /// Attempt to move the robot one step, pushing any boxes in the way.
    ///
    /// Returns whether the robot moved.
    fn try_move(&mut self, direction: Direction) -> Result<bool, GridError> {
        let vertical = matches!(direction, Direction::North | Direction::South);

        // everything that moves, in order of distance from the robot
        let mut pushed = vec![self.robot];
        let mut queued = HashSet::from([self.robot]);
        let mut index = 0;
        while let Some(&location) = pushed.get(index) {
            index += 1;
            let ahead = location.moved(direction);
            let Ok(&tile) = self.tiles.get(ahead) else {
                return Ok(false);
            };

            let partner_opt = match tile {
                Tile::Wall => return Ok(false),
                Tile::Empty => continue,
                Tile::Box => None,
                // a wide box pushed sideways is already in line with its other half
                Tile::BoxLeft => vertical.then(|| ahead.moved(Direction::East)),
                Tile::BoxRight => vertical.then(|| ahead.moved(Direction::West)),
                Tile::Robot => unreachable!("only one robot is in the warehouse"),
            };

            for next in std::iter::once(ahead).chain(partner_opt) {
                if queued.insert(next) {
                    pushed.push(next);
                }
            }
        }

        // farthest first, so each tile moves into a vacated location
        for &location in pushed.iter().rev() {
            let tile = self.tiles.set(location, Tile::Empty)?;
            self.tiles.set(location.moved(direction), tile)?;
        }
        self.robot = self.robot.moved(direction);
        Ok(true)
    }

    fn run_moves(&mut self, moves: &[Direction]) -> Result<(), GridError> {
        for &direction in moves {
            self.try_move(direction)?;
        }
        Ok(())
    }

    /// Sum the GPS coordinates of every box, measuring wide boxes from their west half.
    fn gps_sum(&self) -> DynamicResult<usize> {
        let coordinates = self
            .tiles
            .iter()
            .filter(|&(_, &tile)| matches!(tile, Tile::Box | Tile::BoxLeft))
            .map(|(location, _)| -> DynamicResult<usize> {
                let row = usize::try_from(location.y)?;
                let column = usize::try_from(location.x)?;
                Ok(row * Self::GPS_ROW_FACTOR + column)
            })
            .collect::<DynamicResult<Vec<_>>>()?;
        let sum = coordinates
            .into_iter()
            .checked_sum()
            .ok_or("overflow summing GPS coordinates")?;
        Ok(sum)
    }

    /// Build the wide warehouse, where everything except the robot is twice as wide.
    fn widened(&self) -> DynamicResult<Self> {
        let mut rows: Vec<Vec<Tile>> = Vec::new();
        for (location, &tile) in self.tiles.iter() {
            if location.x == 0 {
                rows.push(Vec::new());
            }
            if let Some(row) = rows.last_mut() {
                row.extend(tile.widened()?);
            }
        }

        Ok(Self {
            tiles: Grid::from_rows(rows)?,
            robot: Location::new(self.robot.x * 2, self.robot.y),
        })
    }
}

struct Day15;

impl Solution<PartOne> for Day15 {
    type Input = WarehouseInput;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut warehouse = input.warehouse.clone();
        warehouse.run_moves(&input.moves)?;
        warehouse.gps_sum()
    }
}

/*
For part 2, a second warehouse has the same layout, but everything except the robot is twice as
wide:
- `#` becomes `##`
- `O` becomes `[]`
- `.` becomes `..`
- `@` becomes `@.`

A wide box pushed up or down can push two boxes at once, which can each push two more. The GPS
coordinate of a wide box is measured from its closest edge, the `[` half.
*/

impl Solution<PartTwo> for Day15 {
    type Input = WarehouseInput;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut warehouse = input.warehouse.widened()?;
        warehouse.run_moves(&input.moves)?;
        warehouse.gps_sum()
    }
}
