//! Solution path generation
//!
//! The route is a random walk over the 4x4 room grid. It starts in a random
//! room of the top row and moves left, right or down until it steps down out
//! of the bottom row. A sideways move into a grid edge is deflected
//! downward, so the walk never leaves the grid sideways and never moves up.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::ROOMS_ACROSS;
use crate::error::{ConfigError, GenerationError};
use crate::rng::LevelRng;

/// Position of a room in the room grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomCoord {
    pub column: usize,
    pub row: usize,
}

impl RoomCoord {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// The neighbouring room in direction `step`, or `None` off the grid
    pub fn step(self, step: Step) -> Option<RoomCoord> {
        match step {
            Step::Left => self.column.checked_sub(1).map(|c| RoomCoord::new(c, self.row)),
            Step::Right if self.column + 1 < ROOMS_ACROSS => {
                Some(RoomCoord::new(self.column + 1, self.row))
            }
            Step::Down if self.row + 1 < ROOMS_ACROSS => {
                Some(RoomCoord::new(self.column, self.row + 1))
            }
            Step::Right | Step::Down => None,
        }
    }
}

/// How a room takes part in the solution path
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum RoomClass {
    Start,
    Journey,
    End,
    /// Not on the route; filled with a filler room
    #[default]
    Off,
}

/// One move of the walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Step {
    Left,
    Right,
    Down,
}

impl Step {
    /// Turn a sideways move into the wall into a down move
    pub fn deflect(self, at: RoomCoord) -> Step {
        match self {
            Step::Left if at.column == 0 => Step::Down,
            Step::Right if at.column + 1 >= ROOMS_ACROSS => Step::Down,
            other => other,
        }
    }
}

/// Relative odds of each walk step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights", into = "RawWeights")]
pub struct WalkWeights {
    left: u32,
    right: u32,
    down: u32,
}

#[derive(Serialize, Deserialize)]
struct RawWeights {
    left: u32,
    right: u32,
    down: u32,
}

impl TryFrom<RawWeights> for WalkWeights {
    type Error = ConfigError;

    fn try_from(raw: RawWeights) -> Result<Self, Self::Error> {
        WalkWeights::new(raw.left, raw.right, raw.down)
    }
}

impl From<WalkWeights> for RawWeights {
    fn from(w: WalkWeights) -> Self {
        RawWeights {
            left: w.left,
            right: w.right,
            down: w.down,
        }
    }
}

impl WalkWeights {
    pub fn new(left: u32, right: u32, down: u32) -> Result<Self, ConfigError> {
        if left.checked_add(right).and_then(|s| s.checked_add(down)).unwrap_or(0) == 0 {
            return Err(ConfigError::InvalidWeights);
        }
        Ok(Self { left, right, down })
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn down(&self) -> u32 {
        self.down
    }

    fn as_array(&self) -> [u32; 3] {
        [self.left, self.right, self.down]
    }
}

impl Default for WalkWeights {
    fn default() -> Self {
        WalkPolicy::default().weights()
    }
}

/// Named walk weightings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum WalkPolicy {
    /// Left, right and down equally likely
    #[default]
    Uniform,
    /// 1/6 left, 1/2 right, 1/3 down
    Skewed,
}

impl WalkPolicy {
    pub fn weights(self) -> WalkWeights {
        match self {
            WalkPolicy::Uniform => WalkWeights {
                left: 1,
                right: 1,
                down: 1,
            },
            WalkPolicy::Skewed => WalkWeights {
                left: 100,
                right: 300,
                down: 200,
            },
        }
    }
}

/// Supplies the random decisions of the walk
pub trait StepSource {
    /// Column of the start room in the top row.
    ///
    /// Values past the last column wrap around the grid width.
    fn start_column(&mut self) -> usize;

    /// The next move, before edge deflection
    fn next_step(&mut self) -> Step;
}

/// RNG-backed step source using a weight table
#[derive(Debug)]
pub struct WeightedWalk<'a> {
    rng: &'a mut LevelRng,
    weights: WalkWeights,
}

impl<'a> WeightedWalk<'a> {
    pub fn new(rng: &'a mut LevelRng, weights: WalkWeights) -> Self {
        Self { rng, weights }
    }
}

impl StepSource for WeightedWalk<'_> {
    fn start_column(&mut self) -> usize {
        self.rng.rn2(ROOMS_ACROSS as u32) as usize
    }

    fn next_step(&mut self) -> Step {
        match self.rng.weighted_index(&self.weights.as_array()) {
            Some(0) => Step::Left,
            Some(1) => Step::Right,
            _ => Step::Down,
        }
    }
}

/// Room classification produced by the walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteGrid {
    /// Indexed `[row][column]`
    rooms: [[RoomClass; ROOMS_ACROSS]; ROOMS_ACROSS],
    /// Rooms in visiting order, start first and end last
    path: Vec<RoomCoord>,
}

impl RouteGrid {
    fn new() -> Self {
        Self {
            rooms: [[RoomClass::Off; ROOMS_ACROSS]; ROOMS_ACROSS],
            path: Vec::new(),
        }
    }

    /// Class of the room at `coord`, or `None` off the grid
    pub fn class_at(&self, coord: RoomCoord) -> Option<RoomClass> {
        self.rooms.get(coord.row).and_then(|row| row.get(coord.column)).copied()
    }

    fn set(&mut self, coord: RoomCoord, class: RoomClass) {
        self.rooms[coord.row][coord.column] = class;
    }

    /// Room classes, indexed `[row][column]`
    pub fn rows(&self) -> &[[RoomClass; ROOMS_ACROSS]; ROOMS_ACROSS] {
        &self.rooms
    }

    /// Every room with its class, row by row
    pub fn iter(&self) -> impl Iterator<Item = (RoomCoord, RoomClass)> + '_ {
        self.rooms.iter().enumerate().flat_map(|(row, classes)| {
            classes
                .iter()
                .enumerate()
                .map(move |(column, &class)| (RoomCoord::new(column, row), class))
        })
    }

    /// Rooms in the order the walk visited them; may revisit a room
    pub fn path(&self) -> &[RoomCoord] {
        &self.path
    }

    pub fn start(&self) -> RoomCoord {
        self.path[0]
    }

    pub fn end(&self) -> RoomCoord {
        self.path[self.path.len() - 1]
    }

    pub fn count(&self, class: RoomClass) -> usize {
        self.iter().filter(|&(_, c)| c == class).count()
    }
}

/// Walk the room grid and classify every room.
///
/// Fails with `RouteDidNotTerminate` if the walk has not stepped down out of
/// the bottom row after `max_steps` moves.
pub fn generate_route<S>(source: &mut S, max_steps: u32) -> Result<RouteGrid, GenerationError>
where
    S: StepSource + ?Sized,
{
    let mut route = RouteGrid::new();

    let start = RoomCoord::new(source.start_column() % ROOMS_ACROSS, 0);
    route.set(start, RoomClass::Start);
    route.path.push(start);
    log::debug!("route starts in column {}", start.column);

    let mut current = start;
    for _ in 0..max_steps {
        let step = source.next_step().deflect(current);
        log::trace!("walk {:?} from ({}, {})", step, current.column, current.row);

        match current.step(step) {
            Some(next) => {
                if route.class_at(next) != Some(RoomClass::Start) {
                    route.set(next, RoomClass::Journey);
                }
                route.path.push(next);
                current = next;
            }
            None => {
                // Only a down move out of the bottom row leaves the grid
                route.set(current, RoomClass::End);
                log::debug!(
                    "route ends at ({}, {}) after {} rooms",
                    current.column,
                    current.row,
                    route.path.len()
                );
                return Ok(route);
            }
        }
    }

    Err(GenerationError::RouteDidNotTerminate { max_steps })
}
