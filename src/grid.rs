//! Grid geometry: positions, the wire state encoding, and the action set.
//!
//! The game server reports positions as `"x:y"` text. This module parses that
//! encoding into a validated [`GridPos`] and maps it to the flat row-major
//! index used by the Q-table. Out-of-range coordinates are rejected at parse
//! time, so a `GridPos` always indexes inside the table.

use std::fmt;

use crate::error::{Error, Result};

/// Side length of the (square) gridworld.
pub const GRID_DIM: usize = 40;

/// Number of distinct states in the flattened grid.
pub const STATE_COUNT: usize = GRID_DIM * GRID_DIM;

/// A validated position on the 40x40 grid.
///
/// Both coordinates are guaranteed to lie in `[0, 40)`, so [`GridPos::index`]
/// is always a valid Q-table row.
///
/// # Examples
///
/// ```
/// use gridpilot::grid::GridPos;
///
/// let pos = GridPos::parse("3:17")?;
/// assert_eq!(pos.index(), 3 * 40 + 17);
/// assert_eq!(pos.to_string(), "3:17");
/// # Ok::<(), gridpilot::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    x: u8,
    y: u8,
}

impl GridPos {
    /// Create a position from raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if either coordinate is `>= 40`.
    pub fn new(x: usize, y: usize) -> Result<Self> {
        if x >= GRID_DIM || y >= GRID_DIM {
            return Err(Error::OutOfBounds {
                input: format!("{x}:{y}"),
                dim: GRID_DIM,
            });
        }
        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Parse the server's `"x:y"` state encoding.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingSeparator`] for empty input or input without `:`
    /// - [`Error::InvalidCoordinate`] for non-integer parts
    /// - [`Error::OutOfBounds`] for coordinates outside `[0, 40)`
    pub fn parse(input: &str) -> Result<Self> {
        let (x_part, y_part) = input.split_once(':').ok_or_else(|| Error::MissingSeparator {
            input: input.to_string(),
        })?;

        let coordinate = |part: &str| -> Result<i64> {
            part.trim().parse::<i64>().map_err(|_| Error::InvalidCoordinate {
                input: input.to_string(),
                part: part.to_string(),
            })
        };

        let x = coordinate(x_part)?;
        let y = coordinate(y_part)?;
        if !(0..GRID_DIM as i64).contains(&x) || !(0..GRID_DIM as i64).contains(&y) {
            return Err(Error::OutOfBounds {
                input: input.to_string(),
                dim: GRID_DIM,
            });
        }

        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Column coordinate.
    pub fn x(&self) -> usize {
        self.x as usize
    }

    /// Row coordinate.
    pub fn y(&self) -> usize {
        self.y as usize
    }

    /// Flat row-major index into the Q-table: `x * 40 + y`.
    pub fn index(&self) -> usize {
        self.x as usize * GRID_DIM + self.y as usize
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

/// The four moves the game server accepts.
///
/// Order is significant: the index of each variant is its Q-table column, and
/// tie-breaking in greedy selection follows this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    North,
    South,
    West,
    East,
}

impl Action {
    /// All actions in Q-table column order.
    pub const ALL: [Action; 4] = [Action::North, Action::South, Action::West, Action::East];

    /// Number of actions.
    pub const COUNT: usize = 4;

    /// Q-table column for this action.
    pub fn index(self) -> usize {
        match self {
            Action::North => 0,
            Action::South => 1,
            Action::West => 2,
            Action::East => 3,
        }
    }

    /// Look an action up by its Q-table column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidActionIndex`] for indices `>= 4`.
    pub fn from_index(index: usize) -> Result<Self> {
        Action::ALL
            .get(index)
            .copied()
            .ok_or(Error::InvalidActionIndex { index })
    }

    /// Single-letter token the server's move endpoint expects.
    pub fn api_token(self) -> &'static str {
        match self {
            Action::North => "N",
            Action::South => "S",
            Action::West => "W",
            Action::East => "E",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_token())
    }
}
