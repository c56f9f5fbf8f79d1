//! Robot pose and the pure step function.

use crate::error::RobotError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compass heading of a robot.
///
/// Variants are declared in clockwise order; turning is index arithmetic over
/// [`Heading::CLOCKWISE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Heading {
    /// All headings, clockwise starting from North.
    pub const CLOCKWISE: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Rotates 90 degrees counter-clockwise.
    pub fn turn_left(self) -> Self {
        Self::CLOCKWISE[(self.index() + 3) % 4]
    }

    /// Rotates 90 degrees clockwise.
    pub fn turn_right(self) -> Self {
        Self::CLOCKWISE[(self.index() + 1) % 4]
    }

    /// Unit offset of one forward step along this heading.
    pub fn step(self) -> IVec2 {
        match self {
            Heading::North => IVec2::Y,
            Heading::East => IVec2::X,
            Heading::South => IVec2::NEG_Y,
            Heading::West => IVec2::NEG_X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Heading::North),
            'E' => Some(Heading::East),
            'S' => Some(Heading::South),
            'W' => Some(Heading::West),
            _ => None,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Heading {
    type Err = RobotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Heading::from_char(c).ok_or_else(|| RobotError::InvalidHeading(s.to_string()))
            }
            _ => Err(RobotError::InvalidHeading(s.to_string())),
        }
    }
}

/// A single robot instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RobotOp {
    /// Rotate left in place (`L`).
    #[serde(rename = "L")]
    TurnLeft,
    /// Rotate right in place (`R`).
    #[serde(rename = "R")]
    TurnRight,
    /// Move one cell along the current heading (`F`).
    #[serde(rename = "F")]
    Forward,
}

impl RobotOp {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(RobotOp::TurnLeft),
            'R' => Some(RobotOp::TurnRight),
            'F' => Some(RobotOp::Forward),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            RobotOp::TurnLeft => 'L',
            RobotOp::TurnRight => 'R',
            RobotOp::Forward => 'F',
        }
    }

    /// Parses a whole instruction string such as `"RFRFRFRF"`.
    ///
    /// The first unknown symbol aborts parsing and is reported together with its
    /// character index.
    pub fn parse_sequence(s: &str) -> Result<Vec<RobotOp>, RobotError> {
        s.chars()
            .enumerate()
            .map(|(index, symbol)| {
                RobotOp::from_char(symbol)
                    .ok_or(RobotError::InvalidInstruction { symbol, index })
            })
            .collect()
    }
}

impl fmt::Display for RobotOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Position and heading of a robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RobotPose {
    /// Grid cell the robot occupies. May lie outside the grid as an intermediate value.
    pub position: IVec2,

    /// Direction the robot faces.
    pub heading: Heading,
}

impl RobotPose {
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            position: IVec2::new(x, y),
            heading,
        }
    }

    /// Applies one instruction, returning `None` if a `Forward` would overflow `i32`.
    pub fn checked_apply(self, op: RobotOp) -> Option<Self> {
        match op {
            RobotOp::Forward => {
                let step = self.heading.step();
                Some(Self {
                    position: IVec2::new(
                        self.position.x.checked_add(step.x)?,
                        self.position.y.checked_add(step.y)?,
                    ),
                    ..self
                })
            }
            RobotOp::TurnLeft | RobotOp::TurnRight => Some(self.apply(op)),
        }
    }

    /// Applies one instruction without any knowledge of the grid.
    ///
    /// Turns change only the heading; `Forward` changes only the position.
    ///
    /// # Panics
    ///
    /// In debug builds, if `Forward` overflows `i32`. Use [`checked_apply`](Self::checked_apply)
    /// for untrusted coordinates.
    pub fn apply(self, op: RobotOp) -> Self {
        match op {
            RobotOp::TurnLeft => Self {
                heading: self.heading.turn_left(),
                ..self
            },
            RobotOp::TurnRight => Self {
                heading: self.heading.turn_right(),
                ..self
            },
            RobotOp::Forward => Self {
                position: self.position + self.heading.step(),
                ..self
            },
        }
    }
}

impl fmt::Display for RobotPose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}
