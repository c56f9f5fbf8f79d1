//! Grid boundary and the scent marks shared between robots.

use crate::error::RobotError;
use crate::pose::{Heading, RobotPose};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Upper-right corner of the grid. The lower-left corner is always `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBoundary {
    /// Largest valid `(x, y)`, inclusive.
    pub max: IVec2,
}

impl GridBoundary {
    /// Creates a boundary, rejecting negative components.
    pub fn new(max_x: i32, max_y: i32) -> Result<Self, RobotError> {
        if max_x < 0 || max_y < 0 {
            return Err(RobotError::NegativeBoundary { x: max_x, y: max_y });
        }
        Ok(Self {
            max: IVec2::new(max_x, max_y),
        })
    }

    /// Returns true if `position` lies on the grid (edges included).
    pub fn contains(&self, position: IVec2) -> bool {
        position.x >= 0 && position.y >= 0 && position.x <= self.max.x && position.y <= self.max.y
    }
}

/// The move that made a robot lost: the last cell it held and the heading it
/// tried to drive off along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScentMark {
    pub position: IVec2,
    pub heading: Heading,
}

impl From<RobotPose> for ScentMark {
    fn from(pose: RobotPose) -> Self {
        Self {
            position: pose.position,
            heading: pose.heading,
        }
    }
}

/// Scent left by earlier robots where they were lost.
///
/// Append-only: marks are never removed, and iteration yields them in the order
/// they were left. A mark only guards the exact move that was fatal, so a corner
/// cell lost off in one direction still loses robots leaving in the other.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ScentMark>", into = "Vec<ScentMark>")]
pub struct ScentSet {
    marks: Vec<ScentMark>,
    lookup: HashSet<ScentMark>,
}

impl ScentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any robot was lost from `position`, whatever its heading.
    pub fn contains(&self, position: IVec2) -> bool {
        self.marks.iter().any(|m| m.position == position)
    }

    /// Returns true if a robot was already lost making the forward move from `pose`.
    pub fn guards(&self, pose: RobotPose) -> bool {
        self.lookup.contains(&ScentMark::from(pose))
    }

    /// Leaves a mark for the forward move from `pose`. Returns false if one was already there.
    pub fn mark(&mut self, pose: RobotPose) -> bool {
        let mark = ScentMark::from(pose);
        if !self.lookup.insert(mark) {
            return false;
        }
        self.marks.push(mark);
        true
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ScentMark> + '_ {
        self.marks.iter().copied()
    }

    /// Scented cells in the order they were marked.
    pub fn positions(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.marks.iter().map(|m| m.position)
    }
}

impl From<Vec<ScentMark>> for ScentSet {
    fn from(marks: Vec<ScentMark>) -> Self {
        let mut set = ScentSet::new();
        for mark in marks {
            if set.lookup.insert(mark) {
                set.marks.push(mark);
            }
        }
        set
    }
}

impl From<ScentSet> for Vec<ScentMark> {
    fn from(set: ScentSet) -> Self {
        set.marks
    }
}
