//! Runs robots across a grid, threading scent marks from one robot to the next.
//!
//! The entry point is [`Simulator`]. Build it from a [`SimulationConfig`] and a
//! [`GridBoundary`], then either drive robots one at a time with
//! [`Simulator::run_robot`] (passing the [`ScentSet`] explicitly) or hand the whole
//! ordered list to [`Simulator::run`].

use crate::grid::{GridBoundary, ScentSet};
use crate::pose::{Heading, RobotOp, RobotPose};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, trace};

/// Configuration for a simulation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Whether a lost robot leaves a scent mark for the robots after it.
    /// Disabling this turns every robot into an independent run.
    pub leave_scent: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { leave_scent: true }
    }
}

/// A robot as read from input: where it starts and what it is told to do.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotRecord {
    pub start: RobotPose,
    pub instructions: Vec<RobotOp>,
}

impl RobotRecord {
    pub fn new(start: RobotPose, instructions: Vec<RobotOp>) -> Self {
        Self {
            start,
            instructions,
        }
    }
}

/// Mutable state of a robot while its instructions are replayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RobotState {
    pub pose: RobotPose,

    /// Once set, the pose is frozen for the rest of the run.
    pub lost: bool,
}

impl RobotState {
    pub fn new(start: RobotPose) -> Self {
        Self {
            pose: start,
            lost: false,
        }
    }
}

/// Final outcome for one robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotResult {
    pub position: IVec2,
    pub heading: Heading,
    pub lost: bool,
}

impl From<RobotState> for RobotResult {
    fn from(state: RobotState) -> Self {
        Self {
            position: state.pose.position,
            heading: state.pose.heading,
            lost: state.lost,
        }
    }
}

impl fmt::Display for RobotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)?;
        if self.lost {
            write!(f, " LOST")?;
        }
        Ok(())
    }
}

/// Results of every robot, in input order, plus the scent left behind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub results: Vec<RobotResult>,
    pub scent: ScentSet,
}

impl SimulationReport {
    pub fn lost_count(&self) -> usize {
        self.results.iter().filter(|r| r.lost).count()
    }
}

/// Replays robot instructions against a fixed grid.
pub struct Simulator {
    boundary: GridBoundary,
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig, boundary: GridBoundary) -> Self {
        Self { boundary, config }
    }

    pub fn boundary(&self) -> GridBoundary {
        self.boundary
    }

    /// Runs every robot strictly in order, each one seeing the scent of all robots before it.
    pub fn run(&self, records: &[RobotRecord]) -> SimulationReport {
        let mut scent = ScentSet::new();
        let results = records
            .iter()
            .map(|record| self.run_robot(record, &mut scent))
            .collect();
        SimulationReport { results, scent }
    }

    /// Replays a single robot's instructions.
    ///
    /// # Lost robots
    ///
    /// A `Forward` that would leave the grid makes the robot lost: it stays on the
    /// last cell it safely occupied, keeps its heading, and ignores every remaining
    /// instruction. That cell and heading are then added to `scent`. A move whose
    /// coordinates would overflow `i32` counts as leaving the grid.
    ///
    /// # Scent
    ///
    /// If an earlier robot was already lost making this exact move (same cell, same
    /// heading), the `Forward` is discarded instead and the robot carries on. `scent`
    /// is only read during the replay; the robot's own mark is written after its last
    /// instruction, so it can never protect itself.
    pub fn run_robot(&self, record: &RobotRecord, scent: &mut ScentSet) -> RobotResult {
        let mut state = RobotState::new(record.start);
        debug!(start = %record.start, instructions = record.instructions.len(), "robot starting");

        for (index, &op) in record.instructions.iter().enumerate() {
            if state.lost {
                trace!(
                    skipped = record.instructions.len() - index,
                    "robot lost, ignoring remaining instructions"
                );
                break;
            }

            match state.pose.checked_apply(op) {
                Some(candidate)
                    if op != RobotOp::Forward || self.boundary.contains(candidate.position) =>
                {
                    trace!(index, %op, pose = %candidate, "step");
                    state.pose = candidate;
                    continue;
                }
                _ => {}
            }

            if scent.guards(state.pose) {
                debug!(index, pose = %state.pose, "scented move off the grid ignored");
            } else {
                info!(index, pose = %state.pose, "robot lost");
                state.lost = true;
            }
        }

        if state.lost && self.config.leave_scent {
            scent.mark(state.pose);
        }

        let result = RobotResult::from(state);
        debug!(%result, "robot finished");
        result
    }
}
