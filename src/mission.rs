//! Text format for missions and results.
//!
//! ```text
//! 5 3
//! 1 1 E
//! RFRFRFRF
//!
//! 3 2 N
//! FRRFLLFFRRFLL
//! ```
//!
//! The first non-empty line is the upper-right grid corner. Each robot is a block
//! of one pose line (`X Y DIR`) and an optional instruction line, with blocks
//! separated by blank lines.

use crate::error::{Result, RobotError};
use crate::grid::GridBoundary;
use crate::pose::{Heading, RobotOp, RobotPose};
use crate::simulator::{RobotRecord, RobotResult, SimulationConfig, SimulationReport, Simulator};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// A parsed mission: one grid and the robots to send across it, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub boundary: GridBoundary,
    pub robots: Vec<RobotRecord>,
}

impl Mission {
    /// Runs every robot in input order.
    pub fn simulate(&self, config: SimulationConfig) -> SimulationReport {
        Simulator::new(config, self.boundary).run(&self.robots)
    }
}

impl FromStr for Mission {
    type Err = RobotError;

    fn from_str(input: &str) -> Result<Self> {
        // (1-based line number, trimmed text)
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .skip_while(|(_, line)| line.is_empty());

        let (boundary_line, text) = lines.next().ok_or(RobotError::EmptyInput)?;
        let boundary = parse_boundary(boundary_line, text)?;

        let mut robots = Vec::new();
        let mut block: Vec<(usize, &str)> = Vec::with_capacity(2);
        for (number, text) in lines {
            if text.is_empty() {
                if !block.is_empty() {
                    robots.push(parse_robot(&block, boundary)?);
                    block.clear();
                }
                continue;
            }
            if block.len() == 2 {
                return Err(RobotError::Parse {
                    line: number,
                    message: "expected a blank line before the next robot".to_string(),
                });
            }
            block.push((number, text));
        }
        if !block.is_empty() {
            robots.push(parse_robot(&block, boundary)?);
        }

        debug!(robots = robots.len(), max = %boundary.max, "mission parsed");
        Ok(Self { boundary, robots })
    }
}

fn parse_boundary(line: usize, text: &str) -> Result<GridBoundary> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [x, y] = fields.as_slice() else {
        return Err(RobotError::Parse {
            line,
            message: format!("expected \"MAXX MAXY\", got {text:?}"),
        });
    };
    GridBoundary::new(parse_coordinate(line, x)?, parse_coordinate(line, y)?)
        .map_err(|e| at_line(line, e))
}

fn parse_robot(block: &[(usize, &str)], boundary: GridBoundary) -> Result<RobotRecord> {
    let (pose_line, pose_text) = block[0];
    let start = parse_pose(pose_line, pose_text)?;
    if !boundary.contains(start.position) {
        return Err(RobotError::Parse {
            line: pose_line,
            message: format!("start position {start} lies outside the grid"),
        });
    }

    let instructions = match block.get(1) {
        Some(&(line, text)) => RobotOp::parse_sequence(text).map_err(|e| at_line(line, e))?,
        None => Vec::new(),
    };
    Ok(RobotRecord::new(start, instructions))
}

fn parse_pose(line: usize, text: &str) -> Result<RobotPose> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [x, y, heading] = fields.as_slice() else {
        return Err(RobotError::Parse {
            line,
            message: format!("expected \"X Y DIR\", got {text:?}"),
        });
    };
    let heading = Heading::from_str(heading).map_err(|e| at_line(line, e))?;
    Ok(RobotPose::new(
        parse_coordinate(line, x)?,
        parse_coordinate(line, y)?,
        heading,
    ))
}

fn parse_coordinate(line: usize, field: &str) -> Result<i32> {
    field.parse::<i32>().map_err(|e| RobotError::Parse {
        line,
        message: format!("invalid coordinate {field:?}: {e}"),
    })
}

fn at_line(line: usize, err: RobotError) -> RobotError {
    RobotError::Parse {
        line,
        message: err.to_string(),
    }
}

/// Formats results one per line, as `X Y DIR` with a trailing `LOST` for lost robots.
pub fn format_results(results: &[RobotResult]) -> String {
    results
        .iter()
        .map(RobotResult::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
