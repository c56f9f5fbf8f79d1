// tests/mission_format.rs
use glam::IVec2;
use grid_robot::{Heading, Mission, RobotError, RobotOp, SimulationConfig, format_results};

const SAMPLE: &str = "5 3
1 1 E
RFRFRFRF

3 2 N
FRRFLLFFRRFLL

0 3 W
LLFFFLFLFL";

#[test]
fn test_sample_round_trip() {
    let mission: Mission = SAMPLE.parse().unwrap();
    assert_eq!(mission.boundary.max, IVec2::new(5, 3));
    assert_eq!(mission.robots.len(), 3);
    assert_eq!(mission.robots[2].start.heading, Heading::West);
    assert_eq!(mission.robots[0].instructions.len(), 8);

    let report = mission.simulate(SimulationConfig::default());
    assert_eq!(format_results(&report.results), "1 1 E\n3 3 N LOST\n2 3 S");
}

#[test]
fn test_tolerates_crlf_and_extra_blank_lines() {
    let input = "\r\n5 3\r\n1 1 E\r\nRFRFRFRF\r\n\r\n\r\n3 2 N\r\nFRRFLLFFRRFLL\r\n\r\n";
    let mission: Mission = input.parse().unwrap();
    assert_eq!(mission.robots.len(), 2);
    assert_eq!(mission.robots[1].instructions[0], RobotOp::Forward);
}

#[test]
fn test_robot_without_instructions_reports_start_pose() {
    let mission: Mission = "5 3\n2 2 S\n\n1 1 N\nF".parse().unwrap();
    assert!(mission.robots[0].instructions.is_empty());

    let report = mission.simulate(SimulationConfig::default());
    assert_eq!(format_results(&report.results), "2 2 S\n1 2 N");
}

#[test]
fn test_grid_only_mission_has_no_robots() {
    let mission: Mission = "5 3\n".parse().unwrap();
    assert!(mission.robots.is_empty());
    assert_eq!(format_results(&mission.simulate(SimulationConfig::default()).results), "");
}

#[test]
fn test_maximum_grid_does_not_overflow() {
    let mission: Mission = "2147483647 0\n2147483647 0 E\nF".parse().unwrap();
    let report = mission.simulate(SimulationConfig::default());
    assert_eq!(format_results(&report.results), "2147483647 0 E LOST");
}

#[test]
fn test_rejects_empty_input() {
    assert_eq!("".parse::<Mission>(), Err(RobotError::EmptyInput));
    assert_eq!("\n  \n".parse::<Mission>(), Err(RobotError::EmptyInput));
}

#[test]
fn test_rejects_bad_boundary() {
    assert!(matches!(
        "5\n1 1 E\nF".parse::<Mission>(),
        Err(RobotError::Parse { line: 1, .. })
    ));
    assert!(matches!(
        "-1 3\n".parse::<Mission>(),
        Err(RobotError::Parse { line: 1, .. })
    ));
}

#[test]
fn test_rejects_unknown_heading() {
    let err = "5 3\n1 1 Q\nF".parse::<Mission>().unwrap_err();
    assert!(matches!(err, RobotError::Parse { line: 2, .. }));
    assert!(err.to_string().contains("invalid heading"));
}

#[test]
fn test_rejects_unknown_instruction() {
    let err = "5 3\n1 1 E\nFFXF".parse::<Mission>().unwrap_err();
    assert!(matches!(err, RobotError::Parse { line: 3, .. }));
    assert!(err.to_string().contains("index 2"));
}

#[test]
fn test_rejects_start_outside_grid() {
    assert!(matches!(
        "5 3\n6 1 E\nF".parse::<Mission>(),
        Err(RobotError::Parse { line: 2, .. })
    ));
}

#[test]
fn test_rejects_missing_separator() {
    assert!(matches!(
        "5 3\n1 1 E\nF\n2 2 N\nF".parse::<Mission>(),
        Err(RobotError::Parse { line: 4, .. })
    ));
}

#[test]
fn test_rejects_slice_style_pose() {
    // Fields must be whitespace separated; positional slicing is not accepted.
    assert!("5 3\n1 1E\nF".parse::<Mission>().is_err());
}
