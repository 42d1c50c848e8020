use robot_sim::utils::logger::BufferLogger;
use robot_sim::{Board, LogLevel, RunSummary, Simulation, StaticLineSource};

struct Outcome {
    summary: RunSummary,
    output: String,
    logger: BufferLogger,
}

impl Outcome {
    /// Result stream and log stream together, as a terminal would show them.
    fn combined(&self) -> String {
        let mut all = self.output.clone();
        for message in self.logger.messages() {
            all.push_str(&message);
            all.push('\n');
        }
        all
    }
}

fn simulate(board: Board, lines: &[&str]) -> Outcome {
    let logger = BufferLogger::new(LogLevel::Info);
    let mut source = StaticLineSource::from_strs(lines);
    let mut output = Vec::new();

    let summary = Simulation::new(board, &logger)
        .run(&mut source, &mut output)
        .unwrap();

    Outcome {
        summary,
        output: String::from_utf8(output).unwrap(),
        logger,
    }
}

#[test]
fn test_place_move_report_on_default_board() {
    let outcome = simulate(Board::default(), &["PLACE 0,0,NORTH", "MOVE", "REPORT"]);

    assert!(outcome.output.contains("Output: 0,1,NORTH"));
    assert!(outcome.combined().contains("Simulation completed with 0 Errors."));
    assert_eq!(outcome.summary.errors, 0);
}

#[test]
fn test_moves_off_a_small_board_are_rejected() {
    let board = Board::new(2, 2).unwrap();
    let outcome = simulate(board, &["PLACE 0,0,NORTH", "MOVE", "MOVE", "MOVE"]);

    assert!(outcome.combined().contains("position out of bounds"));
    assert!(outcome.combined().contains("Simulation completed with 2 Errors."));
    assert_eq!(outcome.summary, RunSummary { lines: 4, errors: 2 });
}

#[test]
fn test_empty_input_prints_notice_without_summary() {
    let outcome = simulate(Board::default(), &[]);

    assert!(outcome.combined().contains("No input lines to process"));
    assert!(!outcome.combined().contains("Simulation completed"));
    assert!(outcome.summary.is_empty());
}

#[test]
fn test_report_before_place_only_warns() {
    let outcome = simulate(Board::default(), &["REPORT"]);

    assert_eq!(outcome.logger.count_at(LogLevel::Warning), 1);
    assert!(!outcome.combined().contains("Output:"));
    assert!(outcome.combined().contains("Simulation completed with 0 Errors."));
}

#[test]
fn test_multiple_place_commands() {
    let outcome = simulate(
        Board::default(),
        &[
            "PLACE 0,0,NORTH",
            "REPORT",
            "PLACE 4,4,SOUTH",
            "REPORT",
            "place 2,2,east",
            "report",
        ],
    );

    assert_eq!(
        outcome.output,
        "Output: 0,0,NORTH\nOutput: 4,4,SOUTH\nOutput: 2,2,EAST\n"
    );
    assert!(outcome.logger.contains("robot placed at 4,4 facing SOUTH"));
    assert_eq!(outcome.summary.errors, 0);
}

#[test]
fn test_invalid_commands_are_counted() {
    let outcome = simulate(
        Board::default(),
        &["PLACE 1,2", "MOVE", "PLACE 0,0,NOPE", "PLACE 1,1,NORTH", "LEFT", "MOVE", "REPORT"],
    );

    assert!(outcome.logger.contains("Parse error on line 1"));
    assert!(outcome.logger.contains("Execution error on line 2"));
    assert!(outcome.logger.contains("Parse error on line 3: invalid direction: NOPE"));
    assert_eq!(outcome.output, "Output: 0,1,WEST\n");
    assert!(outcome.combined().contains("Simulation completed with 3 Errors."));
}

#[test]
fn test_walk_the_perimeter() {
    let mut lines = vec!["PLACE 0,0,EAST"];
    for _ in 0..4 {
        lines.extend(["MOVE"; 4]);
        lines.push("LEFT");
    }
    lines.push("REPORT");

    let outcome = simulate(Board::default(), &lines);
    assert_eq!(outcome.output, "Output: 0,0,EAST\n");
    assert_eq!(outcome.summary.errors, 0);
}

#[test]
fn test_silent_logger_still_reports() {
    let logger = BufferLogger::new(LogLevel::None);
    let mut source = StaticLineSource::from_strs(&["PLACE 3,3,WEST", "MOVE", "JUMP", "REPORT"]);
    let mut output = Vec::new();

    let summary = Simulation::new(Board::default(), &logger)
        .run(&mut source, &mut output)
        .unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "Output: 2,3,WEST\n");
    assert_eq!(summary.errors, 1);
    assert!(logger.messages().is_empty());
}
