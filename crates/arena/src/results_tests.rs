use super::*;
use varchess_core::mv;

fn record(outcome: Outcome) -> GameRecord {
    GameRecord {
        white: Difficulty::Hard,
        black: Difficulty::Easy,
        start: "k4/5/1QK2/5/5".to_string(),
        moves: vec![mv((2, 1), (1, 1))],
        outcome,
        truncated: outcome == Outcome::InProgress,
    }
}

#[test]
fn test_match_result_score() {
    let mut result = MatchResult::new();
    assert_eq!(result.score(), 0.5);
    result.record(GameResult::Win);
    result.record(GameResult::Win);
    result.record(GameResult::Draw);
    result.record(GameResult::Loss);
    assert_eq!(result.total_games(), 4);
    assert_eq!(result.score(), 0.625);
}

#[test]
fn test_record_result_is_from_white() {
    let white_wins = record(Outcome::Checkmate {
        winner: Color::White,
    });
    assert_eq!(white_wins.result(), GameResult::Win);
    assert_eq!(white_wins.result().flipped(), GameResult::Loss);

    let black_wins = record(Outcome::Checkmate {
        winner: Color::Black,
    });
    assert_eq!(black_wins.result(), GameResult::Loss);

    assert_eq!(record(Outcome::Stalemate).result(), GameResult::Draw);
    assert_eq!(record(Outcome::InProgress).result(), GameResult::Draw);
    assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
}

#[test]
fn test_report_save_and_load() {
    let report = MatchReport {
        first: Difficulty::Hard,
        second: Difficulty::Easy,
        config: MatchConfig::default(),
        result: MatchResult {
            wins: 1,
            losses: 0,
            draws: 0,
        },
        games: vec![record(Outcome::Checkmate {
            winner: Color::White,
        })],
    };
    let path = std::env::temp_dir().join(format!("varchess-report-{}.json", std::process::id()));
    report.save(&path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"first\": \"hard\""));
    assert!(json.contains("\"state\": \"checkmate\""));

    let loaded = MatchReport::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded.games, report.games);
    assert_eq!(loaded.result, report.result);
    assert_eq!(loaded.config, report.config);

    assert!(matches!(
        MatchReport::load(&path),
        Err(ReportError::Io(_))
    ));
}

#[test]
fn test_text_report() {
    let report = MatchReport {
        first: Difficulty::VeryHard,
        second: Difficulty::Medium,
        config: MatchConfig {
            num_games: 2,
            board_size: 5,
            ..Default::default()
        },
        result: MatchResult {
            wins: 1,
            losses: 0,
            draws: 1,
        },
        games: vec![
            record(Outcome::Checkmate {
                winner: Color::White,
            }),
            record(Outcome::Stalemate),
        ],
    };
    let text = report.generate_report();
    assert!(text.starts_with("=== Match: Very Hard vs Medium ==="));
    assert!(text.contains("2 games, 5x5 board"));
    assert!(text.contains("1-0"));
    assert!(text.contains("1/2 stalemate"));
    assert!(text.contains("score 75.0%"));
}
