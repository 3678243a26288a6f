//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p varchess_core -- [depth] [layout]
//!
//! Examples:
//!   # Default: depth 3 over the built-in positions
//!   cargo flamegraph --example perft_bench -p varchess_core
//!
//!   # Custom depth and position, white to move
//!   cargo flamegraph --example perft_bench -p varchess_core -- 4 "r3k3/3pp3/8/8/8/8/3PP3/R3K3"

use std::env;
use std::time::{Duration, Instant};

use varchess_core::{perft, Board, Color};

/// Positions on every supported size, white to move
const TEST_POSITIONS: &[(&str, &str)] = &[
    ("5x5 rooks and pawns", "1rk2/2p2/5/2P2/2KR1"),
    ("6x6 pawn wall", "2k3/1pp3/6/6/3PP1/2K3"),
    ("7x7 minor pieces", "n2k2b/2ppp2/7/7/7/2PPP2/B2K2N"),
    ("8x8 rook ending", "r3k3/3pp3/8/8/8/8/3PP3/R3K3"),
    ("9x9 pawn rows", "4k4/1ppp1ppp1/9/9/9/9/9/1PPP1PPP1/4K4"),
    ("10x10 queens", "q4k4/3ppp4/10/10/10/10/10/10/3PPP4/Q4K4"),
];

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    // If a layout is provided, use single position mode
    if let Some(layout) = args.get(2) {
        run_single_position(layout, depth);
    } else {
        run_all_positions(depth);
    }
}

fn run_single_position(layout: &str, depth: u8) {
    let board = match Board::from_layout(layout) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Invalid layout: {e}");
            return;
        }
    };

    println!("Position: {layout}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&board, Color::White, depth - 2);
    }

    let start = Instant::now();
    let nodes = perft(&board, Color::White, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, layout) in TEST_POSITIONS {
        let Ok(board) = Board::from_layout(layout) else {
            eprintln!("{name}: invalid layout");
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&board, Color::White, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
