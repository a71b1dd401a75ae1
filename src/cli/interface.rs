#![cfg(feature = "std")]

//! Text rendering of the puzzle for terminal play.

use std::fmt::Write;

use crate::{
    common::RotationOutcome,
    game::{GameState, PuzzleEngine},
    palette::spec_color,
    ring::Ring,
};

fn segments_line(ring: &Ring) -> String {
    ring.segments()
        .iter()
        .map(|s| format!("{:>2}", s))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Multi-line view of every active ring next to its target.
pub fn render_state(engine: &PuzzleEngine, state: &GameState) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Level {}/{}   Moves {}",
        state.level(),
        engine.max_level(),
        state.moves()
    );
    for (i, (ring, target)) in state.rings().iter().zip(state.target_pattern()).enumerate() {
        let mark = if ring == target { '✓' } else { ' ' };
        let lead = ring
            .get(0)
            .and_then(|c| spec_color(&engine.specs()[i], c))
            .unwrap_or("-");
        let _ = writeln!(out, "  {} Ring {} [{}]  {}", mark, i + 1, lead, segments_line(ring));
        let _ = writeln!(out, "      target      {}", segments_line(target));
    }
    if state.is_game_won(engine) {
        let _ = writeln!(out, "Pookalam complete! Finished in {} moves.", state.moves());
    } else if state.is_complete() {
        let _ = writeln!(out, "Level complete in {} moves.", state.moves());
    }
    out
}

/// Print the current state to stdout.
pub fn print_state(engine: &PuzzleEngine, state: &GameState) {
    print!("{}", render_state(engine, state));
}

/// One-line description of a rotation result, with its cue unless `muted`.
pub fn describe_outcome(outcome: &RotationOutcome, muted: bool) -> String {
    let line = match outcome {
        RotationOutcome::Solved { ring } => format!("Ring {} locked in, level solved!", ring + 1),
        RotationOutcome::Step { ring } => format!("Ring {} turned", ring + 1),
    };
    if muted {
        return line;
    }
    let cue = outcome.cue();
    match outcome {
        RotationOutcome::Solved { .. } => format!("{} ({} Hz chime)", line, cue.frequency_hz),
        RotationOutcome::Step { .. } => format!("{} ({} Hz click)", line, cue.frequency_hz),
    }
}
