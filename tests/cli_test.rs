#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use pookalam::cli::{parse_command, render_state, Command};
    use pookalam::{
        Direction, Move, Player, PlayerNode, PuzzleEngine, Session, SolverPlayer, MAX_LEVEL,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn typed_moves_drive_the_engine() {
        let engine = PuzzleEngine::new();
        let mut state = engine
            .initialize(1, &mut pookalam::FixedRotations::new(vec![2]))
            .unwrap();
        for line in ["1 f", "1", "1 forward", "1 +"] {
            match parse_command(line, state.level()).unwrap() {
                Command::Rotate(mv) => {
                    state = engine.rotate(&state, mv.ring, mv.direction).unwrap().0;
                }
                other => panic!("unexpected command {:?}", other),
            }
        }
        assert!(state.is_complete());
        assert!(render_state(&engine, &state).contains("Level complete in 4 moves."));
    }

    #[test]
    fn solver_finishes_every_level_within_half_turns() {
        for seed in 0..20u64 {
            let session =
                Session::new(PuzzleEngine::new(), SmallRng::seed_from_u64(seed), 1).unwrap();
            let mut node = PlayerNode::new(Box::new(SolverPlayer::new()), session);
            let summary = node.run().unwrap();
            assert!(summary.won);
            assert_eq!(summary.levels.len(), MAX_LEVEL);
            // each level replays rings 0..level; a ring of n segments needs at
            // most n / 2 turns, or 2 if the whole level was dealt solved
            let bounds = [3, 3 + 4, 3 + 4 + 5, 3 + 4 + 5 + 6];
            for (record, bound) in summary.levels.iter().zip(bounds) {
                assert!(record.moves <= bound.max(2), "seed {} {:?}", seed, record);
            }
        }
    }

    #[test]
    fn test_reproducible_rng() {
        let run = |seed| {
            let session =
                Session::new(PuzzleEngine::new(), SmallRng::seed_from_u64(seed), 1).unwrap();
            PlayerNode::new(Box::new(SolverPlayer::new()), session).run().unwrap()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn hint_matches_solver_choice() {
        let engine = PuzzleEngine::new();
        let state = engine
            .initialize(2, &mut pookalam::FixedRotations::new(vec![0, 7]))
            .unwrap();
        let mv = SolverPlayer::new().select_move(&engine, &state);
        assert_eq!(mv, Some(Move::new(1, Direction::Forward)));
    }
}
