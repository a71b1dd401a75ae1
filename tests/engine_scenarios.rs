use pookalam::{
    is_solved, Direction, FixedRotations, LevelChange, PuzzleEngine, PuzzleError, Ring,
    RotationOutcome, MAX_LEVEL,
};

fn segments(ring: &Ring) -> Vec<u8> {
    ring.segments().to_vec()
}

#[test]
fn first_level_solves_after_four_forward_turns() {
    let engine = PuzzleEngine::new();
    let mut state = engine
        .initialize(1, &mut FixedRotations::new(vec![2]))
        .unwrap();
    assert_eq!(segments(&state.target_pattern()[0]), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(segments(&state.rings()[0]), vec![4, 5, 0, 1, 2, 3]);

    let expected = [
        vec![3, 4, 5, 0, 1, 2],
        vec![2, 3, 4, 5, 0, 1],
        vec![1, 2, 3, 4, 5, 0],
        vec![0, 1, 2, 3, 4, 5],
    ];
    for (i, want) in expected.iter().enumerate() {
        let (next, outcome) = engine.rotate(&state, 0, Direction::Forward).unwrap();
        state = next;
        assert_eq!(&segments(&state.rings()[0]), want);
        assert_eq!(state.moves(), i + 1);
        assert_eq!(outcome.is_solved(), i == 3);
    }
    assert!(state.is_complete());
    assert_eq!(state.level(), 1);
}

#[test]
fn out_of_range_ring_is_rejected_on_the_last_level() {
    let engine = PuzzleEngine::new();
    let state = engine
        .initialize(MAX_LEVEL, &mut FixedRotations::new(vec![1]))
        .unwrap();
    let err = engine.rotate(&state, 4, Direction::Forward).unwrap_err();
    assert_eq!(err, PuzzleError::InvalidRing { ring: 4, level: 4 });
    assert_eq!(state.moves(), 0);
}

#[test]
fn out_of_range_level_is_rejected() {
    let engine = PuzzleEngine::new();
    let mut source = FixedRotations::default();
    for level in [0, MAX_LEVEL + 1] {
        assert_eq!(
            engine.initialize(level, &mut source).unwrap_err(),
            PuzzleError::InvalidLevel { level, max_level: MAX_LEVEL }
        );
        assert!(engine.generate(level, &mut source).is_err());
    }
}

#[test]
fn solved_intermediate_level_advances_to_fresh_state() {
    let engine = PuzzleEngine::new();
    let state = engine
        .initialize(2, &mut FixedRotations::new(vec![0, 1]))
        .unwrap();
    let (state, outcome) = engine.rotate(&state, 1, Direction::Backward).unwrap();
    assert_eq!(outcome, RotationOutcome::Solved { ring: 1 });
    assert!(state.is_complete());

    let change = engine.advance_level(&state);
    assert_eq!(change, LevelChange::Advanced { from: 2, to: 3 });
    let next = engine
        .initialize(change.level(), &mut FixedRotations::new(vec![3]))
        .unwrap();
    assert_eq!(next.level(), 3);
    assert_eq!(next.moves(), 0);
    assert!(!next.is_complete());
    assert_eq!(next.rings().len(), 3);
}

#[test]
fn final_level_never_advances() {
    let engine = PuzzleEngine::new();
    let state = engine
        .initialize(MAX_LEVEL, &mut FixedRotations::new(vec![0, 0, 0, 1]))
        .unwrap();
    let (state, outcome) = engine.rotate(&state, 3, Direction::Backward).unwrap();
    assert!(outcome.is_solved());
    assert!(state.is_game_won(&engine));
    for _ in 0..3 {
        let change = engine.advance_level(&state);
        assert_eq!(change, LevelChange::AlreadyFinal { level: MAX_LEVEL });
        assert_eq!(change.level(), MAX_LEVEL);
    }
}

#[test]
fn reset_returns_to_level_one() {
    let engine = PuzzleEngine::new();
    let state = engine
        .initialize(3, &mut FixedRotations::new(vec![1]))
        .unwrap();
    let change = engine.reset_to_level_one(&state);
    assert_eq!(change, LevelChange::Reset { from: 3 });
    let fresh = engine.initialize(change.level(), &mut FixedRotations::default()).unwrap();
    assert_eq!(fresh.level(), 1);
    assert_eq!(fresh.rings().len(), 1);
}

#[test]
fn restart_keeps_level_and_clears_moves() {
    let engine = PuzzleEngine::new();
    let state = engine
        .initialize(2, &mut FixedRotations::new(vec![1, 2]))
        .unwrap();
    let (state, _) = engine.rotate(&state, 0, Direction::Forward).unwrap();
    let (state, _) = engine.rotate(&state, 1, Direction::Forward).unwrap();
    assert_eq!(state.moves(), 2);
    let restarted = engine
        .restart_level(&state, &mut FixedRotations::new(vec![4]))
        .unwrap();
    assert_eq!(restarted.level(), 2);
    assert_eq!(restarted.moves(), 0);
    assert!(!restarted.is_complete());
}

#[test]
fn completion_needs_every_ring() {
    let engine = PuzzleEngine::new();
    let state = engine
        .initialize(2, &mut FixedRotations::new(vec![1, 1]))
        .unwrap();
    let (state, outcome) = engine.rotate(&state, 0, Direction::Backward).unwrap();
    assert_eq!(outcome, RotationOutcome::Step { ring: 0 });
    assert!(!state.is_complete());
    let (state, outcome) = engine.rotate(&state, 1, Direction::Backward).unwrap();
    assert_eq!(outcome, RotationOutcome::Solved { ring: 1 });
    // undoing an earlier ring un-solves the level again
    let (state, outcome) = engine.rotate(&state, 0, Direction::Forward).unwrap();
    assert_eq!(outcome, RotationOutcome::Step { ring: 0 });
    assert!(!state.is_complete());
    assert_eq!(state.moves(), 3);
}

#[test]
fn is_solved_detects_single_segment_changes() {
    let target = vec![Ring::canonical(6, 6), Ring::canonical(8, 8)];
    assert!(is_solved(&target, &target));
    for i in 0..target.len() {
        for j in 0..target[i].len() {
            let mut rings = target.clone();
            let mut segs = rings[i].segments().to_vec();
            segs[j] = segs[j].wrapping_add(1);
            rings[i] = Ring::new(segs);
            assert!(!is_solved(&rings, &target), "ring {} segment {}", i, j);
        }
    }
    assert!(!is_solved(&target[..1], &target));
}

#[test]
fn small_palettes_repeat_colors() {
    let engine = PuzzleEngine::with_specs(vec![
        pookalam::RingSpec::new(4, &["#111111", "#222222"]),
        pookalam::RingSpec::new(6, &["#333333", "#444444", "#555555"]),
    ])
    .unwrap();
    let state = engine
        .initialize(2, &mut FixedRotations::default())
        .unwrap();
    assert_eq!(segments(&state.target_pattern()[0]), vec![0, 1, 0, 1]);
    assert_eq!(segments(&state.target_pattern()[1]), vec![0, 1, 2, 0, 1, 2]);
    assert_eq!(engine.advance_level(&state), LevelChange::AlreadyFinal { level: 2 });
}
