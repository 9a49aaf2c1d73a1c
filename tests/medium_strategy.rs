//! Medium strategy: greedy chase and BFS recovery when it oscillates.

use mummy_ai::ai::medium::MediumAi;
use mummy_ai::config::MediumTuning;
use mummy_ai::{Position, Strategy, TileMap};

#[test]
fn blocked_greedy_step_triggers_bfs_recovery_until_countdown_ends() {
    let map = TileMap::parse(
        "\
.....
..#..
.....",
    )
    .unwrap();
    let tuning = MediumTuning::default();
    let mut ai = MediumAi::new(tuning).unwrap();
    let target = Position::new(1, 4);
    let mut mummy = Position::new(1, 1);

    // Greedy keeps proposing the cell it is stuck on.
    for _ in 0..tuning.stuck_threshold {
        mummy = ai.decide_move(mummy, target, &map).unwrap();
        assert_eq!(mummy, Position::new(1, 1));
        assert!(!ai.is_recovering());
    }

    // Threshold reached: recovery armed and the first BFS step taken.
    mummy = ai.decide_move(mummy, target, &map).unwrap();
    assert_eq!(mummy, Position::new(2, 1));
    assert_eq!(ai.recovery_turns_remaining(), tuning.recovery_turns);

    // Recovery turns follow BFS around the wall.
    mummy = ai.decide_move(mummy, target, &map).unwrap();
    assert_eq!(mummy, Position::new(2, 2));
    assert_eq!(ai.recovery_turns_remaining(), 1);
    mummy = ai.decide_move(mummy, target, &map).unwrap();
    assert_eq!(mummy, Position::new(2, 3));
    assert_eq!(ai.recovery_turns_remaining(), 0);
    assert!(!ai.is_recovering());

    // Back to greedy: rows win the tie.
    mummy = ai.decide_move(mummy, target, &map).unwrap();
    assert_eq!(mummy, Position::new(1, 3));
    assert_eq!(ai.stuck_counter(), 0);
    mummy = ai.decide_move(mummy, target, &map).unwrap();
    assert_eq!(mummy, target);
}

#[test]
fn unreachable_target_keeps_it_in_place() {
    let map = TileMap::parse(
        "\
..#..
..#..
..#..",
    )
    .unwrap();
    let mut ai = MediumAi::new(MediumTuning::default()).unwrap();
    let mut mummy = Position::new(1, 1);
    for _ in 0..10 {
        mummy = ai.decide_move(mummy, Position::new(1, 4), &map).unwrap();
        assert_eq!(mummy, Position::new(1, 1));
    }
}
