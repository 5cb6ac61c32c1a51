//! End-to-end scenarios for both drivers, driven through the public API
//! exactly the way the binary drives it: parse, run, render.

use actman_core::{
    ActionRecord, Cell, Compass, Direction, MonsterKind, Outcome, Pos, STARTING_SCORE, ScoreRules,
    apply_agent_move, breadth_first, dungeon_file::render_search_trace, fire_bullet, parse_dungeon,
};

#[test]
fn scenario_collision_win_on_a_three_by_three_grid() {
    let initial = parse_dungeon("3 3\n# #\n A \n D ").expect("grid parses");
    let result = breadth_first(&initial);
    assert_eq!(result.outcome, Some(Outcome::Win));
    assert!(result.state.monsters.is_empty());
    assert_eq!(result.state.score, STARTING_SCORE - 1 + 5);
    assert_eq!(result.state.agent, Some(Pos { row: 2, col: 1 }));

    let trace = render_search_trace(&result.state);
    assert!(trace.starts_with("Move South and Eliminate Monster\n"));
    assert!(trace.contains("Score: 54\n"));
}

#[test]
fn scenario_score_depletion_after_fifty_moves() {
    // The monster is sealed in its own chamber; the agent shuttles in the
    // open cells and bleeds one point per move.
    let initial = parse_dungeon("3 7\n#######\n#A # D#\n#######").expect("grid parses");
    let rules = ScoreRules::search();
    let mut state = initial;
    for step in 0..50 {
        let direction = if step % 2 == 0 { Direction::East } else { Direction::West };
        state = apply_agent_move(&state, direction, &rules);
        if step < 49 {
            assert!(!state.is_loss(), "lost early at move {}", step + 1);
        }
    }
    assert_eq!(state.score, 0);
    assert!(state.is_loss());
    assert!(!state.is_win());
    assert_eq!(state.monsters.len(), 1);
}

#[test]
fn scenario_bullet_stopped_by_wall_between_agent_and_monster() {
    // Monster at row 0, wall at row 1, agent at row 2, firing north.
    let initial = parse_dungeon("3 3\n D \n # \n A ").expect("grid parses");
    assert_eq!(initial.last_heading, Direction::North);
    let fired = fire_bullet(&initial, &ScoreRules::search());
    assert!(fired.bullet_fired);
    assert_eq!(fired.monsters.len(), 1);
    assert_eq!(fired.score, initial.score - 1);
    assert_eq!(
        fired.dungeon.cell_at(Pos { row: 0, col: 1 }),
        Cell::Monster(MonsterKind::Demon)
    );
}

#[test]
fn scenario_monster_free_grid_needs_no_expansion() {
    let initial = parse_dungeon("4 4\n####\n# A#\n#  #\n####").expect("grid parses");
    let result = breadth_first(&initial);
    assert_eq!(result.outcome, Some(Outcome::Win));
    assert_eq!(result.expanded, 0);
    assert_eq!(result.state, initial);
}

#[test]
fn blocked_moves_keep_the_log_but_not_the_cost() {
    let initial = parse_dungeon("3 3\n###\n#A#\n#D#").expect("grid parses");
    let rules = ScoreRules::search();
    let waited = apply_agent_move(&initial, Direction::North, &rules);
    assert_eq!(waited.score, STARTING_SCORE);
    assert_eq!(
        waited.actions,
        vec![ActionRecord::Step { heading: Compass::North, eliminated: false }]
    );
}
