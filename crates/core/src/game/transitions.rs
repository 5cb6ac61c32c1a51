//! Pure state transitions for the search model.
//! Every function takes a parent state by reference and returns a fresh
//! clone with the effect applied; parents are never mutated.

use crate::state::GameState;
use crate::types::*;

/// Apply one cardinal agent move. A blocked target (wall or out of bounds)
/// is a recorded no-op: the action still enters the log so the search keeps
/// a "wait" branch, but position and score are untouched.
pub fn apply_agent_move(state: &GameState, direction: Direction, rules: &ScoreRules) -> GameState {
    let mut next = state.clone();
    let record = ActionRecord::Step { heading: direction.into(), eliminated: false };
    let Some(from) = state.agent else {
        next.actions.push(record);
        return next;
    };
    let (dr, dc) = direction.delta();
    let target = from.offset(dr, dc);
    if !next.dungeon.can_move(target) {
        next.actions.push(record);
        return next;
    }
    let mut eliminated = false;
    if next.monsters.remove(&target).is_some() {
        next.dungeon.set_cell(target, Cell::Remains);
        next.score += rules.collision_bonus;
        eliminated = true;
    }
    next.dungeon.set_cell(from, Cell::Empty);
    next.dungeon.set_cell(target, Cell::Agent);
    next.agent = Some(target);
    next.score -= rules.move_cost;
    next.last_heading = direction;
    next.actions.push(ActionRecord::Step { heading: direction.into(), eliminated });
    next
}

/// Fire the one-shot bullet along the agent's last intended heading. A
/// second call on a state that already spent the bullet is an exact no-op.
pub fn fire_bullet(state: &GameState, rules: &ScoreRules) -> GameState {
    if state.bullet_fired {
        return state.clone();
    }
    let mut next = state.clone();
    next.bullet_fired = true;
    if let Some(from) = state.agent {
        shoot(&mut next, from, state.last_heading.delta(), rules.bullet_hit);
    }
    next.score -= rules.move_cost;
    next.actions.push(ActionRecord::Fire);
    next
}

/// Bullet travel: cell by cell until a wall absorbs it, the first monster
/// is consumed, or the grid edge is reached.
pub(super) fn shoot(state: &mut GameState, from: Pos, (dr, dc): (i32, i32), hit_delta: i32) {
    let mut pos = from.offset(dr, dc);
    while state.dungeon.in_bounds(pos) {
        if state.dungeon.cell_at(pos) == Cell::Wall {
            break;
        }
        if state.monsters.remove(&pos).is_some() {
            state.dungeon.set_cell(pos, Cell::Remains);
            state.score += hit_delta;
            break;
        }
        pos = pos.offset(dr, dc);
    }
}

/// The agent is caught: its cell becomes the fallen marker and its position
/// goes off-grid. The initiating monster keeps its own cell, so the
/// monster-cell correspondence holds even in terminal states.
pub(super) fn capture_agent(state: &mut GameState) {
    if let Some(pos) = state.agent.take() {
        state.dungeon.set_cell(pos, Cell::Fallen);
    }
}

/// Move one monster to an adjacent cell. Stepping onto the agent is a
/// capture, not a swap: the monster stays put and the agent falls.
pub(super) fn step_monster(state: &GameState, from: Pos, to: Pos) -> GameState {
    let mut next = state.clone();
    if state.agent == Some(to) {
        capture_agent(&mut next);
        return next;
    }
    let Some(kind) = next.monsters.remove(&from) else {
        return next;
    };
    next.dungeon.set_cell(from, Cell::Empty);
    next.monsters.insert(to, kind);
    next.dungeon.set_cell(to, Cell::Monster(kind));
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon_file::parse_dungeon;

    fn fixture(text: &str) -> GameState {
        parse_dungeon(text).expect("fixture parses")
    }

    #[test]
    fn valid_move_costs_one_and_updates_cells() {
        let state = fixture("3 3\n# #\n A \n D ");
        let next = apply_agent_move(&state, Direction::East, &ScoreRules::search());
        assert_eq!(next.agent, Some(Pos { row: 1, col: 2 }));
        assert_eq!(next.score, STARTING_SCORE - 1);
        assert_eq!(next.dungeon.cell_at(Pos { row: 1, col: 1 }), Cell::Empty);
        assert_eq!(next.dungeon.cell_at(Pos { row: 1, col: 2 }), Cell::Agent);
        assert_eq!(next.last_heading, Direction::East);
        assert_eq!(
            next.actions,
            vec![ActionRecord::Step { heading: Compass::East, eliminated: false }]
        );
        // The parent is untouched.
        assert_eq!(state.agent, Some(Pos { row: 1, col: 1 }));
        assert_eq!(state.actions.len(), 0);
    }

    #[test]
    fn blocked_move_is_a_recorded_no_op() {
        let state = fixture("3 3\n# #\n#A \n D ");
        let next = apply_agent_move(&state, Direction::West, &ScoreRules::search());
        assert_eq!(next.agent, state.agent);
        assert_eq!(next.score, STARTING_SCORE);
        assert_eq!(next.actions.len(), 1);
        assert_eq!(next.last_heading, Direction::North);
    }

    #[test]
    fn walking_into_a_monster_eliminates_it() {
        let state = fixture("3 3\n# #\n A \n D ");
        let next = apply_agent_move(&state, Direction::South, &ScoreRules::search());
        assert!(next.monsters.is_empty());
        assert_eq!(next.score, STARTING_SCORE + 5 - 1);
        assert_eq!(next.agent, Some(Pos { row: 2, col: 1 }));
        assert!(next.is_win());
        assert_eq!(
            next.actions,
            vec![ActionRecord::Step { heading: Compass::South, eliminated: true }]
        );
    }

    #[test]
    fn bullet_consumes_the_first_monster_in_line() {
        let mut state = fixture("4 1\nD\nG\n \nA");
        state.last_heading = Direction::North;
        let next = fire_bullet(&state, &ScoreRules::search());
        assert!(next.bullet_fired);
        assert_eq!(next.score, STARTING_SCORE + 5 - 1);
        assert_eq!(next.monsters.len(), 1);
        // The nearer monster dies; the far one survives behind the remains.
        assert_eq!(next.dungeon.cell_at(Pos { row: 1, col: 0 }), Cell::Remains);
        assert_eq!(
            next.dungeon.cell_at(Pos { row: 0, col: 0 }),
            Cell::Monster(MonsterKind::Demon)
        );
        assert_eq!(next.actions, vec![ActionRecord::Fire]);
    }

    #[test]
    fn bullet_is_absorbed_by_a_wall() {
        let mut state = fixture("3 3\n D \n # \n A ");
        state.last_heading = Direction::North;
        let next = fire_bullet(&state, &ScoreRules::search());
        assert!(next.bullet_fired);
        assert_eq!(next.monsters.len(), 1);
        assert_eq!(next.score, STARTING_SCORE - 1);
    }

    #[test]
    fn bullet_into_open_space_still_spends_the_shot() {
        let mut state = fixture("3 3\n   \n A \n D ");
        state.last_heading = Direction::North;
        let next = fire_bullet(&state, &ScoreRules::search());
        assert!(next.bullet_fired);
        assert_eq!(next.monsters.len(), 1);
        assert_eq!(next.score, STARTING_SCORE - 1);
    }

    #[test]
    fn second_fire_is_an_exact_no_op() {
        let mut state = fixture("3 3\n D \n # \n A ");
        state.last_heading = Direction::North;
        let fired = fire_bullet(&state, &ScoreRules::search());
        let again = fire_bullet(&fired, &ScoreRules::search());
        assert_eq!(again, fired);
    }

    #[test]
    fn monster_stepping_onto_the_agent_captures_it() {
        let state = fixture("3 3\n# #\n A \n D ");
        let next = step_monster(&state, Pos { row: 2, col: 1 }, Pos { row: 1, col: 1 });
        assert_eq!(next.agent, None);
        assert_eq!(next.dungeon.cell_at(Pos { row: 1, col: 1 }), Cell::Fallen);
        // The monster did not complete the step.
        assert_eq!(
            next.dungeon.cell_at(Pos { row: 2, col: 1 }),
            Cell::Monster(MonsterKind::Demon)
        );
        assert_eq!(next.monsters.len(), 1);
        assert!(next.is_loss());
    }

    #[test]
    fn monster_step_keeps_grid_and_set_in_lockstep() {
        let state = fixture("3 3\n# #\n A \n G ");
        let next = step_monster(&state, Pos { row: 2, col: 1 }, Pos { row: 2, col: 2 });
        assert_eq!(next.dungeon.cell_at(Pos { row: 2, col: 1 }), Cell::Empty);
        assert_eq!(next.dungeon.cell_at(Pos { row: 2, col: 2 }), Cell::Monster(MonsterKind::Ogre));
        assert_eq!(next.monsters.get(&Pos { row: 2, col: 2 }), Some(&MonsterKind::Ogre));
        assert_eq!(next.monsters.len(), 1);
    }
}
