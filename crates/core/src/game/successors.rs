//! Successor enumeration for the exhaustive search.
//! Agent and monster expansions are independent; the search driver composes
//! them into joint plies.

use super::transitions::{apply_agent_move, fire_bullet, step_monster};
use crate::state::GameState;
use crate::types::*;

/// Relative monster destinations in row-major order, the tie-breaking order
/// of the search.
pub const MONSTER_OFFSETS: [(i32, i32); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/// Exactly five candidates: the four cardinal moves (blocked ones included,
/// giving the search a wait branch) and one bullet attempt.
pub fn agent_successors(state: &GameState) -> Vec<GameState> {
    let rules = ScoreRules::search();
    let mut successors = Vec::with_capacity(5);
    for direction in Direction::ALL {
        successors.push(apply_agent_move(state, direction, &rules));
    }
    successors.push(fire_bullet(state, &rules));
    successors
}

/// Every monster branches independently into up to eight destinations; each
/// successor moves exactly one monster. Destinations held by another
/// monster are skipped so positions stay a set.
pub fn monster_successors(state: &GameState) -> Vec<GameState> {
    let mut successors = Vec::new();
    for &from in state.monsters.keys() {
        for (dr, dc) in MONSTER_OFFSETS {
            let to = from.offset(dr, dc);
            if !state.dungeon.can_move(to) {
                continue;
            }
            if state.monsters.contains_key(&to) {
                continue;
            }
            successors.push(step_monster(state, from, to));
        }
    }
    successors
}
