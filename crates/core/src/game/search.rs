//! Breadth-first exploration of the joint successor graph.
//! Returns the first terminal state in enumeration order; the queue is
//! unbounded, so memory is the only limit on grid size.

use std::collections::VecDeque;

use super::successors::{agent_successors, monster_successors};
use crate::state::GameState;
use crate::types::Outcome;

#[derive(Clone, Debug)]
pub struct SearchResult {
    pub state: GameState,
    /// Non-terminal states expanded before the terminal was dequeued.
    pub expanded: u64,
    /// `None` when the queue ran dry without reaching a terminal state; the
    /// carried state is then the unchanged initial one.
    pub outcome: Option<Outcome>,
}

pub fn breadth_first(initial: &GameState) -> SearchResult {
    let mut queue = VecDeque::new();
    queue.push_back(initial.clone());
    let mut expanded = 0_u64;
    while let Some(current) = queue.pop_front() {
        if let Some(outcome) = current.outcome() {
            return SearchResult { state: current, expanded, outcome: Some(outcome) };
        }
        expanded += 1;
        for candidate in agent_successors(&current) {
            let branches = monster_successors(&candidate);
            if branches.is_empty() {
                // No monster can respond (all eliminated or boxed in); the
                // agent half of the ply is the whole ply.
                queue.push_back(candidate);
            } else {
                queue.extend(branches);
            }
        }
    }
    SearchResult { state: initial.clone(), expanded, outcome: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon_file::parse_dungeon;
    use crate::types::{ActionRecord, Compass};

    fn fixture(text: &str) -> GameState {
        parse_dungeon(text).expect("fixture parses")
    }

    #[test]
    fn monster_free_grid_is_an_immediate_win() {
        let state = fixture("3 3\n   \n A \n   ");
        let result = breadth_first(&state);
        assert_eq!(result.outcome, Some(Outcome::Win));
        assert_eq!(result.expanded, 0);
        assert_eq!(result.state, state);
    }

    #[test]
    fn adjacent_monster_is_eliminated_by_collision() {
        let state = fixture("3 3\n# #\n A \n D ");
        let result = breadth_first(&state);
        assert_eq!(result.outcome, Some(Outcome::Win));
        assert!(result.state.monsters.is_empty());
        assert_eq!(result.state.score, 54);
        assert_eq!(
            result.state.actions,
            vec![ActionRecord::Step { heading: Compass::South, eliminated: true }]
        );
    }

    #[test]
    fn capture_is_found_when_no_win_exists() {
        // The monster sits diagonal to the agent, so no cardinal move or
        // northward bullet can eliminate it, but it can pounce.
        let state = fixture("3 3\nA##\n#D#\n###");
        let result = breadth_first(&state);
        assert_eq!(result.outcome, Some(Outcome::Loss));
        assert_eq!(result.state.agent, None);
        assert_eq!(result.state.score, 50);
        assert_eq!(result.state.monsters.len(), 1);
    }
}
