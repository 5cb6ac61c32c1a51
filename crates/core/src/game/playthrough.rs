//! Single randomized playthrough: a drunken agent against greedy monsters.
//! All randomness flows through an injected `ChaCha8Rng`, so any run can be
//! reproduced from its seed.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use super::successors::MONSTER_OFFSETS;
use super::transitions::{capture_agent, shoot};
use crate::state::GameState;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaythroughConfig {
    /// Probability applied at both bullet gates: once in the loop and once
    /// inside the bullet routine, so the effective per-step chance is its
    /// square.
    pub fire_probability: f64,
    /// Step budget; a boxed-in agent never bleeds score, so the loop needs
    /// an external bound.
    pub max_steps: u32,
}

impl Default for PlaythroughConfig {
    fn default() -> Self {
        Self { fire_probability: 0.3, max_steps: 10_000 }
    }
}

#[derive(Clone, Debug)]
pub struct PlaythroughResult {
    pub state: GameState,
    /// `None` when the step budget ran out before a terminal state.
    pub outcome: Option<Outcome>,
    pub steps: u32,
}

pub fn random_playthrough(
    initial: &GameState,
    config: &PlaythroughConfig,
    rng: &mut ChaCha8Rng,
) -> PlaythroughResult {
    let mut state = initial.clone();
    let rules = ScoreRules::playthrough();
    let mut steps = 0_u32;
    while steps < config.max_steps {
        if let Some(outcome) = state.outcome() {
            return PlaythroughResult { state, outcome: Some(outcome), steps };
        }
        steps += 1;
        let heading = Compass::ALL[pick(rng, Compass::ALL.len())];
        step_agent(&mut state, heading, &rules);
        if state.agent.is_none() {
            continue;
        }
        advance_monsters(&mut state, rng);
        if state.is_win() || state.is_loss() {
            continue;
        }
        if chance(rng, config.fire_probability) {
            try_fire(&mut state, config.fire_probability, &rules, rng);
        }
    }
    let outcome = state.outcome();
    PlaythroughResult { state, outcome, steps }
}

/// One eight-way agent step. A blocked target records the rejection
/// sentinel and costs nothing; stepping onto a monster is fatal for the
/// agent in this variant.
fn step_agent(state: &mut GameState, heading: Compass, rules: &ScoreRules) {
    let Some(from) = state.agent else {
        return;
    };
    let (dr, dc) = heading.delta();
    let target = from.offset(dr, dc);
    if !state.dungeon.can_move(target) {
        state.actions.push(ActionRecord::Rejected);
        return;
    }
    if state.monsters.contains_key(&target) {
        capture_agent(state);
        return;
    }
    state.dungeon.set_cell(from, Cell::Empty);
    state.dungeon.set_cell(target, Cell::Agent);
    state.agent = Some(target);
    state.score -= rules.move_cost;
    if let Some(direction) = heading.cardinal() {
        state.last_heading = direction;
    }
    state.actions.push(ActionRecord::Step { heading, eliminated: false });
}

/// Greedy nearest-move policy: monsters act in a shuffled order, each
/// taking the legal adjacent cell closest to the agent (squared Euclidean
/// distance, row-major tie-break) that no other monster holds. Reaching the
/// agent's cell captures it and ends the round.
fn advance_monsters(state: &mut GameState, rng: &mut ChaCha8Rng) {
    let Some(agent) = state.agent else {
        return;
    };
    let mut order: Vec<Pos> = state.monsters.keys().copied().collect();
    shuffle(rng, &mut order);
    for from in order {
        let Some(kind) = state.monsters.get(&from).copied() else {
            continue;
        };
        let mut candidates: Vec<(i64, Pos)> = Vec::new();
        for (dr, dc) in MONSTER_OFFSETS {
            let to = from.offset(dr, dc);
            if state.dungeon.can_move(to) {
                candidates.push((to.squared_distance(agent), to));
            }
        }
        candidates.sort();
        for (_, to) in candidates {
            if state.monsters.contains_key(&to) {
                continue;
            }
            if to == agent {
                capture_agent(state);
                return;
            }
            state.monsters.remove(&from);
            state.dungeon.set_cell(from, Cell::Empty);
            state.monsters.insert(to, kind);
            state.dungeon.set_cell(to, Cell::Monster(kind));
            break;
        }
    }
}

/// Bullet attempt inside the loop's gate. Re-gates at the same probability,
/// then fires once in a random cardinal direction; a miss still spends the
/// shot.
fn try_fire(state: &mut GameState, fire_probability: f64, rules: &ScoreRules, rng: &mut ChaCha8Rng) {
    if !chance(rng, fire_probability) {
        return;
    }
    if state.bullet_fired {
        return;
    }
    let Some(from) = state.agent else {
        return;
    };
    let direction = Direction::ALL[pick(rng, Direction::ALL.len())];
    shoot(state, from, direction.delta(), rules.bullet_hit);
    state.score -= rules.move_cost;
    state.bullet_fired = true;
}

fn pick(rng: &mut ChaCha8Rng, len: usize) -> usize {
    rng.next_u64() as usize % len
}

fn chance(rng: &mut ChaCha8Rng, probability: f64) -> bool {
    let unit = (rng.next_u64() >> 11) as f64 / (1_u64 << 53) as f64;
    unit < probability
}

fn shuffle(rng: &mut ChaCha8Rng, items: &mut [Pos]) {
    for i in (1..items.len()).rev() {
        items.swap(i, pick(rng, i + 1));
    }
}
