//! Stable snapshot hashing for deterministic verification.
//! Keeps hashing concerns out of the drivers; two runs that agree on every
//! observable field agree on the hash.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::state::GameState;

impl GameState {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.dungeon.rows() as u64);
        hasher.write_u64(self.dungeon.cols() as u64);
        for row in self.dungeon.render_rows() {
            hasher.write(row.as_bytes());
        }
        match self.agent {
            Some(pos) => {
                hasher.write_i32(pos.row);
                hasher.write_i32(pos.col);
            }
            None => {
                hasher.write_i32(-1);
                hasher.write_i32(-1);
            }
        }
        for (pos, kind) in &self.monsters {
            hasher.write_i32(pos.row);
            hasher.write_i32(pos.col);
            hasher.write_u8(*kind as u8);
        }
        hasher.write_i32(self.score);
        hasher.write_u8(u8::from(self.bullet_fired));
        hasher.write_u8(self.last_heading as u8);
        hasher.write_u64(self.actions.len() as u64);
        hasher.finish()
    }
}
