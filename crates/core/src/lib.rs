pub mod dungeon_file;
pub mod game;
pub mod state;
pub mod types;

pub use dungeon_file::{
    DungeonLoadError, load_dungeon, parse_dungeon, write_playthrough_trace, write_search_trace,
};
pub use game::playthrough::{PlaythroughConfig, PlaythroughResult, random_playthrough};
pub use game::search::{SearchResult, breadth_first};
pub use game::successors::{agent_successors, monster_successors};
pub use game::transitions::{apply_agent_move, fire_bullet};
pub use state::{Dungeon, GameState};
pub use types::*;
