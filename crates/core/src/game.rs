//! Game dynamics split into coherent submodules: pure transitions, the
//! successor generator built on them, and the two drivers that consume the
//! successor graph.

pub mod playthrough;
pub mod search;
pub mod successors;
pub mod transitions;

mod hash;
