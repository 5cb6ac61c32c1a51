//! Flat text dungeon format and trace writers.
//!
//! The input format is:
//! - Line 1: `rows cols`, two integers.
//! - Lines 2..=rows+1: the grid, one glyph per cell from the alphabet
//!   `{'#', ' ', 'A', 'D', 'G'}`, each line exactly `cols` glyphs.
//!
//! Loading validates every line and fails on the first malformed one; a
//! ragged or otherwise damaged grid is never accepted. Two writers emit the
//! terminal traces: the human-readable search trace and the numeric-code
//! playthrough trace.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::state::{Dungeon, GameState};
use crate::types::{Cell, Pos};

/// Describes why a dungeon file could not be loaded.
#[derive(Debug)]
pub enum DungeonLoadError {
    /// Underlying I/O failure.
    Io(io::Error),
    /// The file contains no lines at all.
    EmptyFile,
    /// The `rows cols` header could not be parsed.
    InvalidHeader { message: String },
    /// The file ended before the declared number of rows.
    MissingRow { expected: usize, found: usize },
    /// A grid line is shorter or longer than the declared width.
    RaggedRow { line: usize, expected: usize, found: usize },
    /// A character outside the input alphabet.
    UnknownGlyph { line: usize, column: usize, glyph: char },
    /// No `A` cell anywhere in the grid.
    MissingAgent,
    /// A second `A` cell.
    DuplicateAgent { line: usize, column: usize },
}

impl fmt::Display for DungeonLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DungeonLoadError::Io(err) => write!(f, "i/o error: {err}"),
            DungeonLoadError::EmptyFile => write!(f, "file is empty"),
            DungeonLoadError::InvalidHeader { message } => {
                write!(f, "invalid header line: {message}")
            }
            DungeonLoadError::MissingRow { expected, found } => {
                write!(f, "expected {expected} grid rows, found {found}")
            }
            DungeonLoadError::RaggedRow { line, expected, found } => {
                write!(f, "line {line}: expected {expected} cells, found {found}")
            }
            DungeonLoadError::UnknownGlyph { line, column, glyph } => {
                write!(f, "line {line}, column {column}: unknown cell {glyph:?}")
            }
            DungeonLoadError::MissingAgent => write!(f, "grid has no agent cell"),
            DungeonLoadError::DuplicateAgent { line, column } => {
                write!(f, "line {line}, column {column}: second agent cell")
            }
        }
    }
}

impl std::error::Error for DungeonLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DungeonLoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DungeonLoadError {
    fn from(err: io::Error) -> Self {
        DungeonLoadError::Io(err)
    }
}

pub fn load_dungeon(path: &Path) -> Result<GameState, DungeonLoadError> {
    let text = fs::read_to_string(path)?;
    parse_dungeon(&text)
}

pub fn parse_dungeon(text: &str) -> Result<GameState, DungeonLoadError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(DungeonLoadError::EmptyFile)?;
    let (rows, cols) = parse_header(header)?;

    let mut cells = Vec::with_capacity(rows * cols);
    let mut agent: Option<Pos> = None;
    let mut monsters = BTreeMap::new();
    for row in 0..rows {
        // 1-indexed; the header is line 1.
        let line_number = row + 2;
        let line = lines
            .next()
            .ok_or(DungeonLoadError::MissingRow { expected: rows, found: row })?;
        let glyphs: Vec<char> = line.chars().collect();
        if glyphs.len() != cols {
            return Err(DungeonLoadError::RaggedRow {
                line: line_number,
                expected: cols,
                found: glyphs.len(),
            });
        }
        for (col, &glyph) in glyphs.iter().enumerate() {
            let cell = Cell::from_input_glyph(glyph).ok_or(DungeonLoadError::UnknownGlyph {
                line: line_number,
                column: col + 1,
                glyph,
            })?;
            let pos = Pos { row: row as i32, col: col as i32 };
            match cell {
                Cell::Agent => {
                    if agent.replace(pos).is_some() {
                        return Err(DungeonLoadError::DuplicateAgent {
                            line: line_number,
                            column: col + 1,
                        });
                    }
                }
                Cell::Monster(kind) => {
                    monsters.insert(pos, kind);
                }
                _ => {}
            }
            cells.push(cell);
        }
    }
    let agent = agent.ok_or(DungeonLoadError::MissingAgent)?;
    Ok(GameState::new(Dungeon::from_cells(rows, cols, cells), agent, monsters))
}

fn parse_header(header: &str) -> Result<(usize, usize), DungeonLoadError> {
    let invalid = |message: &str| DungeonLoadError::InvalidHeader { message: message.to_string() };
    let mut fields = header.split_whitespace();
    let rows: usize = fields
        .next()
        .ok_or_else(|| invalid("missing row count"))?
        .parse()
        .map_err(|_| invalid("row count is not an integer"))?;
    let cols: usize = fields
        .next()
        .ok_or_else(|| invalid("missing column count"))?
        .parse()
        .map_err(|_| invalid("column count is not an integer"))?;
    if fields.next().is_some() {
        return Err(invalid("trailing fields after `rows cols`"));
    }
    if rows == 0 || cols == 0 {
        return Err(invalid("dimensions must be positive"));
    }
    Ok((rows, cols))
}

/// Search trace: one action label per line, the score, the final grid.
pub fn render_search_trace(state: &GameState) -> String {
    let mut out = String::new();
    for action in &state.actions {
        out.push_str(&action.describe());
        out.push('\n');
    }
    out.push_str(&format!("Score: {}\n", state.score));
    for row in state.dungeon.render_rows() {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// Playthrough trace: the numeric action codes, the score, the final grid.
pub fn render_playthrough_trace(state: &GameState) -> String {
    let codes: Vec<String> = state.actions.iter().map(|a| a.code().to_string()).collect();
    let mut out = format!("Valid Actions: {}\n{}\n", codes.join(" "), state.score);
    for row in state.dungeon.render_rows() {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

pub fn write_search_trace(path: &Path, state: &GameState) -> io::Result<()> {
    write_text(path, &render_search_trace(state))
}

pub fn write_playthrough_trace(path: &Path, state: &GameState) -> io::Result<()> {
    write_text(path, &render_playthrough_trace(state))
}

fn write_text(path: &Path, text: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()
}
