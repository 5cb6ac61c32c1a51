use serde::{Deserialize, Serialize};

/// Score every run starts from.
pub const STARTING_SCORE: i32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub fn offset(self, dr: i32, dc: i32) -> Self {
        Pos { row: self.row + dr, col: self.col + dc }
    }

    pub fn squared_distance(self, other: Pos) -> i64 {
        let dr = (self.row - other.row) as i64;
        let dc = (self.col - other.col) as i64;
        dr * dr + dc * dc
    }
}

/// Cardinal headings: agent moves in the search model, bullet travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Search-model enumeration order; ties in the search break this way.
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::South, Direction::East, Direction::West];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

/// Eight-way headings used by the randomized playthrough.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Compass {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Compass {
    pub const ALL: [Compass; 8] = [
        Compass::North,
        Compass::NorthEast,
        Compass::East,
        Compass::SouthEast,
        Compass::South,
        Compass::SouthWest,
        Compass::West,
        Compass::NorthWest,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Compass::North => (-1, 0),
            Compass::NorthEast => (-1, 1),
            Compass::East => (0, 1),
            Compass::SouthEast => (1, 1),
            Compass::South => (1, 0),
            Compass::SouthWest => (1, -1),
            Compass::West => (0, -1),
            Compass::NorthWest => (-1, -1),
        }
    }

    /// Numeric code used by the playthrough trace format.
    pub fn code(self) -> i32 {
        match self {
            Compass::North => 8,
            Compass::NorthEast => 9,
            Compass::East => 6,
            Compass::SouthEast => 3,
            Compass::South => 2,
            Compass::SouthWest => 4,
            Compass::West => 7,
            Compass::NorthWest => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Compass::North => "North",
            Compass::NorthEast => "North-East",
            Compass::East => "East",
            Compass::SouthEast => "South-East",
            Compass::South => "South",
            Compass::SouthWest => "South-West",
            Compass::West => "West",
            Compass::NorthWest => "North-West",
        }
    }

    /// The cardinal equivalent, if this heading has one.
    pub fn cardinal(self) -> Option<Direction> {
        match self {
            Compass::North => Some(Direction::North),
            Compass::South => Some(Direction::South),
            Compass::East => Some(Direction::East),
            Compass::West => Some(Direction::West),
            _ => None,
        }
    }
}

impl From<Direction> for Compass {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::North => Compass::North,
            Direction::South => Compass::South,
            Direction::East => Compass::East,
            Direction::West => Compass::West,
        }
    }
}

/// Monster kinds do not differ in movement or lethality; the glyph is the
/// only distinction carried through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Demon,
    Ogre,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Empty,
    Agent,
    Monster(MonsterKind),
    /// Where a monster was eliminated.
    Remains,
    /// Where the agent was destroyed.
    Fallen,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Empty => ' ',
            Cell::Agent => 'A',
            Cell::Monster(MonsterKind::Demon) => 'D',
            Cell::Monster(MonsterKind::Ogre) => 'G',
            Cell::Remains => '@',
            Cell::Fallen => 'X',
        }
    }

    /// Input files only carry the live alphabet; markers are output-only.
    pub fn from_input_glyph(glyph: char) -> Option<Cell> {
        match glyph {
            '#' => Some(Cell::Wall),
            ' ' => Some(Cell::Empty),
            'A' => Some(Cell::Agent),
            'D' => Some(Cell::Monster(MonsterKind::Demon)),
            'G' => Some(Cell::Monster(MonsterKind::Ogre)),
            _ => None,
        }
    }
}

/// One entry of the action log a state carries from the initial state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionRecord {
    Step { heading: Compass, eliminated: bool },
    Fire,
    /// A step into a wall or out of bounds; kept in the log but cost-free.
    Rejected,
}

impl ActionRecord {
    /// Human-readable label for the search trace.
    pub fn describe(self) -> String {
        match self {
            ActionRecord::Step { heading, eliminated: false } => {
                format!("Move {}", heading.label())
            }
            ActionRecord::Step { heading, eliminated: true } => {
                format!("Move {} and Eliminate Monster", heading.label())
            }
            ActionRecord::Fire => "Fire Bullet".to_string(),
            ActionRecord::Rejected => "Blocked".to_string(),
        }
    }

    /// Numeric code for the playthrough trace; `-1` marks a rejected step.
    pub fn code(self) -> i32 {
        match self {
            ActionRecord::Step { heading, .. } => heading.code(),
            ActionRecord::Fire => 0,
            ActionRecord::Rejected => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

/// The two scoring policies are kept separate on purpose: the search model
/// rewards eliminations while the playthrough charges for bullet kills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreRules {
    pub move_cost: i32,
    pub collision_bonus: i32,
    pub bullet_hit: i32,
}

impl ScoreRules {
    pub fn search() -> Self {
        ScoreRules { move_cost: 1, collision_bonus: 5, bullet_hit: 5 }
    }

    pub fn playthrough() -> Self {
        ScoreRules { move_cost: 1, collision_bonus: 5, bullet_hit: -20 }
    }
}
