//! The eight symmetries of a square and the four sides of a tile

use std::fmt;

/// One of the eight symmetries of a square
///
/// Applied as an optional mirror (row order reversed) followed by a number
/// of clockwise quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    quarter_turns: u8,
    mirrored: bool,
}

impl Orientation {
    /// The untransformed orientation
    pub const IDENTITY: Self = Self::new(0, false);

    /// All eight orientations, unmirrored first, in increasing rotation
    pub const ALL: [Self; 8] = [
        Self::new(0, false),
        Self::new(1, false),
        Self::new(2, false),
        Self::new(3, false),
        Self::new(0, true),
        Self::new(1, true),
        Self::new(2, true),
        Self::new(3, true),
    ];

    /// Create an orientation, reducing `quarter_turns` modulo four
    pub const fn new(quarter_turns: u8, mirrored: bool) -> Self {
        Self {
            quarter_turns: quarter_turns % 4,
            mirrored,
        }
    }

    /// Number of clockwise quarter turns applied after mirroring
    pub const fn quarter_turns(self) -> u8 {
        self.quarter_turns
    }

    /// Whether row order is reversed before rotating
    pub const fn is_mirrored(self) -> bool {
        self.mirrored
    }

    /// Position of this orientation within [`Orientation::ALL`]
    pub const fn index(self) -> usize {
        self.quarter_turns as usize + if self.mirrored { 4 } else { 0 }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = u16::from(self.quarter_turns) * 90;
        if self.mirrored {
            write!(f, "mirrored+{degrees}°")
        } else {
            write!(f, "{degrees}°")
        }
    }
}

/// One side of a square pixel grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// First row, read left to right
    Top,
    /// Last column, read top to bottom
    Right,
    /// Last row, read left to right
    Bottom,
    /// First column, read top to bottom
    Left,
}

impl Side {
    /// All four sides in clockwise order
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The side that touches this one when two grids are adjacent
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}
