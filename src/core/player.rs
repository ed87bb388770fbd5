//! Player colors and per-color data storage.
//!
//! ## PlayerColor
//!
//! The two sides of a game. White always moves first.
//!
//! ## ColorMap
//!
//! Per-color storage with O(1) access, indexable by `PlayerColor`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    White,
    Black,
}

impl PlayerColor {
    /// Both colors in turn order.
    pub const ALL: [PlayerColor; 2] = [PlayerColor::White, PlayerColor::Black];

    /// Get the opposing color.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerColor::White => PlayerColor::Black,
            PlayerColor::Black => PlayerColor::White,
        }
    }

    /// Row delta of a pawn step for this color.
    ///
    /// White advances toward row 0, Black toward the last row.
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            PlayerColor::White => -1,
            PlayerColor::Black => 1,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerColor::White => 0,
            PlayerColor::Black => 1,
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerColor::White => write!(f, "white"),
            PlayerColor::Black => write!(f, "black"),
        }
    }
}

/// Per-color data storage.
///
/// ## Example
///
/// ```
/// use gridchess::core::{ColorMap, PlayerColor};
///
/// let mut captures: ColorMap<u32> = ColorMap::with_value(0);
/// captures[PlayerColor::Black] += 1;
///
/// assert_eq!(captures[PlayerColor::White], 0);
/// assert_eq!(captures[PlayerColor::Black], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    white: T,
    black: T,
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerColor) -> T) -> Self {
        Self {
            white: factory(PlayerColor::White),
            black: factory(PlayerColor::Black),
        }
    }

    /// Create a new ColorMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: PlayerColor) -> &T {
        match color {
            PlayerColor::White => &self.white,
            PlayerColor::Black => &self.black,
        }
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: PlayerColor) -> &mut T {
        match color {
            PlayerColor::White => &mut self.white,
            PlayerColor::Black => &mut self.black,
        }
    }

    /// Iterate over (PlayerColor, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerColor, &T)> {
        PlayerColor::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl<T> Index<PlayerColor> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: PlayerColor) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<PlayerColor> for ColorMap<T> {
    fn index_mut(&mut self, color: PlayerColor) -> &mut Self::Output {
        self.get_mut(color)
    }
}
