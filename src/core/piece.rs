//! Pieces and the placeable supply.
//!
//! A `Piece` is a plain value: its type decides how it moves, its color
//! decides who owns it. Pieces enter the board from a per-color
//! `PieceSupply` that starts from a fixed table.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::player::PlayerColor;

/// Kind of piece. Determines the movement rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Rook,
    Bishop,
    Knight,
    Pawn,
    Queen,
}

impl PieceType {
    /// All piece types, in supply-table order.
    pub const ALL: [PieceType; 5] = [
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Pawn,
        PieceType::Queen,
    ];

    /// Number of pieces of this type each side starts with.
    #[must_use]
    pub const fn initial_count(self) -> u32 {
        match self {
            PieceType::Rook | PieceType::Bishop | PieceType::Knight => 2,
            PieceType::Pawn => 8,
            PieceType::Queen => 1,
        }
    }

    /// Does this piece slide along lines (and so need a clear path)?
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Rook | PieceType::Bishop | PieceType::Queen)
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceType::Rook => "rook",
            PieceType::Bishop => "bishop",
            PieceType::Knight => "knight",
            PieceType::Pawn => "pawn",
            PieceType::Queen => "queen",
        };
        f.write_str(name)
    }
}

/// A piece: type plus owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub piece_type: PieceType,
    pub color: PlayerColor,
}

impl Piece {
    #[must_use]
    pub const fn new(piece_type: PieceType, color: PlayerColor) -> Self {
        Self { piece_type, color }
    }

    #[must_use]
    pub const fn white(piece_type: PieceType) -> Self {
        Self::new(piece_type, PlayerColor::White)
    }

    #[must_use]
    pub const fn black(piece_type: PieceType) -> Self {
        Self::new(piece_type, PlayerColor::Black)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.piece_type)
    }
}

/// Remaining placeable pieces for one side.
///
/// Counts are unsigned; `take` refuses to go below zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSupply {
    counts: FxHashMap<PieceType, u32>,
}

impl PieceSupply {
    /// The standard table: 2 rooks, 2 bishops, 2 knights, 8 pawns, 1 queen.
    #[must_use]
    pub fn standard() -> Self {
        PieceType::ALL
            .into_iter()
            .map(|t| (t, t.initial_count()))
            .collect()
    }

    /// A supply with no pieces left.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }

    /// Remaining count for a type.
    #[must_use]
    pub fn count(&self, piece_type: PieceType) -> u32 {
        self.counts.get(&piece_type).copied().unwrap_or(0)
    }

    /// Set the remaining count for a type.
    pub fn set_count(&mut self, piece_type: PieceType, count: u32) {
        self.counts.insert(piece_type, count);
    }

    /// Is at least one piece of this type left?
    #[must_use]
    pub fn has(&self, piece_type: PieceType) -> bool {
        self.count(piece_type) > 0
    }

    /// Consume one piece of a type.
    ///
    /// Returns the remaining count, or `None` if none were left (the supply
    /// is unchanged in that case).
    pub fn take(&mut self, piece_type: PieceType) -> Option<u32> {
        let count = self.counts.get_mut(&piece_type)?;
        *count = count.checked_sub(1)?;
        Some(*count)
    }

    /// Total pieces left across all types.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Iterate over (type, count) in supply-table order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceType, u32)> + '_ {
        PieceType::ALL.into_iter().map(move |t| (t, self.count(t)))
    }
}

impl Default for PieceSupply {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromIterator<(PieceType, u32)> for PieceSupply {
    fn from_iter<I: IntoIterator<Item = (PieceType, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
