//! Canonical registry of the eight pieces.
//!
//! The registry is the only place a [`PieceId`] is minted. The board stores
//! ids, never descriptors, so "the same piece" across moves is a plain
//! integer comparison.

use crate::game_state::game_rules::PIECE_COUNT;
use crate::game_state::tic_tac_chec_types::*;

/// Stable handle to one registry slot.
///
/// Slots are laid out `[color][kind]`, so the handle also knows its color and
/// kind without a registry lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u8);

impl PieceId {
    #[inline]
    const fn from_parts(color: Color, kind: PieceKind) -> Self {
        Self((color.index() * ALL_PIECE_KINDS.len() + kind.index()) as u8)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn color(self) -> Color {
        ALL_COLORS[self.index() / ALL_PIECE_KINDS.len()]
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        ALL_PIECE_KINDS[self.index() % ALL_PIECE_KINDS.len()]
    }

    #[inline]
    pub const fn descriptor(self) -> Piece {
        Piece::new(self.color(), self.kind())
    }
}

/// Mints and resolves [`PieceId`]s.
///
/// A piece's color and kind are encoded in its id, so the registry keeps no
/// table of its own; [`PieceId::descriptor`] is the single source of truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceRegistry;

impl PieceRegistry {
    pub const fn new() -> Self {
        Self
    }

    #[inline]
    pub fn get(&self, color: Color, kind: PieceKind) -> PieceId {
        PieceId::from_parts(color, kind)
    }

    /// Resolve a caller-supplied descriptor to its canonical handle.
    #[inline]
    pub fn resolve(&self, piece: Piece) -> PieceId {
        self.get(piece.color, piece.kind)
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> Piece {
        id.descriptor()
    }

    pub fn ids(&self) -> impl Iterator<Item = PieceId> {
        (0..PIECE_COUNT as u8).map(PieceId)
    }

    /// Handles for one side in kind order.
    pub fn ids_of(&self, color: Color) -> impl Iterator<Item = PieceId> {
        ALL_PIECE_KINDS
            .into_iter()
            .map(move |kind| PieceId::from_parts(color, kind))
    }
}
