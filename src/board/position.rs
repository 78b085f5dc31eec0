//! Token positions.
//!
//! A token sits in one of three compartments. The meaning of `index`
//! depends on the compartment:
//!
//! - `Reserve`: slot number in `0..=3`, unique among the owner's
//!   reserve tokens.
//! - `Path`: absolute board-cell identifier, shared across all
//!   players' paths.
//! - `Home`: finishing-lane slot number in `0..=3`, unique among the
//!   owner's home tokens.
//!
//! Positions are plain values. Token identity is the slot a position
//! occupies in its owner's token array (`TokenId`), never the
//! position value itself: two distinct tokens may hold equal
//! positions (both in reserve, different slots tracked by the match).

use serde::{Deserialize, Serialize};

/// Number of tokens per player, and the number of reserve/home slots.
pub const TOKENS_PER_PLAYER: usize = 4;

/// Which compartment a token occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compartment {
    /// Starting holding area, slots 0..=3.
    Reserve,
    /// On the shared board, at an absolute cell id.
    Path,
    /// Private finishing lane, slots 0..=3.
    Home,
}

/// Stable token identity: index into the owner's token array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub u8);

impl TokenId {
    /// Create a token ID. Panics outside `0..=3`.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!((id as usize) < TOKENS_PER_PLAYER, "Token ID must be 0..=3");
        Self(id)
    }

    /// Raw index into the owner's token array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all token IDs, lowest first.
    pub fn all() -> impl Iterator<Item = TokenId> {
        (0..TOKENS_PER_PLAYER as u8).map(TokenId)
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {}", self.0)
    }
}

/// Where one token sits: compartment plus compartment-relative index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPosition {
    pub compartment: Compartment,
    pub index: u16,
}

impl TokenPosition {
    /// A reserve slot position. Panics if `slot` is not `0..=3`.
    #[must_use]
    pub fn reserve(slot: u8) -> Self {
        assert!((slot as usize) < TOKENS_PER_PLAYER, "Reserve slot must be 0..=3");
        Self {
            compartment: Compartment::Reserve,
            index: slot as u16,
        }
    }

    /// A position on the shared path at an absolute cell id.
    #[must_use]
    pub const fn path(cell: u16) -> Self {
        Self {
            compartment: Compartment::Path,
            index: cell,
        }
    }

    /// A home-lane slot position. Panics if `slot` is not `0..=3`.
    #[must_use]
    pub fn home(slot: u8) -> Self {
        assert!((slot as usize) < TOKENS_PER_PLAYER, "Home slot must be 0..=3");
        Self {
            compartment: Compartment::Home,
            index: slot as u16,
        }
    }

    /// True if the token is on the shared path.
    #[must_use]
    pub const fn is_on_path(self) -> bool {
        matches!(self.compartment, Compartment::Path)
    }

    /// The absolute cell id, if on the path.
    #[must_use]
    pub const fn path_cell(self) -> Option<u16> {
        match self.compartment {
            Compartment::Path => Some(self.index),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.compartment {
            Compartment::Reserve => write!(f, "reserve[{}]", self.index),
            Compartment::Path => write!(f, "path@{}", self.index),
            Compartment::Home => write!(f, "home[{}]", self.index),
        }
    }
}
