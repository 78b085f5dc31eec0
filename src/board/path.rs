//! Per-player traversal paths.
//!
//! Each player traverses the shared board along an ordered sequence of
//! absolute cell ids, typically the same cells as every other player
//! but starting at a different offset. The path is caller-supplied;
//! deriving it from a drawn board is the host's job, done once before
//! the match starts.

use serde::{Deserialize, Serialize};

/// One player's ordered traversal of the shared board.
///
/// The home lane begins where a traversal index would exceed the last
/// path index: a token at traversal index `k` moving by `r` with
/// `k + r >= len` leaves the path for home slot `k + r - len`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPath {
    cells: Vec<u16>,
}

impl PlayerPath {
    /// Create a path from absolute cell ids. Panics if empty.
    #[must_use]
    pub fn new(cells: Vec<u16>) -> Self {
        assert!(!cells.is_empty(), "Player path must be non-empty");
        Self { cells }
    }

    /// Number of cells in the traversal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; paths are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell where tokens escaping reserve enter the board.
    #[must_use]
    pub fn entry_cell(&self) -> u16 {
        self.cells[0]
    }

    /// The absolute cell id at traversal index `k`.
    ///
    /// Panics if `k` is out of range.
    #[must_use]
    pub fn cell(&self, k: usize) -> u16 {
        self.cells[k]
    }

    /// The traversal index whose cell is `cell`, if any.
    ///
    /// Paths visit each cell at most once, so the first match is the
    /// only match.
    #[must_use]
    pub fn index_of_cell(&self, cell: u16) -> Option<usize> {
        self.cells.iter().position(|&c| c == cell)
    }
}
