//! Board model: token positions and per-player traversal paths.

pub mod path;
pub mod position;

pub use path::PlayerPath;
pub use position::{Compartment, TokenId, TokenPosition, TOKENS_PER_PLAYER};
