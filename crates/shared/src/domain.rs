use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned movie identifier. Serialises as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieId(pub i64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive bounds for `MovieRecord::year`.
pub const MIN_YEAR: i32 = 1888;
pub const MAX_YEAR: i32 = 2100;
/// Inclusive bounds for `MovieRecord::rating`.
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

/// Values a fresh or reset draft starts from.
pub const DEFAULT_DRAFT_YEAR: i32 = 2025;
pub const DEFAULT_DRAFT_RATING: f64 = 0.0;
