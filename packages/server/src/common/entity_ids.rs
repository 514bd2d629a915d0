//! Typed ID definitions for catalog entities.
//!
//! Website ids are the join key for every child table, so they get their own
//! type instead of a bare `i64`.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Primary key of a row in `websites`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct WebsiteId(i64);

impl WebsiteId {
    #[inline]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for WebsiteId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for WebsiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for WebsiteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}
