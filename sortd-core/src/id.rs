use std::fmt;

use uuid::Uuid;

/// Random per-request tag carried on log spans. Not part of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchId(Uuid);

impl BatchId {
    /// Draw a fresh random id.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
