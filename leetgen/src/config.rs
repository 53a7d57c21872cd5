use crate::error::Error;
use crate::select::Order;

/// Default cap on the number of generated phrases.
pub const DEFAULT_LIMIT: usize = 10_000;

/// Maximum number of phrases to emit.
///
/// The built-in seed list produces well under [`DEFAULT_LIMIT`] candidates, so
/// with the default the limit never truncates. A smaller limit keeps the first
/// candidates in the selected [`Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Limit(usize);

impl Limit {
    /// Validates a user-supplied limit, rejecting negative values.
    ///
    /// Values past `usize::MAX` (32-bit targets) saturate; no run gets near either.
    pub fn new(limit: i64) -> Result<Self, Error> {
        if limit < 0 {
            return Err(Error::NegativeLimit { limit });
        }
        Ok(Limit(usize::try_from(limit).unwrap_or(usize::MAX)))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Limit(DEFAULT_LIMIT)
    }
}

impl From<usize> for Limit {
    fn from(limit: usize) -> Self {
        Limit(limit)
    }
}

/// Knobs for a single generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub limit: Limit,
    pub order: Order,
}

impl GeneratorConfig {
    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }
}
