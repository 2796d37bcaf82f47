//! Request and response data model.

use std::{fmt, time::Duration};

use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

/// One list of integers sorted independently of every other list.
pub type Sequence = Vec<i64>;

/// The full list of sequences submitted in one request.
///
/// Wire form: `{"to_sort": [[int, ...], ...]}`. The key is matched
/// ASCII-case-insensitively and the last occurrence wins. A missing key, a
/// `null` batch, and a `null` sequence all read as empty. Other keys are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct SortBatch {
    /// Sequences in submission order.
    pub to_sort: Vec<Sequence>,
}

impl SortBatch {
    /// Create a batch from the given sequences.
    #[must_use]
    pub fn new(to_sort: Vec<Sequence>) -> Self {
        Self { to_sort }
    }

    /// Number of sequences in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.to_sort.len()
    }

    /// Return `true` if the batch holds no sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_sort.is_empty()
    }

    /// Consume the batch, yielding its sequences in submission order.
    #[must_use]
    pub fn into_sequences(self) -> Vec<Sequence> {
        self.to_sort
    }
}

const TO_SORT: &str = "to_sort";

impl<'de> Deserialize<'de> for SortBatch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BatchVisitor)
    }
}

struct BatchVisitor;

impl<'de> Visitor<'de> for BatchVisitor {
    type Value = SortBatch;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with a `to_sort` array of integer arrays")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SortBatch, A::Error> {
        let mut to_sort = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(TO_SORT) {
                let value: Option<Vec<Option<Sequence>>> = map.next_value()?;
                to_sort = value
                    .unwrap_or_default()
                    .into_iter()
                    .map(Option::unwrap_or_default)
                    .collect();
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(SortBatch { to_sort })
    }
}

/// Sorted sequences plus the time spent sorting them.
///
/// `sorted_arrays[i]` is the ascending permutation of the batch's
/// `to_sort[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SortResult {
    /// Sorted sequences, positionally matching the input batch.
    pub sorted_arrays: Vec<Sequence>,
    /// Wall-clock sort duration in nanoseconds, excluding decode and encode.
    pub time_ns: u64,
}

impl SortResult {
    /// Build a result from sorted sequences and the measured duration.
    ///
    /// Durations beyond `u64::MAX` nanoseconds saturate.
    #[must_use]
    pub fn new(sorted_arrays: Vec<Sequence>, elapsed: Duration) -> Self {
        Self {
            sorted_arrays,
            time_ns: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        }
    }
}
