use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::stream::StreamKind;

/// The three event sequences one render works from.
///
/// Construction happens in `crate::parsers`; the set is read-only input
/// afterwards. Sequence order is preserved from the source data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivitySet {
    pub blog: Vec<DateTime<Utc>>,
    pub twitter: Vec<DateTime<Utc>>,
    pub code: Vec<DateTime<Utc>>,
}

impl ActivitySet {
    pub fn stream(&self, kind: StreamKind) -> &[DateTime<Utc>] {
        match kind {
            StreamKind::Blog => &self.blog,
            StreamKind::Twitter => &self.twitter,
            StreamKind::Code => &self.code,
        }
    }

    /// Streams with their events, in render order.
    pub fn iter(&self) -> impl Iterator<Item = (StreamKind, &[DateTime<Utc>])> {
        StreamKind::ALL.into_iter().map(|kind| (kind, self.stream(kind)))
    }

    /// Earliest timestamp across all three streams, `None` when every
    /// stream is empty.
    pub fn earliest(&self) -> Option<DateTime<Utc>> {
        StreamKind::ALL
            .into_iter()
            .flat_map(|kind| self.stream(kind).iter().copied())
            .min()
    }

    /// Total number of events across all streams.
    pub fn len(&self) -> usize {
        StreamKind::ALL
            .into_iter()
            .map(|kind| self.stream(kind).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
