use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use super::date::{DateParseError, parse_date};
use crate::model::{ActivitySet, StreamKind};

#[derive(Debug, Error)]
pub enum ActivityParseError {
    #[error("invalid activity JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{stream} stream: {source}")]
    Date {
        stream: &'static str,
        source: DateParseError,
    },
}

/// Wire shape of the injected data map.
///
/// Absent stream keys decode as empty sequences; unrecognized keys are
/// ignored.
#[derive(Debug, Default, Deserialize)]
struct RawActivity {
    #[serde(default)]
    blog: Vec<String>,
    #[serde(default)]
    twitter: Vec<String>,
    #[serde(default)]
    code: Vec<String>,
}

/// Decode `{"blog": [...], "twitter": [...], "code": [...]}` into an
/// [`ActivitySet`].
///
/// Date strings are parsed eagerly: the first malformed value fails the
/// whole parse with an error naming the stream and the offending string.
pub fn parse_activity(json: &str) -> Result<ActivitySet, ActivityParseError> {
    let raw: RawActivity = serde_json::from_str(json)?;
    Ok(ActivitySet {
        blog: parse_stream(StreamKind::Blog, &raw.blog)?,
        twitter: parse_stream(StreamKind::Twitter, &raw.twitter)?,
        code: parse_stream(StreamKind::Code, &raw.code)?,
    })
}

fn parse_stream(
    kind: StreamKind,
    values: &[String],
) -> Result<Vec<DateTime<Utc>>, ActivityParseError> {
    values
        .iter()
        .map(|value| {
            parse_date(value).map_err(|source| ActivityParseError::Date {
                stream: kind.key(),
                source,
            })
        })
        .collect()
}
