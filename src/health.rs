//! Health aggregator.
//!
//! Reduces the status registry to one worst-case [`Severity`] per cycle.
//!
//! ## Reduction rules
//!
//! | Observation                       | Effect on the running maximum      |
//! |-----------------------------------|------------------------------------|
//! | registry missing / unopenable     | return 15 at once, read nothing    |
//! | record cannot be opened           | `max(running, 15)`, keep scanning  |
//! | record has no leading integer     | ignored                            |
//! | record holds `n`                  | `max(running, n)`                  |
//!
//! Nothing here fails: every anomaly degrades to a severity so the LED
//! always has something to show.

use log::{debug, warn};

use crate::app::ports::StatusRegistry;
use crate::severity::Severity;

/// Outcome of opening one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordContent {
    /// Opened; holds the leading bytes of the record.
    Text(Vec<u8>),
    /// Could not be opened (removed mid-scan, permissions, dangling link).
    Unopenable,
}

/// One named entry of the status registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub name: String,
    pub content: RecordContent,
}

impl StatusRecord {
    pub fn text(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: RecordContent::Text(content.into()),
        }
    }

    pub fn unopenable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: RecordContent::Unopenable,
        }
    }
}

/// Whitespace as `scanf` skips it: space, `\t`, `\n`, `\v`, `\f`, `\r`.
pub fn is_scanf_space(b: u8) -> bool {
    b == b' ' || (b'\t'..=b'\r').contains(&b)
}

/// Parse a leading decimal integer the way `scanf("%d")` does: optional
/// whitespace, optional sign, at least one digit. Trailing bytes are
/// ignored. Magnitudes past `i64` saturate.
pub fn parse_leading_int(bytes: &[u8]) -> Option<i64> {
    let mut rest = bytes;
    while let Some((first, tail)) = rest.split_first() {
        if !is_scanf_space(*first) {
            break;
        }
        rest = tail;
    }

    let negative = match rest.first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let magnitude = rest[..digits]
        .iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
    Some(if negative { -magnitude } else { magnitude })
}

/// Fold records into the worst severity seen.
pub fn reduce_records<I>(records: I) -> Severity
where
    I: IntoIterator<Item = StatusRecord>,
{
    records.into_iter().fold(Severity::OK, |worst, record| match record.content {
        RecordContent::Unopenable => {
            warn!("health: cannot open status record '{}'", record.name);
            worst.max(Severity::UNREADABLE)
        }
        RecordContent::Text(bytes) => match parse_leading_int(&bytes) {
            Some(value) => worst.max(Severity::from_record_value(value)),
            None => {
                debug!("health: record '{}' holds no integer, skipped", record.name);
                worst
            }
        },
    })
}

/// Computes the aggregate severity from a [`StatusRegistry`].
pub struct HealthAggregator<R> {
    registry: R,
}

impl<R: StatusRegistry> HealthAggregator<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Scan the registry and return the worst severity it reports.
    pub fn operation_status(&self) -> Severity {
        match self.registry.scan() {
            Ok(records) => reduce_records(records),
            Err(e) => {
                warn!("health: {}", e);
                Severity::UNREADABLE
            }
        }
    }
}
