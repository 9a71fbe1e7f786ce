//! Record identifiers and timestamps.
//!
//! Identifiers are opaque tokens. The production generator glues the current
//! Unix time in milliseconds to a short random hex suffix; tests swap in
//! [`SequentialIds`] to get predictable values.

use chrono::{SecondsFormat, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of fresh record identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// `<unix millis><6 hex chars>`, e.g. `1712345678901a1b2c3`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeRandomIds;

impl IdGenerator for TimeRandomIds {
    fn next_id(&self) -> String {
        let suffix: [u8; 3] = rand::random();
        format!("{}{}", Utc::now().timestamp_millis(), hex::encode(suffix))
    }
}

/// Deterministic `<prefix>-<n>` identifiers starting at 1.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }
}

/// Current UTC time as RFC 3339 with second precision (`2024-03-01T10:00:00Z`).
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn time_random_ids_have_millis_prefix_and_hex_suffix() {
        let before = Utc::now().timestamp_millis();
        let id = TimeRandomIds.next_id();
        let (millis, suffix) = id.split_at(id.len() - 6);

        assert!(millis.parse::<i64>().unwrap() >= before);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn time_random_ids_do_not_repeat() {
        let ids: HashSet<String> = (0..100).map(|_| TimeRandomIds.next_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIds::new("p");
        assert_eq!(ids.next_id(), "p-1");
        assert_eq!(ids.next_id(), "p-2");
    }

    #[test]
    fn timestamps_are_second_precision_utc() {
        let ts = now_rfc3339();
        assert_eq!(ts.len(), "2024-03-01T10:00:00Z".len());
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
