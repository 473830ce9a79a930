// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::sync::Mutex;
use tempfile::TempDir;

struct MockClock(Mutex<DateTime<Utc>>);

impl MockClock {
    fn new() -> Self {
        MockClock(Mutex::new(
            DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        ))
    }

    fn advance(&self, secs: i64) {
        let mut now = self.0.lock().unwrap();
        *now += Duration::seconds(secs);
    }
}

impl ClockSource for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

fn mock_cache(clock: &MockClock, ttl_secs: u64) -> AnswerCache<&MockClock> {
    AnswerCache::with_connection(Connection::open_in_memory().unwrap(), ttl_secs, clock).unwrap()
}

#[test]
fn set_then_get() {
    let cache = AnswerCache::open_in_memory(DEFAULT_TTL_SECS).unwrap();
    let record = QueryRecord::new(8, "q", "b", "a");

    cache.set("qa:1", &record).unwrap();

    assert_eq!(cache.get("qa:1").unwrap(), Some(record));
    assert_eq!(cache.get("qa:2").unwrap(), None);
}

#[test]
fn entries_expire_after_ttl() {
    let clock = MockClock::new();
    let cache = mock_cache(&clock, 60);
    cache.set("k", &QueryRecord::new(1, "q", "b", "a")).unwrap();

    clock.advance(59);
    assert!(cache.get("k").unwrap().is_some());

    clock.advance(1);
    assert!(cache.get("k").unwrap().is_none());
    // Expired entry was removed on read
    assert!(!cache.remove("k").unwrap());
}

#[test]
fn set_restarts_ttl() {
    let clock = MockClock::new();
    let cache = mock_cache(&clock, 60);
    let record = QueryRecord::new(1, "q", "b", "a");

    cache.set("k", &record).unwrap();
    clock.advance(50);
    cache.set("k", &record).unwrap();
    clock.advance(50);

    assert_eq!(cache.get("k").unwrap(), Some(record));
}

#[test]
fn unreadable_entry_is_a_miss() {
    let clock = MockClock::new();
    let cache = mock_cache(&clock, 60);
    cache
        .conn
        .execute(
            "INSERT INTO answers (key, value, expires_at) VALUES ('k', 'not json', '2099-01-01T00:00:00Z')",
            [],
        )
        .unwrap();

    assert!(cache.get("k").unwrap().is_none());
    assert!(!cache.remove("k").unwrap());
}

#[test]
fn purge_removes_only_expired() {
    let clock = MockClock::new();
    let cache = mock_cache(&clock, 60);
    cache.set("old", &QueryRecord::default()).unwrap();
    clock.advance(30);
    cache.set("new", &QueryRecord::default()).unwrap();
    clock.advance(40);

    assert_eq!(cache.purge_expired().unwrap(), 1);
    assert!(cache.get("new").unwrap().is_some());
}

#[test]
fn huge_ttl_is_clamped() {
    let cache = AnswerCache::open_in_memory(u64::MAX).unwrap();
    assert_eq!(cache.ttl, Duration::seconds(MAX_TTL_SECS as i64));
    cache.set("k", &QueryRecord::default()).unwrap();
    assert!(cache.get("k").unwrap().is_some());
}

#[test]
fn file_cache_persists() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cache.db");
    let record = QueryRecord::new(3, "q", "b", "a");

    {
        let cache = AnswerCache::open(&path, DEFAULT_TTL_SECS).unwrap();
        cache.set("k", &record).unwrap();
    }

    let cache = AnswerCache::open(&path, DEFAULT_TTL_SECS).unwrap();
    assert_eq!(cache.get("k").unwrap(), Some(record));
    cache.ping().unwrap();
}
