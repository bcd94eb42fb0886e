//! Shared fixtures for authentication tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

pub const SIGNING_KEY: &[u8] = b"an-hmac-key-of-at-least-32-bytes!";
pub const ISSUER: &str = "taskward-test";
pub const AUDIENCE: &str = "taskward-test-api";

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 4, 14, 10, 46)
        .single()
        .expect("valid timestamp")
}
