// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of `created_at`, `published_at` and `submitted_at` timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
