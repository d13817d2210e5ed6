pub mod http;
pub mod preset;
pub mod storage;
pub mod store;
pub mod theme;

pub mod prelude;

pub use http::DepotApi;

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

#[cfg(debug_assertions)]
pub const DEPOT_URL: &'static str = "http://127.0.0.1:3000";
#[cfg(not(debug_assertions))]
pub const DEPOT_URL: &'static str = "https://depot.example.com";

pub fn timestamp_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

static LAST_ISSUED_ID: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh theme id derived from the current timestamp.
///
/// Ids are millisecond timestamps, bumped past the last issued value so
/// uploads landing in the same millisecond still get unique ids.
pub fn fresh_theme_id() -> String {
    let now = timestamp_millis();
    let prev = LAST_ISSUED_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(0);
    now.max(prev + 1).to_string()
}
