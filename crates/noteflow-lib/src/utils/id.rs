// Local identity generation
// All identifiers are generated client-side; the remote analysis service
// never assigns ids. Uniqueness is required within a single session only.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use uuid::Uuid;

/// Session-wide counter for result ids, so ids sort in creation order.
static RESULT_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Fresh id for an annotation record (UUID v4).
pub fn annotation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Fresh id for a result record.
///
/// Monotonic counter plus a short random suffix: ids created later always
/// compare greater on the counter segment, and the suffix keeps ids from
/// separate sessions from colliding in exported logs.
pub fn result_id() -> String {
    let seq = RESULT_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix: u16 = rand::thread_rng().gen();
    format!("res_{:012}_{:04x}", seq, suffix)
}
