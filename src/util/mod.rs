pub mod assets;
pub mod format;
pub mod routes;
pub mod version;

#[cfg(feature = "desktop")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "desktop")]
static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

#[cfg(feature = "desktop")]
pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}
