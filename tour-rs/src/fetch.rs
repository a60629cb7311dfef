//! Deferred callback: work scheduled on its own tokio task that reports back
//! through a completion closure after an artificial delay.
//!
//! The caller gets a [`JoinHandle`] and is free to carry on; nothing waits for
//! the callback unless the handle is awaited.  There is no cancellation or
//! timeout beyond dropping the runtime.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Delay used by the tour, standing in for a slow server.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_secs(2);

/// Payload delivered to the completion callback.
pub const FETCHED_DATA: &str = "Fetched data from server";

/// Schedule a simulated fetch.  After `delay`, `completion` is called once
/// with [`FETCHED_DATA`] on the spawned task.
///
/// Must be called from within a tokio runtime.
pub fn fetch_data<F>(delay: Duration, completion: F) -> JoinHandle<()>
where
    F: FnOnce(String) + Send + 'static,
{
    tracing::debug!(?delay, "scheduling fetch");
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let data = FETCHED_DATA.to_owned();
        tracing::debug!("fetch complete");
        completion(data);
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
