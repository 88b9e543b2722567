//! Periodic feed refresh for hosts.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::board::StatusBoard;
use crate::libcal::HoursSource;

/// Fetch once and publish the outcome.
///
/// Returns whether the outcome was published (see [`StatusBoard::publish`]).
pub async fn refresh_once<S: HoursSource>(
    source: &S,
    board: &StatusBoard,
    timeout: Duration,
) -> bool {
    let ticket = board.begin();
    let seq = ticket.seq();
    let result = source.fetch_with_timeout(timeout).await;

    match &result {
        Ok(index) => info!(seq, libraries = index.len(), "refreshed library hours"),
        Err(e) => warn!(seq, error = %e, kind = ?e.kind(), "failed to refresh library hours"),
    }

    board.publish(ticket, result).await
}

/// Refresh every `interval`, starting immediately. Runs until dropped.
pub async fn run<S: HoursSource>(
    source: S,
    board: StatusBoard,
    interval: Duration,
    timeout: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        refresh_once(&source, &board, timeout).await;
    }
}
