//! Latest-result publication for hosts.
//!
//! A host may have several refreshes in flight (a scheduled one plus a
//! manual one, say). Each refresh takes a [`RefreshTicket`] before it starts
//! fetching; when results come back, only a refresh that started later than
//! whatever was last published is allowed to replace it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::LibraryStatusIndex;
use crate::libcal::{FetchError, FetchErrorKind};

/// A successfully fetched index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub index: LibraryStatusIndex,
    pub fetched_at: DateTime<Utc>,
}

/// The most recent failed refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshFailure {
    pub message: String,
    pub kind: FetchErrorKind,
    pub at: DateTime<Utc>,
}

/// What a renderer sees.
///
/// A failed refresh does not clear `snapshot`: the last good index stays
/// visible alongside the error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pub snapshot: Option<Snapshot>,
    pub last_error: Option<RefreshFailure>,
}

/// Proof that a refresh was started, carrying its start order.
#[derive(Debug)]
pub struct RefreshTicket {
    seq: u64,
}

impl RefreshTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Default)]
struct BoardState {
    view: BoardView,
    /// Sequence number of the ticket behind `view`. Zero before any publish.
    applied_seq: u64,
}

/// Shared holder for the latest refresh outcome.
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    next_seq: Arc<AtomicU64>,
    state: Arc<RwLock<BoardState>>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the start of a refresh.
    pub fn begin(&self) -> RefreshTicket {
        RefreshTicket {
            seq: self.next_seq.fetch_add(1, Ordering::Relaxed) + 1,
        }
    }

    /// Publish the outcome of a refresh.
    ///
    /// Returns `false` if the outcome was discarded: either a refresh that
    /// started later has already published, or the fetch was cancelled.
    pub async fn publish(
        &self,
        ticket: RefreshTicket,
        result: Result<LibraryStatusIndex, FetchError>,
    ) -> bool {
        if matches!(&result, Err(e) if e.kind() == FetchErrorKind::Cancelled) {
            debug!(seq = ticket.seq, "refresh cancelled, nothing published");
            return false;
        }

        let mut state = self.state.write().await;
        if ticket.seq <= state.applied_seq {
            debug!(
                seq = ticket.seq,
                applied = state.applied_seq,
                "discarding stale refresh"
            );
            return false;
        }
        state.applied_seq = ticket.seq;

        let now = Utc::now();
        match result {
            Ok(index) => {
                state.view.snapshot = Some(Snapshot {
                    index,
                    fetched_at: now,
                });
                state.view.last_error = None;
            }
            Err(e) => {
                state.view.last_error = Some(RefreshFailure {
                    message: e.to_string(),
                    kind: e.kind(),
                    at: now,
                });
            }
        }

        true
    }

    /// The current published view.
    pub async fn current(&self) -> BoardView {
        self.state.read().await.view.clone()
    }
}
