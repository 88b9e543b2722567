//! Abstraction over where library hours come from.

use std::future::Future;
use std::time::Duration;

use crate::domain::LibraryStatusIndex;

use super::error::FetchError;

/// A source of library hours.
///
/// Each call to [`fetch`](HoursSource::fetch) is independent and produces a
/// fresh index. The provided sources neither retry nor cache: `HoursClient`
/// makes one request per call and `FixtureSource` re-indexes its feed.
pub trait HoursSource: Send + Sync {
    /// Fetch and index the current hours.
    fn fetch(&self) -> impl Future<Output = Result<LibraryStatusIndex, FetchError>> + Send;

    /// Fetch with an overall deadline.
    ///
    /// Returns [`FetchError::Timeout`] if the deadline passes first.
    fn fetch_with_timeout(
        &self,
        timeout: Duration,
    ) -> impl Future<Output = Result<LibraryStatusIndex, FetchError>> + Send {
        async move {
            tokio::time::timeout(timeout, self.fetch())
                .await
                .unwrap_or(Err(FetchError::Timeout))
        }
    }

    /// Fetch unless `cancel` completes first.
    ///
    /// On cancellation the in-flight request is dropped and
    /// [`FetchError::Cancelled`] is returned; no index is produced.
    fn fetch_until<C>(
        &self,
        cancel: C,
    ) -> impl Future<Output = Result<LibraryStatusIndex, FetchError>> + Send
    where
        C: Future<Output = ()> + Send,
    {
        async move {
            tokio::select! {
                biased;
                () = cancel => Err(FetchError::Cancelled),
                result = self.fetch() => result,
            }
        }
    }
}
