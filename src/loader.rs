//! Asynchronous data loaders with last-request-wins semantics.
//!
//! A loader owns the visible state of one data source. Every fetch begins by
//! taking a ticket; when the fetch completes, its result is applied only if
//! no newer ticket has been issued in the meantime. Superseded requests are
//! not aborted, their results are dropped on arrival.

use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use crate::github::TrackerError;
use crate::model::{Article, Comment};
use crate::util;

/// Loader holding the article currently shown.
pub type ArticleLoader = Loader<Article>;

/// Loader holding the comment page currently shown.
pub type CommentsLoader = Loader<Vec<Comment>>;

/// Load lifecycle of a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
}

/// Sequence token identifying one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Outcome of settling a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Result was applied to visible state.
    Applied,
    /// Request failed; loading cleared and value removed.
    Failed,
    /// A newer request was issued; result dropped.
    Stale,
}

/// Point in time view of a loader.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub state: LoadState,
    pub value: Option<T>,
}

impl<T> Snapshot<T> {
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }
}

#[derive(Debug)]
struct Inner<T> {
    latest: u64,
    state: LoadState,
    value: Option<T>,
}

/// Visible state of one data source plus the request sequence guarding it.
#[derive(Debug)]
pub struct Loader<T> {
    inner: Mutex<Inner<T>>,
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Loader<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                latest: 0,
                state: LoadState::Idle,
                value: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        util::lock(&self.inner)
    }

    /// Starts a request, superseding any request in flight.
    ///
    /// The previously resolved value stays visible until the new request
    /// settles.
    pub fn begin(&self) -> Ticket {
        let mut inner = self.lock();
        inner.latest += 1;
        inner.state = LoadState::Loading;
        Ticket(inner.latest)
    }

    /// Settles a request with its result.
    ///
    /// Results for tickets other than the most recently issued one are
    /// discarded. A failure clears the loading flag and leaves no value.
    pub fn settle(&self, ticket: Ticket, result: Result<T, TrackerError>) -> Settled {
        let mut inner = self.lock();
        if ticket.0 != inner.latest {
            tracing::debug!(
                ticket = ticket.0,
                latest = inner.latest,
                "discarding stale response"
            );
            return Settled::Stale;
        }

        inner.state = LoadState::Loaded;
        match result {
            Ok(value) => {
                inner.value = Some(value);
                Settled::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "load failed");
                inner.value = None;
                Settled::Failed
            }
        }
    }

    /// Runs a fetch under a fresh ticket and settles it on completion.
    pub async fn run<F>(&self, fetch: F) -> Settled
    where
        F: Future<Output = Result<T, TrackerError>>,
    {
        let ticket = self.begin();
        let result = fetch.await;
        self.settle(ticket, result)
    }

    pub fn state(&self) -> LoadState {
        self.lock().state
    }

    pub fn is_loading(&self) -> bool {
        self.state() == LoadState::Loading
    }
}

impl<T: Clone> Loader<T> {
    pub fn snapshot(&self) -> Snapshot<T> {
        let inner = self.lock();
        Snapshot {
            state: inner.state,
            value: inner.value.clone(),
        }
    }

    pub fn value(&self) -> Option<T> {
        self.lock().value.clone()
    }
}
