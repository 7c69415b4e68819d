//! Keyed, deduplicated asynchronous reads.
//!
//! A [`QueryCache`] shares one in-flight request and one settled result per
//! [`QueryKey`]. A [`QueryState`] follows the key a component currently asks
//! for and only accepts results for that key, so a slow response for a key
//! the user already navigated away from never reaches the view.

use crate::compat;
use api::ApiError;
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, warn};
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

/// Identity of a cached read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Categories,
    Products(Option<String>),
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Categories => write!(f, "categories"),
            QueryKey::Products(None) => write!(f, "products"),
            QueryKey::Products(Some(category)) => write!(f, "products/{}", category),
        }
    }
}

/// What a view sees of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryStatus<T> {
    Loading,
    Success(Rc<T>),
    Error(ApiError),
}

type QueryResult<T> = Result<Rc<T>, ApiError>;
type SharedQuery<T> = Shared<LocalBoxFuture<'static, QueryResult<T>>>;

/// Results per key, plus the requests still in flight.
pub struct QueryCache<T> {
    entries: Rc<RefCell<HashMap<QueryKey, SharedQuery<T>>>>,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: Default::default(),
        }
    }
}

impl<T: 'static> QueryCache<T> {
    /// Returns the request for `key`, starting it with `fetch` unless one is
    /// already cached or in flight. A settled failure is dropped and refetched.
    pub fn fetch<F, Fut>(&self, key: &QueryKey, fetch: F) -> SharedQuery<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let mut entries = self.entries.borrow_mut();
        if let Some(existing) = entries.get(key) {
            if !matches!(existing.peek(), Some(Err(_))) {
                return existing.clone();
            }
            debug!("evicting failed query {}", key);
        }

        let request = fetch().map(|result| result.map(Rc::new)).boxed_local().shared();
        entries.insert(key.clone(), request.clone());
        request
    }

    /// The value for `key` if its request already succeeded.
    pub fn cached(&self, key: &QueryKey) -> Option<Rc<T>> {
        match self.entries.borrow().get(key)?.peek() {
            Some(Ok(value)) => Some(value.clone()),
            _ => None,
        }
    }
}

/// Proof of which request a response belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    key: QueryKey,
    generation: u64,
}

impl QueryTicket {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

/// The status of the key a component currently wants.
#[derive(Debug)]
pub struct QueryState<T> {
    key: Option<QueryKey>,
    generation: u64,
    status: QueryStatus<T>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            key: None,
            generation: 0,
            status: QueryStatus::Loading,
        }
    }
}

impl<T> QueryState<T> {
    /// Makes `key` the active key and returns the ticket its response must present.
    pub fn begin(&mut self, key: QueryKey) -> QueryTicket {
        self.generation += 1;
        self.status = QueryStatus::Loading;
        self.key = Some(key.clone());
        QueryTicket {
            key,
            generation: self.generation,
        }
    }

    /// Applies `result` if `ticket` is still current. Returns whether it was applied.
    pub fn resolve(&mut self, ticket: &QueryTicket, result: QueryResult<T>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.status = match result {
            Ok(value) => QueryStatus::Success(value),
            Err(e) => QueryStatus::Error(e),
        };
        true
    }

    /// The status to show for `key`. Anything tracked for another key is
    /// never reported; until `key` becomes active it reads as Loading.
    pub fn status_of(&self, key: &QueryKey) -> QueryStatus<T> {
        if self.key.as_ref() == Some(key) {
            self.status()
        } else {
            QueryStatus::Loading
        }
    }

    pub fn status(&self) -> QueryStatus<T> {
        match &self.status {
            QueryStatus::Loading => QueryStatus::Loading,
            QueryStatus::Success(value) => QueryStatus::Success(value.clone()),
            QueryStatus::Error(e) => QueryStatus::Error(e.clone()),
        }
    }
}

/// How often and how patiently a failed request is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before retry number `attempt` (0-based): `base * 2^attempt`, capped.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.base_delay
            .checked_mul(factor)
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }
}

/// Runs `op` until it succeeds, fails permanently, or runs out of retries.
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() && attempt < policy.max_retries => {
                let delay = policy.delay_for(attempt);
                warn!("request failed ({}), retrying in {:?}", e, delay);
                compat::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Subscribes the calling component to `key`.
///
/// Re-runs whenever `key` changes. A value already cached for the key is shown
/// at once; otherwise the status is Loading until the (possibly shared)
/// request settles. The render that first sees a new key already reports it,
/// so the previous key's result is never painted under the new one.
pub fn use_query<T, F, Fut>(cache: QueryCache<T>, key: QueryKey, fetch: F) -> QueryStatus<T>
where
    T: 'static,
    F: Fn(QueryKey) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let mut state = use_signal(QueryState::<T>::default);
    let lookup = cache.clone();

    use_effect(use_reactive((&key,), move |(key,)| {
        let ticket = state.write().begin(key.clone());

        if let Some(value) = cache.cached(&key) {
            state.write().resolve(&ticket, Ok(value));
            return;
        }

        let request = cache.fetch(&key, || fetch(key.clone()));
        spawn(async move {
            let result = request.await;
            if let Err(e) = &result {
                warn!("query {} failed: {}", ticket.key(), e);
            }
            if !state.write().resolve(&ticket, result) {
                debug!("discarding stale response for {}", ticket.key());
            }
        });
    }));

    let status = state.read().status_of(&key);
    match status {
        QueryStatus::Loading => lookup
            .cached(&key)
            .map_or(QueryStatus::Loading, QueryStatus::Success),
        status => status,
    }
}
