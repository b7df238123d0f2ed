//! The lookup capability as a trait, plus the completion-callback calling
//! convention built on top of it.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::error::LookupError;

/// Resolves an app bundle identifier to its storefront page URL.
///
/// [`LookupClient`](crate::LookupClient) is the production implementation;
/// callers that need a test double implement this trait instead.
#[async_trait]
pub trait StoreUrlResolver: Send + Sync {
    /// Returns the query-stripped storefront URL for `bundle_id`.
    async fn resolve_store_url(&self, bundle_id: &str) -> Result<String, LookupError>;
}

/// Runs a lookup on the current Tokio runtime and hands the outcome to
/// `on_complete`.
///
/// `on_complete` is called exactly once, from the spawned task, on both the
/// success and every failure path. The one exception is a resolver that
/// panics: the task unwinds before `on_complete` runs, and the panic is
/// reported through the returned handle instead. The handle can be awaited
/// to know the callback has run, or dropped to detach.
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub fn resolve_with_callback<R, F>(
    resolver: Arc<R>,
    bundle_id: impl Into<String>,
    on_complete: F,
) -> JoinHandle<()>
where
    R: StoreUrlResolver + ?Sized + 'static,
    F: FnOnce(Result<String, LookupError>) + Send + 'static,
{
    let bundle_id = bundle_id.into();
    tokio::spawn(async move {
        let outcome = resolver.resolve_store_url(&bundle_id).await;
        on_complete(outcome);
    })
}
