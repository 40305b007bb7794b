//! Bridge between remote writes and cache invalidation.
//!
//! Every mutation follows the same arc: run the request, and on success
//! mark the affected cache entries stale and notify; on failure notify
//! only and leave cached data untouched. Nothing is patched locally, so
//! there is never a rollback.

use std::future::Future;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use log::{debug, warn};

use crate::errors::ApiError;
use crate::notify::Notifier;
use crate::query::cache::QueryCache;
use crate::query::key::QueryKey;

/// Cache entries a successful mutation makes stale.
#[derive(Debug, Clone)]
pub enum Invalidation {
    /// Every entry of a resource namespace (all pages of a list).
    Resource(&'static str),
    /// One exact entry (a single item's detail view).
    Entry(QueryKey),
}

/// Observable state of one mutation invocation.
///
/// Each invocation tracks its own state, so a per-row action (deleting one
/// testcase) can show its own pending flag while other rows stay idle.
/// Success and failure both settle back to `Idle`; the outcome itself is
/// carried by the returned `Result` and the notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStatus {
    Idle,
    Pending,
}

#[derive(Debug, Default)]
pub struct MutationState {
    status: AtomicU8,
}

const STATUS_IDLE: u8 = 0;
const STATUS_PENDING: u8 = 1;

impl MutationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> MutationStatus {
        match self.status.load(Ordering::SeqCst) {
            STATUS_PENDING => MutationStatus::Pending,
            _ => MutationStatus::Idle,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status.load(Ordering::SeqCst) == STATUS_PENDING
    }

    fn begin(&self) {
        self.status.store(STATUS_PENDING, Ordering::SeqCst);
    }

    fn finish(&self) {
        self.status.store(STATUS_IDLE, Ordering::SeqCst);
    }
}

pub struct MutationBridge {
    cache: Arc<QueryCache>,
    notifier: Arc<dyn Notifier>,
}

impl MutationBridge {
    pub fn new(cache: Arc<QueryCache>, notifier: Arc<dyn Notifier>) -> Self {
        Self { cache, notifier }
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    /// Run a remote write. On success, invalidate the listed targets and
    /// raise a success notification; on failure, raise the error
    /// notification and leave every cache entry as it was.
    pub async fn run<T, Fut>(
        &self,
        operation: Fut,
        invalidates: &[Invalidation],
        success_message: &str,
        error_message: &str,
    ) -> Result<T, ApiError>
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        self.run_tracked(&MutationState::new(), operation, invalidates, success_message, error_message)
            .await
    }

    /// Like [`run`](Self::run), driving a caller-owned [`MutationState`]
    /// so the view can render a pending flag for this invocation.
    pub async fn run_tracked<T, Fut>(
        &self,
        state: &MutationState,
        operation: Fut,
        invalidates: &[Invalidation],
        success_message: &str,
        error_message: &str,
    ) -> Result<T, ApiError>
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        state.begin();

        match operation.await {
            Ok(value) => {
                for target in invalidates {
                    match target {
                        Invalidation::Resource(resource) => {
                            self.cache.invalidate_resource(resource);
                        }
                        Invalidation::Entry(key) => self.cache.invalidate_entry(key),
                    }
                }
                debug!("mutation succeeded, {} targets invalidated", invalidates.len());
                self.notifier.success(success_message);
                state.finish();
                Ok(value)
            }
            Err(error) => {
                warn!("mutation failed: {}", error);
                self.notifier.error(error_message);
                state.finish();
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::test_support::RecordingNotifier;
    use std::time::Duration;

    fn bridge_with(notifier: Arc<RecordingNotifier>) -> MutationBridge {
        let cache = Arc::new(QueryCache::with_windows(
            Duration::from_secs(30),
            Duration::from_secs(300),
        ));
        MutationBridge::new(cache, notifier)
    }

    #[tokio::test]
    async fn test_success_invalidates_list_and_detail() {
        let notifier = Arc::new(RecordingNotifier::default());
        let bridge = bridge_with(notifier.clone());
        let cache = bridge.cache().clone();

        let list_key = QueryKey::list("pages", 1, 5);
        let detail_key = QueryKey::detail("page", "pg-1");
        cache.fetch(&list_key, || async { Ok::<_, ApiError>("list") }).await.unwrap();
        cache.fetch(&detail_key, || async { Ok::<_, ApiError>("detail") }).await.unwrap();

        bridge
            .run(
                async { Ok::<_, ApiError>(()) },
                &[
                    Invalidation::Resource("pages"),
                    Invalidation::Entry(detail_key.clone()),
                ],
                "approved",
                "approve failed",
            )
            .await
            .unwrap();

        // Both the collection and the item's detail entry must refetch next.
        assert!(cache.peek::<&str>(&list_key).is_none());
        assert!(cache.peek::<&str>(&detail_key).is_none());
        assert_eq!(notifier.successes.lock().unwrap().as_slice(), ["approved"]);
        assert!(notifier.errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_notifies_and_leaves_cache_intact() {
        let notifier = Arc::new(RecordingNotifier::default());
        let bridge = bridge_with(notifier.clone());
        let cache = bridge.cache().clone();

        let list_key = QueryKey::list("problems", 1, 5);
        cache.fetch(&list_key, || async { Ok::<_, ApiError>("rows") }).await.unwrap();

        let result = bridge
            .run(
                async {
                    Err::<(), _>(ApiError::Server {
                        status: 500,
                        message: "boom".to_string(),
                    })
                },
                &[Invalidation::Resource("problems")],
                "created",
                "create failed",
            )
            .await;

        assert!(result.is_err());
        assert!(cache.peek::<&str>(&list_key).is_some());
        assert!(notifier.successes.lock().unwrap().is_empty());
        assert_eq!(notifier.errors.lock().unwrap().as_slice(), ["create failed"]);
    }

    #[tokio::test]
    async fn test_state_returns_to_idle_after_each_invocation() {
        let notifier = Arc::new(RecordingNotifier::default());
        let bridge = bridge_with(notifier);
        let state = MutationState::new();
        assert_eq!(state.status(), MutationStatus::Idle);

        bridge
            .run_tracked(&state, async { Ok::<_, ApiError>(()) }, &[], "ok", "failed")
            .await
            .unwrap();
        assert_eq!(state.status(), MutationStatus::Idle);

        let _ = bridge
            .run_tracked(
                &state,
                async { Err::<(), _>(ApiError::Network("down".to_string())) },
                &[],
                "ok",
                "failed",
            )
            .await;
        assert_eq!(state.status(), MutationStatus::Idle);
    }

    #[tokio::test]
    async fn test_overlapping_mutations_track_independently() {
        let notifier = Arc::new(RecordingNotifier::default());
        let bridge = Arc::new(bridge_with(notifier));
        let row_a = Arc::new(MutationState::new());
        let row_b = Arc::new(MutationState::new());

        let slow = {
            let bridge = bridge.clone();
            let state = row_a.clone();
            async move {
                bridge
                    .run_tracked(
                        &state,
                        async {
                            tokio::time::sleep(Duration::from_millis(30)).await;
                            Ok::<_, ApiError>(())
                        },
                        &[],
                        "row a done",
                        "row a failed",
                    )
                    .await
            }
        };

        let probe = {
            let row_a = row_a.clone();
            let row_b = row_b.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                (row_a.is_pending(), row_b.is_pending())
            }
        };

        let (result, (a_pending, b_pending)) = tokio::join!(slow, probe);
        result.unwrap();

        assert!(a_pending, "row A tracks its own in-flight mutation");
        assert!(!b_pending, "row B is unaffected");
    }
}
