//! Page service: paginated listing, detail lookup, field updates, the
//! approve/reject review flow, and the page-member list.

use std::sync::Arc;

use log::warn;

use crate::api::ApiClient;
use crate::constants::{
    MSG_PAGE_APPROVED, MSG_PAGE_APPROVE_FAILED, MSG_PAGE_REJECTED, MSG_PAGE_REJECT_FAILED,
    MSG_PAGE_UPDATED, MSG_PAGE_UPDATE_FAILED, RES_PAGE, RES_PAGES, RES_PAGE_USERS,
};
use crate::errors::ApiError;
use crate::models::{ListPage, Page, PageUser, UpdatePageRequest};
use crate::query::{Invalidation, MutationBridge, PagerState, QueryKey};
use crate::validators::{validate_page_moderatable, validate_page_update};

pub struct PageService {
    client: Arc<ApiClient>,
    bridge: MutationBridge,
}

impl PageService {
    pub fn new(client: Arc<ApiClient>, bridge: MutationBridge) -> Self {
        Self { client, bridge }
    }

    /// One page of the page collection, cached by (page, take).
    pub async fn list(&self, pager: &PagerState) -> Result<Arc<ListPage<Page>>, ApiError> {
        let key = QueryKey::list(RES_PAGES, pager.page(), pager.take());
        let query = [
            ("page", pager.page().to_string()),
            ("take", pager.take().to_string()),
        ];

        self.bridge
            .cache()
            .fetch(&key, || async {
                let page: ListPage<Page> = self.client.get("/pages", &query).await?;
                if !page.meta_consistent(pager.take()) {
                    warn!("pages meta disagrees with take={}", pager.take());
                }
                Ok(page)
            })
            .await
    }

    /// A single page, cached by id.
    pub async fn detail(&self, id: &str) -> Result<Arc<Page>, ApiError> {
        let key = QueryKey::detail(RES_PAGE, id);
        let path = format!("/pages/{}", id);

        self.bridge
            .cache()
            .fetch(&key, || async { self.client.get(&path, &[]).await })
            .await
    }

    /// Members of a page, scoped by the page id in the cache key.
    pub async fn users(
        &self,
        page_id: &str,
        pager: &PagerState,
    ) -> Result<Arc<ListPage<PageUser>>, ApiError> {
        let key = QueryKey::list(RES_PAGE_USERS, pager.page(), pager.take())
            .with_filter("pageId", page_id);
        let path = format!("/pages/{}/users", page_id);
        let query = [
            ("page", pager.page().to_string()),
            ("take", pager.take().to_string()),
        ];

        self.bridge
            .cache()
            .fetch(&key, || async { self.client.get(&path, &query).await })
            .await
    }

    /// Patch the editable page fields. Only the detail entry refetches; list
    /// rows pick the change up on their own staleness schedule.
    pub async fn update(&self, id: &str, request: UpdatePageRequest) -> Result<Page, ApiError> {
        validate_page_update(&request)?;

        let path = format!("/pages/{}", id);
        self.bridge
            .run(
                self.client.patch(&path, &request),
                &[Invalidation::Entry(QueryKey::detail(RES_PAGE, id))],
                MSG_PAGE_UPDATED,
                MSG_PAGE_UPDATE_FAILED,
            )
            .await
    }

    /// Approve a page awaiting review. Both the collection and the page's
    /// detail entry are invalidated so every view reflects the new status.
    pub async fn approve(&self, page: &Page) -> Result<(), ApiError> {
        validate_page_moderatable(page.status)?;

        let path = format!("/pages/{}/approve", page.id);
        self.bridge
            .run(
                self.client.post_empty(&path),
                &[
                    Invalidation::Resource(RES_PAGES),
                    Invalidation::Entry(QueryKey::detail(RES_PAGE, &page.id)),
                ],
                MSG_PAGE_APPROVED,
                MSG_PAGE_APPROVE_FAILED,
            )
            .await
    }

    /// Reject a page awaiting review. Same invalidation scope as approve.
    pub async fn reject(&self, page: &Page) -> Result<(), ApiError> {
        validate_page_moderatable(page.status)?;

        let path = format!("/pages/{}/reject", page.id);
        self.bridge
            .run(
                self.client.post_empty(&path),
                &[
                    Invalidation::Resource(RES_PAGES),
                    Invalidation::Entry(QueryKey::detail(RES_PAGE, &page.id)),
                ],
                MSG_PAGE_REJECTED,
                MSG_PAGE_REJECT_FAILED,
            )
            .await
    }
}
