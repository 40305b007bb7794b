//! Problem service: paginated listing, detail lookup, creation, and
//! testcase management.

use std::sync::Arc;

use log::warn;
use validator::Validate;

use crate::api::upload::{upload_all, ObjectUpload, UploadFile};
use crate::api::ApiClient;
use crate::constants::{
    ERR_NO_TESTCASE_FILES, MSG_PROBLEM_CREATED, MSG_PROBLEM_CREATE_FAILED, MSG_TESTCASES_UPLOADED,
    MSG_TESTCASES_UPLOAD_FAILED, MSG_TESTCASE_DELETED, MSG_TESTCASE_DELETE_FAILED, RES_PROBLEM,
    RES_PROBLEMS,
};
use crate::errors::ApiError;
use crate::models::{
    AddTestcasesRequest, CreateProblemRequest, DeleteTestcaseRequest, ListPage, Problem, Testcase,
};
use crate::query::{Invalidation, MutationBridge, MutationState, PagerState, QueryKey};
use crate::utils::normalize_testcase_name;
use crate::validators::validation_errors_to_api_error;

/// Which testcases the detail screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestcaseFilter {
    #[default]
    All,
    /// Testcases whose input or output file never arrived.
    MissingFiles,
}

/// One client-side page of a problem's testcases.
#[derive(Debug, Clone)]
pub struct TestcasePage {
    pub testcases: Vec<Testcase>,
    pub total: u64,
    pub page_count: u64,
}

pub struct ProblemService {
    client: Arc<ApiClient>,
    bridge: MutationBridge,
}

impl ProblemService {
    pub fn new(client: Arc<ApiClient>, bridge: MutationBridge) -> Self {
        Self { client, bridge }
    }

    /// One page of the problem collection, cached by (page, take).
    pub async fn list(&self, pager: &PagerState) -> Result<Arc<ListPage<Problem>>, ApiError> {
        let key = QueryKey::list(RES_PROBLEMS, pager.page(), pager.take());
        let query = [
            ("page", pager.page().to_string()),
            ("take", pager.take().to_string()),
        ];

        self.bridge
            .cache()
            .fetch(&key, || async {
                let page: ListPage<Problem> = self.client.get("/problems", &query).await?;
                if !page.meta_consistent(pager.take()) {
                    warn!("problems meta disagrees with take={}", pager.take());
                }
                Ok(page)
            })
            .await
    }

    /// A single problem with its testcases, cached by id.
    pub async fn detail(&self, id: &str) -> Result<Arc<Problem>, ApiError> {
        let key = QueryKey::detail(RES_PROBLEM, id);
        let path = format!("/problems/{}", id);

        self.bridge
            .cache()
            .fetch(&key, || async { self.client.get(&path, &[]).await })
            .await
    }

    /// Create a problem. Invalidates the collection so every list page
    /// refetches.
    pub async fn create(&self, request: CreateProblemRequest) -> Result<Problem, ApiError> {
        request.validate().map_err(validation_errors_to_api_error)?;

        self.bridge
            .run(
                self.client.post("/problems", &request),
                &[Invalidation::Resource(RES_PROBLEMS)],
                MSG_PROBLEM_CREATED,
                MSG_PROBLEM_CREATE_FAILED,
            )
            .await
    }

    /// Create a problem whose statement embeds uploaded images.
    pub async fn create_with_images(
        &self,
        title: &str,
        content: &str,
        images: Vec<UploadFile>,
        uploader: &dyn ObjectUpload,
    ) -> Result<Problem, ApiError> {
        let descriptors = upload_all(uploader, RES_PROBLEMS, &images).await?;
        self.create(CreateProblemRequest {
            title: title.to_string(),
            content: content.to_string(),
            images: descriptors,
        })
        .await
    }

    /// Upload testcase files and append them to the problem. File names are
    /// normalized first so the grader can pair `.in`/`.out` files.
    pub async fn add_testcases(
        &self,
        id: &str,
        mut files: Vec<UploadFile>,
        uploader: &dyn ObjectUpload,
    ) -> Result<Problem, ApiError> {
        if files.is_empty() {
            return Err(ApiError::Validation(vec![ERR_NO_TESTCASE_FILES.to_string()]));
        }
        for file in &mut files {
            file.name = normalize_testcase_name(&file.name);
        }

        let path = format!("/problems/{}", id);
        let prefix = format!("{}/{}", RES_PROBLEMS, id);
        let detail_key = QueryKey::detail(RES_PROBLEM, id);

        let operation = async {
            let testcases = upload_all(uploader, &prefix, &files).await?;
            self.client
                .patch(&path, &AddTestcasesRequest { testcases })
                .await
        };

        self.bridge
            .run(
                operation,
                &[Invalidation::Entry(detail_key)],
                MSG_TESTCASES_UPLOADED,
                MSG_TESTCASES_UPLOAD_FAILED,
            )
            .await
    }

    /// Delete one testcase pair. The per-row [`MutationState`] lets the
    /// calling view flag just this row as busy.
    pub async fn delete_testcase(
        &self,
        state: &MutationState,
        id: &str,
        request: DeleteTestcaseRequest,
    ) -> Result<(), ApiError> {
        let path = format!("/problems/{}/testcase", id);
        let detail_key = QueryKey::detail(RES_PROBLEM, id);

        self.bridge
            .run_tracked(
                state,
                self.client.delete_with_body(&path, &request),
                &[Invalidation::Entry(detail_key)],
                MSG_TESTCASE_DELETED,
                MSG_TESTCASE_DELETE_FAILED,
            )
            .await
    }
}

/// Filter and paginate a problem's testcases client-side. Unlike the list
/// screens, the detail screen already holds every testcase, so no network
/// is involved.
pub fn testcase_page(problem: &Problem, filter: TestcaseFilter, pager: &PagerState) -> TestcasePage {
    let filtered: Vec<&Testcase> = problem
        .testcases
        .iter()
        .filter(|testcase| match filter {
            TestcaseFilter::All => true,
            TestcaseFilter::MissingFiles => testcase.is_missing_files(),
        })
        .collect();

    let total = filtered.len() as u64;
    let take = pager.take().max(1);
    let page_count = total.div_ceil(take);
    let page = pager.page().clamp(1, page_count.max(1));

    let start = ((page - 1) * take) as usize;
    let testcases = filtered
        .into_iter()
        .skip(start)
        .take(take as usize)
        .cloned()
        .collect();

    TestcasePage {
        testcases,
        total,
        page_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::Asset;
    use crate::notify::test_support::RecordingNotifier;
    use crate::query::QueryCache;
    use std::time::Duration;

    fn test_service() -> (ProblemService, Arc<RecordingNotifier>) {
        let config = Config {
            api_base_url: "http://localhost:9".to_string(),
            request_timeout_secs: 1,
            stale_after_secs: 30,
            cache_max_age_secs: 300,
            admin_email: "admin@example.com".to_string(),
            admin_password: "changeme".to_string(),
        };
        let client = Arc::new(ApiClient::new(&config).unwrap());
        let cache = Arc::new(QueryCache::with_windows(
            Duration::from_secs(30),
            Duration::from_secs(300),
        ));
        let notifier = Arc::new(RecordingNotifier::default());
        let bridge = MutationBridge::new(cache, notifier.clone());
        (ProblemService::new(client, bridge), notifier)
    }

    fn testcase(id: &str, has_input: bool, has_output: bool) -> Testcase {
        let asset = |suffix: &str| Asset {
            id: format!("{}-{}", id, suffix),
            name: format!("{}.{}", id, suffix),
            url: format!("https://cdn/{}.{}", id, suffix),
        };
        Testcase {
            id: id.to_string(),
            name: format!("testcase_{}", id),
            input: has_input.then(|| asset("in")),
            output: has_output.then(|| asset("out")),
        }
    }

    fn problem_with(testcases: Vec<Testcase>) -> Problem {
        serde_json::from_value(serde_json::json!({
            "id": "p-1",
            "title": "Two Sum",
            "content": "",
            "testcases": [],
            "createdAt": "2025-03-14T09:26:53.000Z"
        }))
        .map(|mut problem: Problem| {
            problem.testcases = testcases;
            problem
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_rejects_empty_fields_before_dispatch() {
        let (service, notifier) = test_service();

        let result = service
            .create(CreateProblemRequest {
                title: String::new(),
                content: "body".to_string(),
                images: vec![],
            })
            .await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
        // Validation failures never reach the bridge, so no notification.
        assert!(notifier.errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_testcases_requires_files() {
        struct NoUpload;
        #[async_trait::async_trait]
        impl ObjectUpload for NoUpload {
            async fn upload(
                &self,
                _prefix: &str,
                _file: &UploadFile,
            ) -> Result<crate::models::AssetDescriptor, ApiError> {
                panic!("must not be called");
            }
        }

        let (service, _) = test_service();
        let result = service.add_testcases("p-1", vec![], &NoUpload).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_testcase_page_filters_missing_files() {
        let problem = problem_with(vec![
            testcase("a", true, true),
            testcase("b", true, false),
            testcase("c", false, true),
            testcase("d", true, true),
        ]);
        let pager = PagerState::new(5);

        let all = testcase_page(&problem, TestcaseFilter::All, &pager);
        assert_eq!(all.total, 4);
        assert_eq!(all.page_count, 1);

        let missing = testcase_page(&problem, TestcaseFilter::MissingFiles, &pager);
        assert_eq!(missing.total, 2);
        let names: Vec<&str> = missing.testcases.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(names, ["b", "c"]);
    }

    #[test]
    fn test_testcase_page_slices_by_pager() {
        let testcases: Vec<Testcase> = (0..12)
            .map(|i| testcase(&format!("t{:02}", i), true, true))
            .collect();
        let problem = problem_with(testcases);

        let mut pager = PagerState::new(5);
        pager.set_page(3);
        let page = testcase_page(&problem, TestcaseFilter::All, &pager);
        assert_eq!(page.total, 12);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.testcases.len(), 2);
        assert_eq!(page.testcases[0].id, "t10");
    }

    #[test]
    fn test_testcase_page_clamps_out_of_range_page() {
        let problem = problem_with(vec![testcase("a", true, true)]);
        let mut pager = PagerState::new(5);
        pager.set_page(9);

        let page = testcase_page(&problem, TestcaseFilter::All, &pager);
        assert_eq!(page.testcases.len(), 1);
    }
}
