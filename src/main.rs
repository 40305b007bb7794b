//! Admin console walk-through: sign in, then browse the paginated problem
//! and page lists the way the admin screens do.

use std::sync::Arc;

use log::{error, info};

use admin_api_client::api::ApiClient;
use admin_api_client::config::CONFIG;
use admin_api_client::constants::{RES_PAGES, RES_PROBLEMS};
use admin_api_client::models::{Page, Problem, SignInRequest};
use admin_api_client::notify::LogNotifier;
use admin_api_client::query::{MutationBridge, PagerState, QueryCache, QueryKey};
use admin_api_client::services::{AuthService, PageService, ProblemService};
use admin_api_client::views::{bind_list, ListViewState, PageRow, ProblemRow, TableView};

#[tokio::main]
async fn main() {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let client = Arc::new(ApiClient::new(&CONFIG).expect("Failed to build API client"));
    let cache = Arc::new(QueryCache::new());
    let notifier = Arc::new(LogNotifier);

    let auth = AuthService::new(client.clone(), cache.clone());
    let problems = ProblemService::new(
        client.clone(),
        MutationBridge::new(cache.clone(), notifier.clone()),
    );
    let pages = PageService::new(
        client.clone(),
        MutationBridge::new(cache.clone(), notifier.clone()),
    );

    info!("Connecting to {}", CONFIG.api_base_url);
    let request = SignInRequest::new(CONFIG.admin_email.clone(), CONFIG.admin_password.clone());
    let session = match auth.sign_in(request).await {
        Ok(session) => session,
        Err(err) => {
            error!("Sign-in failed: {}", err);
            return;
        }
    };
    info!("Session established for user {}", session.user.id);

    let mut pager = PagerState::default();
    if let Err(err) = problems.list(&pager).await {
        error!("Failed to fetch problems: {}", err);
    }
    let key = QueryKey::list(RES_PROBLEMS, pager.page(), pager.take());
    render("Problems", bind_list::<Problem, ProblemRow>(&cache, &key, &mut pager), |row| {
        format!("{:<40} {:>9} {:>12}", row.title, row.testcase_count, row.created_at)
    });

    let mut pager = PagerState::default();
    if let Err(err) = pages.list(&pager).await {
        error!("Failed to fetch pages: {}", err);
    }
    let key = QueryKey::list(RES_PAGES, pager.page(), pager.take());
    render("Pages", bind_list::<Page, PageRow>(&cache, &key, &mut pager), |row| {
        format!("{:<30} {:<25} {:>12} {:>10}", row.name, row.address, row.created_at, row.status)
    });

    auth.sign_out();
}

fn render<R>(title: &str, state: ListViewState<R>, line: impl Fn(&R) -> String) {
    println!("== {} ==", title);
    match state {
        ListViewState::Loading => println!("(loading)"),
        ListViewState::Failed(err) => println!("(failed: {})", err),
        ListViewState::Ready(TableView { rows, controls }) => {
            if rows.is_empty() {
                println!("(no items)");
            }
            for row in &rows {
                println!("{}", line(row));
            }
            let strip: Vec<String> = controls.slots.iter().map(|slot| slot.to_string()).collect();
            println!(
                "Total: {} | page {}/{} | {}",
                controls.total,
                controls.current,
                controls.page_count.max(1),
                strip.join(" ")
            );
        }
    }
    println!();
}
