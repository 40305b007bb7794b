//! Table rows for each list screen.

use chrono::{DateTime, Utc};

use crate::models::{Page, PageUser, Problem, Testcase};

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Row of the problems screen: title, testcase count, creation date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemRow {
    pub id: String,
    pub title: String,
    pub testcase_count: usize,
    pub created_at: String,
}

impl From<&Problem> for ProblemRow {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.id.clone(),
            title: problem.title.clone(),
            testcase_count: problem.testcases.len(),
            created_at: format_date(&problem.created_at),
        }
    }
}

/// Row of the pages screen: name, address, creation date, review status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRow {
    pub id: String,
    pub name: String,
    pub address: String,
    pub created_at: String,
    pub status: String,
}

impl From<&Page> for PageRow {
    fn from(page: &Page) -> Self {
        Self {
            id: page.id.clone(),
            name: page.name.clone(),
            address: page.address.clone(),
            created_at: format_date(&page.created_at),
            status: page.status.to_string(),
        }
    }
}

/// Row of a page's member table: display name, email, role, join date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub joined_at: String,
}

impl From<&PageUser> for PageUserRow {
    fn from(user: &PageUser) -> Self {
        Self {
            id: user.id.clone(),
            name: user.display_name(),
            email: user.email.clone(),
            role: user.page_role.to_string(),
            joined_at: format_date(&user.created_at),
        }
    }
}

/// Row of the testcase table on a problem's detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestcaseRow {
    pub id: String,
    pub name: String,
    pub has_input: bool,
    pub has_output: bool,
}

impl From<&Testcase> for TestcaseRow {
    fn from(testcase: &Testcase) -> Self {
        Self {
            id: testcase.id.clone(),
            name: testcase.name.clone(),
            has_input: testcase.input.is_some(),
            has_output: testcase.output.is_some(),
        }
    }
}
