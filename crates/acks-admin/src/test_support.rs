//! Fixture builders shared by the formatter and view tests

use std::sync::Arc;

use acks_core::{Bounty, Comment, Invoice, InvoiceStatus, PullRequest, ReviewDecision, User};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use crate::context::{AdminView, RenderContext, RenderMode};
use crate::error::Result;
use crate::routes::{ListQuery, RouteTable};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn user(id: &str, login: &str) -> User {
    User {
        id: id.to_string(),
        login: login.to_string(),
        name: None,
        avatar_url: format!("https://avatars.example/{}", login),
        url: format!("https://github.com/{}", login),
        btcpay_client: false,
    }
}

pub fn comment(id: &str, author: User, decision: ReviewDecision, body: &str) -> Comment {
    Comment {
        id: id.to_string(),
        url: format!("https://github.com/bitcoin/bitcoin/pull/1#issuecomment-{}", id),
        author,
        review_decision: decision,
        body: body.to_string(),
        published_at: None,
    }
}

pub fn pull_request(number: i64) -> PullRequest {
    PullRequest {
        id: format!("PR{}", number),
        number,
        title: format!("Test pull request {}", number),
        body: String::new(),
        additions: 0,
        deletions: 0,
        author: user("U1", "author"),
        created_at: fixed_now() - TimeDelta::days(10),
        updated_at: None,
        merged_at: None,
        closed_at: None,
        mergeable: Some("MERGEABLE".to_string()),
        last_commit_state: None,
        last_commit_state_description: None,
        last_commit_short_hash: None,
        html_url: format!("https://github.com/bitcoin/bitcoin/pull/{}", number),
        labels: Vec::new(),
        review_decisions: Vec::new(),
        total_bounty_amount: None,
    }
}

pub fn bounty(id: &str, pull_request: PullRequest) -> Bounty {
    Bounty {
        id: id.to_string(),
        amount: Some(10_000),
        published_at: fixed_now() - TimeDelta::days(1),
        pull_request: Arc::new(pull_request),
        recipient_user_id: None,
        payer_user_id: None,
        invoices: Vec::new(),
    }
}

pub fn invoice(id: &str, bounty_id: &str, status: InvoiceStatus) -> Invoice {
    Invoice {
        id: id.to_string(),
        bounty_id: bounty_id.to_string(),
        status,
        amount: Some(10_000),
        recipient_user_id: None,
        payer_user_id: None,
        created_at: None,
    }
}

/// Admin view over the default routes and an explicit user list
pub struct TestView {
    routes: RouteTable,
    users: Vec<User>,
    query: ListQuery,
}

impl TestView {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    /// Render context pinned to `fixed_now()`
    pub fn context(&self, mode: RenderMode) -> RenderContext<'_> {
        RenderContext::new(mode, &self.query).at(fixed_now())
    }
}

impl Default for TestView {
    fn default() -> Self {
        Self {
            routes: RouteTable::default(),
            users: Vec::new(),
            query: ListQuery::new("/admin/"),
        }
    }
}

impl AdminView for TestView {
    fn url_for(&self, endpoint: &str, params: &[(&str, String)]) -> Result<String> {
        self.routes.url_for(endpoint, params)
    }

    fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}
