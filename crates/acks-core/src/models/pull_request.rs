use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;
use crate::fields::{Model, Value};

/// Reviewer sentiment parsed from a review comment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewDecision {
    ConceptAck,
    TestedAck,
    UntestedAck,
    Nack,
    /// No recognised marker in the comment
    #[default]
    #[serde(other)]
    None,
}

/// GitHub label (many-to-many with pull requests)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Label {
    pub name: String,
    /// Color hex string WITHOUT `#` prefix (e.g., "fc2929")
    pub color: String,
}

/// Review comment carrying a review decision
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Comment {
    pub id: String,
    pub author: User,
    #[serde(default)]
    pub review_decision: ReviewDecision,
    #[serde(default)]
    pub body: String,
    pub url: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// Pull request as stored by the ingestion pipeline
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PullRequest {
    pub id: String,
    pub number: i64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub additions: i64,
    pub deletions: i64,
    pub author: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    /// GitHub mergeable state: MERGEABLE, CONFLICTING or UNKNOWN
    pub mergeable: Option<String>,
    /// Combined CI status of the head commit
    pub last_commit_state: Option<String>,
    pub last_commit_state_description: Option<String>,
    pub last_commit_short_hash: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Review comments in publication order
    #[serde(default)]
    pub review_decisions: Vec<Comment>,
    /// Sum of pledged bounty amounts, in satoshis
    pub total_bounty_amount: Option<i64>,
}

impl PullRequest {
    /// Merged or closed pull requests no longer have a live merge/CI status
    pub fn is_finalized(&self) -> bool {
        self.merged_at.is_some() || self.closed_at.is_some()
    }
}

impl Model for PullRequest {
    const ENTITY: &'static str = "pull_request";

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "number",
        "title",
        "body",
        "additions",
        "deletions",
        "author.login",
        "created_at",
        "updated_at",
        "merged_at",
        "closed_at",
        "mergeable",
        "last_commit_state",
        "last_commit_state_description",
        "last_commit_short_hash",
        "html_url",
        "labels",
        "review_decisions",
        "total_bounty_amount",
    ];

    fn key(&self) -> String {
        self.number.to_string()
    }

    fn field(&self, column: &str) -> Option<Value<'_>> {
        let value = match column {
            "id" => Value::Text(&self.id),
            "number" => Value::Int(self.number),
            "title" => Value::Text(&self.title),
            "body" => Value::Text(&self.body),
            "additions" => Value::Int(self.additions),
            "deletions" => Value::Int(self.deletions),
            "author.login" => Value::Text(&self.author.login),
            "created_at" => Value::Timestamp(self.created_at),
            "updated_at" => Value::from_opt_timestamp(self.updated_at),
            "merged_at" => Value::from_opt_timestamp(self.merged_at),
            "closed_at" => Value::from_opt_timestamp(self.closed_at),
            "mergeable" => Value::from_opt_text(self.mergeable.as_deref()),
            "last_commit_state" => Value::from_opt_text(self.last_commit_state.as_deref()),
            "last_commit_state_description" => {
                Value::from_opt_text(self.last_commit_state_description.as_deref())
            }
            "last_commit_short_hash" => {
                Value::from_opt_text(self.last_commit_short_hash.as_deref())
            }
            "html_url" => Value::Text(&self.html_url),
            "labels" | "review_decisions" => Value::Null,
            "total_bounty_amount" => Value::from_opt_int(self.total_bounty_amount),
            _ => return None,
        };
        Some(value)
    }
}
