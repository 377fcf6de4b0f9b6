//! In-memory data store loaded from a JSON snapshot

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::models::*;

/// Lookup-only access to users by id
pub trait UserDirectory {
    fn user(&self, id: &str) -> Option<&User>;
}

/// Bounty row as serialized in a snapshot
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BountyRecord {
    pub id: String,
    pub amount: Option<i64>,
    pub published_at: DateTime<Utc>,
    pub pull_request_number: i64,
    pub recipient_user_id: Option<String>,
    pub payer_user_id: Option<String>,
}

/// Serialized form of the data store
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub pull_requests: Vec<PullRequest>,
    #[serde(default)]
    pub bounties: Vec<BountyRecord>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

/// Resolved data store: bounties linked to their pull request and invoices,
/// users indexed by id
#[derive(Debug, Default)]
pub struct Store {
    users: HashMap<String, User>,
    pull_requests: Vec<Arc<PullRequest>>,
    bounties: Vec<Bounty>,
    invoices: Vec<Invoice>,
}

impl Store {
    /// Load and resolve a snapshot file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        tracing::debug!("loading snapshot from {}", path.display());
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let mut users: HashMap<String, User> = snapshot
            .users
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();

        let pull_requests: Vec<Arc<PullRequest>> =
            snapshot.pull_requests.into_iter().map(Arc::new).collect();

        for pr in &pull_requests {
            let authors =
                std::iter::once(&pr.author).chain(pr.review_decisions.iter().map(|c| &c.author));
            for author in authors {
                users
                    .entry(author.id.clone())
                    .or_insert_with(|| author.clone());
            }
        }

        let by_number: BTreeMap<i64, &Arc<PullRequest>> =
            pull_requests.iter().map(|pr| (pr.number, pr)).collect();

        let mut bounties = Vec::with_capacity(snapshot.bounties.len());
        for record in snapshot.bounties {
            let pull_request = by_number
                .get(&record.pull_request_number)
                .map(|pr| Arc::clone(pr))
                .ok_or_else(|| CoreError::DanglingReference {
                    kind: "bounty",
                    id: record.id.clone(),
                    target: "pull request",
                })?;
            bounties.push(Bounty {
                id: record.id,
                amount: record.amount,
                published_at: record.published_at,
                pull_request,
                recipient_user_id: record.recipient_user_id,
                payer_user_id: record.payer_user_id,
                invoices: Vec::new(),
            });
        }

        for invoice in &snapshot.invoices {
            let bounty = bounties
                .iter_mut()
                .find(|b| b.id == invoice.bounty_id)
                .ok_or_else(|| CoreError::DanglingReference {
                    kind: "invoice",
                    id: invoice.id.clone(),
                    target: "bounty",
                })?;
            bounty.invoices.push(invoice.clone());
        }

        tracing::info!(
            "loaded {} pull requests, {} bounties, {} invoices, {} users",
            pull_requests.len(),
            bounties.len(),
            snapshot.invoices.len(),
            users.len()
        );

        Ok(Self {
            users,
            pull_requests,
            bounties,
            invoices: snapshot.invoices,
        })
    }

    pub fn pull_requests(&self) -> impl Iterator<Item = &PullRequest> {
        self.pull_requests.iter().map(|pr| pr.as_ref())
    }

    pub fn bounties(&self) -> &[Bounty] {
        &self.bounties
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }
}

impl UserDirectory for Store {
    fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }
}
