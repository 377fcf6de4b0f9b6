//! The dashboard's admin views

use acks_core::{Bounty, Invoice, PullRequest};

use crate::error::Result;
use crate::registry::FormatterKind;
use crate::view::{ModelView, ViewConfig};

const PULL_REQUEST_COLUMNS: &[&str] = &[
    "number",
    "author.login",
    "title",
    "body",
    "labels",
    "review_decisions",
    "mergeable",
    "last_commit_state",
    "additions",
    "deletions",
    "total_bounty_amount",
    "created_at",
    "updated_at",
    "merged_at",
    "closed_at",
];

const PULL_REQUEST_SCALAR_COLUMNS: &[&str] = &[
    "number",
    "author.login",
    "title",
    "body",
    "mergeable",
    "last_commit_state",
    "additions",
    "deletions",
    "total_bounty_amount",
    "created_at",
    "updated_at",
    "merged_at",
    "closed_at",
];

pub const PULL_REQUESTS: ViewConfig = ViewConfig {
    name: "Pull Requests",
    endpoint: "admin",
    column_list: PULL_REQUEST_COLUMNS,
    column_searchable_list: &["number", "title", "body", "author.login"],
    column_sortable_list: PULL_REQUEST_SCALAR_COLUMNS,
    column_filters: PULL_REQUEST_SCALAR_COLUMNS,
    column_formatters: &[
        ("number", FormatterKind::PrLink),
        ("title", FormatterKind::PrLink),
        ("author.login", FormatterKind::AuthorLink),
        ("body", FormatterKind::Body),
        ("labels", FormatterKind::Labels),
        ("review_decisions", FormatterKind::ReviewDecisions),
        ("mergeable", FormatterKind::Mergeable),
        ("last_commit_state", FormatterKind::LastCommitState),
        ("additions", FormatterKind::LineCount),
        ("deletions", FormatterKind::LineCount),
        ("total_bounty_amount", FormatterKind::Pledge),
        ("created_at", FormatterKind::HumanizeDate),
        ("updated_at", FormatterKind::HumanizeDate),
        ("merged_at", FormatterKind::HumanizeDate),
        ("closed_at", FormatterKind::HumanizeDate),
    ],
    column_labels: &[
        ("author.login", "Author"),
        ("review_decisions", "Reviews"),
        ("last_commit_state", "CI"),
        ("additions", "+"),
        ("deletions", "-"),
        ("total_bounty_amount", "Bounty"),
        ("created_at", "Created"),
        ("updated_at", "Updated"),
        ("merged_at", "Merged"),
        ("closed_at", "Closed"),
    ],
    column_default_sort: Some(("number", true)),
    can_create: false,
    can_edit: false,
    can_delete: false,
    can_view_details: true,
};

pub const BOUNTIES_PAYABLE: ViewConfig = ViewConfig {
    name: "Bounties Payable",
    endpoint: "bounties-payable",
    column_list: &[
        "published_at",
        "pull_request.number",
        "pull_request.title",
        "amount",
        "payer",
        "recipient",
        "invoices",
        "pay",
    ],
    column_searchable_list: &["pull_request.number", "pull_request.title"],
    column_sortable_list: &["published_at", "pull_request.number", "amount"],
    column_filters: &["published_at", "pull_request.number", "amount"],
    column_formatters: &[
        ("published_at", FormatterKind::HumanizeDate),
        ("pull_request.number", FormatterKind::PrLink),
        ("pull_request.title", FormatterKind::PrLink),
        ("amount", FormatterKind::Satoshi),
        ("payer", FormatterKind::UserLookup),
        ("recipient", FormatterKind::UserLookup),
        ("invoices", FormatterKind::Invoices),
        ("pay", FormatterKind::Payable),
    ],
    column_labels: &[
        ("published_at", "Published"),
        ("pull_request.number", "PR"),
        ("pull_request.title", "Title"),
        ("amount", "Satoshis"),
        ("pay", "Payout"),
    ],
    column_default_sort: Some(("published_at", true)),
    can_create: true,
    can_edit: false,
    can_delete: false,
    can_view_details: true,
};

pub const INVOICES: ViewConfig = ViewConfig {
    name: "Invoices",
    endpoint: "invoices",
    column_list: &["id", "status", "amount", "recipient", "payer", "created_at"],
    column_searchable_list: &["id", "status"],
    column_sortable_list: &["status", "amount", "created_at"],
    column_filters: &["status", "amount", "created_at"],
    column_formatters: &[
        ("amount", FormatterKind::Satoshi),
        ("recipient", FormatterKind::UserLookup),
        ("payer", FormatterKind::UserLookup),
        ("created_at", FormatterKind::HumanizeDate),
    ],
    column_labels: &[("created_at", "Created")],
    column_default_sort: Some(("created_at", true)),
    can_create: false,
    can_edit: false,
    can_delete: false,
    can_view_details: true,
};

pub fn pull_requests() -> Result<ModelView<PullRequest>> {
    ModelView::new(PULL_REQUESTS)
}

pub fn bounties_payable() -> Result<ModelView<Bounty>> {
    ModelView::new(BOUNTIES_PAYABLE)
}

pub fn invoices() -> Result<ModelView<Invoice>> {
    ModelView::new(INVOICES)
}
