//! Explicit (entity, formatter) bindings
//!
//! Views name formatters by [`FormatterKind`]. Each entity lists the kinds it
//! supports in its [`Formattable`] impl, so a view binding a formatter to the
//! wrong entity or column fails when the view is built, not mid-render.

use acks_core::{Bounty, Invoice, Model, PullRequest};

use crate::formatters::{
    actions, currency, invoices, labels, links, reviews, status, text, Formatter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatterKind {
    Satoshi,
    Payable,
    Pledge,
    LineCount,
    Body,
    HumanizeDate,
    PrLink,
    AuthorLink,
    UserLookup,
    ReviewDecisions,
    Mergeable,
    LastCommitState,
    Labels,
    Invoices,
}

impl FormatterKind {
    pub fn name(&self) -> &'static str {
        match self {
            FormatterKind::Satoshi => "satoshi",
            FormatterKind::Payable => "payable",
            FormatterKind::Pledge => "pledge",
            FormatterKind::LineCount => "line_count",
            FormatterKind::Body => "body",
            FormatterKind::HumanizeDate => "humanize_date",
            FormatterKind::PrLink => "pr_link",
            FormatterKind::AuthorLink => "author_link",
            FormatterKind::UserLookup => "user_lookup",
            FormatterKind::ReviewDecisions => "review_decisions",
            FormatterKind::Mergeable => "mergeable",
            FormatterKind::LastCommitState => "last_commit_state",
            FormatterKind::Labels => "labels",
            FormatterKind::Invoices => "invoices",
        }
    }

    /// Column-name restrictions that hold regardless of entity
    pub fn accepts_column(&self, column: &str) -> bool {
        match self {
            FormatterKind::LineCount => matches!(column, "additions" | "deletions"),
            _ => true,
        }
    }
}

/// Entities that can resolve formatter kinds to concrete formatters
pub trait Formattable: Model + Sized {
    fn formatter(kind: FormatterKind) -> Option<Formatter<Self>>;
}

impl Formattable for PullRequest {
    fn formatter(kind: FormatterKind) -> Option<Formatter<Self>> {
        let formatter: Formatter<Self> = match kind {
            FormatterKind::Satoshi => currency::satoshi,
            FormatterKind::Pledge => actions::pledge,
            FormatterKind::LineCount => text::line_count,
            FormatterKind::Body => text::body,
            FormatterKind::HumanizeDate => text::humanize_date,
            FormatterKind::PrLink => links::pr_link,
            FormatterKind::AuthorLink => links::author_link,
            FormatterKind::ReviewDecisions => reviews::review_decisions,
            FormatterKind::Mergeable => status::mergeable,
            FormatterKind::LastCommitState => status::last_commit_state,
            FormatterKind::Labels => labels::labels,
            FormatterKind::Payable | FormatterKind::UserLookup | FormatterKind::Invoices => {
                return None
            }
        };
        Some(formatter)
    }
}

impl Formattable for Bounty {
    fn formatter(kind: FormatterKind) -> Option<Formatter<Self>> {
        let formatter: Formatter<Self> = match kind {
            FormatterKind::Satoshi => currency::satoshi,
            FormatterKind::Payable => actions::payable,
            FormatterKind::HumanizeDate => text::humanize_date,
            FormatterKind::PrLink => links::pr_link,
            FormatterKind::UserLookup => links::user_lookup,
            FormatterKind::Invoices => invoices::invoices,
            _ => return None,
        };
        Some(formatter)
    }
}

impl Formattable for Invoice {
    fn formatter(kind: FormatterKind) -> Option<Formatter<Self>> {
        let formatter: Formatter<Self> = match kind {
            FormatterKind::Satoshi => currency::satoshi,
            FormatterKind::HumanizeDate => text::humanize_date,
            FormatterKind::UserLookup => links::user_lookup,
            _ => return None,
        };
        Some(formatter)
    }
}
