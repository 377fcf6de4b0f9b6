//! Merge and CI status badges for open pull requests

use acks_core::{escape, Markup, PullRequest, Value};

use super::column_value;
use crate::context::{AdminView, RenderContext};
use crate::error::{RenderError, Result};

/// First character upper-cased, the rest lower-cased
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn mergeable_class(status: &str) -> Option<&'static str> {
    match status {
        "Mergeable" => Some("label-success"),
        "Conflicting" => Some("label-danger"),
        "Unknown" => Some("label-default"),
        _ => None,
    }
}

fn commit_state_class(state: &str) -> Option<&'static str> {
    match state {
        "Expected" | "Success" => Some("label-success"),
        "Error" | "Failure" => Some("label-danger"),
        "Pending" => Some("label-default"),
        _ => None,
    }
}

/// Mergeability badge; blank once the pull request is merged or closed
pub fn mergeable(
    _view: &dyn AdminView,
    _ctx: &RenderContext<'_>,
    pull_request: &PullRequest,
    name: &str,
) -> Result<Markup> {
    if pull_request.is_finalized() {
        return Ok(Markup::empty());
    }
    let Value::Text(raw) = column_value("mergeable", pull_request, name)? else {
        return Err(RenderError::contract("mergeable", "missing mergeable status"));
    };
    let text = capitalize(raw);
    let label = mergeable_class(&text).ok_or_else(|| {
        RenderError::contract("mergeable", format!("unrecognized mergeable status '{}'", raw))
    })?;
    Ok(Markup::raw(format!(
        r#" <span class="label {}">{}</span>"#,
        label,
        escape(&text)
    )))
}

/// CI status badge for the head commit; blank when there is no status yet
pub fn last_commit_state(
    _view: &dyn AdminView,
    _ctx: &RenderContext<'_>,
    pull_request: &PullRequest,
    name: &str,
) -> Result<Markup> {
    if pull_request.is_finalized() {
        return Ok(Markup::empty());
    }
    let state = match column_value("last_commit_state", pull_request, name)? {
        Value::Text(state) => state,
        Value::Null => return Ok(Markup::empty()),
        other => {
            return Err(RenderError::contract(
                "last_commit_state",
                format!("{} is not a status: {:?}", name, other),
            ))
        }
    };
    let label = commit_state_class(state).ok_or_else(|| {
        RenderError::contract(
            "last_commit_state",
            format!("unrecognized last commit status '{}'", state),
        )
    })?;
    Ok(Markup::raw(format!(
        r#"<span title="{}" class="label {}">{}</span>"#,
        escape(
            pull_request
                .last_commit_state_description
                .as_deref()
                .unwrap_or_default()
        ),
        label,
        escape(state)
    )))
}
