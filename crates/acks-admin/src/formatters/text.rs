//! Plain value columns: line counts, free text and timestamps

use acks_core::{escape, strip_tags, Markup, Model, Value};

use super::currency::group_thousands;
use super::{column_value, NOWRAP};
use crate::context::{AdminView, RenderContext};
use crate::error::{RenderError, Result};
use crate::humanize::natural_time;

/// Characters of stripped text shown in list mode
pub const BODY_PREVIEW_CHARS: usize = 100;

/// Colored `+N` / `-N` diff stat; only `additions` and `deletions` are valid
pub fn line_count<M: Model>(
    _view: &dyn AdminView,
    _ctx: &RenderContext<'_>,
    model: &M,
    name: &str,
) -> Result<Markup> {
    let (color, prefix) = match name {
        "additions" => ("#28a745", '+'),
        "deletions" => ("#cb2431", '-'),
        other => {
            return Err(RenderError::contract(
                "line_count",
                format!("unsupported column '{}'", other),
            ))
        }
    };
    let lines = column_value("line_count", model, name)?
        .as_int()
        .ok_or_else(|| RenderError::contract("line_count", format!("{} is not a count", name)))?;
    Ok(Markup::raw(format!(
        r#"<div style="color: {}">{}{}</div>"#,
        color,
        prefix,
        group_thousands(lines)
    )))
}

/// Full stored text on the details page, a stripped preview in the list
pub fn body<M: Model>(
    _view: &dyn AdminView,
    ctx: &RenderContext<'_>,
    model: &M,
    name: &str,
) -> Result<Markup> {
    let text = match column_value("body", model, name)? {
        Value::Text(text) => text,
        _ => return Ok(Markup::empty()),
    };
    if ctx.is_details() {
        return Ok(Markup::raw(text));
    }

    let full_text = strip_tags(text);
    if full_text.is_empty() {
        return Ok(Markup::empty());
    }
    let display_text = if full_text.chars().count() > BODY_PREVIEW_CHARS {
        let mut preview: String = full_text.chars().take(BODY_PREVIEW_CHARS).collect();
        preview.push_str("...");
        preview
    } else {
        full_text.clone()
    };
    Ok(Markup::raw(format!(
        r#"<div title="{}">{}</div>"#,
        escape(&full_text),
        escape(&display_text)
    )))
}

/// Relative time with the absolute timestamp as tooltip
pub fn humanize_date<M: Model>(
    _view: &dyn AdminView,
    ctx: &RenderContext<'_>,
    model: &M,
    name: &str,
) -> Result<Markup> {
    let value = column_value("humanize_date", model, name)?;
    let Some(timestamp) = value.as_timestamp() else {
        if !value.is_null() {
            tracing::debug!("{}.{} is not a timestamp, leaving blank", M::ENTITY, name);
        }
        return Ok(Markup::empty());
    };
    Ok(Markup::raw(format!(
        r#"<div title="{}" style="{}">{}</div>"#,
        value,
        NOWRAP,
        natural_time(ctx.now, timestamp)
    )))
}
