//! Cell formatters for admin grids
//!
//! Every formatter has the same shape: it receives the hosting view, the
//! render context, the row entity and the column name, and returns a markup
//! fragment. `Markup::empty()` renders as a blank cell.

pub mod actions;
pub mod currency;
pub mod invoices;
pub mod labels;
pub mod links;
pub mod reviews;
pub mod status;
pub mod text;

use acks_core::{escape, Markup, Model, User, Value};

use crate::context::{AdminView, RenderContext};
use crate::error::{RenderError, Result};

pub type Formatter<M> = fn(&dyn AdminView, &RenderContext<'_>, &M, &str) -> Result<Markup>;

pub(crate) const NOWRAP: &str = "white-space: nowrap; overflow: hidden;";

/// Read a column, treating an unknown column as a wiring mistake
pub(crate) fn column_value<'m, M: Model>(
    formatter: &'static str,
    model: &'m M,
    column: &str,
) -> Result<Value<'m>> {
    model.field(column).ok_or_else(|| {
        RenderError::contract(formatter, format!("no column '{}' on {}", column, M::ENTITY))
    })
}

pub(crate) fn avatar(url: &str) -> String {
    format!(
        r#"<img src="{}" style="height:16px; border-radius: 50%;">"#,
        escape(url)
    )
}

/// Avatar plus profile link, kept on one line
pub(crate) fn user_identity(user: &User) -> Markup {
    Markup::raw(format!(
        r#"<div style="{}">{} <a target=blank href="{}" >{}</a></div>"#,
        NOWRAP,
        avatar(&user.avatar_url),
        escape(&user.url),
        escape(&user.login)
    ))
}
