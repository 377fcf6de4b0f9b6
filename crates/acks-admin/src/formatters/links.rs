//! Links to GitHub pull requests and user profiles

use acks_core::{escape, Bounty, Comment, Markup, Model, PullRequest, User, Value};

use super::{column_value, user_identity, NOWRAP};
use crate::context::{AdminView, RenderContext};
use crate::error::{RenderError, Result};

const MERGED_ICON: &str = r#"<svg style="fill: #6f42c1;" width="12" height="16" aria-hidden="true"><path d="M10 7c-.73 0-1.38.41-1.73 1.02V8C7.22 7.98 6 7.64 5.14 6.98c-.75-.58-1.5-1.61-1.89-2.44A1.993 1.993 0 0 0 2 .99C.89.99 0 1.89 0 3a2 2 0 0 0 1 1.72v6.56c-.59.35-1 .99-1 1.72 0 1.11.89 2 2 2a1.993 1.993 0 0 0 1-3.72V7.67c.67.7 1.44 1.27 2.3 1.69.86.42 2.03.63 2.97.64v-.02c.36.61 1 1.02 1.73 1.02 1.11 0 2-.89 2-2 0-1.11-.89-2-2-2zm-6.8 6c0 .66-.55 1.2-1.2 1.2-.65 0-1.2-.55-1.2-1.2 0-.65.55-1.2 1.2-1.2.65 0 1.2.55 1.2 1.2zM2 4.2C1.34 4.2.8 3.65.8 3c0-.65.55-1.2 1.2-1.2.65 0 1.2.55 1.2 1.2 0 .65-.55 1.2-1.2 1.2zm8 6c-.66 0-1.2-.55-1.2-1.2 0-.65.55-1.2 1.2-1.2.65 0 1.2.55 1.2 1.2 0 .65-.55 1.2-1.2 1.2z"></path></svg>"#;

const CLOSED_ICON: &str = r#"<svg style="fill: #cb2431;" width="12" height="16" aria-hidden="true"><path fill-rule="evenodd" d="M11 11.28V5c-.03-.78-.34-1.47-.94-2.06C9.46 2.35 8.78 2.03 8 2H7V0L4 3l3 3V4h1c.27.02.48.11.69.31.21.2.3.42.31.69v6.28A1.993 1.993 0 0 0 10 15a1.993 1.993 0 0 0 1-3.72zm-1 2.92c-.66 0-1.2-.55-1.2-1.2 0-.65.55-1.2 1.2-1.2.65 0 1.2.55 1.2 1.2 0 .65-.55 1.2-1.2 1.2zM4 3c0-1.11-.89-2-2-2a1.993 1.993 0 0 0-1 3.72v6.56A1.993 1.993 0 0 0 2 15a1.993 1.993 0 0 0 1-3.72V4.72c.59-.34 1-.98 1-1.72zm-.8 10c0 .66-.55 1.2-1.2 1.2-.65 0-1.2-.55-1.2-1.2 0-.65.55-1.2 1.2-1.2.65 0 1.2.55 1.2 1.2zM2 4.2C1.34 4.2.8 3.65.8 3c0-.65.55-1.2 1.2-1.2.65 0 1.2.55 1.2 1.2 0 .65-.55 1.2-1.2 1.2z"></path></svg>"#;

/// Rows that link out to a pull request page
pub trait LinksToPullRequest {
    fn linked_pull_request(&self) -> &PullRequest;
}

impl LinksToPullRequest for PullRequest {
    fn linked_pull_request(&self) -> &PullRequest {
        self
    }
}

impl LinksToPullRequest for Bounty {
    fn linked_pull_request(&self) -> &PullRequest {
        &self.pull_request
    }
}

/// Rows with an optional author
pub trait Authored {
    fn author(&self) -> Option<&User>;
}

impl Authored for PullRequest {
    fn author(&self) -> Option<&User> {
        Some(&self.author)
    }
}

impl Authored for Comment {
    fn author(&self) -> Option<&User> {
        Some(&self.author)
    }
}

/// Pull request field linked to GitHub, with a merged/closed state icon.
/// On bounty rows `pull_request.number` reads `number` of the linked PR.
pub fn pr_link<M: LinksToPullRequest>(
    _view: &dyn AdminView,
    _ctx: &RenderContext<'_>,
    model: &M,
    name: &str,
) -> Result<Markup> {
    let pull_request = model.linked_pull_request();
    let field = name.rsplit('.').next().unwrap_or(name);
    let value = column_value("pr_link", pull_request, field)?;
    let link = format!(
        r#"<a target=blank href="{}">{}</a>"#,
        escape(&pull_request.html_url),
        escape(&value.to_string())
    );

    let icon = if pull_request.merged_at.is_some() {
        MERGED_ICON
    } else if pull_request.closed_at.is_some() {
        CLOSED_ICON
    } else {
        return Ok(Markup::raw(link));
    };
    Ok(Markup::raw(format!(
        r#"<div style="{}" >{} {}</div>"#,
        NOWRAP, link, icon
    )))
}

/// Author avatar and profile link
pub fn author_link<M: Authored>(
    _view: &dyn AdminView,
    _ctx: &RenderContext<'_>,
    model: &M,
    _name: &str,
) -> Result<Markup> {
    Ok(model.author().map(user_identity).unwrap_or_default())
}

/// Payment party stored as a user id, resolved through the site's user index
pub fn user_lookup<M: Model>(
    view: &dyn AdminView,
    _ctx: &RenderContext<'_>,
    model: &M,
    name: &str,
) -> Result<Markup> {
    match column_value("user_lookup", model, name)? {
        Value::Text(id) => match view.user(id) {
            Some(user) => Ok(user_identity(user)),
            None => {
                tracing::debug!("{}.{} references unknown user {}", M::ENTITY, name, id);
                Ok(Markup::empty())
            }
        },
        Value::Null => Ok(Markup::empty()),
        other => Err(RenderError::contract(
            "user_lookup",
            format!("{} is not a user id: {:?}", name, other),
        )),
    }
}
