//! Payment and pledge action buttons

use std::collections::HashSet;

use acks_core::{escape, Bounty, Markup, PullRequest, User, Value};

use super::column_value;
use super::currency::currency_string;
use crate::context::{AdminView, RenderContext};
use crate::error::Result;

pub const GENERATE_INVOICE: &str = "invoices.generate_invoice";
pub const CREATE_BOUNTY: &str = "bounties-payable.create_view";
pub const PULL_REQUESTS_INDEX: &str = "admin.index_view";

fn invoice_url(view: &dyn AdminView, bounty: &Bounty, recipient: &User) -> Result<String> {
    view.url_for(
        GENERATE_INVOICE,
        &[
            ("bounty_id", bounty.id.clone()),
            ("recipient_user_id", recipient.id.clone()),
        ],
    )
}

/// Reviewers who can receive a payout, in review order, each listed once
fn payable_reviewers(pull_request: &PullRequest) -> Vec<&User> {
    let mut seen = HashSet::new();
    pull_request
        .review_decisions
        .iter()
        .map(|comment| &comment.author)
        .filter(|author| author.btcpay_client)
        .filter(|author| seen.insert(author.id.as_str()))
        .collect()
}

/// "Pay" button for the author, with a dropdown for eligible reviewers
pub fn payable(
    view: &dyn AdminView,
    _ctx: &RenderContext<'_>,
    bounty: &Bounty,
    _name: &str,
) -> Result<Markup> {
    let author = &bounty.pull_request.author;
    let author_style = if author.btcpay_client {
        "success"
    } else {
        "default"
    };
    let author_button = format!(
        r#"<a role="button" class="btn btn-{}" href="{}">Pay {}</a>"#,
        author_style,
        escape(&invoice_url(view, bounty, author)?),
        escape(author.best_name())
    );

    let reviewers = payable_reviewers(&bounty.pull_request);
    if reviewers.is_empty() {
        return Ok(Markup::raw(author_button));
    }

    let mut html = Markup::raw(r#"<div class="btn-group">"#);
    html.push_raw(&author_button);
    html.push_raw(concat!(
        r#"<button type="button" class="btn btn-success dropdown-toggle" data-toggle="dropdown" aria-haspopup="true" aria-expanded="false">"#,
        r#"Reviewers <span class="caret"></span><span class="sr-only">Toggle Dropdown</span>"#,
        "</button>",
        r#"<ul class="dropdown-menu">"#
    ));
    for reviewer in reviewers {
        html.push_raw(&format!(
            r#"<li><a href="{}">Pay {}</a></li>"#,
            escape(&invoice_url(view, bounty, reviewer)?),
            escape(reviewer.best_name())
        ));
    }
    html.push_raw("</ul></div>");
    Ok(html)
}

/// Pledged total followed by a "Pledge" button
pub fn pledge(
    view: &dyn AdminView,
    _ctx: &RenderContext<'_>,
    pull_request: &PullRequest,
    name: &str,
) -> Result<Markup> {
    let mut html = Markup::empty();
    if let Value::Int(amount) = column_value("pledge", pull_request, name)? {
        if amount != 0 {
            html.push_raw(&format!(
                r#"<div style="text-align: left;">{} sats</div>"#,
                currency_string(amount)
            ));
        }
    }

    let return_url = view.url_for(PULL_REQUESTS_INDEX, &[])?;
    let url = view.url_for(
        CREATE_BOUNTY,
        &[
            ("pull_request_number", pull_request.number.to_string()),
            ("url", return_url),
        ],
    )?;
    html.push_raw(&format!(
        r#"<a role="button" class="btn btn-warning" href="{}">Pledge ฿</a>"#,
        escape(&url)
    ));
    Ok(html)
}
