use crate::cli::{OutputFormat, ViewName};
use crate::output::{output_result, Displayable};
use acks_admin::{
    views, AdminSite, AdminView, Formattable, ListQuery, ListRequest, ModelView, RenderContext,
    RenderMode,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What to render from a view
pub struct RenderOptions<'a> {
    pub details: Option<&'a str>,
    pub search: Option<&'a str>,
    pub page: usize,
    pub page_size: usize,
    pub now: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct RenderedView {
    pub view: &'static str,
    pub mode: &'static str,
    /// Rows matching the search, before pagination
    pub total: usize,
    pub page: usize,
    pub html: String,
}

impl Displayable for RenderedView {
    fn display(&self) -> String {
        self.html.clone()
    }
}

pub fn handle_render(
    site: &AdminSite<'_>,
    view: ViewName,
    options: &RenderOptions<'_>,
    format: OutputFormat,
) -> Result<()> {
    let store = site.store();
    let rendered = match view {
        ViewName::PullRequests => {
            let rows: Vec<_> = store.pull_requests().collect();
            render(site, &views::pull_requests()?, &rows, options)?
        }
        ViewName::Bounties => {
            let rows: Vec<_> = store.bounties().iter().collect();
            render(site, &views::bounties_payable()?, &rows, options)?
        }
        ViewName::Invoices => {
            let rows: Vec<_> = store.invoices().iter().collect();
            render(site, &views::invoices()?, &rows, options)?
        }
    };

    output_result(&rendered, format);
    Ok(())
}

fn render<M: Formattable>(
    site: &AdminSite<'_>,
    view: &ModelView<M>,
    rows: &[&M],
    options: &RenderOptions<'_>,
) -> Result<RenderedView> {
    let name = view.config().name;
    let mut query = ListQuery::new(site.url_for(&view.index_endpoint(), &[])?);
    if let Some(term) = options.search {
        query = query.with_arg("search", term);
    }
    if options.page > 0 {
        query = query.with_arg("page", &options.page.to_string());
    }

    let mode = if options.details.is_some() {
        RenderMode::Details
    } else {
        RenderMode::List
    };
    let mut ctx = RenderContext::new(mode, &query);
    if let Some(now) = options.now {
        ctx = ctx.at(now);
    }

    let rendered = match options.details {
        Some(key) => {
            let row = view.find(rows.iter().copied(), key)?;
            tracing::debug!("rendering {} details for {}", name, key);
            let html = view
                .render_details(site, &ctx, row)
                .with_context(|| format!("Failed to render {} {}", M::ENTITY, key))?;
            RenderedView {
                view: name,
                mode: "details",
                total: 1,
                page: 0,
                html: html.into_string(),
            }
        }
        None => {
            let request = ListRequest {
                search: options.search,
                page: options.page,
                page_size: options.page_size,
            };
            let (page, total) = view.select(rows.iter().copied(), &request);
            tracing::debug!(
                "rendering {} rows of {} in {} page {}",
                page.len(),
                total,
                name,
                options.page
            );
            let html = view
                .render_list(site, &ctx, &page)
                .with_context(|| format!("Failed to render {}", name))?;
            RenderedView {
                view: name,
                mode: "list",
                total,
                page: options.page,
                html: html.into_string(),
            }
        }
    };
    Ok(rendered)
}
