//! Admin grid for one entity type
//!
//! A [`ViewConfig`] declares the columns, labels and formatter bindings of a
//! view. [`ModelView::new`] checks the declaration against the entity and
//! the formatter registry; the resulting view renders list pages and detail
//! pages by invoking the bound formatter for every cell.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::marker::PhantomData;

use acks_core::{escape, Markup, Model};
use serde::Serialize;

use crate::context::{AdminView, RenderContext};
use crate::error::{RenderError, Result};
use crate::formatters::Formatter;
use crate::registry::{Formattable, FormatterKind};

/// Declarative view wiring
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub name: &'static str,
    /// Endpoint prefix, e.g. `admin` for `admin.index_view`
    pub endpoint: &'static str,
    pub column_list: &'static [&'static str],
    pub column_searchable_list: &'static [&'static str],
    pub column_sortable_list: &'static [&'static str],
    pub column_filters: &'static [&'static str],
    pub column_formatters: &'static [(&'static str, FormatterKind)],
    pub column_labels: &'static [(&'static str, &'static str)],
    /// Column and whether the sort is descending
    pub column_default_sort: Option<(&'static str, bool)>,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_view_details: bool,
}

/// Which rows of a list to show
#[derive(Debug, Clone, Copy)]
pub struct ListRequest<'q> {
    pub search: Option<&'q str>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListRequest<'_> {
    fn default() -> Self {
        Self {
            search: None,
            page: 0,
            page_size: 50,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ColumnSummary {
    pub name: &'static str,
    pub label: String,
    pub formatter: Option<&'static str>,
}

/// View metadata for listings
#[derive(Debug, Serialize)]
pub struct ViewSummary {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub entity: &'static str,
    pub columns: Vec<ColumnSummary>,
    pub searchable: &'static [&'static str],
    pub sortable: &'static [&'static str],
    pub filters: &'static [&'static str],
    pub default_sort: Option<(&'static str, bool)>,
    pub actions: ViewActions,
}

/// Which admin pages a view offers besides its list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewActions {
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
    pub details: bool,
}

pub struct ModelView<M: Formattable> {
    config: ViewConfig,
    formatters: BTreeMap<&'static str, (FormatterKind, Formatter<M>)>,
    _entity: PhantomData<fn(&M)>,
}

impl<M: Formattable> ModelView<M> {
    /// Validate the configuration against `M` and resolve its formatters
    pub fn new(config: ViewConfig) -> Result<Self> {
        let declared = config
            .column_list
            .iter()
            .chain(config.column_searchable_list)
            .chain(config.column_sortable_list)
            .chain(config.column_filters)
            .chain(config.column_formatters.iter().map(|(column, _)| column))
            .chain(config.column_labels.iter().map(|(column, _)| column));
        for column in declared {
            if !M::COLUMNS.contains(column) {
                return Err(RenderError::UnknownColumn {
                    entity: M::ENTITY,
                    column: column.to_string(),
                });
            }
        }

        let mut formatters = BTreeMap::new();
        for &(column, kind) in config.column_formatters {
            if !kind.accepts_column(column) {
                return Err(RenderError::contract(
                    kind.name(),
                    format!("cannot format column '{}'", column),
                ));
            }
            let formatter = M::formatter(kind).ok_or_else(|| {
                RenderError::contract(kind.name(), format!("not available for {}", M::ENTITY))
            })?;
            formatters.insert(column, (kind, formatter));
        }

        Ok(Self {
            config,
            formatters,
            _entity: PhantomData,
        })
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn index_endpoint(&self) -> String {
        format!("{}.index_view", self.config.endpoint)
    }

    /// Column header: configured label, else the column name prettified
    pub fn label(&self, column: &str) -> String {
        self.config
            .column_labels
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| prettify(column))
    }

    pub fn summary(&self) -> ViewSummary {
        ViewSummary {
            name: self.config.name,
            endpoint: self.config.endpoint,
            entity: M::ENTITY,
            columns: self
                .config
                .column_list
                .iter()
                .map(|&name| ColumnSummary {
                    name,
                    label: self.label(name),
                    formatter: self.formatters.get(name).map(|(kind, _)| kind.name()),
                })
                .collect(),
            searchable: self.config.column_searchable_list,
            sortable: self.config.column_sortable_list,
            filters: self.config.column_filters,
            default_sort: self.config.column_default_sort,
            actions: ViewActions {
                create: self.config.can_create,
                edit: self.config.can_edit,
                delete: self.config.can_delete,
                details: self.config.can_view_details,
            },
        }
    }

    /// Render one cell with its bound formatter, or the escaped raw value
    pub fn cell(
        &self,
        view: &dyn AdminView,
        ctx: &RenderContext<'_>,
        row: &M,
        column: &str,
    ) -> Result<Markup> {
        if let Some((_, formatter)) = self.formatters.get(column) {
            return formatter(view, ctx, row, column);
        }
        let value = row.field(column).ok_or_else(|| RenderError::UnknownColumn {
            entity: M::ENTITY,
            column: column.to_string(),
        })?;
        Ok(Markup::text(&value.to_string()))
    }

    /// Search, sort and paginate rows. Returns the page and the match count.
    pub fn select<'r>(
        &self,
        rows: impl IntoIterator<Item = &'r M>,
        request: &ListRequest<'_>,
    ) -> (Vec<&'r M>, usize)
    where
        M: 'r,
    {
        let mut matched: Vec<&M> = rows
            .into_iter()
            .filter(|row| match request.search {
                Some(term) => self.matches_search(row, term),
                None => true,
            })
            .collect();

        if let Some((column, descending)) = self.config.column_default_sort {
            matched.sort_by(|a, b| {
                let ordering = match (a.field(column), b.field(column)) {
                    (Some(a), Some(b)) => a.sort_cmp(&b),
                    _ => Ordering::Equal,
                };
                if descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }

        let total = matched.len();
        let page = matched
            .into_iter()
            .skip(request.page.saturating_mul(request.page_size))
            .take(request.page_size)
            .collect();
        (page, total)
    }

    fn matches_search(&self, row: &M, term: &str) -> bool {
        let term = term.to_lowercase();
        self.config.column_searchable_list.iter().any(|column| {
            row.field(column)
                .map(|value| value.to_string().to_lowercase().contains(&term))
                .unwrap_or(false)
        })
    }

    /// Row addressed by its primary key
    pub fn find<'r>(&self, rows: impl IntoIterator<Item = &'r M>, key: &str) -> Result<&'r M>
    where
        M: 'r,
    {
        rows.into_iter()
            .find(|row| row.key() == key)
            .ok_or_else(|| RenderError::RowNotFound {
                entity: M::ENTITY,
                key: key.to_string(),
            })
    }

    /// Grid of the given rows. Any formatter error aborts the whole render.
    pub fn render_list(
        &self,
        view: &dyn AdminView,
        ctx: &RenderContext<'_>,
        rows: &[&M],
    ) -> Result<Markup> {
        let mut html =
            Markup::raw(r#"<table class="table table-striped table-bordered model-list">"#);
        html.push_raw("<thead><tr>");
        for column in self.config.column_list {
            html.push_raw(&format!("<th>{}</th>", escape(&self.label(column))));
        }
        html.push_raw("</tr></thead><tbody>");
        for row in rows {
            html.push_raw("<tr>");
            for column in self.config.column_list {
                html.push_raw("<td>");
                html.push(self.cell(view, ctx, row, column)?);
                html.push_raw("</td>");
            }
            html.push_raw("</tr>");
        }
        html.push_raw("</tbody></table>");
        Ok(html)
    }

    /// Label/value table for a single row
    pub fn render_details(
        &self,
        view: &dyn AdminView,
        ctx: &RenderContext<'_>,
        row: &M,
    ) -> Result<Markup> {
        let mut html =
            Markup::raw(r#"<table class="table table-hover table-bordered searchable">"#);
        for column in self.config.column_list {
            html.push_raw(&format!("<tr><td><b>{}</b></td><td>", escape(&self.label(column))));
            html.push(self.cell(view, ctx, row, column)?);
            html.push_raw("</td></tr>");
        }
        html.push_raw("</table>");
        Ok(html)
    }
}

/// `created_at` -> `Created At`, `author.login` -> `Author Login`
fn prettify(column: &str) -> String {
    column
        .split(|c: char| c == '_' || c == '.')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
