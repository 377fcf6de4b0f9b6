//! URL building for admin endpoints and list queries

use std::collections::BTreeMap;

use crate::context::QueryModifier;
use crate::error::{RenderError, Result};

pub const DEFAULT_BASE_PATH: &str = "/admin";

/// Named admin endpoints mapped to paths under a common base path
#[derive(Debug, Clone)]
pub struct RouteTable {
    base_path: String,
    routes: BTreeMap<String, String>,
}

impl RouteTable {
    /// Route table with every endpoint the dashboard's views link to
    pub fn new(base_path: &str) -> Self {
        let mut table = Self {
            base_path: base_path.trim_end_matches('/').to_string(),
            routes: BTreeMap::new(),
        };
        table.register("admin.index_view", "/");
        table.register("admin.details_view", "/details/");
        table.register("bounties-payable.index_view", "/bounties-payable/");
        table.register("bounties-payable.create_view", "/bounties-payable/new/");
        table.register("bounties-payable.details_view", "/bounties-payable/details/");
        table.register("invoices.index_view", "/invoices/");
        table.register("invoices.details_view", "/invoices/details/");
        table.register("invoices.generate_invoice", "/invoices/generate_invoice/");
        table
    }

    pub fn register(&mut self, endpoint: &str, path: &str) {
        self.routes.insert(endpoint.to_string(), path.to_string());
    }

    /// Resolve an endpoint. Parameters are appended in the order given.
    pub fn url_for(&self, endpoint: &str, params: &[(&str, String)]) -> Result<String> {
        let path = self
            .routes
            .get(endpoint)
            .ok_or_else(|| RenderError::UnknownRoute(endpoint.to_string()))?;
        let mut url = format!("{}{}", self.base_path, path);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&encode_query(params.iter().map(|(k, v)| (*k, v.as_str()))));
        }
        Ok(url)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}

/// Query state of the list page currently being rendered
#[derive(Debug, Clone)]
pub struct ListQuery {
    path: String,
    args: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, key: &str, value: &str) -> Self {
        self.args.retain(|(k, _)| k != key);
        self.args.push((key.to_string(), value.to_string()));
        self
    }

    pub fn url(&self) -> String {
        if self.args.is_empty() {
            return self.path.clone();
        }
        format!(
            "{}?{}",
            self.path,
            encode_query(self.args.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        )
    }
}

impl QueryModifier for ListQuery {
    fn with_filter(&self, column: &str, operation: &str, value: &str) -> String {
        let key = format!("flt_{}_{}", column, operation);
        let mut modified = self.clone();
        modified.args.retain(|(k, _)| k != "page");
        modified.with_arg(&key, value).url()
    }
}

fn encode_query<'a>(params: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    params
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_appends_params_in_order() {
        let routes = RouteTable::default();
        let url = routes
            .url_for(
                "invoices.generate_invoice",
                &[("bounty_id", "B1".to_string()), ("recipient_user_id", "U 2".to_string())],
            )
            .unwrap();
        assert_eq!(
            url,
            "/admin/invoices/generate_invoice/?bounty_id=B1&recipient_user_id=U%202"
        );
    }

    #[test]
    fn base_path_trailing_slash_is_ignored() {
        let routes = RouteTable::new("/dashboard/");
        assert_eq!(routes.url_for("admin.index_view", &[]).unwrap(), "/dashboard/");
    }

    #[test]
    fn unknown_endpoint_is_an_error() {
        let err = RouteTable::default().url_for("nope.index_view", &[]).unwrap_err();
        assert!(matches!(err, RenderError::UnknownRoute(e) if e == "nope.index_view"));
    }

    #[test]
    fn with_filter_replaces_filter_and_resets_page() {
        let query = ListQuery::new("/admin/")
            .with_arg("search", "mempool")
            .with_arg("page", "3")
            .with_arg("flt_labels_in_list", "GUI");
        assert_eq!(
            query.with_filter("labels", "in_list", "Needs rebase"),
            "/admin/?search=mempool&flt_labels_in_list=Needs%20rebase"
        );
    }
}
