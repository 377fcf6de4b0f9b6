use acks_core::{Store, User, UserDirectory};

use crate::context::AdminView;
use crate::error::Result;
use crate::routes::RouteTable;

/// Admin site backed by a loaded store
pub struct AdminSite<'a> {
    store: &'a Store,
    routes: &'a RouteTable,
}

impl<'a> AdminSite<'a> {
    pub fn new(store: &'a Store, routes: &'a RouteTable) -> Self {
        Self { store, routes }
    }

    pub fn store(&self) -> &'a Store {
        self.store
    }
}

impl AdminView for AdminSite<'_> {
    fn url_for(&self, endpoint: &str, params: &[(&str, String)]) -> Result<String> {
        self.routes.url_for(endpoint, params)
    }

    fn user(&self, id: &str) -> Option<&User> {
        self.store.user(id)
    }
}
