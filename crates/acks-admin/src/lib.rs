pub mod context;
pub mod error;
pub mod formatters;
pub mod humanize;
pub mod registry;
pub mod routes;
pub mod site;
pub mod view;
pub mod views;

#[cfg(test)]
mod test_support;

pub use context::{AdminView, QueryModifier, RenderContext, RenderMode};
pub use error::{RenderError, Result};
pub use registry::{Formattable, FormatterKind};
pub use routes::{ListQuery, RouteTable};
pub use site::AdminSite;
pub use view::{ListRequest, ModelView, ViewActions, ViewConfig, ViewSummary};

// Re-export acks-core types for convenience
pub use acks_core::{Markup, Model, Store};
