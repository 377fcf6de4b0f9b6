pub mod error;
pub mod fields;
pub mod markup;
pub mod models;
pub mod store;

pub use error::{CoreError, Result};
pub use fields::{Model, Value};
pub use markup::{escape, strip_tags, Markup};
pub use models::*;
pub use store::{Snapshot, Store, UserDirectory};
