pub mod bounty;
pub mod pull_request;
pub mod user;

pub use bounty::*;
pub use pull_request::*;
pub use user::*;
