use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// A value outside a formatter's closed domain reached it. The data model
    /// and the formatter disagree; this is never a recoverable data problem.
    #[error("{formatter} formatter mismatch: {detail}")]
    Contract {
        formatter: &'static str,
        detail: String,
    },

    #[error("Unknown column '{column}' for {entity}")]
    UnknownColumn {
        entity: &'static str,
        column: String,
    },

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("{entity} not found: {key}")]
    RowNotFound { entity: &'static str, key: String },
}

impl RenderError {
    pub(crate) fn contract(formatter: &'static str, detail: impl Into<String>) -> Self {
        RenderError::Contract {
            formatter,
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
