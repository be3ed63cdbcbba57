use sea_orm::TransactionError;
use thiserror::Error;

/// Storage-level failures. "Not found" is not represented here: absent
/// rows are ordinary `Option::None` / `false` results at the call sites.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl From<TransactionError<ServiceError>> for ServiceError {
    fn from(e: TransactionError<ServiceError>) -> Self {
        match e {
            TransactionError::Connection(db) => ServiceError::Db(db.to_string()),
            TransactionError::Transaction(inner) => inner,
        }
    }
}
