//! Store-level error type.

/// Failure of a repository call.
///
/// `NotFound` is only produced by deletes that touched no row; lookups report
/// an absent key as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("{op}: {source}")]
    Query {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Attach the failing operation's name to a raw sqlx error.
pub(crate) trait QueryContext<T> {
    fn context(self, op: &'static str) -> StoreResult<T>;
}

impl<T> QueryContext<T> for Result<T, sqlx::Error> {
    fn context(self, op: &'static str) -> StoreResult<T> {
        self.map_err(|source| StoreError::Query { op, source })
    }
}

/// Map a zero-row delete onto `NotFound`.
pub(crate) fn expect_deleted(rows: u64, entity: &'static str, key: &str) -> StoreResult<()> {
    if rows == 0 {
        Err(StoreError::NotFound {
            entity,
            key: key.to_owned(),
        })
    } else {
        Ok(())
    }
}
