//! Shared error mapping from driver failures to the repository port error.

use tracing::debug;

use crate::domain::ports::AtendimentoRepositoryError;

use super::pool::PoolError;

/// Map pool failures to the port's connection variant.
pub(crate) fn map_pool_error(error: PoolError) -> AtendimentoRepositoryError {
    let (PoolError::Checkout { message } | PoolError::Build { message }) = error;
    AtendimentoRepositoryError::connection(message)
}

/// Map Diesel failures to the port's variants, logging driver detail at
/// debug level so the client-facing message stays stable.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> AtendimentoRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            AtendimentoRepositoryError::connection("database connection error")
        }
        DieselError::NotFound => AtendimentoRepositoryError::query("record not found"),
        _ => AtendimentoRepositoryError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection() {
        let mapped = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(
            mapped,
            AtendimentoRepositoryError::Connection { .. }
        ));
        assert!(mapped.to_string().contains("connection refused"));
    }

    #[rstest]
    fn not_found_maps_to_query() {
        let mapped = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(mapped, AtendimentoRepositoryError::Query { .. }));
        assert!(mapped.to_string().contains("record not found"));
    }

    #[rstest]
    fn closed_connections_map_to_connection() {
        let mapped = map_diesel_error(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        ));

        assert!(matches!(
            mapped,
            AtendimentoRepositoryError::Connection { .. }
        ));
    }
}
