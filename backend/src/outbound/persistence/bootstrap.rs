//! Idempotent schema bootstrap.
//!
//! Run once at startup; `CREATE TABLE IF NOT EXISTS` makes repeated starts
//! harmless. The DDL must stay in lockstep with `schema.rs`.

use diesel_async::RunQueryDsl;
use tracing::info;

use crate::domain::ports::AtendimentoRepositoryError;

use super::error_map::{map_diesel_error, map_pool_error};
use super::pool::DbPool;

const CREATE_ATENDIMENTOS: &str = "\
CREATE TABLE IF NOT EXISTS atendimentos (
    id SERIAL PRIMARY KEY,
    nome VARCHAR(255) NOT NULL,
    profissional VARCHAR(255) NOT NULL,
    data DATE NOT NULL,
    tipo VARCHAR(32) NOT NULL
        CHECK (tipo IN ('Psicológico', 'Pedagógico', 'Assistência Social')),
    observacoes TEXT NOT NULL DEFAULT ''
)";

/// Create the atendimentos table when absent.
///
/// # Errors
///
/// Returns [`AtendimentoRepositoryError`] when the connection cannot be
/// obtained or the DDL fails.
pub async fn initialize_schema(pool: &DbPool) -> Result<(), AtendimentoRepositoryError> {
    let mut conn = pool.get().await.map_err(map_pool_error)?;

    diesel::sql_query(CREATE_ATENDIMENTOS)
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

    info!("atendimentos table ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_constrains_tipo_to_the_admissible_labels() {
        for label in ["Psicológico", "Pedagógico", "Assistência Social"] {
            assert!(CREATE_ATENDIMENTOS.contains(label));
        }
        assert!(CREATE_ATENDIMENTOS.contains("IF NOT EXISTS"));
    }
}
