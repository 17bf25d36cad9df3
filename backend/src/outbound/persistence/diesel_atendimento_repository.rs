//! PostgreSQL-backed [`AtendimentoRepository`] implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AtendimentoRepository, AtendimentoRepositoryError};
use crate::domain::{Atendimento, NovoAtendimento, TipoAtendimento};

use super::error_map::{map_diesel_error, map_pool_error};
use super::models::{AtendimentoChangeset, AtendimentoRow, NewAtendimentoRow};
use super::pool::DbPool;
use super::schema::atendimentos;

/// Diesel-backed implementation of the atendimento repository port.
#[derive(Clone)]
pub struct DieselAtendimentoRepository {
    pool: DbPool,
}

impl DieselAtendimentoRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a database row into a domain record.
///
/// A stored `tipo` outside the admissible set means the table was mutated
/// behind the CHECK constraint; surface it as a query error rather than
/// panicking.
fn row_to_atendimento(row: AtendimentoRow) -> Result<Atendimento, AtendimentoRepositoryError> {
    let AtendimentoRow {
        id,
        nome,
        profissional,
        data,
        tipo,
        observacoes,
    } = row;

    let tipo = tipo
        .parse::<TipoAtendimento>()
        .map_err(|err| AtendimentoRepositoryError::query(err.to_string()))?;

    Ok(Atendimento {
        id,
        nome,
        profissional,
        data,
        tipo,
        observacoes,
    })
}

#[async_trait]
impl AtendimentoRepository for DieselAtendimentoRepository {
    async fn find_all(&self) -> Result<Vec<Atendimento>, AtendimentoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AtendimentoRow> = atendimentos::table
            .order((atendimentos::data.desc(), atendimentos::id.desc()))
            .select(AtendimentoRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_atendimento).collect()
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Atendimento>, AtendimentoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = atendimentos::table
            .find(id)
            .select(AtendimentoRow::as_select())
            .first::<AtendimentoRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_atendimento).transpose()
    }

    async fn create(
        &self,
        novo: NovoAtendimento,
    ) -> Result<Atendimento, AtendimentoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewAtendimentoRow {
            nome: &novo.nome,
            profissional: &novo.profissional,
            data: novo.data,
            tipo: novo.tipo.as_str(),
            observacoes: &novo.observacoes,
        };

        let row = diesel::insert_into(atendimentos::table)
            .values(&new_row)
            .returning(AtendimentoRow::as_returning())
            .get_result::<AtendimentoRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_atendimento(row)
    }

    async fn update(
        &self,
        id: i32,
        novo: NovoAtendimento,
    ) -> Result<Option<Atendimento>, AtendimentoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = AtendimentoChangeset {
            nome: &novo.nome,
            profissional: &novo.profissional,
            data: novo.data,
            tipo: novo.tipo.as_str(),
            observacoes: &novo.observacoes,
        };

        let row = diesel::update(atendimentos::table.find(id))
            .set(&changeset)
            .returning(AtendimentoRow::as_returning())
            .get_result::<AtendimentoRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_atendimento).transpose()
    }

    async fn delete(&self, id: i32) -> Result<Option<Atendimento>, AtendimentoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::delete(atendimentos::table.find(id))
            .returning(AtendimentoRow::as_returning())
            .get_result::<AtendimentoRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_atendimento).transpose()
    }
}
