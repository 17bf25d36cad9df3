//! Domain ports for driven adapters.
//!
//! Ports describe how the domain expects to interact with storage. The trait
//! exposes strongly typed errors so adapters map their failures into
//! predictable variants instead of bubbling driver types upward.

use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

use super::{Atendimento, NovoAtendimento};

/// Failures surfaced by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtendimentoRepositoryError {
    /// The storage backend could not be reached or a connection failed.
    #[error("falha de conexão com o armazenamento: {message}")]
    Connection {
        /// Driver-level description of the failure.
        message: String,
    },
    /// A query failed or produced an unusable row.
    #[error("falha de consulta no armazenamento: {message}")]
    Query {
        /// Driver-level description of the failure.
        message: String,
    },
}

impl AtendimentoRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for visit records.
///
/// Absence is modelled as `Ok(None)`, never as an error: asking for a record
/// that does not exist is a valid outcome the HTTP layer turns into a 404.
#[async_trait]
pub trait AtendimentoRepository: Send + Sync {
    /// Every record, ordered by visit date descending then id descending so
    /// same-day records list newest insert first.
    async fn find_all(&self) -> Result<Vec<Atendimento>, AtendimentoRepositoryError>;

    /// A single record by id, `None` when no row matches.
    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Atendimento>, AtendimentoRepositoryError>;

    /// Insert a validated record and return the stored row with its
    /// generated id.
    async fn create(
        &self,
        novo: NovoAtendimento,
    ) -> Result<Atendimento, AtendimentoRepositoryError>;

    /// Replace the record with the given id in full. `None` when no row
    /// matched.
    async fn update(
        &self,
        id: i32,
        novo: NovoAtendimento,
    ) -> Result<Option<Atendimento>, AtendimentoRepositoryError>;

    /// Remove and return the record with the given id. `None` when no row
    /// matched.
    async fn delete(&self, id: i32) -> Result<Option<Atendimento>, AtendimentoRepositoryError>;
}

/// In-memory repository honouring the same ordering and absence semantics as
/// the database adapter. Used by handler and integration tests.
#[derive(Debug, Default)]
pub struct FixtureAtendimentoRepository {
    inner: Mutex<FixtureState>,
}

#[derive(Debug, Default)]
struct FixtureState {
    next_id: i32,
    rows: Vec<Atendimento>,
}

impl FixtureAtendimentoRepository {
    fn with_state<T>(&self, f: impl FnOnce(&mut FixtureState) -> T) -> T {
        let mut state = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut state)
    }
}

#[async_trait]
impl AtendimentoRepository for FixtureAtendimentoRepository {
    async fn find_all(&self) -> Result<Vec<Atendimento>, AtendimentoRepositoryError> {
        Ok(self.with_state(|state| {
            let mut rows = state.rows.clone();
            rows.sort_by(|a, b| b.data.cmp(&a.data).then(b.id.cmp(&a.id)));
            rows
        }))
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Atendimento>, AtendimentoRepositoryError> {
        Ok(self.with_state(|state| state.rows.iter().find(|row| row.id == id).cloned()))
    }

    async fn create(
        &self,
        novo: NovoAtendimento,
    ) -> Result<Atendimento, AtendimentoRepositoryError> {
        Ok(self.with_state(|state| {
            state.next_id += 1;
            let stored = Atendimento::from_parts(state.next_id, novo);
            state.rows.push(stored.clone());
            stored
        }))
    }

    async fn update(
        &self,
        id: i32,
        novo: NovoAtendimento,
    ) -> Result<Option<Atendimento>, AtendimentoRepositoryError> {
        Ok(self.with_state(|state| {
            state.rows.iter_mut().find(|row| row.id == id).map(|row| {
                *row = Atendimento::from_parts(id, novo);
                row.clone()
            })
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<Atendimento>, AtendimentoRepositoryError> {
        Ok(self.with_state(|state| {
            let position = state.rows.iter().position(|row| row.id == id)?;
            Some(state.rows.remove(position))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TipoAtendimento;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn novo(data: &str) -> NovoAtendimento {
        NovoAtendimento {
            nome: "Ana".to_owned(),
            profissional: "Dr. X".to_owned(),
            data: data.parse::<NaiveDate>().expect("iso date"),
            tipo: TipoAtendimento::Psicologico,
            observacoes: String::new(),
        }
    }

    #[actix_web::test]
    async fn create_assigns_sequential_ids() {
        let repo = FixtureAtendimentoRepository::default();

        let first = repo.create(novo("2024-01-01")).await.expect("create");
        let second = repo.create(novo("2024-01-02")).await.expect("create");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[actix_web::test]
    async fn find_all_orders_by_date_then_id_descending() {
        let repo = FixtureAtendimentoRepository::default();
        repo.create(novo("2024-01-01")).await.expect("create");
        repo.create(novo("2024-06-01")).await.expect("create");
        repo.create(novo("2024-06-01")).await.expect("create");

        let rows = repo.find_all().await.expect("find_all");

        let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[actix_web::test]
    async fn update_and_delete_report_absence_as_none() {
        let repo = FixtureAtendimentoRepository::default();

        assert_eq!(repo.update(99, novo("2024-01-01")).await, Ok(None));
        assert_eq!(repo.delete(99).await, Ok(None));
    }

    #[actix_web::test]
    async fn delete_returns_the_removed_record() {
        let repo = FixtureAtendimentoRepository::default();
        let stored = repo.create(novo("2024-01-01")).await.expect("create");

        let removed = repo.delete(stored.id).await.expect("delete");
        assert_eq!(removed, Some(stored));
        assert_eq!(repo.find_all().await.expect("find_all"), Vec::new());
    }
}
