//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the repository port and remain testable without a database.

use std::sync::Arc;

use crate::domain::ports::{AtendimentoRepository, FixtureAtendimentoRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Persistence port for visit records.
    pub atendimentos: Arc<dyn AtendimentoRepository>,
}

impl HttpState {
    /// Create the handler state over the given repository.
    pub fn new(atendimentos: Arc<dyn AtendimentoRepository>) -> Self {
        Self { atendimentos }
    }

    /// State backed by the in-memory fixture repository, for tests.
    pub fn fixture() -> Self {
        Self::new(Arc::new(FixtureAtendimentoRepository::default()))
    }
}
