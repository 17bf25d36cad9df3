//! PostgreSQL persistence adapter: connection pool, schema, and the
//! Diesel-backed repository.

mod bootstrap;
mod diesel_atendimento_repository;
mod error_map;
mod models;
mod pool;
mod schema;

pub use bootstrap::initialize_schema;
pub use diesel_atendimento_repository::DieselAtendimentoRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
