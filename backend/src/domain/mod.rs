//! Domain entities and ports for the atendimentos service.
//!
//! Purpose: define the strongly typed visit record used by the API and
//! persistence layers, the validation rules it must satisfy, and the
//! transport-agnostic error taxonomy inbound adapters map onto HTTP.
//!
//! Public surface:
//! - `Atendimento` / `NovoAtendimento` — persisted and to-be-persisted records.
//! - `AtendimentoDraft` — raw client input before sanitisation/validation.
//! - `TipoAtendimento` — the closed set of visit categories.
//! - `Error` / `ErrorCode` — error payload rendered by the HTTP adapter.
//! - `ports` — repository trait the HTTP layer depends on.

pub mod atendimento;
pub mod error;
pub mod ports;

pub use self::atendimento::{
    Atendimento, AtendimentoDraft, NovoAtendimento, TipoAtendimento, TipoParseError,
    ValidationReport,
};
pub use self::error::{Error, ErrorCode};

/// Convenient result alias for fallible domain-facing operations.
pub type ApiResult<T> = Result<T, Error>;
