//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! reach the domain; they exist to satisfy Diesel's type requirements for
//! queries and mutations.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::atendimentos;

/// Row struct for reading from the atendimentos table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = atendimentos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AtendimentoRow {
    pub id: i32,
    pub nome: String,
    pub profissional: String,
    pub data: NaiveDate,
    pub tipo: String,
    pub observacoes: String,
}

/// Insertable struct for creating new records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = atendimentos)]
pub(crate) struct NewAtendimentoRow<'a> {
    pub nome: &'a str,
    pub profissional: &'a str,
    pub data: NaiveDate,
    pub tipo: &'a str,
    pub observacoes: &'a str,
}

/// Changeset for the full-record replace performed by update. Every column
/// is always written; there is no partial patch.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = atendimentos)]
pub(crate) struct AtendimentoChangeset<'a> {
    pub nome: &'a str,
    pub profissional: &'a str,
    pub data: NaiveDate,
    pub tipo: &'a str,
    pub observacoes: &'a str,
}
