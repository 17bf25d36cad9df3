//! Diesel table definition for the PostgreSQL schema.
//!
//! Must match the bootstrap DDL in `bootstrap.rs` exactly; Diesel uses it
//! for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Psychosocial-care visit records.
    atendimentos (id) {
        /// Primary key, generated by the database.
        id -> Int4,
        /// Patient name.
        nome -> Varchar,
        /// Attending professional.
        profissional -> Varchar,
        /// Visit date.
        data -> Date,
        /// Visit category label, CHECK-constrained to the three admissible values.
        tipo -> Varchar,
        /// Free-form notes, empty when none were given.
        observacoes -> Text,
    }
}
