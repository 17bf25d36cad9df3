//! The atendimento aggregate: one psychosocial-care visit record.
//!
//! Client input arrives as an [`AtendimentoDraft`] of raw optional strings.
//! [`NovoAtendimento::from_draft`] sanitises, validates, and parses it into a
//! persistable record; [`Atendimento`] is the stored form carrying the
//! generated id.
//!
//! Validation messages are user-facing Portuguese strings because the browser
//! client renders them verbatim.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed set of visit categories.
///
/// The display form is the exact accented label; it is what travels on the
/// wire and what the storage CHECK constraint admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipoAtendimento {
    /// Psychological care visit.
    #[serde(rename = "Psicológico")]
    Psicologico,
    /// Pedagogical support visit.
    #[serde(rename = "Pedagógico")]
    Pedagogico,
    /// Social-assistance visit.
    #[serde(rename = "Assistência Social")]
    AssistenciaSocial,
}

impl TipoAtendimento {
    /// Every admissible category, in display order.
    pub const ALL: [Self; 3] = [
        Self::Psicologico,
        Self::Pedagogico,
        Self::AssistenciaSocial,
    ];

    /// The canonical label for this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Psicologico => "Psicológico",
            Self::Pedagogico => "Pedagógico",
            Self::AssistenciaSocial => "Assistência Social",
        }
    }
}

impl fmt::Display for TipoAtendimento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a label does not name one of the three categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("tipo de atendimento desconhecido: {0}")]
pub struct TipoParseError(String);

impl FromStr for TipoAtendimento {
    type Err = TipoParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tipo| tipo.as_str() == s)
            .ok_or_else(|| TipoParseError(s.to_owned()))
    }
}

/// Raw client-submitted fields, before sanitisation and validation.
///
/// Every field is optional at this stage; the validation rules decide which
/// absences are errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtendimentoDraft {
    /// Patient name.
    pub nome: Option<String>,
    /// Attending professional.
    pub profissional: Option<String>,
    /// Visit date as an ISO `YYYY-MM-DD` string.
    pub data: Option<String>,
    /// Visit category label.
    pub tipo: Option<String>,
    /// Free-form notes.
    pub observacoes: Option<String>,
}

impl AtendimentoDraft {
    /// Trim every string field, leaving presence untouched.
    ///
    /// Idempotent: sanitising an already sanitised draft is a no-op.
    #[must_use]
    pub fn sanitize(self) -> Self {
        let trim = |field: Option<String>| field.map(|value| value.trim().to_owned());
        Self {
            nome: trim(self.nome),
            profissional: trim(self.profissional),
            data: trim(self.data),
            tipo: trim(self.tipo),
            observacoes: trim(self.observacoes),
        }
    }

    /// Check the field rules without consuming the draft.
    ///
    /// Pure: emits one message per violated rule and never panics.
    pub fn validate(&self) -> ValidationReport {
        let (_, errors) = parse_fields(self);
        ValidationReport { errors }
    }
}

/// Outcome of validating a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    /// Whether every rule passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// One message per violated rule.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consume the report, yielding the messages.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// A validated record ready to be inserted or to replace an existing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovoAtendimento {
    /// Patient name, non-empty.
    pub nome: String,
    /// Attending professional, non-empty.
    pub profissional: String,
    /// Visit date.
    pub data: NaiveDate,
    /// Visit category.
    pub tipo: TipoAtendimento,
    /// Free-form notes, possibly empty.
    pub observacoes: String,
}

impl NovoAtendimento {
    /// Sanitise and validate a draft, producing a persistable record.
    ///
    /// # Errors
    ///
    /// Returns the full [`ValidationReport`] when any rule is violated, so
    /// callers can surface every problem at once.
    pub fn from_draft(draft: AtendimentoDraft) -> Result<Self, ValidationReport> {
        let draft = draft.sanitize();
        let (fields, errors) = parse_fields(&draft);
        match fields {
            Some(novo) if errors.is_empty() => Ok(novo),
            _ => Err(ValidationReport { errors }),
        }
    }
}

/// A persisted visit record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atendimento {
    /// Generated primary key.
    pub id: i32,
    /// Patient name.
    pub nome: String,
    /// Attending professional.
    pub profissional: String,
    /// Visit date.
    pub data: NaiveDate,
    /// Visit category.
    pub tipo: TipoAtendimento,
    /// Free-form notes.
    pub observacoes: String,
}

impl Atendimento {
    /// Rebuild a record from its stored parts.
    pub fn from_parts(id: i32, novo: NovoAtendimento) -> Self {
        let NovoAtendimento {
            nome,
            profissional,
            data,
            tipo,
            observacoes,
        } = novo;
        Self {
            id,
            nome,
            profissional,
            data,
            tipo,
            observacoes,
        }
    }
}

fn require_text(value: Option<&str>, message: &str, errors: &mut Vec<String>) -> Option<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Some(text.to_owned()),
        _ => {
            errors.push(message.to_owned());
            None
        }
    }
}

fn parse_data(value: Option<&str>, errors: &mut Vec<String>) -> Option<NaiveDate> {
    match value.map(str::trim) {
        None | Some("") => {
            errors.push("data é obrigatória".to_owned());
            None
        }
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                errors.push("data deve estar no formato AAAA-MM-DD".to_owned());
                None
            }
        },
    }
}

fn parse_tipo(value: Option<&str>, errors: &mut Vec<String>) -> Option<TipoAtendimento> {
    match value.map(str::trim) {
        None | Some("") => {
            errors.push("tipo é obrigatório".to_owned());
            None
        }
        Some(raw) => match raw.parse::<TipoAtendimento>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                errors.push(format!(
                    "tipo deve ser um de: {}",
                    TipoAtendimento::ALL.map(TipoAtendimento::as_str).join(", ")
                ));
                None
            }
        },
    }
}

/// Apply every field rule to a draft.
///
/// Field checks trim before judging presence, so the rules hold whether or
/// not the draft was sanitised first. Returns the parsed record when all
/// rules pass, alongside the collected violation messages (empty on
/// success).
fn parse_fields(draft: &AtendimentoDraft) -> (Option<NovoAtendimento>, Vec<String>) {
    let mut errors = Vec::new();

    let nome = require_text(draft.nome.as_deref(), "nome é obrigatório", &mut errors);
    let profissional = require_text(
        draft.profissional.as_deref(),
        "profissional é obrigatório",
        &mut errors,
    );
    let data = parse_data(draft.data.as_deref(), &mut errors);
    let tipo = parse_tipo(draft.tipo.as_deref(), &mut errors);
    let observacoes = draft.observacoes.clone().unwrap_or_default();

    let fields = match (nome, profissional, data, tipo) {
        (Some(nome), Some(profissional), Some(data), Some(tipo)) => Some(NovoAtendimento {
            nome,
            profissional,
            data,
            tipo,
            observacoes,
        }),
        _ => None,
    };

    (fields, errors)
}
