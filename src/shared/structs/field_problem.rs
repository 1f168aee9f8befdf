use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// # Field Problem
///
/// One rejected field of a post candidate.
///
/// ## Fields
///
/// * `field` - Name of the offending field, as sent by the client (`titulo`, `url`, `descripcion`).
/// * `code` - `required`, `type` or `blank`.
/// * `message` - Human readable reason.
#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldProblem {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldProblem {
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            code: String::from("required"),
            message: format!("El campo {field} es obligatorio."),
        }
    }

    pub fn wrong_type(field: &str) -> Self {
        Self {
            field: field.to_string(),
            code: String::from("type"),
            message: format!("El campo {field} debe ser un texto."),
        }
    }

    pub fn invalid_json(message: String) -> Self {
        Self {
            field: String::from("body"),
            code: String::from("invalid_json"),
            message,
        }
    }

    /// First `validator` error reported for `field`, if any.
    pub fn from_validation(field: &str, errors: &ValidationErrors) -> Option<Self> {
        errors
            .field_errors()
            .into_iter()
            .filter(|(name, _)| *name == field)
            .flat_map(|(_, field_errors)| field_errors.iter())
            .next()
            .map(|error| Self {
                field: field.to_string(),
                code: error.code.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("El campo {field} no es válido.")),
            })
    }
}
