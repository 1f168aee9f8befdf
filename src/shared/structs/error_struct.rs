use super::field_problem::FieldProblem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Error Struct
///
/// Body of the 500 and 404 responses.
///
/// ## Fields
///
/// * `status` - Outcome flag. `false` on storage failures; the 404 body carries `true`.
/// * `message` - Explanation, including the opaque failure code on 500.
#[derive(ToSchema, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorStruct {
    pub status: bool,
    pub message: String,
}

/// # Validation Error Struct
///
/// Body of the 400 responses, one entry per rejected field.
#[derive(ToSchema, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ValidationErrorStruct {
    pub status: bool,
    pub errors: Vec<FieldProblem>,
}
