use crate::shared::structs::field_problem::FieldProblem;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio_postgres::Row;
use utoipa::ToSchema;
use validator::Validate;

/// A stored post, as it leaves the API.
#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PostDTO {
    pub id: i32,
    pub titulo: String,
    pub img: String,
    pub descripcion: String,
    pub likes: i32,
}

impl TryFrom<&Row> for PostDTO {
    type Error = tokio_postgres::Error;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(PostDTO {
            id: row.try_get("id")?,
            titulo: row.try_get("titulo")?,
            img: row.try_get("img")?,
            descripcion: row.try_get("descripcion")?,
            likes: row.try_get("likes")?,
        })
    }
}

/// Fields checked on creation, in the order problems are reported.
pub const CREATE_POST_FIELDS: [&str; 3] = ["titulo", "url", "descripcion"];

static RE_NOT_BLANK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S").unwrap());

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug, PartialEq, Eq)]
pub struct CreatePostDTO {
    #[validate(regex(
        path = *RE_NOT_BLANK,
        code = "blank",
        message = "El campo titulo no puede estar vacío."
    ))]
    #[serde(default)]
    pub titulo: String,

    #[validate(regex(
        path = *RE_NOT_BLANK,
        code = "blank",
        message = "El campo url no puede estar vacío."
    ))]
    #[serde(default)]
    pub url: String,

    #[validate(regex(
        path = *RE_NOT_BLANK,
        code = "blank",
        message = "El campo descripcion no puede estar vacío."
    ))]
    #[serde(default)]
    pub descripcion: String,
}

impl CreatePostDTO {
    /// Build a creation DTO out of an arbitrary JSON body.
    ///
    /// Each field yields at most one problem: `required` when absent or null, `type` when it is
    /// not a string, `blank` when nothing is left after trimming. Problems come back in
    /// `CREATE_POST_FIELDS` order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use like_me_api::modules::post::post_dtos::CreatePostDTO;
    /// use serde_json::json;
    ///
    /// let dto = CreatePostDTO::from_candidate(&json!({
    ///     "titulo": "Test",
    ///     "url": "http://x",
    ///     "descripcion": "d"
    /// }))
    /// .unwrap();
    /// assert_eq!(dto.url, "http://x");
    /// ```
    pub fn from_candidate(candidate: &Value) -> Result<Self, Vec<FieldProblem>> {
        let typed = CREATE_POST_FIELDS.map(|field| text_field(candidate, field));

        let [titulo, url, descripcion] = typed.clone().map(Result::unwrap_or_default);
        let dto = CreatePostDTO {
            titulo,
            url,
            descripcion,
        };
        let content_errors = dto.validate().err();

        let mut problems = Vec::new();
        for (field, typed) in CREATE_POST_FIELDS.into_iter().zip(typed) {
            match typed {
                Err(problem) => problems.push(problem),
                Ok(_) => {
                    if let Some(problem) = content_errors
                        .as_ref()
                        .and_then(|errors| FieldProblem::from_validation(field, errors))
                    {
                        problems.push(problem);
                    }
                }
            }
        }

        if problems.is_empty() {
            Ok(dto)
        } else {
            Err(problems)
        }
    }
}

/// Problems found in a post candidate; empty when it can be inserted.
pub fn validate_fields(candidate: &Value) -> Vec<FieldProblem> {
    CreatePostDTO::from_candidate(candidate)
        .err()
        .unwrap_or_default()
}

fn text_field(candidate: &Value, field: &str) -> Result<String, FieldProblem> {
    match candidate.get(field) {
        None | Some(Value::Null) => Err(FieldProblem::required(field)),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(FieldProblem::wrong_type(field)),
    }
}
