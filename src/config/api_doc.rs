use crate::{
    modules::post::{
        post_controllers::{
            __path_delete_post, __path_insert_post, __path_like_post, __path_list_posts,
        },
        post_dtos::{CreatePostDTO, PostDTO},
    },
    shared::structs::{
        error_struct::{ErrorStruct, ValidationErrorStruct},
        field_problem::FieldProblem,
    },
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// # API Documentation
///
/// Swagger UI for the posts API, built with [Utoipa](https://crates.io/crates/utoipa) and
/// [Utoipa Swagger UI](https://crates.io/crates/utoipa-swagger-ui).
///
/// The UI is mounted under `/api-docs/` and the OpenAPI document is served at
/// `/api-docs/openapi.json`. Everything below `/api-docs/` belongs to Swagger UI: an unknown
/// file there is a bare 404 with an empty body, not the `Endpoint no encontrado` body. Routes
/// outside `/api-docs` still reach the not-found handler.
///
/// # Example
///
/// ```rust
/// use actix_web::App;
/// use like_me_api::config::api_doc::api_doc;
///
/// let app = App::new().service(api_doc());
/// ```
pub fn api_doc() -> SwaggerUi {
    #[derive(OpenApi)]
    #[openapi(
        paths(list_posts, insert_post, like_post, delete_post),
        components(
            schemas(
                PostDTO,
                CreatePostDTO,
                ErrorStruct,
                ValidationErrorStruct,
                FieldProblem
            )
        ),
        servers((
            url = "http://localhost:3000/",
            description = "Local Server",
        )),
        tags((
            name = "posts", description = "Controladores de la entidad post"
        )),
    )]
    pub struct ApiDoc;

    SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi())
}
