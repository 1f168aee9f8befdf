use super::{
    post_dtos::{CreatePostDTO, PostDTO},
    post_repositories::PostRepository,
};
use crate::{
    modules::not_found::not_found_controllers::endpoint_not_found,
    shared::{
        exceptions::exception::Exception,
        structs::{
            error_struct::{ErrorStruct, ValidationErrorStruct},
            field_problem::FieldProblem,
        },
    },
};
use actix_web::{delete, error, guard, put, web, HttpResponse, Responder};
use serde_json::Value;

pub const LIKE_UPDATED: &str = "Like actualizado";

pub fn post_controllers_module() -> actix_web::Scope {
    web::scope("/posts")
        .app_data(json_config())
        .service(
            // `/posts` and `/posts/` are the same collection; HEAD is answered by the listing.
            web::resource(vec!["", "/"])
                .route(
                    web::route()
                        .guard(guard::Any(guard::Get()).or(guard::Head()))
                        .to(list_posts),
                )
                .route(web::post().to(insert_post))
                .default_service(web::to(endpoint_not_found)),
        )
        .service(like_post)
        .service(delete_post)
        .default_service(web::to(endpoint_not_found))
}

/// Bodies that are not JSON at all are answered like any other invalid candidate.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = Exception::bad_request(vec![FieldProblem::invalid_json(err.to_string())]);
        error::InternalError::from_response(err, response).into()
    })
}

#[utoipa::path(
    get,
    tag = "posts",
    path = "/posts",
    responses((
        status = 200, description = "Listado de posts ordenado por id (OK)", body = [PostDTO],
        content_type = "application/json", example = json ! ([{
            "id": 1,
            "titulo": "Atardecer",
            "img": "https://images.example/atardecer.jpg",
            "descripcion": "Un atardecer en la costa",
            "likes": 3
        }])
    ), (
        status = 500, description = "Error de almacenamiento (Internal Server Error)", body = ErrorStruct,
        content_type = "application/json", example = json ! ({
            "status": false,
            "message": "Ha ocurrido un error, codigo: 28P01"
        })
    ))
)]
async fn list_posts(repository: web::Data<dyn PostRepository>) -> impl Responder {
    match repository.list_all().await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(e) => {
            log::error!("GET /posts: {e}");
            Exception::internal_server_error(&e)
        }
    }
}

#[utoipa::path(
    post,
    tag = "posts",
    path = "/posts",
    request_body = CreatePostDTO,
    responses((
        status = 201, description = "Post creado (Created)", body = PostDTO,
        content_type = "application/json", example = json ! ({
            "id": 7,
            "titulo": "Test",
            "img": "http://x",
            "descripcion": "d",
            "likes": 0
        })
    ), (
        status = 400, description = "Campos faltantes, vacíos o con tipo inválido (Bad Request)",
        body = ValidationErrorStruct, content_type = "application/json", example = json ! ({
            "status": false,
            "errors": [{
                "field": "titulo",
                "code": "blank",
                "message": "El campo titulo no puede estar vacío."
            }]
        })
    ), (
        status = 500, description = "Error de almacenamiento (Internal Server Error)", body = ErrorStruct,
        content_type = "application/json", example = json ! ({
            "status": false,
            "message": "Ha ocurrido un error, codigo: 23502"
        })
    ))
)]
async fn insert_post(
    body: web::Json<Value>,
    repository: web::Data<dyn PostRepository>,
) -> impl Responder {
    let post = match CreatePostDTO::from_candidate(&body) {
        Ok(post) => post,
        Err(errors) => {
            log::debug!("POST /posts rejected: {} invalid field(s)", errors.len());
            return Exception::bad_request(errors);
        }
    };
    match repository.insert(&post).await {
        Ok(created) => HttpResponse::Created().json(created),
        Err(e) => {
            log::error!("POST /posts: {e}");
            Exception::internal_server_error(&e)
        }
    }
}

#[utoipa::path(
    tag = "posts",
    path = "/posts/like/{id}",
    responses((
        status = 200, description = "Like registrado, exista o no el post (OK)", body = String,
        content_type = "application/json", example = json ! ("Like actualizado")
    ), (
        status = 500, description = "Error de almacenamiento o id inválido (Internal Server Error)",
        body = ErrorStruct, content_type = "application/json", example = json ! ({
            "status": false,
            "message": "Ha ocurrido un error, codigo: 22P02"
        })
    ))
)]
#[put("/like/{id}")]
async fn like_post(
    id: web::Path<String>,
    repository: web::Data<dyn PostRepository>,
) -> impl Responder {
    // The updated post is not echoed back; unknown ids are acknowledged the same way.
    match repository.increment_like(&id).await {
        Ok(_) => HttpResponse::Ok().json(LIKE_UPDATED),
        Err(e) => {
            log::error!("PUT /posts/like/{id}: {e}");
            Exception::internal_server_error(&e)
        }
    }
}

#[utoipa::path(
    tag = "posts",
    path = "/posts/{id}",
    responses((
        status = 200, description = "Post eliminado; null si el id no existía (OK)", body = PostDTO,
        content_type = "application/json", example = json ! ({
            "id": 7,
            "titulo": "Test",
            "img": "http://x",
            "descripcion": "d",
            "likes": 2
        })
    ), (
        status = 500, description = "Error de almacenamiento o id inválido (Internal Server Error)",
        body = ErrorStruct, content_type = "application/json", example = json ! ({
            "status": false,
            "message": "Ha ocurrido un error, codigo: 22P02"
        })
    ))
)]
#[delete("/{id}")]
async fn delete_post(
    id: web::Path<String>,
    repository: web::Data<dyn PostRepository>,
) -> impl Responder {
    match repository.delete_by_id(&id).await {
        Ok(removed) => HttpResponse::Ok().json(removed),
        Err(e) => {
            log::error!("DELETE /posts/{id}: {e}");
            Exception::internal_server_error(&e)
        }
    }
}
