use actix_web::{http::KeepAlive, middleware::Logger, web, App, HttpServer};
use like_me_api::{
    config::{api_doc::api_doc, cors::cors, environment::Environment},
    infra::postgres::Postgres,
    modules::{
        not_found::not_found_controllers::endpoint_not_found,
        post::{
            post_controllers::post_controllers_module,
            post_repositories::{PostRepository, PostgresPostRepository},
        },
    },
};
use std::{net::Ipv4Addr, sync::Arc};

/// The main function that starts the server
///
/// It reads the environment, creates the Postgres connection pool and hands it to the post
/// repository, which every request shares.
///
/// # Internal Variables
///
/// - `environment`: Port, database and pool settings.
/// - `post_repository`: The repository injected into the post controllers.
///
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let environment = Environment::from_env()?;
    let postgres_pool = Postgres::pool(&environment)?;
    let post_repository: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(
        postgres_pool,
        environment.query_timeout,
    ));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(web::Data::from(post_repository.clone()))
            .service(post_controllers_module())
            .service(api_doc())
            .default_service(web::to(endpoint_not_found))
    })
    .keep_alive(KeepAlive::Os)
    .bind((Ipv4Addr::UNSPECIFIED, environment.http_port))?;

    log::info!("Servidor funcionando en puerto: {}", environment.http_port);
    server.run().await?;

    Ok(())
}
