use crate::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

async fn health<S: Store + 'static>(db: web::Data<S>) -> impl Responder {
    match db.ping().await {
        Ok(()) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("store unavailable"),
    }
}

/// Malformed JSON bodies get the same `{"message": ...}` shape as every
/// other failure.
fn json() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|e, _| Error::validation(e.to_string()).into())
}

/// Mounts every route against store `S`. Shared state (`web::Data<S>`
/// and `web::Data<Crypto>`) is registered by the caller.
#[rustfmt::skip]
pub fn routes<S: Store + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json())
        .route("/health", web::get().to(health::<S>))
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(register::<S>))
                .route("/login",    web::post().to(login::<S>))
                .route("/profile",  web::get().to(profile::<S>))
                .route("/profile",  web::put().to(update_profile::<S>)),
        )
        .service(
            web::scope("/tasks")
                .route("",      web::get().to(list_tasks::<S>))
                .route("",      web::post().to(create_task::<S>))
                .route("/{id}", web::put().to(update_task::<S>))
                .route("/{id}", web::delete().to(delete_task::<S>)),
        );
}

pub struct Server;

impl Server {
    pub async fn run<S>(config: &Config, store: S) -> Result<(), std::io::Error>
    where
        S: Store + Send + Sync + 'static,
    {
        let store = web::Data::new(store);
        let crypto = web::Data::new(config.crypto());
        log::info!("starting server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(store.clone())
                .app_data(crypto.clone())
                .configure(routes::<S>)
        })
        .workers(config.workers)
        .bind(&config.bind)?
        .run()
        .await
    }
}
