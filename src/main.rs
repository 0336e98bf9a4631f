use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;

use employees_backend::{configure, db};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Initialize the database pool; unreachable database is fatal here.
    let pool = db::create_pool().await;

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("Starting server at {}", bind_addr);

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
