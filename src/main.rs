use actix_web::{App, HttpServer, middleware, web};

use reqboard::auth::token::TokenKeys;
use reqboard::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "data/reqboard.db".to_string());
    if let Some(dir) = std::path::Path::new(&database_url).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let pool = db::init_pool(&database_url)
        .await
        .expect("Failed to open database");
    db::run_migrations(&pool).await.expect("Failed to run migrations");

    let admin_password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
    db::seed(&pool, &admin_password)
        .await
        .expect("Failed to seed database");

    let keys = web::Data::new(TokenKeys::from_env());

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(keys.clone())
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
