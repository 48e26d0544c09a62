pub mod auth_handlers;
pub mod board_handlers;
pub mod changelog_handlers;
pub mod comment_handlers;
pub mod request_handlers;

use actix_web::web;

/// Register the REST surface under /api.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/auth/google", web::post().to(auth_handlers::google))
            .route("/auth/signup", web::post().to(auth_handlers::signup))
            .route("/auth/login", web::post().to(auth_handlers::login))
            .route("/boards", web::get().to(board_handlers::list))
            .route("/boards", web::post().to(board_handlers::create))
            .route("/requests", web::get().to(request_handlers::list))
            .route("/requests", web::post().to(request_handlers::create))
            .route("/requests/{id}", web::patch().to(request_handlers::update))
            // Both spellings were in use by clients; same toggle either way
            .route("/requests/{id}/upvote", web::post().to(request_handlers::upvote))
            .route("/requests/{id}/upvotes", web::post().to(request_handlers::upvote))
            .route(
                "/requests/{id}/comments",
                web::post().to(comment_handlers::create_for_request),
            )
            .route("/comments", web::post().to(comment_handlers::create))
            .route("/changelogs", web::post().to(changelog_handlers::create)),
    );
}
