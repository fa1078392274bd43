use crate::handlers;
use actix_web::web::{self, ServiceConfig};

pub fn config(cfg: &mut ServiceConfig) {
    cfg.service(web::scope("/health").route("", web::get().to(handlers::health::health)))
        .service(
            web::scope("/orders")
                .route("", web::get().to(handlers::orders::list_orders))
                .route("/{id}", web::get().to(handlers::orders::get_order))
                .route("/{id}/approve", web::patch().to(handlers::orders::approve_order))
                .route(
                    "/{id}/dispatch",
                    web::patch().to(handlers::orders::dispatch_order),
                )
                .route("/{id}/deliver", web::patch().to(handlers::orders::deliver_order))
                .route("/{id}/cancel", web::patch().to(handlers::orders::cancel_order)),
        )
        .route("/profile", web::put().to(handlers::profile::update_profile));
}
