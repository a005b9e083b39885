use crate::state::AppState;
use axum::{
    http::{header, HeaderName, Method},
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

mod acciones;
mod assemblies;
mod capital;
pub mod common;
mod juntas;
mod members;
mod multas;
mod prestamos;
mod system;
mod users;

/// The full gateway app: route table, CORS and request logging.
pub fn build_app(state: Arc<AppState>) -> Router {
    build_routes(state)
        .layer(cors_layer())
        .layer(axum::middleware::from_fn(common::request_logger))
}

/// CORS contract for the browser: wildcard origin, the fixed verb set and the
/// fixed header list. Preflight OPTIONS requests are answered here with 200.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::DELETE,
            Method::PATCH,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-session-token"),
            HeaderName::from_static("x-user-role"),
        ])
}

pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/api/health", get(system::health_check))
        .route("/api/info", get(system::get_info))
        // Juntas
        .route("/api/juntas", get(juntas::list_juntas).post(juntas::create_junta))
        .route(
            "/api/juntas/:id",
            get(juntas::get_junta).delete(juntas::delete_junta),
        )
        .route(
            "/api/juntas/:id/acciones",
            get(juntas::list_junta_acciones).post(juntas::create_junta_accion),
        )
        .route("/api/juntas/:id/multas", post(juntas::create_junta_multa))
        // Acciones
        .route(
            "/api/acciones",
            get(acciones::list_acciones).delete(acciones::delete_accion),
        )
        // Capital
        .route("/api/capital/social", get(capital::get_capital_social))
        .route(
            "/api/capital/social/junta/:id",
            get(capital::get_junta_capital_social),
        )
        // Members
        .route("/api/members/junta/:id", get(members::list_junta_members))
        .route(
            "/api/members/:junta_id/add/:member_id",
            post(members::add_member),
        )
        .route(
            "/api/members/:junta_id/:member_id",
            delete(members::remove_member),
        )
        .route(
            "/api/members/dni/:dni/acciones",
            get(members::list_member_acciones),
        )
        .route(
            "/api/members/dni/:dni/prestamos",
            get(members::list_member_prestamos),
        )
        // Multas
        .route(
            "/api/multas",
            get(multas::list_multas)
                .post(multas::create_multa)
                .delete(multas::delete_multa),
        )
        // Prestamos
        .route(
            "/api/prestamos",
            get(prestamos::list_prestamos)
                .post(prestamos::create_prestamo)
                .delete(prestamos::delete_prestamo),
        )
        .route(
            "/api/prestamos/:id/pagos",
            get(prestamos::list_pagos).post(prestamos::create_pago),
        )
        .route(
            "/api/prestamos/junta/:id/pagos",
            get(prestamos::list_junta_pagos),
        )
        // Users
        .route("/api/users", get(users::list_users))
        .route("/api/users/:id/role", put(users::update_user_role))
        // Assemblies
        .route(
            "/api/assemblies/:id/asistencia",
            put(assemblies::update_asistencia),
        )
        .with_state(state)
}
