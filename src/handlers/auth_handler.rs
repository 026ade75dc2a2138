use actix_web::{get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AuthMiddleware, AuthenticatedUser},
    errors::AppError,
    models::dto::{
        request::{ChangePasswordRequest, LoginRequest, RegisterRequest},
        response::MessageResponse,
    },
};

#[post("/register")]
async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_service.register(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/login")]
async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_service.login(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[put("/password", wrap = "AuthMiddleware")]
async fn change_password(
    state: web::Data<AppState>,
    request: web::Json<ChangePasswordRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state
        .auth_service
        .change_password(auth.user_id(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Password updated")))
}

#[get("/restricted", wrap = "AuthMiddleware")]
async fn restricted(auth: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new(format!("Welcome {}", auth.0.display_name)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(register)
            .service(login)
            .service(change_password)
            .service(restricted),
    );
}
