use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AdminMiddleware, AuthMiddleware, AuthenticatedUser},
    errors::AppError,
    models::dto::{
        request::{CreateLessonRequest, CreateQuizRequest, UpdateLessonRequest},
        response::MessageResponse,
    },
};

#[get("")]
async fn list_owned_lessons(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let lessons = state.lesson_service.list_owned_lessons(auth.user_id()).await?;
    Ok(HttpResponse::Ok().json(lessons))
}

#[post("", wrap = "AdminMiddleware")]
async fn create_lesson(
    state: web::Data<AppState>,
    request: web::Json<CreateLessonRequest>,
) -> Result<HttpResponse, AppError> {
    let lesson = state.lesson_service.create_lesson(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(lesson))
}

#[get("/{id}")]
async fn get_lesson(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let lesson = state.lesson_service.get_lesson(&id).await?;
    Ok(HttpResponse::Ok().json(lesson))
}

#[patch("/{id}", wrap = "AdminMiddleware")]
async fn update_lesson(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateLessonRequest>,
) -> Result<HttpResponse, AppError> {
    let lesson = state
        .lesson_service
        .update_lesson(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(lesson))
}

#[delete("/{id}", wrap = "AdminMiddleware")]
async fn delete_lesson(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.lesson_service.delete_lesson(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Lesson deleted")))
}

#[get("/{id}/quizzes")]
async fn list_quizzes(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quizzes = state.lesson_service.list_quizzes(&id).await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[post("/{id}/quizzes", wrap = "AdminMiddleware")]
async fn create_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .lesson_service
        .create_quiz(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(quiz))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/lessons")
            .wrap(AuthMiddleware)
            .service(list_owned_lessons)
            .service(create_lesson)
            .service(get_lesson)
            .service(update_lesson)
            .service(delete_lesson)
            .service(list_quizzes)
            .service(create_quiz),
    );
}
