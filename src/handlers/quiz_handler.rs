use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AdminMiddleware, AuthMiddleware, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{CreateQuestionRequest, SubmitAnswerRequest},
};

#[get("/{id}")]
async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz_with_questions(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/{id}", wrap = "AdminMiddleware")]
async fn add_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .quiz_service
        .add_question(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(question))
}

/// Answers are only accepted from owners of the quiz's course. The ownership
/// check runs before the body is decoded or the question is looked up, so
/// outsiders learn nothing about which quizzes or questions exist.
#[post("/{quiz_id}/{question_id}")]
async fn answer_question(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    auth: AuthenticatedUser,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let (quiz_id, question_id) = path.into_inner();

    state
        .ownership_service
        .require_quiz_owner(auth.user_id(), &quiz_id)
        .await?;

    let request: SubmitAnswerRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::ValidationError(format!("Invalid answer body: {}", e)))?;

    let answer = state
        .grading_service
        .submit_answer(
            auth.user_id(),
            &quiz_id,
            &question_id,
            request.answer_text,
        )
        .await?;
    Ok(HttpResponse::Ok().json(answer))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/quizzes")
            .wrap(AuthMiddleware)
            .service(get_quiz)
            .service(add_question)
            .service(answer_question),
    );
}
