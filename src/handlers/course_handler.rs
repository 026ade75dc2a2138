use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AdminMiddleware, AuthMiddleware, AuthenticatedUser},
    errors::AppError,
    models::dto::{
        request::{
            CreateCourseRequest, CreateSectionRequest, UpdateCourseRequest, UpdateSectionRequest,
        },
        response::MessageResponse,
    },
};

#[get("")]
async fn list_courses(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let courses = state.course_service.list_courses().await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[post("", wrap = "AdminMiddleware", wrap = "AuthMiddleware")]
async fn create_course(
    state: web::Data<AppState>,
    request: web::Json<CreateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.create_course(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(course))
}

#[get("/sections/{id}")]
async fn get_section(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let section = state.course_service.get_section(&id).await?;
    Ok(HttpResponse::Ok().json(section))
}

#[patch("/sections/{id}", wrap = "AdminMiddleware", wrap = "AuthMiddleware")]
async fn update_section(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateSectionRequest>,
) -> Result<HttpResponse, AppError> {
    let section = state
        .course_service
        .update_section(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(section))
}

#[delete("/sections/{id}", wrap = "AdminMiddleware", wrap = "AuthMiddleware")]
async fn delete_section(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.course_service.delete_section(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Section deleted")))
}

#[get("/sections/{id}/lessons", wrap = "AdminMiddleware", wrap = "AuthMiddleware")]
async fn list_section_lessons(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let lessons = state.course_service.list_section_lessons(&id).await?;
    Ok(HttpResponse::Ok().json(lessons))
}

#[post("/link/{course_id}/{user_id}", wrap = "AdminMiddleware", wrap = "AuthMiddleware")]
async fn link_owner(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (course_id, user_id) = path.into_inner();
    let owner = state.course_service.link_owner(&course_id, &user_id).await?;
    Ok(HttpResponse::Created().json(owner))
}

#[get("/{id}")]
async fn get_course(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get_course(&id).await?;
    Ok(HttpResponse::Ok().json(course))
}

#[patch("/{id}", wrap = "AdminMiddleware", wrap = "AuthMiddleware")]
async fn update_course(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .update_course(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(course))
}

#[delete("/{id}", wrap = "AdminMiddleware", wrap = "AuthMiddleware")]
async fn delete_course(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.course_service.delete_course(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Course deleted")))
}

#[get("/{id}/sections")]
async fn list_sections(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let sections = state.course_service.list_sections(&id).await?;
    Ok(HttpResponse::Ok().json(sections))
}

#[post("/{id}/section", wrap = "AdminMiddleware", wrap = "AuthMiddleware")]
async fn add_section(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<CreateSectionRequest>,
) -> Result<HttpResponse, AppError> {
    let section = state
        .course_service
        .add_sections(&id, vec![request.into_inner()])
        .await?
        .pop()
        .ok_or_else(|| AppError::InternalError("Section was not stored".to_string()))?;
    Ok(HttpResponse::Created().json(section))
}

#[post("/{id}/sections", wrap = "AdminMiddleware", wrap = "AuthMiddleware")]
async fn add_sections(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<Vec<CreateSectionRequest>>,
) -> Result<HttpResponse, AppError> {
    let sections = state
        .course_service
        .add_sections(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(sections))
}

#[get("")]
async fn my_courses(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let courses = state
        .course_service
        .list_instructor_courses(auth.user_id())
        .await?;
    Ok(HttpResponse::Ok().json(courses))
}

/// Reads are public; every write goes through the auth then admin guards
/// before its body is parsed.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Two-segment literal routes go before the `/{id}` family.
    cfg.service(
        web::scope("/courses")
            .service(list_courses)
            .service(create_course)
            .service(get_section)
            .service(update_section)
            .service(delete_section)
            .service(list_section_lessons)
            .service(link_owner)
            .service(get_course)
            .service(update_course)
            .service(delete_course)
            .service(list_sections)
            .service(add_section)
            .service(add_sections),
    )
    .service(
        web::scope("/my_courses")
            .wrap(AdminMiddleware)
            .wrap(AuthMiddleware)
            .service(my_courses),
    );
}
