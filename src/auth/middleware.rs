use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{Header, AUTHORIZATION},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    auth::{require_admin, Claims, JwtService},
    errors::{AppError, AppResult, AuthError},
    middleware::get_request_id,
};

/// Extracts the bearer token from `Authorization` and verifies it.
pub fn authenticate<M: HttpMessage>(message: &M, jwt_service: &JwtService) -> Result<Claims, AuthError> {
    if !message.headers().contains_key(AUTHORIZATION) {
        return Err(AuthError::MissingToken);
    }

    let authorization =
        Authorization::<Bearer>::parse(message).map_err(|_| AuthError::InvalidToken)?;

    jwt_service.verify(authorization.into_scheme().token())
}

fn authenticate_with_state(req: &ServiceRequest) -> AppResult<Claims> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("JWT service not configured".to_string()))?;

    Ok(authenticate(req, &state.jwt_service)?)
}

/// Rejects requests without a valid bearer token with 401 and stores the
/// verified [`Claims`] in request extensions for everything downstream.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match authenticate_with_state(&req) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                }
                Err(e) => {
                    log::debug!(
                        "Authentication failed for {} (request_id={}): {}",
                        req.path(),
                        get_request_id(req.request()).unwrap_or_default(),
                        e
                    );
                    return Ok(req.error_response(e).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Second link of the guard chain: needs the claims that [`AuthMiddleware`]
/// attached, so it must be registered inside it. Non-admins get 403.
pub struct AdminMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AdminMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AdminMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let verdict = match req.extensions().get::<Claims>() {
                Some(claims) => require_admin(claims),
                None => Err(AppError::Unauthorized(AuthError::MissingToken)),
            };
            if let Err(e) = verdict {
                return Ok(req.error_response(e).map_into_right_body());
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Extractor for authenticated user in handlers. Reuses claims attached by
/// [`AuthMiddleware`] and otherwise verifies the bearer token itself, so it
/// also guards individual routes in scopes that are partly public.
pub struct AuthenticatedUser(pub Claims);

impl AuthenticatedUser {
    pub fn user_id(&self) -> &str {
        &self.0.subject_id
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let attached = req.extensions().get::<Claims>().cloned();
        if let Some(claims) = attached {
            return ready(Ok(AuthenticatedUser(claims)));
        }

        let claims = match req.app_data::<web::Data<AppState>>() {
            Some(state) => authenticate(req, &state.jwt_service).map_err(AppError::from),
            None => Err(AppError::InternalError(
                "JWT service not configured".to_string(),
            )),
        };

        ready(claims.map(AuthenticatedUser))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, models::domain::User};
    use actix_web::test::TestRequest;

    fn jwt_service() -> JwtService {
        JwtService::from_config(&Config::test_config())
    }

    #[test]
    fn test_authenticate_without_header() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(
            authenticate(&req, &jwt_service()),
            Err(AuthError::MissingToken)
        );
    }

    #[test]
    fn test_authenticate_wrong_scheme() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Token abc"))
            .to_http_request();
        assert_eq!(
            authenticate(&req, &jwt_service()),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn test_authenticate_valid_bearer() {
        let service = jwt_service();
        let user = User::new("johndoe", "john@example.com", String::new());
        let token = service.issue(&user).unwrap();

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_http_request();
        let claims = authenticate(&req, &service).unwrap();
        assert_eq!(claims.subject_id, user.id);
    }
}
