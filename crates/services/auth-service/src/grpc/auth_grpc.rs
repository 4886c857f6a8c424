//! gRPC implementation for the Auth service.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::service::{AuthService, ValidationOutcome};
use domain::{MSG_AUTHENTICATED, MSG_LOGIN_SUCCESSFUL, MSG_NOT_AUTHORIZED, MSG_SIGNUP_SUCCESSFUL};
use proto::auth::{
    auth_server::Auth as AuthProto, LoginRequest, LoginResponse, SignUpRequest, SignUpResponse,
    ValidateTokenRequest, ValidateTokenResponse,
};

/// gRPC service wrapper for AuthService.
pub struct AuthGrpcService {
    service: Arc<dyn AuthService>,
}

impl AuthGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn AuthService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl AuthProto for AuthGrpcService {
    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let req = request.into_inner();

        let outcome = self
            .service
            .login(req.username, req.password)
            .await
            .map_err(Status::from)?;

        Ok(Response::new(LoginResponse {
            id: outcome.account_id.to_string(),
            message: MSG_LOGIN_SUCCESSFUL.to_string(),
            token: outcome.token,
        }))
    }

    async fn sign_up(
        &self,
        request: Request<SignUpRequest>,
    ) -> Result<Response<SignUpResponse>, Status> {
        let req = request.into_inner();

        let account = self
            .service
            .sign_up(req.username, req.password)
            .await
            .map_err(Status::from)?;

        Ok(Response::new(SignUpResponse {
            id: account.id.to_string(),
            message: MSG_SIGNUP_SUCCESSFUL.to_string(),
        }))
    }

    async fn validate_token(
        &self,
        request: Request<ValidateTokenRequest>,
    ) -> Result<Response<ValidateTokenResponse>, Status> {
        let req = request.into_inner();

        // A missing session is a call failure; staleness is a successful
        // call carrying "not authorized".
        let outcome = self
            .service
            .validate_token(&req.token, req.expiration_minutes)
            .await
            .map_err(Status::from)?;

        let response = match outcome {
            ValidationOutcome::Authenticated(session_id) => ValidateTokenResponse {
                id: session_id.to_string(),
                message: MSG_AUTHENTICATED.to_string(),
            },
            ValidationOutcome::Stale => ValidateTokenResponse {
                id: String::new(),
                message: MSG_NOT_AUTHORIZED.to_string(),
            },
        };

        Ok(Response::new(response))
    }
}
