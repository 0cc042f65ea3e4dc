//! # API REST
//!
//! REST API implementation for MMS.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, bearer sessions)
//!
//! Uses `api-shared` for wire types and the login placeholder. The `mms-run`
//! binary resolves configuration and serves the router built here.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path as AxumPath, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{Json, Response},
    routing::{delete, get, post},
    Extension, Router,
};
use std::sync::{Arc, RwLock};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    validate_password, CreateReportReq, CreateReportRes, DeleteReportRes, FileContentKind,
    HealthRes, HealthService, ListReportsRes, LoginReq, LoginRes, LogoutRes, PredictReq,
    PredictRes, ReportFileDto, ReportFileRes, ReportRes, SessionStore, SymptomsRes,
};
use mms_core::{
    all_symptoms, predict_medicines, reference_table, Report, ReportDraft, ReportError,
    ReportFile, ReportLog, SelectionSet,
};
use mms_files::FileContent;
use mms_types::NonEmptyText;

/// Application state for the REST API server
///
/// Contains shared state that needs to be accessible to all request handlers:
/// the in-memory report log, the session store, and the shared password
/// resolved at startup.
#[derive(Clone)]
pub struct AppState {
    reports: Arc<RwLock<ReportLog>>,
    sessions: SessionStore,
    password: Arc<String>,
}

impl AppState {
    /// Creates fresh application state.
    ///
    /// # Arguments
    /// * `password` - The shared login password resolved at startup
    pub fn new(password: String) -> Self {
        Self {
            reports: Arc::new(RwLock::new(ReportLog::new())),
            sessions: SessionStore::new(),
            password: Arc::new(password),
        }
    }
}

/// Bearer token of the session that authorised the current request.
///
/// Inserted into request extensions by [`require_session`] so handlers such
/// as logout can act on the token itself.
#[derive(Clone)]
struct SessionToken(String);

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        login,
        logout,
        list_symptoms,
        predict,
        list_reports,
        create_report,
        read_report_file,
        delete_report,
    ),
    components(schemas(
        HealthRes,
        LoginReq,
        LoginRes,
        LogoutRes,
        SymptomsRes,
        PredictReq,
        PredictRes,
        FileContentKind,
        ReportFileDto,
        CreateReportReq,
        CreateReportRes,
        ReportRes,
        ListReportsRes,
        ReportFileRes,
        DeleteReportRes,
    ))
)]
struct ApiDoc;

/// Builds the MMS REST router.
///
/// Public routes: health, login, symptom listing, prediction. The report log
/// and logout sit behind the bearer-session middleware.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/reports", get(list_reports))
        .route("/reports", post(create_report))
        .route("/reports/:id/file", get(read_report_file))
        .route("/reports/:id", delete(delete_report))
        .route("/logout", post(logout))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/health", get(health))
        .route("/login", post(login))
        .route("/symptoms", get(list_symptoms))
        .route("/predict", post(predict))
        .merge(protected)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Require a valid bearer session token.
///
/// Extracts `Authorization: Bearer <token>`, checks it against the session
/// store, and injects [`SessionToken`] into request extensions for
/// downstream handlers. Placeholder-auth semantics: a token is either known
/// or it isn't; there is no expiry and no identity attached.
async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, (StatusCode, &'static str)> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or((StatusCode::UNAUTHORIZED, "Missing bearer token"))?
        .to_string();

    if !state.sessions.is_valid(&token) {
        return Err((StatusCode::UNAUTHORIZED, "Invalid session token"));
    }

    req.extensions_mut().insert(SessionToken(token));
    Ok(next.run(req).await)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the MMS REST API service.
/// This endpoint is used for monitoring and load balancer health checks.
///
/// # Returns
/// * `Json<HealthRes>` - Health status response containing service status
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Login succeeded", body = LoginRes),
        (status = 401, description = "Invalid password")
    )
)]
/// Log in with the shared password
///
/// Compares the submitted password against the password resolved at startup
/// and issues a session token on success. This is the placeholder gate
/// described in `api_shared::auth`, not an authentication system.
///
/// # Returns
/// * `Ok(Json<LoginRes>)` - Session token to present as a bearer token
/// * `Err((StatusCode, &str))` - 401 when the password does not match
#[axum::debug_handler]
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginReq>,
) -> Result<Json<LoginRes>, (StatusCode, &'static str)> {
    match validate_password(&req.password, &state.password) {
        Ok(()) => {
            let token = state.sessions.issue();
            Ok(Json(LoginRes { token }))
        }
        Err(e) => {
            tracing::warn!("Login rejected: {}", e);
            Err((StatusCode::UNAUTHORIZED, "Invalid password"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 200, description = "Session revoked", body = LogoutRes),
        (status = 401, description = "Missing or invalid session token")
    )
)]
/// Log out the current session
///
/// Revokes the bearer token that authorised this request. The token is
/// forgotten immediately; there is nothing else to tear down.
///
/// # Returns
/// * `Json<LogoutRes>` - Whether the token was known to the store
#[axum::debug_handler]
async fn logout(
    State(state): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Json<LogoutRes> {
    let success = state.sessions.revoke(&token.0);
    Json(LogoutRes { success })
}

#[utoipa::path(
    get,
    path = "/symptoms",
    responses(
        (status = 200, description = "Selectable symptom labels", body = SymptomsRes)
    )
)]
/// List the selectable symptom labels
///
/// Returns every symptom appearing in the reference table, de-duplicated
/// with first-occurrence order preserved. A rendering layer offers these as
/// toggleable labels.
///
/// # Returns
/// * `Json<SymptomsRes>` - The symptom labels in stable order
#[axum::debug_handler]
async fn list_symptoms(State(_state): State<AppState>) -> Json<SymptomsRes> {
    Json(SymptomsRes {
        symptoms: all_symptoms(reference_table()),
    })
}

#[utoipa::path(
    post,
    path = "/predict",
    request_body = PredictReq,
    responses(
        (status = 200, description = "Predicted medicines", body = PredictRes)
    )
)]
/// Predict medicines from selected symptoms
///
/// Runs the symptom matcher against the hardcoded reference table. The
/// operation is total: any set of strings is a valid selection, unknown
/// labels contribute nothing, and an empty selection yields an empty result.
///
/// # Returns
/// * `Json<PredictRes>` - Predicted medicines in stable, de-duplicated order
#[axum::debug_handler]
async fn predict(
    State(_state): State<AppState>,
    Json(req): Json<PredictReq>,
) -> Json<PredictRes> {
    let selection = SelectionSet::from_labels(req.symptoms);
    let medicines = predict_medicines(&selection, reference_table());
    Json(PredictRes { medicines })
}

#[utoipa::path(
    get,
    path = "/reports",
    responses(
        (status = 200, description = "List of reports", body = ListReportsRes),
        (status = 401, description = "Missing or invalid session token"),
        (status = 500, description = "Internal server error")
    )
)]
/// List all reports in the log
///
/// Returns the submitted reports in submission order. File content is
/// omitted from listings; fetch it per report via the file endpoint.
///
/// # Returns
/// * `Ok(Json<ListReportsRes>)` - Reports with their ids and fields
/// * `Err((StatusCode, &str))` - Internal server error if the log is unavailable
#[axum::debug_handler]
async fn list_reports(
    State(state): State<AppState>,
) -> Result<Json<ListReportsRes>, (StatusCode, &'static str)> {
    let log = state
        .reports
        .read()
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))?;
    let reports = log.list().iter().map(report_to_res).collect();
    Ok(Json(ListReportsRes { reports }))
}

#[utoipa::path(
    post,
    path = "/reports",
    request_body = CreateReportReq,
    responses(
        (status = 201, description = "Report created", body = CreateReportRes),
        (status = 400, description = "Bad request"),
        (status = 401, description = "Missing or invalid session token"),
        (status = 500, description = "Internal server error")
    )
)]
/// Add a report to the log
///
/// Validates the submitted fields the way the report form always has: date
/// must be a calendar date, the text fields must be non-empty, and a file
/// must be attached. The stored report lives in process memory only.
///
/// # Returns
/// * `Ok(Json<CreateReportRes>)` - The stored report with its assigned id
/// * `Err((StatusCode, &str))` - 400 on validation failure
#[axum::debug_handler]
async fn create_report(
    State(state): State<AppState>,
    Json(req): Json<CreateReportReq>,
) -> Result<Json<CreateReportRes>, (StatusCode, &'static str)> {
    let file = match report_file_from_dto(req.file) {
        Ok(file) => file,
        Err(e) => {
            tracing::error!("Create report error: {:?}", e);
            return Err((StatusCode::BAD_REQUEST, "Invalid report file"));
        }
    };

    let draft = ReportDraft {
        date: req.date,
        condition: req.condition,
        doctor_name: req.doctor_name,
        hospital_name: req.hospital_name,
        file: Some(file),
    };

    let mut log = state
        .reports
        .write()
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))?;
    match log.add(draft) {
        Ok(report) => Ok(Json(CreateReportRes {
            report: report_to_res(&report),
        })),
        Err(e) => {
            tracing::error!("Create report error: {:?}", e);
            Err((StatusCode::BAD_REQUEST, "Invalid report"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/reports/{id}/file",
    responses(
        (status = 200, description = "Report file content", body = ReportFileRes),
        (status = 400, description = "Bad request"),
        (status = 401, description = "Missing or invalid session token"),
        (status = 404, description = "Report not found"),
        (status = 500, description = "Internal server error")
    )
)]
/// Read a report's file content for display
///
/// Returns the in-memory content captured when the report was submitted:
/// text for inline display, or a `data:` URL for an embedded viewer.
///
/// # Returns
/// * `Ok(Json<ReportFileRes>)` - Filename, content kind, and content
/// * `Err((StatusCode, &str))` - 400 for a malformed id, 404 for an unknown one
#[axum::debug_handler]
async fn read_report_file(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<ReportFileRes>, (StatusCode, &'static str)> {
    let id = match uuid::Uuid::parse_str(&id) {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Invalid report id: {:?}", e);
            return Err((StatusCode::BAD_REQUEST, "Invalid report id"));
        }
    };

    let log = state
        .reports
        .read()
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))?;
    match log.get(id) {
        Some(report) => {
            let (kind, content) = file_content_to_dto(&report.file.content);
            Ok(Json(ReportFileRes {
                filename: report.file.filename.to_string(),
                kind,
                content,
            }))
        }
        None => Err((StatusCode::NOT_FOUND, "Report not found")),
    }
}

#[utoipa::path(
    delete,
    path = "/reports/{id}",
    responses(
        (status = 200, description = "Report deleted", body = DeleteReportRes),
        (status = 400, description = "Bad request"),
        (status = 401, description = "Missing or invalid session token"),
        (status = 404, description = "Report not found"),
        (status = 500, description = "Internal server error")
    )
)]
/// Delete a report from the log
///
/// Removes the report and its in-memory file content. Deleting an unknown id
/// reports not-found rather than succeeding silently.
///
/// # Returns
/// * `Ok(Json<DeleteReportRes>)` - Deletion confirmation
/// * `Err((StatusCode, &str))` - 400 for a malformed id, 404 for an unknown one
#[axum::debug_handler]
async fn delete_report(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<DeleteReportRes>, (StatusCode, &'static str)> {
    let id = match uuid::Uuid::parse_str(&id) {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Invalid report id: {:?}", e);
            return Err((StatusCode::BAD_REQUEST, "Invalid report id"));
        }
    };

    let mut log = state
        .reports
        .write()
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))?;
    match log.delete(id) {
        Ok(()) => Ok(Json(DeleteReportRes { success: true })),
        Err(ReportError::NotFound(_)) => Err((StatusCode::NOT_FOUND, "Report not found")),
        Err(e) => {
            tracing::error!("Delete report error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

// Helper functions

fn report_to_res(report: &Report) -> ReportRes {
    ReportRes {
        id: report.id.to_string(),
        date: report.date.to_string(),
        condition: report.condition.to_string(),
        doctor_name: report.doctor_name.to_string(),
        hospital_name: report.hospital_name.to_string(),
        filename: report.file.filename.to_string(),
    }
}

fn report_file_from_dto(dto: ReportFileDto) -> Result<ReportFile, mms_types::TextError> {
    let filename = NonEmptyText::new(&dto.filename)?;
    let content = match dto.kind {
        FileContentKind::Text => FileContent::Text(dto.content),
        FileContentKind::DataUrl => FileContent::DataUrl(dto.content),
    };
    Ok(ReportFile { filename, content })
}

fn file_content_to_dto(content: &FileContent) -> (FileContentKind, String) {
    match content {
        FileContent::Text(text) => (FileContentKind::Text, text.clone()),
        FileContent::DataUrl(url) => (FileContentKind::DataUrl, url.clone()),
    }
}
