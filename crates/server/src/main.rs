// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use cadence::AssignmentEmail;
use cadence_api::{
    ApiError, CampaignView, CreateCampaignRequest, MutationResponse, RegisterPersonRequest,
    ReassignRequest, ScheduleConfigRequest, SessionClaims, SetNoteRequest,
    SubmissionsToggleRequest, TransitionRequest, WorkRequestSubmission, clear_note,
    compute_champion, create_campaign, delete_campaign, get_cached_snapshot, get_campaign,
    get_schedule_config, list_campaigns, list_people, list_work_requests, reassign_campaign,
    register_person, schedule_mode_active, set_note, set_schedule_config,
    set_submissions_enabled, submit_work_request, transition_campaign,
};
use cadence_domain::{ChampionSnapshot, MonthKey, Person, ScheduleModeConfig, WorkRequest};
use cadence_persistence::{CampaignStore, MemoryStore};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Cadence Server - HTTP server for the Cadence Campaign Tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Enable business-unit work submissions at startup
    #[arg(long, default_value_t = false)]
    enable_submissions: bool,

    /// Hours between automatic champion recomputations (0 disables the timer)
    #[arg(long, default_value_t = 24)]
    champion_interval_hours: u64,
}

/// Application state shared across handlers.
///
/// This contains the store wrapped in a Mutex to allow safe concurrent
/// access.
#[derive(Clone)]
struct AppState {
    /// The store holding campaigns, people, and settings documents.
    store: Arc<Mutex<MemoryStore>>,
}

/// Session claims passed as query parameters on read endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ClaimsQuery {
    /// The role name: `owner`, `member`, or `guest`.
    role: String,
    /// The member's home department, if any.
    home_department: Option<String>,
    /// The operator flag.
    #[serde(default)]
    operator: bool,
    /// The business-unit flag.
    #[serde(default)]
    business_unit: bool,
}

impl ClaimsQuery {
    fn into_claims(self) -> SessionClaims {
        SessionClaims {
            role: self.role,
            home_department: self.home_department,
            operator: self.operator,
            business_unit: self.business_unit,
        }
    }
}

/// Query parameters for endpoints that also need an actor name.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActorQuery {
    /// The role name: `owner`, `member`, or `guest`.
    role: String,
    /// The member's home department, if any.
    home_department: Option<String>,
    /// The operator flag.
    #[serde(default)]
    operator: bool,
    /// The business-unit flag.
    #[serde(default)]
    business_unit: bool,
    /// The actor display name for the audit trail.
    actor: String,
}

impl ActorQuery {
    fn into_parts(self) -> (SessionClaims, String) {
        (
            SessionClaims {
                role: self.role,
                home_department: self.home_department,
                operator: self.operator,
                business_unit: self.business_unit,
            },
            self.actor,
        )
    }
}

/// Query parameters for the schedule mode decision endpoint.
///
/// The override marker is client-held state, so the client supplies it
/// on every evaluation.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ScheduleModeQuery {
    /// When the user last manually toggled the mode, RFC 3339.
    override_marker: Option<DateTime<Utc>>,
    /// Whether the mode is currently active on the client.
    #[serde(default)]
    currently_active: bool,
}

/// Request body for champion recomputation.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ComputeChampionRequest {
    /// Recompute even when a current cached snapshot exists.
    #[serde(default)]
    force: bool,
}

/// Response for the schedule mode decision endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ScheduleModeResponse {
    /// Whether the mode should be active right now.
    active: bool,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } | ApiError::DraftPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::StorageFailure { .. } | ApiError::Internal { .. } => {
                error!(error = %err, "Store error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Hands assignment mail to the delivery service.
///
/// Delivery is an external concern; this logs the handoff and returns.
fn dispatch_emails(emails: &[AssignmentEmail]) {
    for email in emails {
        info!(
            recipient = %email.recipient_email,
            subject = %email.subject,
            reference = %email.reference_code,
            "Dispatching assignment email"
        );
    }
}

// ============================================================================
// Campaign Handlers
// ============================================================================

async fn handle_create_campaign(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateCampaignRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(title = %req.title, "Handling create_campaign request");

    let mut store = app_state.store.lock().await;
    let response: MutationResponse = create_campaign(&mut *store, req, Utc::now())?;
    drop(store);

    dispatch_emails(&response.emails);
    Ok(Json(response))
}

async fn handle_list_campaigns(
    AxumState(app_state): AxumState<AppState>,
    Query(claims): Query<ClaimsQuery>,
) -> Result<Json<Vec<CampaignView>>, HttpError> {
    let store = app_state.store.lock().await;
    let views: Vec<CampaignView> = list_campaigns(&*store, &claims.into_claims())?;
    Ok(Json(views))
}

async fn handle_get_campaign(
    AxumState(app_state): AxumState<AppState>,
    Path(campaign_id): Path<String>,
    Query(claims): Query<ClaimsQuery>,
) -> Result<Json<CampaignView>, HttpError> {
    let store = app_state.store.lock().await;
    let view: CampaignView = get_campaign(&*store, &claims.into_claims(), &campaign_id)?;
    Ok(Json(view))
}

async fn handle_transition_campaign(
    AxumState(app_state): AxumState<AppState>,
    Path(campaign_id): Path<String>,
    Json(req): Json<TransitionRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(campaign_id = %campaign_id, new_status = %req.new_status, "Handling transition request");

    let mut store = app_state.store.lock().await;
    let response: MutationResponse =
        transition_campaign(&mut *store, &campaign_id, req, Utc::now())?;
    drop(store);

    dispatch_emails(&response.emails);
    Ok(Json(response))
}

async fn handle_reassign_campaign(
    AxumState(app_state): AxumState<AppState>,
    Path(campaign_id): Path<String>,
    Json(req): Json<ReassignRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(campaign_id = %campaign_id, replacement = %req.replacement_id, "Handling reassign request");

    let mut store = app_state.store.lock().await;
    let response: MutationResponse =
        reassign_campaign(&mut *store, &campaign_id, req, Utc::now())?;
    drop(store);

    dispatch_emails(&response.emails);
    Ok(Json(response))
}

async fn handle_set_note(
    AxumState(app_state): AxumState<AppState>,
    Path(campaign_id): Path<String>,
    Json(req): Json<SetNoteRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let response: MutationResponse = set_note(&mut *store, &campaign_id, req, Utc::now())?;
    Ok(Json(response))
}

async fn handle_clear_note(
    AxumState(app_state): AxumState<AppState>,
    Path(campaign_id): Path<String>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<MutationResponse>, HttpError> {
    let (claims, actor) = query.into_parts();
    let mut store = app_state.store.lock().await;
    let response: MutationResponse =
        clear_note(&mut *store, &campaign_id, &claims, &actor, Utc::now())?;
    Ok(Json(response))
}

async fn handle_delete_campaign(
    AxumState(app_state): AxumState<AppState>,
    Path(campaign_id): Path<String>,
    Query(query): Query<ActorQuery>,
) -> Result<StatusCode, HttpError> {
    info!(campaign_id = %campaign_id, "Handling delete request");

    let (claims, actor) = query.into_parts();
    let mut store = app_state.store.lock().await;
    delete_campaign(&mut *store, &campaign_id, &claims, &actor, Utc::now())?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Work Request Handlers
// ============================================================================

async fn handle_submit_work_request(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<WorkRequestSubmission>,
) -> Result<Json<WorkRequest>, HttpError> {
    let mut store = app_state.store.lock().await;
    let request: WorkRequest = submit_work_request(&mut *store, req, Utc::now())?;
    Ok(Json(request))
}

async fn handle_list_work_requests(
    AxumState(app_state): AxumState<AppState>,
    Query(claims): Query<ClaimsQuery>,
) -> Result<Json<Vec<WorkRequest>>, HttpError> {
    let store = app_state.store.lock().await;
    let requests: Vec<WorkRequest> = list_work_requests(&*store, &claims.into_claims())?;
    Ok(Json(requests))
}

// ============================================================================
// People Handlers
// ============================================================================

async fn handle_register_person(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterPersonRequest>,
) -> Result<Json<Person>, HttpError> {
    let mut store = app_state.store.lock().await;
    let person: Person = register_person(&mut *store, req)?;
    Ok(Json(person))
}

async fn handle_list_people(
    AxumState(app_state): AxumState<AppState>,
    Query(claims): Query<ClaimsQuery>,
) -> Result<Json<Vec<Person>>, HttpError> {
    let store = app_state.store.lock().await;
    let people: Vec<Person> = list_people(&*store, &claims.into_claims())?;
    Ok(Json(people))
}

// ============================================================================
// Settings Handlers
// ============================================================================

async fn handle_set_submissions(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SubmissionsToggleRequest>,
) -> Result<StatusCode, HttpError> {
    let mut store = app_state.store.lock().await;
    set_submissions_enabled(&mut *store, req)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn handle_set_schedule_config(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ScheduleConfigRequest>,
) -> Result<StatusCode, HttpError> {
    let mut store = app_state.store.lock().await;
    set_schedule_config(&mut *store, req, Utc::now())?;
    Ok(StatusCode::NO_CONTENT)
}

async fn handle_get_schedule_config(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Option<ScheduleModeConfig>>, HttpError> {
    let store = app_state.store.lock().await;
    let config: Option<ScheduleModeConfig> = get_schedule_config(&*store)?;
    Ok(Json(config))
}

async fn handle_schedule_mode(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ScheduleModeQuery>,
) -> Result<Json<ScheduleModeResponse>, HttpError> {
    let store = app_state.store.lock().await;
    let active: bool = schedule_mode_active(
        &*store,
        query.override_marker,
        Utc::now(),
        query.currently_active,
    )?;
    Ok(Json(ScheduleModeResponse { active }))
}

// ============================================================================
// Champion Handlers
// ============================================================================

async fn handle_compute_champion(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ComputeChampionRequest>,
) -> Result<Json<Option<ChampionSnapshot>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let snapshot: Option<ChampionSnapshot> =
        compute_champion(&mut *store, Utc::now(), req.force)?;
    Ok(Json(snapshot))
}

async fn handle_get_champion(
    AxumState(app_state): AxumState<AppState>,
    Path(month): Path<String>,
) -> Result<Json<Option<ChampionSnapshot>>, HttpError> {
    let month: MonthKey = MonthKey::from_str(&month).map_err(|e| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: e.to_string(),
    })?;

    let store = app_state.store.lock().await;
    let snapshot: Option<ChampionSnapshot> = get_cached_snapshot(&*store, month)?;
    Ok(Json(snapshot))
}

// ============================================================================
// Router and Startup
// ============================================================================

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/campaigns", post(handle_create_campaign))
        .route("/campaigns", get(handle_list_campaigns))
        .route("/campaigns/{campaign_id}", get(handle_get_campaign))
        .route("/campaigns/{campaign_id}", delete(handle_delete_campaign))
        .route(
            "/campaigns/{campaign_id}/transition",
            post(handle_transition_campaign),
        )
        .route(
            "/campaigns/{campaign_id}/reassign",
            post(handle_reassign_campaign),
        )
        .route("/campaigns/{campaign_id}/note", post(handle_set_note))
        .route("/campaigns/{campaign_id}/note", delete(handle_clear_note))
        .route("/work_requests", post(handle_submit_work_request))
        .route("/work_requests", get(handle_list_work_requests))
        .route("/people", post(handle_register_person))
        .route("/people", get(handle_list_people))
        .route("/settings/submissions", post(handle_set_submissions))
        .route("/schedule/config", post(handle_set_schedule_config))
        .route("/schedule/config", get(handle_get_schedule_config))
        .route("/schedule/mode", get(handle_schedule_mode))
        .route("/champion/compute", post(handle_compute_champion))
        .route("/champion/{month}", get(handle_get_champion))
        .with_state(app_state)
}

/// Recomputes the champion snapshot on a fixed interval.
async fn champion_timer(app_state: AppState, interval_hours: u64) {
    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_hours * 3600));
    loop {
        ticker.tick().await;
        let mut store = app_state.store.lock().await;
        match compute_champion(&mut *store, Utc::now(), false) {
            Ok(Some(snapshot)) => {
                info!(month = %snapshot.month, "Champion snapshot current");
            }
            Ok(None) => info!("Champion snapshot current, no winners"),
            Err(err) => error!(error = %err, "Champion recomputation failed"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Cadence Server");

    let mut store = MemoryStore::new();
    if args.enable_submissions {
        store.set_submissions_enabled(true);
        info!("Business-unit submissions enabled");
    }

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    if args.champion_interval_hours > 0 {
        info!(
            interval_hours = args.champion_interval_hours,
            "Starting champion timer"
        );
        tokio::spawn(champion_timer(
            app_state.clone(),
            args.champion_interval_hours,
        ));
    }

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode as HttpStatusCode};
    use tower::ServiceExt;

    fn create_test_app_state() -> AppState {
        AppState {
            store: Arc::new(Mutex::new(MemoryStore::new())),
        }
    }

    fn owner_create_request(title: &str) -> CreateCampaignRequest {
        CreateCampaignRequest {
            claims: SessionClaims::owner(),
            actor: String::from("Owner"),
            title: title.to_string(),
            scheduled_for: Utc::now(),
            urgency: String::from("Medium"),
            difficulty: None,
            assignee_id: None,
            department: None,
            note: None,
            requires_report: false,
            report_due: None,
        }
    }

    async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get_campaign() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response =
            post_json(app.clone(), "/campaigns", &owner_create_request("Spring launch")).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: MutationResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(created.campaign.title.as_deref(), Some("Spring launch"));

        let uri: String = format!("/campaigns/{}?role=owner", created.campaign.campaign_id);
        let response = app
            .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
    }

    #[tokio::test]
    async fn test_guest_create_is_forbidden() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let mut request: CreateCampaignRequest = owner_create_request("Spring launch");
        request.claims = SessionClaims::guest();

        let response = post_json(app, "/campaigns", &request).await;

        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_get_missing_campaign_is_not_found() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/campaigns/cmp-missing?role=owner")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_guest_list_is_blurred() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        post_json(app.clone(), "/campaigns", &owner_create_request("Spring launch")).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/campaigns?role=guest")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let views: Vec<CampaignView> = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(views.len(), 1);
        assert!(views[0].blurred);
        assert_eq!(views[0].title, None);
    }

    #[tokio::test]
    async fn test_schedule_mode_defaults_inactive() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/schedule/mode")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let mode: ScheduleModeResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert!(!mode.active);
    }

    #[tokio::test]
    async fn test_champion_compute_on_empty_store_returns_null() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response =
            post_json(app, "/champion/compute", &ComputeChampionRequest { force: false }).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let snapshot: Option<ChampionSnapshot> = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(snapshot, None);
    }
}
