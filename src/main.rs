use axum::{
    Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    DischargeFormView, DischargeReq, DischargeRes, HealthService, ListRecordsRes, LoadRes,
    RecordView, RecordsQuery, SelectRes, auth, health::HealthRes,
};
use board_core::{
    ActiveRecord, BoardError, BoardState, CoreConfig, DischargeForm, WardService, config,
};
use board_datasource::HttpQueryClient;
use board_types::Specialty;

/// Application state shared across REST API handlers
///
/// Holds the ward service (bound to the hosted data service), the board
/// session state, and the optional API key expected on mutating endpoints.
#[derive(Clone)]
struct AppState {
    service: WardService<HttpQueryClient>,
    board: Arc<RwLock<BoardState>>,
    api_key: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, load_board, list_records, select_record, discharge_record),
    components(schemas(
        HealthRes,
        LoadRes,
        ListRecordsRes,
        RecordView,
        SelectRes,
        DischargeFormView,
        DischargeReq,
        DischargeRes
    ))
)]
struct ApiDoc;

/// Main entry point for the ward board application
///
/// Starts the REST server fronting the hosted data service. The board is a
/// single shared session: load commits the active record list, records/select
/// work against that list, and discharge mutates the remote row before
/// pruning the local copy.
///
/// # Environment Variables
/// - `BOARD_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `BOARD_SERVICE_URL`: base URL of the hosted data service (required)
/// - `BOARD_SERVICE_KEY`: API key sent to the data service (optional)
/// - `BOARD_API_KEY`: key required in `x-api-key` on mutating endpoints (optional)
/// - `BOARD_PATIENTS_TABLE`: patients table name (default: "patients")
/// - `BOARD_CONSULTATIONS_TABLE`: consultations table name (default: "consultations")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration or server startup fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wardboard=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("BOARD_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = Arc::new(CoreConfig::new(
        config::service_url_from_env_value(std::env::var("BOARD_SERVICE_URL").ok())?,
        std::env::var("BOARD_SERVICE_KEY").ok(),
        config::patients_table_from_env_value(std::env::var("BOARD_PATIENTS_TABLE").ok()),
        config::consultations_table_from_env_value(std::env::var("BOARD_CONSULTATIONS_TABLE").ok()),
    )?);

    let client = HttpQueryClient::new(cfg.service_url(), cfg.service_key().map(str::to_owned))?;
    let service = WardService::new(cfg, client);

    tracing::info!("++ Starting ward board REST on {}", addr);

    let app = Router::new()
        .route("/health", get(health))
        .route("/board/load", post(load_board))
        .route("/board/records", get(list_records))
        .route("/board/select/:mrn", post(select_record))
        .route("/board/discharge", post(discharge_record))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState {
            service,
            board: Arc::new(RwLock::new(BoardState::new())),
            api_key: std::env::var("BOARD_API_KEY").ok(),
        });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Map a board error to the HTTP status carrying its message.
fn error_response(err: BoardError) -> (StatusCode, String) {
    let status = match &err {
        BoardError::InvalidInput(_)
        | BoardError::NoSelection
        | BoardError::MissingDischargeDate
        | BoardError::MissingDischargeTime => StatusCode::UNPROCESSABLE_ENTITY,
        BoardError::UnknownRecord(_) => StatusCode::NOT_FOUND,
        BoardError::RecordNoLongerActive(_) => StatusCode::CONFLICT,
        BoardError::Query(_) => StatusCode::BAD_GATEWAY,
        BoardError::RowDecode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

fn record_view(record: &ActiveRecord) -> RecordView {
    RecordView {
        mrn: record.mrn().to_owned(),
        name: record.name().to_owned(),
        kind: record.kind().to_string(),
        specialty: record.specialty().to_owned(),
        reference_date: record.reference_date().to_owned(),
    }
}

fn provided_api_key(headers: &HeaderMap) -> Option<&str> {
    headers.get("x-api-key").and_then(|v| v.to_str().ok())
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
/// Returns the current health status of the ward board service.
/// This endpoint is used for monitoring and load balancer health checks.
///
/// # Returns
/// * `Json<HealthRes>` - Health status response containing service status
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/board/load",
    responses(
        (status = 200, description = "Active records committed to the board", body = LoadRes),
        (status = 401, description = "Missing or invalid API key"),
        (status = 502, description = "Either read against the data service failed")
    )
)]
/// Load the active record lists onto the board
///
/// Issues the patient and consultation reads concurrently; both must succeed
/// before the combined list replaces the board. On failure the prior board
/// state is retained unchanged and no partial list is shown.
///
/// # Returns
/// * `Ok(Json<LoadRes>)` - Number of records committed
/// * `Err((StatusCode, String))` - Auth or load failure
async fn load_board(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<LoadRes>, (StatusCode, String)> {
    auth::validate_api_key(provided_api_key(&headers), state.api_key.as_deref())
        .map_err(|(status, message)| (status, message.to_owned()))?;

    let records = state.service.load_active_records().await.map_err(|e| {
        tracing::error!("Load error: {:?}", e);
        error_response(e)
    })?;

    let loaded = records.len();
    state.board.write().await.commit_load(records);
    Ok(Json(LoadRes { loaded }))
}

#[utoipa::path(
    get,
    path = "/board/records",
    params(RecordsQuery),
    responses(
        (status = 200, description = "Visible subset of the board", body = ListRecordsRes),
        (status = 422, description = "Unknown specialty selection")
    )
)]
/// List the visible records on the board
///
/// Applies the free-text search (name case-insensitive, identifier
/// case-sensitive) and the exact specialty selection to the list committed by
/// the last load. An empty search and an omitted specialty match everything.
///
/// # Returns
/// * `Ok(Json<ListRecordsRes>)` - The visible records
/// * `Err((StatusCode, String))` - Unknown specialty
async fn list_records(
    State(state): State<AppState>,
    Query(query): Query<RecordsQuery>,
) -> Result<Json<ListRecordsRes>, (StatusCode, String)> {
    let selection = match query.specialty.as_deref() {
        None | Some("") => None,
        Some(name) => Some(name.parse::<Specialty>().map_err(|e| {
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        })?),
    };

    let board = state.board.read().await;
    let records = board
        .visible(query.search.as_deref().unwrap_or(""), selection)
        .iter()
        .map(record_view)
        .collect();

    Ok(Json(ListRecordsRes { records }))
}

#[utoipa::path(
    post,
    path = "/board/select/{mrn}",
    params(
        ("mrn" = String, Path, description = "Identifier of the record to select")
    ),
    responses(
        (status = 200, description = "Record selected, form seeded", body = SelectRes),
        (status = 404, description = "No record with that identifier on the board")
    )
)]
/// Select a record and seed the discharge form
///
/// Seeds the form date with the current date and the time with the current
/// time, and clears any previously entered note, regardless of which record
/// was selected before.
///
/// # Returns
/// * `Ok(Json<SelectRes>)` - The selected record and the seeded form
/// * `Err((StatusCode, String))` - Unknown identifier
async fn select_record(
    State(state): State<AppState>,
    Path(mrn): Path<String>,
) -> Result<Json<SelectRes>, (StatusCode, String)> {
    let mut board = state.board.write().await;
    let record = board.select(&mrn).map_err(error_response)?;
    let record = record_view(record);
    let form = board.form();

    Ok(Json(SelectRes {
        record,
        form: DischargeFormView {
            date: form.date.clone(),
            time: form.time.clone(),
            note: form.note.clone(),
        },
    }))
}

#[utoipa::path(
    post,
    path = "/board/discharge",
    request_body = DischargeReq,
    responses(
        (status = 200, description = "Record discharged and pruned from the board", body = DischargeRes),
        (status = 401, description = "Missing or invalid API key"),
        (status = 409, description = "Record no longer active on the data service"),
        (status = 422, description = "No selection or missing discharge date/time"),
        (status = 502, description = "Update against the data service failed")
    )
)]
/// Submit the discharge form for the selected record
///
/// Validates the form before any network call, then issues the update chosen
/// by the record's discriminant. On success the record is pruned from the
/// board and the selection and form are cleared; on failure the board is left
/// unchanged so the operation may be retried.
///
/// # Returns
/// * `Ok(Json<DischargeRes>)` - Success notification and pruned identifier
/// * `Err((StatusCode, String))` - Auth, validation, staleness or query failure
async fn discharge_record(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<DischargeReq>,
) -> Result<Json<DischargeRes>, (StatusCode, String)> {
    auth::validate_api_key(provided_api_key(&headers), state.api_key.as_deref())
        .map_err(|(status, message)| (status, message.to_owned()))?;

    let form = DischargeForm {
        date: req.date,
        time: req.time,
        note: req.note,
    };

    let record = {
        let mut board = state.board.write().await;
        board.set_form(form.clone());
        board
            .selected_record()
            .cloned()
            .ok_or_else(|| error_response(BoardError::NoSelection))?
    };

    let outcome = state.service.discharge(&record, &form).await.map_err(|e| {
        tracing::error!("Discharge error: {:?}", e);
        error_response(e)
    })?;

    state.board.write().await.complete_discharge(&outcome);

    Ok(Json(DischargeRes {
        message: outcome.message(),
        mrn: outcome.mrn,
    }))
}
