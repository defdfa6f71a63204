//! REST API for the slotting service.
//!
//! Provides HTTP endpoints for the browser page and scripted clients.
//! Uses Axum as the web framework and supports CORS.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path, State};
use axum::{
    Router,
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post, put},
};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use utoipa::{OpenApi, ToSchema};

use crate::advisor::{MAX_INSTRUCTIONS_LEN, Reassignment, ReassignmentAdvisor};
use crate::config::{ApiConfig, LayoutConfig};
use crate::layout::{LayoutPlan, Placement, UnplacedSku, pack};
use crate::model::{
    Attributes, NewSku, RawAttributes, ScoredSku, ValidationError, ZoneLabel, lenient_number,
};
use crate::normalizer::normalize;
use crate::registry::RegistryError;
use crate::samples::sample_skus;
use crate::scoring::{priority, score, zone_for_priority};
use crate::snapshot;
use crate::state::{Command, Outcome, Workspace};
use crate::warehouse::{RackSpec, WarehouseLayout, ZoneBand};

/// Shared state of all handlers.
#[derive(Clone)]
pub struct ApiState {
    workspace: Arc<Mutex<Workspace>>,
    layout: Arc<LayoutConfig>,
    advisor: Arc<dyn ReassignmentAdvisor>,
    data_file: Option<Arc<PathBuf>>,
}

impl ApiState {
    pub fn new(
        workspace: Workspace,
        layout: LayoutConfig,
        advisor: Arc<dyn ReassignmentAdvisor>,
        data_file: Option<PathBuf>,
    ) -> Self {
        Self {
            workspace: Arc::new(Mutex::new(workspace)),
            layout: Arc::new(layout),
            advisor,
            data_file: data_file.map(Arc::new),
        }
    }
}

static OPENAPI_DOC: OnceLock<utoipa::openapi::OpenApi> = OnceLock::new();

// SRI hashes verified against https://unpkg.com/swagger-ui-dist@5.17.14/ on 2025-10-29.
const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="utf-8" />
        <title>slap-planner API Docs</title>
        <link
            rel="stylesheet"
            href="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui.css"
            integrity="sha384-wxLW6kwyHktdDGr6Pv1zgm/VGJh99lfUbzSn6HNHBENZlCN7W602k9VkGdxuFvPn"
            crossorigin="anonymous"
        />
    </head>
    <body>
        <div id="swagger-ui"></div>
        <script
            src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-bundle.js"
            integrity="sha384-wmyclcVGX/WhUkdkATwhaK1X1JtiNrr2EoYJ+diV3vj4v6OC5yCeSu+yW13SYJep"
            crossorigin="anonymous"
        ></script>
        <script>
            window.onload = function () {
                window.ui = SwaggerUIBundle({
                    url: "/docs/openapi.json",
                    dom_id: "#swagger-ui",
                });
            };
        </script>
    </body>
    </html>"##;

fn openapi_doc() -> &'static utoipa::openapi::OpenApi {
    OPENAPI_DOC.get_or_init(ApiDoc::openapi)
}

/// Embedded Web Assets (HTML, CSS, JS)
#[derive(RustEmbed)]
#[folder = "web/"]
struct WebAssets;

/// Unit system of the attributes in a SKU request.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttributeUnits {
    /// Values are already on the `[0,1]` scale and are validated as such.
    #[default]
    Normalized,
    /// Values are raw units and go through the normalizer.
    Raw,
}

/// Request structure for adding or updating a SKU.
#[derive(Deserialize, ToSchema)]
#[schema(
    example = json!({
        "sku_code": "SKU01",
        "product_name": "Power Bank 10,000mAh",
        "f": 180, "w": 1, "s": 300, "i": 18,
        "units": "raw"
    })
)]
pub struct SkuRequest {
    pub sku_code: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    #[schema(value_type = Option<f64>)]
    pub f: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    #[schema(value_type = Option<f64>)]
    pub w: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    #[schema(value_type = Option<f64>)]
    pub s: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    #[schema(value_type = Option<f64>)]
    pub i: Option<f64>,
    #[serde(default)]
    #[schema(nullable = true)]
    pub units: Option<AttributeUnits>,
}

impl SkuRequest {
    fn into_new_sku(self) -> Result<NewSku, ValidationError> {
        let attributes = match self.units.unwrap_or_default() {
            AttributeUnits::Raw => normalize(&RawAttributes {
                f: self.f,
                w: self.w,
                s: self.s,
                i: self.i,
            }),
            AttributeUnits::Normalized => Attributes::new(
                self.f.unwrap_or(0.0),
                self.w.unwrap_or(0.0),
                self.s.unwrap_or(0.0),
                self.i.unwrap_or(0.0),
            )?,
        };
        NewSku::new(&self.sku_code, self.product_name.as_deref(), attributes)
    }
}

/// Request structure for the optimize endpoint.
#[derive(Deserialize, Default, ToSchema)]
pub struct OptimizeRequest {
    #[serde(default)]
    #[schema(nullable = true, max_length = 600)]
    pub instructions: Option<String>,
}

/// Layout payload for the warehouse diagram.
///
/// # Fields
/// * `warehouse` - Footprint, zone bands and rack metadata
/// * `placements` - Placed SKUs in zone order, then slot order
/// * `counts` - SKUs that targeted each zone, overflow included
/// * `dropped` - SKUs without a cell
/// * `capacity_per_zone` - Cells per zone
#[derive(Serialize, ToSchema)]
pub struct LayoutResponse {
    pub warehouse: WarehouseLayout,
    pub placements: Vec<Placement>,
    pub counts: BTreeMap<ZoneLabel, usize>,
    pub dropped: Vec<DroppedSku>,
    pub capacity_per_zone: usize,
}

impl LayoutResponse {
    fn from_plan(plan: &LayoutPlan, layout: &LayoutConfig) -> Self {
        Self {
            warehouse: layout.warehouse().clone(),
            placements: plan.placements.clone(),
            counts: plan.counts.clone(),
            dropped: plan.dropped.iter().map(DroppedSku::from).collect(),
            capacity_per_zone: layout.geometry().capacity(),
        }
    }
}

/// SKU left out of the layout.
#[derive(Serialize, ToSchema)]
pub struct DroppedSku {
    pub sku_code: String,
    pub priority: f64,
    pub zone: ZoneLabel,
    pub reason_code: String,
    pub reason: String,
}

impl From<&UnplacedSku> for DroppedSku {
    fn from(entry: &UnplacedSku) -> Self {
        Self {
            sku_code: entry.sku_code.clone(),
            priority: entry.priority,
            zone: entry.zone,
            reason_code: entry.reason.code().to_string(),
            reason: entry.reason.to_string(),
        }
    }
}

/// Layout payload extended by the advisor's answer.
#[derive(Serialize, ToSchema)]
pub struct OptimizeResponse {
    #[serde(flatten)]
    pub layout: LayoutResponse,
    pub assistant_summary: String,
    pub assistant_reassignments: Vec<Reassignment>,
}

/// Live priority preview for raw attribute input.
#[derive(Serialize, ToSchema)]
pub struct PriorityPreview {
    pub normalized: Attributes,
    pub priority: f64,
    pub zone: ZoneLabel,
}

#[derive(Serialize, ToSchema)]
struct StatusResponse {
    status: String,
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<usize>,
}

/// Result of loading the demo catalog.
#[derive(Serialize, ToSchema)]
pub struct SampleResponse {
    pub added: Vec<ScoredSku>,
    pub skipped: usize,
}

#[derive(Serialize, ToSchema)]
struct ErrorResponse {
    error: String,
    details: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: details.into(),
        }
    }
}

fn error_response(
    status: StatusCode,
    error: impl Into<String>,
    details: impl Into<String>,
) -> Response {
    (status, Json(ErrorResponse::new(error, details))).into_response()
}

fn json_deserialize_error(err: JsonRejection) -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Invalid JSON data",
        err.to_string(),
    )
}

fn validation_error(details: impl Into<String>) -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Invalid input data",
        details,
    )
}

fn registry_error(err: RegistryError) -> Response {
    match err {
        RegistryError::DuplicateSku(_) => {
            error_response(StatusCode::CONFLICT, "SKU code already exists", err.to_string())
        }
        RegistryError::NotFound(_) => {
            error_response(StatusCode::NOT_FOUND, "SKU not found", err.to_string())
        }
        RegistryError::Invalid(inner) => validation_error(inner.to_string()),
    }
}

fn parse_sku_request(payload: Result<Json<SkuRequest>, JsonRejection>) -> Result<NewSku, Response> {
    let Json(payload) = payload.map_err(json_deserialize_error)?;
    payload
        .into_new_sku()
        .map_err(|err| validation_error(err.to_string()))
}

fn parse_sku_id(id: Result<Path<u64>, PathRejection>) -> Result<u64, Response> {
    id.map(|Path(id)| id)
        .map_err(|err| validation_error(format!("Invalid SKU id: {}", err)))
}

/// Applies a command and persists the collection when a data file is configured.
async fn apply_command(state: &ApiState, command: Command) -> Result<Outcome, RegistryError> {
    let mut workspace = state.workspace.lock().await;
    let outcome = workspace.apply(command)?;
    if let Some(path) = &state.data_file {
        if let Err(err) = snapshot::save(path, workspace.registry()).await {
            error!("Could not write snapshot {}: {}", path.display(), err);
        }
    }
    Ok(outcome)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handle_add_sku,
        handle_list_skus,
        handle_update_sku,
        handle_delete_sku,
        handle_clear_skus,
        handle_load_samples,
        handle_visualize,
        handle_optimize,
        handle_priority_preview
    ),
    components(
        schemas(
            SkuRequest,
            AttributeUnits,
            ScoredSku,
            Attributes,
            RawAttributes,
            ZoneLabel,
            OptimizeRequest,
            LayoutResponse,
            OptimizeResponse,
            Placement,
            DroppedSku,
            WarehouseLayout,
            ZoneBand,
            RackSpec,
            Reassignment,
            PriorityPreview,
            StatusResponse,
            SampleResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "sku", description = "SKU registration and listing"),
        (name = "layout", description = "Zone layout and optimization")
    )
)]
struct ApiDoc;

/// Builds the router with all API routes (and the web page when enabled).
pub fn router(state: ApiState, serve_web_ui: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        // API endpoints
        .route("/api/sku/add", post(handle_add_sku))
        .route("/api/sku/list", get(handle_list_skus))
        .route("/api/sku", delete(handle_clear_skus))
        .route("/api/sku/sample", post(handle_load_samples))
        .route("/api/sku/{id}", put(handle_update_sku).delete(handle_delete_sku))
        .route("/api/sku/visualize", get(handle_visualize))
        .route("/api/sku/optimize", post(handle_optimize))
        .route("/api/priority/preview", post(handle_priority_preview))
        // API documentation
        .route("/docs/openapi.json", get(serve_openapi_json))
        .route("/docs", get(serve_openapi_ui));

    if serve_web_ui {
        app = app
            .route("/", get(serve_index))
            .route("/{*path}", get(serve_static));
    }

    app.layer(cors).with_state(state)
}

/// Starts the API server.
///
/// Blocks until the server is terminated.
pub async fn start_api_server(config: ApiConfig, state: ApiState) {
    let app = router(state, config.serve_web_ui());

    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("❌ Could not bind API server to {}: {}", addr, err);
            return;
        }
    };

    let display_host = config.display_host().to_string();
    info!("🚀 Server running on http://{}:{}", display_host, config.port());
    if config.binds_to_all_interfaces() && config.uses_default_host() {
        info!("💡 Local access: http://localhost:{}", config.port());
    }
    info!("📦 API Endpoints:");
    info!("   - POST   /api/sku/add");
    info!("   - GET    /api/sku/list");
    info!("   - PUT    /api/sku/{{id}}");
    info!("   - DELETE /api/sku/{{id}}");
    info!("   - DELETE /api/sku");
    info!("   - POST   /api/sku/sample");
    info!("   - GET    /api/sku/visualize");
    info!("   - POST   /api/sku/optimize");
    info!("   - POST   /api/priority/preview");
    info!("📑 Documentation: GET /docs, GET /docs/openapi.json");
    if config.serve_web_ui() {
        info!("🌐 Web-UI: http://{}:{}", display_host, config.port());
    }

    if let Err(err) = axum::serve(listener, app).await {
        error!("❌ API server terminated with an error: {err}");
    }
}

/// Handler for POST /api/sku/add.
///
/// Registers a SKU and returns it with its priority and zone.
#[utoipa::path(
    post,
    path = "/api/sku/add",
    request_body = SkuRequest,
    responses(
        (status = 200, description = "SKU registered", body = ScoredSku),
        (status = CONFLICT, description = "SKU code already exists", body = ErrorResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Invalid SKU data", body = ErrorResponse)
    ),
    tag = "sku"
)]
async fn handle_add_sku(
    State(state): State<ApiState>,
    payload: Result<Json<SkuRequest>, JsonRejection>,
) -> Response {
    let sku = match parse_sku_request(payload) {
        Ok(sku) => sku,
        Err(response) => return response,
    };

    match apply_command(&state, Command::Add(sku)).await {
        Ok(Outcome::Added(record)) => {
            let scored = score(&record);
            info!(
                "SKU {} added: priority {:.4}, zone {}",
                scored.sku_code, scored.priority, scored.zone
            );
            (StatusCode::OK, Json(scored)).into_response()
        }
        Ok(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unexpected outcome",
            "add did not report an added SKU",
        ),
        Err(err) => registry_error(err),
    }
}

/// Handler for GET /api/sku/list.
///
/// Returns all SKUs ordered by descending priority.
#[utoipa::path(
    get,
    path = "/api/sku/list",
    responses((status = 200, description = "Ranked SKUs", body = [ScoredSku])),
    tag = "sku"
)]
async fn handle_list_skus(State(state): State<ApiState>) -> Response {
    let ranked = state.workspace.lock().await.ranked();
    (StatusCode::OK, Json(ranked)).into_response()
}

/// Handler for PUT /api/sku/{id}.
#[utoipa::path(
    put,
    path = "/api/sku/{id}",
    params(("id" = u64, Path, description = "SKU id")),
    request_body = SkuRequest,
    responses(
        (status = 200, description = "SKU updated", body = ScoredSku),
        (status = NOT_FOUND, description = "Unknown SKU id", body = ErrorResponse),
        (status = CONFLICT, description = "SKU code already exists", body = ErrorResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Invalid SKU data", body = ErrorResponse)
    ),
    tag = "sku"
)]
async fn handle_update_sku(
    State(state): State<ApiState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<SkuRequest>, JsonRejection>,
) -> Response {
    let id = match parse_sku_id(id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let sku = match parse_sku_request(payload) {
        Ok(sku) => sku,
        Err(response) => return response,
    };

    match apply_command(&state, Command::Update { id, sku }).await {
        Ok(Outcome::Updated(record)) => {
            info!("SKU {} (id {}) updated", record.sku_code, record.id);
            (StatusCode::OK, Json(score(&record))).into_response()
        }
        Ok(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unexpected outcome",
            "update did not report an updated SKU",
        ),
        Err(err) => registry_error(err),
    }
}

/// Handler for DELETE /api/sku/{id}.
#[utoipa::path(
    delete,
    path = "/api/sku/{id}",
    params(("id" = u64, Path, description = "SKU id")),
    responses(
        (status = 200, description = "SKU deleted", body = StatusResponse),
        (status = NOT_FOUND, description = "Unknown SKU id", body = ErrorResponse)
    ),
    tag = "sku"
)]
async fn handle_delete_sku(
    State(state): State<ApiState>,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let id = match parse_sku_id(id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match apply_command(&state, Command::Delete(id)).await {
        Ok(_) => {
            info!("SKU id {} deleted", id);
            let body = StatusResponse {
                status: "ok".to_string(),
                detail: "deleted".to_string(),
                deleted: None,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => registry_error(err),
    }
}

/// Handler for DELETE /api/sku.
///
/// Removes every SKU.
#[utoipa::path(
    delete,
    path = "/api/sku",
    responses((status = 200, description = "All SKUs deleted", body = StatusResponse)),
    tag = "sku"
)]
async fn handle_clear_skus(State(state): State<ApiState>) -> Response {
    match apply_command(&state, Command::Clear).await {
        Ok(Outcome::Cleared(count)) => {
            info!("All SKUs deleted ({} removed)", count);
            let body = StatusResponse {
                status: "ok".to_string(),
                detail: "deleted".to_string(),
                deleted: Some(count),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Ok(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unexpected outcome",
            "clear did not report a count",
        ),
        Err(err) => registry_error(err),
    }
}

/// Handler for POST /api/sku/sample.
///
/// Adds the demo catalog; codes that already exist are left untouched.
#[utoipa::path(
    post,
    path = "/api/sku/sample",
    responses((status = 200, description = "Demo SKUs added", body = SampleResponse)),
    tag = "sku"
)]
async fn handle_load_samples(State(state): State<ApiState>) -> Response {
    let skus = match sample_skus() {
        Ok(skus) => skus,
        Err(err) => {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Demo catalog is invalid",
                err.to_string(),
            );
        }
    };
    let offered = skus.len();

    match apply_command(&state, Command::AddMissing(skus)).await {
        Ok(Outcome::AddedMany(records)) => {
            let skipped = offered - records.len();
            info!("Demo catalog loaded: {} added, {} skipped", records.len(), skipped);
            let body = SampleResponse {
                added: records.iter().map(score).collect(),
                skipped,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Ok(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unexpected outcome",
            "demo catalog did not report added SKUs",
        ),
        Err(err) => registry_error(err),
    }
}

/// Handler for GET /api/sku/visualize.
///
/// Packs the ranked SKUs into the zone grid by their scored zones.
#[utoipa::path(
    get,
    path = "/api/sku/visualize",
    responses((status = 200, description = "Zone layout", body = LayoutResponse)),
    tag = "layout"
)]
async fn handle_visualize(State(state): State<ApiState>) -> Response {
    let plan = state.workspace.lock().await.layout(&state.layout);
    let response = LayoutResponse::from_plan(&plan, &state.layout);
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for POST /api/sku/optimize.
///
/// Asks the advisor for zone reassignments and packs the SKUs with them applied.
#[utoipa::path(
    post,
    path = "/api/sku/optimize",
    request_body = OptimizeRequest,
    responses(
        (status = 200, description = "Zone layout with advisor suggestions", body = OptimizeResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Invalid request", body = ErrorResponse)
    ),
    tag = "layout"
)]
async fn handle_optimize(
    State(state): State<ApiState>,
    payload: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(err) => return json_deserialize_error(err),
    };
    let instructions = request
        .instructions
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty());
    if let Some(text) = instructions {
        if text.chars().count() > MAX_INSTRUCTIONS_LEN {
            return validation_error(format!(
                "Instructions must not exceed {} characters",
                MAX_INSTRUCTIONS_LEN
            ));
        }
    }

    let ranked = state.workspace.lock().await.ranked();
    info!("Optimization requested for {} SKUs", ranked.len());

    let suggestion = state
        .advisor
        .suggest_reassignments(&ranked, instructions)
        .await;
    let overrides = suggestion.overrides();
    let plan = pack(
        &ranked,
        state.layout.warehouse(),
        state.layout.geometry(),
        &overrides,
    );
    info!(
        "Optimization result: {} placed, {} dropped, {} reassignments suggested",
        plan.placed_count(),
        plan.dropped_count(),
        suggestion.reassignments.len()
    );

    let response = OptimizeResponse {
        layout: LayoutResponse::from_plan(&plan, &state.layout),
        assistant_summary: suggestion.summary,
        assistant_reassignments: suggestion.reassignments,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for POST /api/priority/preview.
///
/// Normalizes raw attributes and reports the resulting priority and zone.
#[utoipa::path(
    post,
    path = "/api/priority/preview",
    request_body = RawAttributes,
    responses(
        (status = 200, description = "Normalized attributes with priority", body = PriorityPreview),
        (status = UNPROCESSABLE_ENTITY, description = "Invalid JSON", body = ErrorResponse)
    ),
    tag = "sku"
)]
async fn handle_priority_preview(payload: Result<Json<RawAttributes>, JsonRejection>) -> Response {
    let Json(raw) = match payload {
        Ok(payload) => payload,
        Err(err) => return json_deserialize_error(err),
    };
    let normalized = normalize(&raw);
    let priority = priority(&normalized);
    let preview = PriorityPreview {
        normalized,
        priority,
        zone: zone_for_priority(priority),
    };
    (StatusCode::OK, Json(preview)).into_response()
}

/// Serves the index.html main page
async fn serve_index() -> Response {
    match WebAssets::get("index.html") {
        Some(content) => Html(content.data).into_response(),
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

/// Serves static assets (JS, CSS, etc.)
async fn serve_static(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    match WebAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

async fn serve_openapi_json() -> impl IntoResponse {
    Json(openapi_doc())
}

async fn serve_openapi_ui() -> impl IntoResponse {
    Html(SWAGGER_UI_HTML)
}
