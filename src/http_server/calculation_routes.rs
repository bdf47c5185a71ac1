//! Calculation HTTP Routes
//!
//! The operation endpoints and CRUD access to the calculation history.
//!
//! Every operation endpoint runs the same pipeline, parameterized by the
//! operation the path names: parse body, validate operands, evaluate,
//! persist best-effort, respond with the result. Persistence failures
//! after a successful evaluation are logged and swallowed; the computed
//! result is the primary deliverable.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::arithmetic::{self, Operation};
use crate::context::AppContext;
use crate::observability::Logger;
use crate::service::CalculationService;
use crate::store::{CalculationDraft, CalculationRecord, StoreError};
use crate::validation;

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Calculation state shared across handlers
pub struct CalculationState {
    pub service: CalculationService,
    pub logger: Logger,
}

impl CalculationState {
    pub fn from_context(ctx: &AppContext) -> Self {
        Self {
            service: CalculationService::new(ctx.store.clone(), ctx.logger.clone()),
            logger: ctx.logger.clone(),
        }
    }
}

// ==================
// Request/Response Types
// ==================

/// Body of an operation request.
///
/// Operands are decoded leniently: a missing field, `null`, or a
/// non-numeric JSON value all land as `None` so the validation unit can
/// answer with the tailored 400 message instead of a decode rejection.
#[derive(Debug, Deserialize)]
pub struct OperationRequest {
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub number1: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub number2: Option<f64>,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: f64,
}

/// Body of a record update: full replace of the mutable fields. The
/// submitted `result` is stored verbatim, never recomputed.
#[derive(Debug, Deserialize)]
pub struct UpdateCalculationRequest {
    pub operation: String,
    pub number1: f64,
    #[serde(default)]
    pub number2: Option<f64>,
    pub result: f64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ==================
// Routes
// ==================

/// Create the calculation routes
pub fn calculation_routes(state: Arc<CalculationState>) -> Router {
    Router::new()
        .route("/add", post(add))
        .route("/subtract", post(subtract))
        .route("/multiply", post(multiply))
        .route("/divide", post(divide))
        .route("/exponentiation", post(exponentiation))
        .route("/modulo", post(modulo))
        .route("/square-root", post(square_root))
        .route("/calculations", get(list_calculations))
        .route(
            "/calculations/:id",
            get(get_calculation)
                .put(update_calculation)
                .delete(delete_calculation),
        )
        .with_state(state)
}

// ==================
// Operation Pipeline
// ==================

/// The single operation pipeline: validate, evaluate, persist
/// best-effort, respond.
async fn run_operation(
    operation: Operation,
    state: &CalculationState,
    req: OperationRequest,
) -> ApiResult<Json<ResultResponse>> {
    // The path names the operation; a body-supplied name must still be a
    // known one.
    if let Some(name) = req.operation.as_deref() {
        if let Err(err) = name.parse::<Operation>() {
            return Err(rejected(state, operation, err.into()));
        }
    }

    let (number1, number2) = if operation.is_unary() {
        match validation::validate_unary(req.number1) {
            Ok(n1) => (n1, None),
            Err(err) => return Err(rejected(state, operation, err.into())),
        }
    } else {
        match validation::validate_binary(req.number1, req.number2) {
            Ok((n1, n2)) => (n1, Some(n2)),
            Err(err) => return Err(rejected(state, operation, err.into())),
        }
    };

    let result = arithmetic::evaluate(operation, number1, number2)
        .map_err(|err| rejected(state, operation, err.into()))?;

    log_requested(&state.logger, operation, number1, number2, result);

    // Best-effort persistence: the result is returned either way.
    state
        .service
        .record(CalculationDraft::new(operation, number1, number2, result))
        .await;

    Ok(Json(ResultResponse { result }))
}

/// Log and pass through a 400-class rejection.
fn rejected(state: &CalculationState, operation: Operation, err: ApiError) -> ApiError {
    state.logger.error(
        "operation_rejected",
        &[
            ("error", &err.to_string()),
            ("operation", operation.as_str()),
        ],
    );
    err
}

fn log_requested(
    logger: &Logger,
    operation: Operation,
    number1: f64,
    number2: Option<f64>,
    result: f64,
) {
    let number1 = number1.to_string();
    let result = result.to_string();
    match number2 {
        Some(n2) => {
            let number2 = n2.to_string();
            logger.info(
                "operation_requested",
                &[
                    ("number1", &number1),
                    ("number2", &number2),
                    ("operation", operation.as_str()),
                    ("result", &result),
                ],
            );
        }
        None => {
            logger.info(
                "operation_requested",
                &[
                    ("number1", &number1),
                    ("operation", operation.as_str()),
                    ("result", &result),
                ],
            );
        }
    }
}

// ==================
// Operation Handlers
// ==================

async fn add(
    State(state): State<Arc<CalculationState>>,
    Json(req): Json<OperationRequest>,
) -> ApiResult<Json<ResultResponse>> {
    run_operation(Operation::Add, &state, req).await
}

async fn subtract(
    State(state): State<Arc<CalculationState>>,
    Json(req): Json<OperationRequest>,
) -> ApiResult<Json<ResultResponse>> {
    run_operation(Operation::Subtract, &state, req).await
}

async fn multiply(
    State(state): State<Arc<CalculationState>>,
    Json(req): Json<OperationRequest>,
) -> ApiResult<Json<ResultResponse>> {
    run_operation(Operation::Multiply, &state, req).await
}

async fn divide(
    State(state): State<Arc<CalculationState>>,
    Json(req): Json<OperationRequest>,
) -> ApiResult<Json<ResultResponse>> {
    run_operation(Operation::Divide, &state, req).await
}

async fn exponentiation(
    State(state): State<Arc<CalculationState>>,
    Json(req): Json<OperationRequest>,
) -> ApiResult<Json<ResultResponse>> {
    run_operation(Operation::Exponentiation, &state, req).await
}

async fn modulo(
    State(state): State<Arc<CalculationState>>,
    Json(req): Json<OperationRequest>,
) -> ApiResult<Json<ResultResponse>> {
    run_operation(Operation::Modulo, &state, req).await
}

async fn square_root(
    State(state): State<Arc<CalculationState>>,
    Json(req): Json<OperationRequest>,
) -> ApiResult<Json<ResultResponse>> {
    run_operation(Operation::SquareRoot, &state, req).await
}

// ==================
// CRUD Handlers
// ==================

/// Map a store error: a miss is the 400 not-found, anything else is
/// logged and surfaced as a 500 with the endpoint's generic message.
fn storage_error(
    state: &CalculationState,
    action: &str,
    err: StoreError,
    message: &str,
) -> ApiError {
    if err.is_fault() {
        state.logger.error(
            "store_fault",
            &[("action", action), ("error", &err.to_string())],
        );
        ApiError::Storage(message.to_string())
    } else {
        ApiError::NotFound
    }
}

async fn list_calculations(
    State(state): State<Arc<CalculationState>>,
) -> ApiResult<Json<Vec<CalculationRecord>>> {
    state
        .service
        .list_all()
        .await
        .map(Json)
        .map_err(|err| storage_error(&state, "list", err, "Failed to retrieve calculations"))
}

async fn get_calculation(
    State(state): State<Arc<CalculationState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<CalculationRecord>> {
    state
        .service
        .get(&id)
        .await
        .map(Json)
        .map_err(|err| storage_error(&state, "get", err, "Error retrieving calculation."))
}

async fn update_calculation(
    State(state): State<Arc<CalculationState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCalculationRequest>,
) -> ApiResult<Json<CalculationRecord>> {
    // Stored operation names stay within the enumerated set
    let operation: Operation = req.operation.parse()?;
    let fields = CalculationDraft::new(operation, req.number1, req.number2, req.result);

    state
        .service
        .update(&id, fields)
        .await
        .map(Json)
        .map_err(|err| storage_error(&state, "update", err, "Error updating calculation."))
}

async fn delete_calculation(
    State(state): State<Arc<CalculationState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .service
        .delete(&id)
        .await
        .map(|_| {
            Json(MessageResponse {
                message: "Calculation deleted",
            })
        })
        .map_err(|err| storage_error(&state, "delete", err, "Error deleting calculation"))
}
