use actix_web::{http::StatusCode, web, HttpResponse, Responder, ResponseError};
use crate::core::{PricePredictor, PredictionError, MODEL_ACCURACY, MODEL_NAME};
use crate::models::{
    ErrorResponse, HealthResponse, HomeResponse, LocationsResponse, ModelInfoResponse,
    PredictResponse, PredictionInput,
};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<PricePredictor>,
}

impl ResponseError for PredictionError {
    fn status_code(&self) -> StatusCode {
        match self {
            PredictionError::InvalidLocation(_) => StatusCode::BAD_REQUEST,
            PredictionError::EncodingFailure(_) | PredictionError::ModelInvocationFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.to_string(),
        })
    }
}

/// Configure all prediction-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(home))
        .route("/health", web::get().to(health_check))
        .route("/model-info", web::get().to(model_info))
        .route("/locations", web::get().to(get_locations))
        .route("/predict", web::post().to(predict));
}

/// Liveness marker
async fn home() -> impl Responder {
    HttpResponse::Ok().json(HomeResponse {
        message: "Backend Running 🚀".to_string(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let schema = state.predictor.schema();

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        columns: schema.len(),
        locations: schema.locations().len(),
    })
}

/// Static model description
///
/// GET /model-info
async fn model_info() -> impl Responder {
    HttpResponse::Ok().json(ModelInfoResponse {
        model: MODEL_NAME.to_string(),
        accuracy: MODEL_ACCURACY,
    })
}

/// Valid locations, in column schema order
///
/// GET /locations
async fn get_locations(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(LocationsResponse {
        locations: state.predictor.locations().to_vec(),
    })
}

/// Predict a price
///
/// POST /predict
///
/// Request body:
/// ```json
/// {
///   "area": 1200,
///   "bedrooms": 3,
///   "bathrooms": 2,
///   "location": "Downtown"
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictionInput>,
) -> Result<HttpResponse, PredictionError> {
    let input = req.into_inner();

    match state.predictor.predict(&input) {
        Ok(estimate) => Ok(HttpResponse::Ok().json(PredictResponse::from(estimate))),
        Err(e @ PredictionError::InvalidLocation(_)) => {
            tracing::info!("Rejected prediction for unknown location: {:?}", input.location);
            Err(e)
        }
        Err(e) => {
            tracing::error!("Prediction failed for {:?}: {}", input, e);
            Err(e)
        }
    }
}
