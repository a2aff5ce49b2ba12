use crate::config::{AllowedOrigins, ApiConfig};
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use ddix_core::{Error, ModelName};
use ddix_model::Predictor;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Deserialize)]
struct PredictRequest {
    drug1: String,
    drug2: String,
    #[serde(default = "default_model")]
    model: String,
}

fn default_model() -> String {
    ModelName::default().as_str().to_string()
}

pub struct RestApi;

impl RestApi {
    pub async fn start(predictor: Arc<Predictor>, config: ApiConfig) -> std::io::Result<()> {
        let origins = config.origins();
        info!("CORS origins: {:?}", origins);

        HttpServer::new(move || {
            App::new()
                .wrap(Self::cors(&origins))
                .app_data(web::Data::new(predictor.clone()))
                .configure(Self::routes)
        })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
    }

    /// CORS middleware for an already validated origin policy
    pub fn cors(origins: &AllowedOrigins) -> Cors {
        let cors = match origins {
            AllowedOrigins::Any => Cors::default().allow_any_origin(),
            AllowedOrigins::List(list) => list
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
        };
        cors.allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600)
    }

    /// Route table, shared by the server and tests
    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/", web::get().to(health))
            .route("/drugs", web::get().to(list_drugs))
            .route("/predict", web::post().to(predict));
    }
}

fn error_response(e: &Error) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        Error::DrugNotFound(_) => HttpResponse::NotFound().json(body),
        Error::InvalidModel(_) => HttpResponse::BadRequest().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

async fn health(predictor: web::Data<Arc<Predictor>>) -> ActixResult<HttpResponse> {
    let store = predictor.store();
    let graphsage = predictor.adapter(ModelName::Graphsage).handle();
    let edge_predictor = predictor.adapter(ModelName::EdgePredictor).handle();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "message": "Drug Interaction Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "models": {
            "graphsage": graphsage.is_loaded(),
            "edge_predictor": edge_predictor.is_loaded(),
        },
        "model_states": {
            "graphsage": graphsage.state(),
            "edge_predictor": edge_predictor.state(),
        },
        "data_loaded": store.is_loaded(),
        "total_drugs": store.len(),
        "feature_dim": store.dim(),
    })))
}

async fn list_drugs(predictor: web::Data<Arc<Predictor>>) -> ActixResult<HttpResponse> {
    let store = predictor.store();
    if !store.is_loaded() {
        return Ok(error_response(&Error::StoreUninitialized));
    }
    Ok(HttpResponse::Ok().json(store.names()))
}

async fn predict(
    predictor: web::Data<Arc<Predictor>>,
    req: web::Json<PredictRequest>,
) -> ActixResult<HttpResponse> {
    let req = req.into_inner();
    debug!("predict {} + {} with {}", req.drug1, req.drug2, req.model);

    let predictor = predictor.get_ref().clone();
    let outcome =
        web::block(move || predictor.predict(&req.drug1, &req.drug2, &req.model)).await;

    match outcome {
        Ok(Ok(prediction)) => Ok(HttpResponse::Ok().json(prediction)),
        Ok(Err(e)) => Ok(error_response(&e)),
        Err(e) => {
            error!("Prediction task failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, http::StatusCode, test};
    use ddix_core::FeatureVector;
    use ddix_model::ModelHandle;
    use ddix_storage::FeatureStore;

    fn predictor(store: FeatureStore) -> Arc<Predictor> {
        Arc::new(Predictor::new(
            Arc::new(store),
            ModelHandle::Unloaded,
            ModelHandle::LoadedUnusable,
        ))
    }

    fn sample_store() -> FeatureStore {
        FeatureStore::from_entries(vec![
            ("Aspirin".to_string(), FeatureVector::new(vec![1.0, 0.0, 0.0])),
            ("Ibuprofen".to_string(), FeatureVector::new(vec![0.0, 1.0, 0.0])),
        ])
        .unwrap()
    }

    macro_rules! app {
        ($predictor:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($predictor))
                    .configure(RestApi::routes),
            )
            .await
        };
    }

    async fn health_with_origins(origins: &[&str], request_origin: &str) -> StatusCode {
        let config = ApiConfig {
            allowed_origins: origins.iter().map(|s| s.to_string()).collect(),
            ..ApiConfig::default()
        };
        let app = test::init_service(
            App::new()
                .wrap(RestApi::cors(&config.origins()))
                .app_data(web::Data::new(predictor(sample_store())))
                .configure(RestApi::routes),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, request_origin))
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_cors_wildcard_serves_any_origin() {
        assert_eq!(
            health_with_origins(&["*"], "https://anywhere.example").await,
            StatusCode::OK
        );
    }

    #[actix_web::test]
    async fn test_cors_bad_origin_does_not_break_startup() {
        let origins = ["http://bad host", "https://ok.example"];
        assert_eq!(health_with_origins(&origins, "https://ok.example").await, StatusCode::OK);
        assert_eq!(health_with_origins(&origins, "http://localhost:3000").await, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_health_reports_state() {
        let app = app!(predictor(sample_store()));
        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["models"]["graphsage"], false);
        assert_eq!(body["models"]["edge_predictor"], true);
        assert_eq!(body["model_states"]["edge_predictor"], "unusable");
        assert_eq!(body["data_loaded"], true);
        assert_eq!(body["total_drugs"], 2);
        assert_eq!(body["feature_dim"], 3);
    }

    #[actix_web::test]
    async fn test_drugs_in_load_order() {
        let app = app!(predictor(sample_store()));
        let req = test::TestRequest::get().uri("/drugs").to_request();
        let body: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, vec!["Aspirin", "Ibuprofen"]);
    }

    #[actix_web::test]
    async fn test_drugs_without_data_is_server_error() {
        let app = app!(predictor(FeatureStore::empty()));
        let req = test::TestRequest::get().uri("/drugs").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_predict_defaults_to_graphsage() {
        let app = app!(predictor(sample_store()));
        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(serde_json::json!({"drug1": "aspirin", "drug2": "Ibuprofen"}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["drug1"], "aspirin");
        assert_eq!(body["interaction_probability"], 0.5);
        assert_eq!(body["risk_level"], "Medium");
        assert_eq!(body["model_used"], "graphsage");
        assert_eq!(
            body["message"],
            "Fallback to cosine similarity (GraphSAGE model not available)"
        );
    }

    #[actix_web::test]
    async fn test_predict_status_codes() {
        let app = app!(predictor(sample_store()));

        let cases = [
            (
                serde_json::json!({"drug1": "Aspirin", "drug2": "Nonexistentium"}),
                StatusCode::NOT_FOUND,
            ),
            (
                serde_json::json!({"drug1": "Aspirin", "drug2": "Ibuprofen", "model": "not_a_model"}),
                StatusCode::BAD_REQUEST,
            ),
            (
                serde_json::json!({"drug1": "Aspirin", "drug2": "Ibuprofen", "model": "edge_predictor"}),
                StatusCode::OK,
            ),
        ];

        for (payload, expected) in cases {
            let req = test::TestRequest::post()
                .uri("/predict")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }
    }

    #[actix_web::test]
    async fn test_predict_not_found_names_drug() {
        let app = app!(predictor(sample_store()));
        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(serde_json::json!({"drug1": "Paracetamol", "drug2": "Aspirin"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "drug not found: Paracetamol");
    }

    #[actix_web::test]
    async fn test_predict_without_data_is_server_error() {
        let app = app!(predictor(FeatureStore::empty()));
        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(serde_json::json!({"drug1": "Aspirin", "drug2": "Ibuprofen"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
