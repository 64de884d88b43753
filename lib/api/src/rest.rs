use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use lsmsearch_core::{Error, MatchedProperty, RecordKind, SearchEngine, SearchResult};
use lsmsearch_storage::StorageManager;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, warn};

/// Shared state handed to every handler
pub struct AppState {
    pub storage: Arc<StorageManager>,
    pub engine: SearchEngine<Arc<StorageManager>>,
}

impl AppState {
    pub fn new(storage: Arc<StorageManager>) -> Self {
        Self {
            engine: SearchEngine::new(storage.clone()),
            storage,
        }
    }
}

#[derive(Deserialize)]
struct SearchParams {
    input: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchHit<'a> {
    id: &'a str,
    entity_type: RecordKind,
    total_weight: u32,
    matched_properties: &'a [MatchedProperty],
    entity: &'a serde_json::Value,
}

impl<'a> From<&'a SearchResult> for SearchHit<'a> {
    fn from(result: &'a SearchResult) -> Self {
        Self {
            id: &result.id,
            entity_type: result.entity_type,
            total_weight: result.total_weight(),
            matched_properties: &result.matched_properties,
            entity: &result.entity,
        }
    }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        storage: Arc<StorageManager>,
        host: String,
        port: u16,
    ) -> std::io::Result<()> {
        let state = web::Data::new(AppState::new(storage));

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(state.clone())
                .configure(RestApi::configure)
        })
        .bind((host, port))?
        .run()
        .await
    }

    /// Register the `/api/lsm` routes; expects `web::Data<AppState>`
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(
            web::scope("/api/lsm")
                .route("/search", web::get().to(search))
                .route("/data", web::get().to(get_data))
                .route("/status", web::get().to(get_status))
                .route("/reload", web::post().to(reload)),
        );
    }
}

fn error_response(e: &Error) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        Error::EmptyQuery => HttpResponse::BadRequest().json(body),
        Error::DatasetUnavailable(_) | Error::Io(_) | Error::Serialization(_) | Error::Storage(_) => {
            warn!("Dataset failure: {}", e);
            HttpResponse::ServiceUnavailable().json(body)
        }
        Error::UnknownRecordKind(_) | Error::UnknownRelationship(_) | Error::UnweightedField { .. } => {
            error!("Weight catalog misconfigured: {}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

async fn search(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> ActixResult<HttpResponse> {
    let input = match params.input.as_deref() {
        Some(input) => input,
        None => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Missing 'input' query parameter"
            })));
        }
    };

    match state.engine.search(input) {
        Ok(results) => {
            let hits: Vec<SearchHit<'_>> = results.iter().map(SearchHit::from).collect();
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "result": hits
            })))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

async fn get_data(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.storage.load() {
        Ok(data) => Ok(HttpResponse::Ok().json(&*data)),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn get_status(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.storage.status()))
}

async fn reload(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.storage.reload() {
        Ok(_) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": state.storage.status()
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}
