use actix_web::{error::InternalError, error::JsonPayloadError, web, HttpRequest, HttpResponse};
use serde::Serialize;

use crate::{
    api::metrics,
    database::BookmarkStore,
    models::{BookmarkDetails, BookmarkRequest, BookmarkResponse, TokenPath},
    services::bookmark_service,
    utils::{AppError, ErrorBody},
};

/// `{ "result": true }`
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ResultResponse {
    pub result: bool,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct BookmarkListResponse {
    pub result: bool,
    pub bookmarks: Vec<BookmarkResponse>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct BookmarkDetailsResponse {
    pub result: bool,
    pub bookmarks: Vec<BookmarkDetails>,
}

/// `{ "result": false, "error": { "kind", "message" } }`
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct FailureResponse {
    pub result: bool,
    pub error: ErrorBody,
}

/// Routes relative to the mount point (`/bookmarks` in main)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::resource(["", "/"])
                .route(web::post().to(add_bookmark))
                .route(web::delete().to(delete_bookmark)),
        )
        .service(
            web::resource(["/infos/{token}", "/infos/{token}/"])
                .route(web::get().to(get_bookmark_details)),
        )
        .service(web::resource(["/{token}", "/{token}/"]).route(web::get().to(get_bookmarks)));
}

/// Every outcome is HTTP 200; only `result` tells success from failure.
fn failure(e: AppError) -> HttpResponse {
    metrics::increment_failure_count();

    match &e {
        AppError::Database(msg) => log::error!("❌ Bookmark request failed: {}", msg),
        other => log::warn!("⚠️ Bookmark request rejected ({}): {}", other.kind(), other),
    }

    HttpResponse::Ok().json(FailureResponse {
        result: false,
        error: e.to_body(),
    })
}

/// Unparseable bodies get the same envelope as any other validation failure.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    metrics::increment_request_count();
    let message = format!("Invalid request body: {}", err);
    let response = failure(AppError::Validation(message));
    InternalError::from_response(err, response).into()
}

/// POST /bookmarks - Adiciona receita aos favoritos
#[utoipa::path(
    post,
    path = "/bookmarks/",
    tag = "Bookmarks",
    request_body = BookmarkRequest,
    responses(
        (status = 200, description = "Bookmark created", body = ResultResponse),
        (status = 200, description = "Validation, unknown token or database failure", body = FailureResponse)
    )
)]
pub async fn add_bookmark(
    store: web::Data<dyn BookmarkStore>,
    request: web::Json<BookmarkRequest>,
) -> HttpResponse {
    metrics::increment_request_count();
    log::info!("🔖 POST /bookmarks - recipe {}", request.recipe_id);

    match bookmark_service::add_bookmark(store.get_ref(), &request).await {
        Ok(bookmark) => {
            log::info!("✅ Bookmark {} created", bookmark.id);
            HttpResponse::Ok().json(ResultResponse { result: true })
        }
        Err(e) => failure(e),
    }
}

/// GET /bookmarks/{token} - Lista os favoritos do usuário
#[utoipa::path(
    get,
    path = "/bookmarks/{token}",
    tag = "Bookmarks",
    params(TokenPath),
    responses(
        (status = 200, description = "Raw bookmarks in store order", body = BookmarkListResponse),
        (status = 200, description = "Unknown token or database failure", body = FailureResponse)
    )
)]
pub async fn get_bookmarks(
    store: web::Data<dyn BookmarkStore>,
    path: web::Path<TokenPath>,
) -> HttpResponse {
    metrics::increment_request_count();
    log::info!("📋 GET /bookmarks/:token - Listing bookmarks");

    match bookmark_service::list_bookmarks(store.get_ref(), &path).await {
        Ok(bookmarks) => {
            log::info!("✅ Listed {} bookmarks", bookmarks.len());
            HttpResponse::Ok().json(BookmarkListResponse {
                result: true,
                bookmarks,
            })
        }
        Err(e) => failure(e),
    }
}

/// GET /bookmarks/infos/{token} - Favoritos com nome, foto e tags da receita
#[utoipa::path(
    get,
    path = "/bookmarks/infos/{token}",
    tag = "Bookmarks",
    params(TokenPath),
    responses(
        (status = 200, description = "Bookmarks joined with their recipes", body = BookmarkDetailsResponse),
        (status = 200, description = "Unknown token or database failure", body = FailureResponse)
    )
)]
pub async fn get_bookmark_details(
    store: web::Data<dyn BookmarkStore>,
    path: web::Path<TokenPath>,
) -> HttpResponse {
    metrics::increment_request_count();
    log::info!("📋 GET /bookmarks/infos/:token - Listing bookmarks with recipes");

    match bookmark_service::list_bookmark_details(store.get_ref(), &path).await {
        Ok(bookmarks) => {
            log::info!("✅ Listed {} bookmarks with recipe details", bookmarks.len());
            HttpResponse::Ok().json(BookmarkDetailsResponse {
                result: true,
                bookmarks,
            })
        }
        Err(e) => failure(e),
    }
}

/// DELETE /bookmarks - Remove um favorito (sem match também é sucesso)
#[utoipa::path(
    delete,
    path = "/bookmarks/",
    tag = "Bookmarks",
    request_body = BookmarkRequest,
    responses(
        (status = 200, description = "Bookmark removed, or nothing to remove", body = ResultResponse),
        (status = 200, description = "Validation, unknown token or database failure", body = FailureResponse)
    )
)]
pub async fn delete_bookmark(
    store: web::Data<dyn BookmarkStore>,
    request: web::Json<BookmarkRequest>,
) -> HttpResponse {
    metrics::increment_request_count();
    log::info!("🗑️  DELETE /bookmarks - recipe {}", request.recipe_id);

    match bookmark_service::remove_bookmark(store.get_ref(), &request).await {
        Ok(removed) => {
            log::info!("✅ Removed {} bookmark(s)", removed);
            HttpResponse::Ok().json(ResultResponse { result: true })
        }
        Err(e) => failure(e),
    }
}
