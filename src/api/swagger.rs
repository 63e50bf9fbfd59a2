use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe Bookmarks API",
        version = "1.0.0",
        description = "Bookmarks between users and recipes.\n\n**Authentication:** every bookmark route takes the user's opaque `token` (in the body or the path).\n\n**Envelope:** every bookmark response is HTTP 200. Check `result`; on `false`, `error` carries `kind` (`validation`, `user_not_found`, `database`) and `message`."
    ),
    paths(
        // Bookmarks
        crate::api::bookmarks::add_bookmark,
        crate::api::bookmarks::get_bookmarks,
        crate::api::bookmarks::get_bookmark_details,
        crate::api::bookmarks::delete_bookmark,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::BookmarkRequest,
            crate::models::BookmarkResponse,
            crate::models::BookmarkDetails,
            crate::api::bookmarks::ResultResponse,
            crate::api::bookmarks::BookmarkListResponse,
            crate::api::bookmarks::BookmarkDetailsResponse,
            crate::api::bookmarks::FailureResponse,
            crate::utils::ErrorBody,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Bookmarks", description = "Create, list and delete recipe bookmarks of the user identified by a token."),
        (name = "Health", description = "Health check and metrics."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_bookmark_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        assert!(paths.contains(&"/bookmarks/".to_string()));
        assert!(paths.contains(&"/bookmarks/{token}".to_string()));
        assert!(paths.contains(&"/bookmarks/infos/{token}".to_string()));
        assert!(paths.contains(&"/health".to_string()));
    }
}
