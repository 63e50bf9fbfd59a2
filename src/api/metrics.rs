use actix_web::HttpResponse;
use std::sync::atomic::{AtomicU64, Ordering};

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static FAILURE_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

/// Counts failure envelopes (they are still HTTP 200)
pub fn increment_failure_count() {
    FAILURE_COUNT.fetch_add(1, Ordering::Relaxed);
}

fn render(requests: u64, failures: u64) -> String {
    format!(
        "# HELP bookmark_requests_total Total number of bookmark requests\n\
         # TYPE bookmark_requests_total counter\n\
         bookmark_requests_total {}\n\
         \n\
         # HELP bookmark_failures_total Bookmark requests answered with result=false\n\
         # TYPE bookmark_failures_total counter\n\
         bookmark_failures_total {}\n",
        requests, failures
    )
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Prometheus text metrics", body = String, content_type = "text/plain")
    )
)]
pub async fn get_metrics() -> HttpResponse {
    let requests = REQUEST_COUNT.load(Ordering::Relaxed);
    let failures = FAILURE_COUNT.load(Ordering::Relaxed);

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(render(requests, failures))
}
