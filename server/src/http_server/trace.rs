use tower_http::trace::{MakeSpan, OnResponse};
use tracing::Level;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Tracer;

impl<Body> MakeSpan<Body> for Tracer {
    fn make_span(&mut self, request: &http::Request<Body>) -> tracing::Span {
        tracing::span!(
            Level::INFO,
            "request",
            method = %request.method(),
            route = http_route(request),
            path = %request.uri().path(),
            query = request.uri().query(),
            user_agent = request.headers().get("user-agent").and_then(|h| h.to_str().ok()),
            referer = request.headers().get("referer").and_then(|h| h.to_str().ok()),

            status = tracing::field::Empty,
        )
    }
}

impl<Body> OnResponse<Body> for Tracer {
    fn on_response(
        self,
        response: &http::Response<Body>,
        latency: std::time::Duration,
        span: &tracing::Span,
    ) {
        let status = response.status().as_u16();
        span.record("status", status);

        tracing::event!(
            Level::INFO,
            status,
            latency_ms = latency.as_millis(),
            "request served"
        );
    }
}

// The matched route pattern, not the concrete path, so `/recipes/38` and
// `/recipes/39` land in the same bucket.
fn http_route<B>(request: &http::Request<B>) -> &str {
    match request.extensions().get::<axum::extract::MatchedPath>() {
        Some(matched) => matched.as_str(),
        None => "",
    }
}
