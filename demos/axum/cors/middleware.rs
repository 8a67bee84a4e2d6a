use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use origin_cors::{Evaluation, RequestContext, apply_headers, preflight_response};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let evaluation = state.cors.evaluate(&RequestContext::from_request(&request));

    match evaluation {
        Evaluation::Preflight(result) => preflight_response::<Body>(result),
        Evaluation::Simple(result) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &result.headers);
            response
        }
        Evaluation::NotApplicable => next.run(request).await,
    }
}
