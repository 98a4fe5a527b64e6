use axum::{
    body::Bytes,
    extract::Query,
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use converters::{handle_convert, ApiError, ConvertQuery, ConvertRequest, Reply};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

pub const CONVERT_PATH: &str = "/api/v1/convert";

/// Every response allows any origin. OPTIONS is not answered by the layer,
/// so it reaches the handler like any other unsupported method.
pub fn app() -> Router {
    Router::new()
        .route(CONVERT_PATH, any(convert))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}

/// Query pairs in order, with repeats kept for first-value lookup.
fn query_pairs(uri: &Uri) -> Vec<(String, String)> {
    match Query::<Vec<(String, String)>>::try_from_uri(uri) {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            tracing::warn!(error = %e.body_text(), "unreadable query string");
            Vec::new()
        }
    }
}

/// Converter reply rendered as an `application/json` response.
struct JsonReply(Reply);

impl IntoResponse for JsonReply {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, "application/json")], self.0.body).into_response()
    }
}

async fn convert(method: Method, uri: Uri, body: Bytes) -> JsonReply {
    let req = if method == Method::GET {
        ConvertRequest::from_query(ConvertQuery::from_pairs(query_pairs(&uri)))
    } else if method == Method::POST {
        ConvertRequest::from_json(&body)
    } else {
        Err(ApiError::MethodNotAllowed)
    };
    JsonReply(req.and_then(handle_convert).into())
}
