use blogsite_shared::{
    like::{LikeRequest, LikeResponse},
    HttpMethod, RequestError, SubmissionRequest,
};
use gloo_net::http::{Method, Request, RequestBuilder};
use serde_json::Value;
use web_sys::FormData;

fn gloo_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Send an AJAX form and return its JSON body.
///
/// The reply is read as JSON whatever the HTTP status: validation failures
/// typically arrive as 400 with `success: false`.
pub async fn submit_form(request: SubmissionRequest<FormData>) -> Result<Value, RequestError> {
    let url = request.url().to_string();
    let method = request.method();

    let mut builder = RequestBuilder::new(&url).method(gloo_method(method));
    for (name, value) in request.headers() {
        builder = builder.header(name, value);
    }

    let prepared = if method.carries_body() {
        builder.body(request.into_body())
    } else {
        builder.build()
    }
    .map_err(|e| RequestError::Transport(format!("{:?}", e)))?;

    let response = prepared
        .send()
        .await
        .map_err(|e| RequestError::Transport(format!("{:?}", e)))?;

    response
        .json::<Value>()
        .await
        .map_err(|e| RequestError::Malformed(format!("HTTP {}: {:?}", response.status(), e)))
}

/// Toggle the reader's like on a post.
pub async fn toggle_like(request: &LikeRequest) -> Result<LikeResponse, RequestError> {
    let mut builder = Request::post(request.url());
    for (name, value) in request.headers() {
        builder = builder.header(name, &value);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| RequestError::Transport(format!("{:?}", e)))?;

    response
        .json::<LikeResponse>()
        .await
        .map_err(|e| RequestError::Malformed(format!("HTTP {}: {:?}", response.status(), e)))
}
