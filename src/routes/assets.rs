use axum::{
    body::Body,
    extract::Request,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use std::{
    convert::Infallible,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tower::Service;

#[derive(RustEmbed)]
#[folder = "static/"]
#[prefix = "/"]
struct Assets;

/// Serves the stylesheets and images embedded into the binary.
#[derive(Default, Clone)]
pub struct AssetsService;

impl AssetsService {
    pub fn new() -> Self {
        Self
    }
}

impl Service<Request> for AssetsService {
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let path = req.uri().path().to_owned();

        Box::pin(async move {
            let resp = match Assets::get(&path) {
                Some(content) => {
                    let mime = mime_guess::from_path(&path).first_or_octet_stream();

                    (
                        [(header::CONTENT_TYPE, mime.as_ref().to_owned())],
                        Body::from(content.data),
                    )
                        .into_response()
                }
                _ => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
            };

            Ok(resp)
        })
    }
}
