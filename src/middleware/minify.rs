use axum::{body::Body, response::Response};

cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use axum::{body::to_bytes, http::header};
        use std::sync::LazyLock;

        static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_css: true,
            ..Default::default()
        });
    }
}

/// Minifies `text/html` responses in release builds.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    cfg_if::cfg_if! {
        if #[cfg(not(debug_assertions))] {
            let is_html = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.starts_with("text/html"));

            if is_html {
                let (mut parts, body) = response.into_parts();
                let bytes = match to_bytes(body, usize::MAX).await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        tracing::error!(err = %err, "failed to buffer html response");

                        return Response::from_parts(parts, Body::empty());
                    }
                };

                let minified = minify_html::minify(&bytes, &MINIFY_CFG);
                parts.headers.remove(header::CONTENT_LENGTH);

                return Response::from_parts(parts, Body::from(minified));
            }
        }
    }

    response
}
