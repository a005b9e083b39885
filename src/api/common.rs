use serde::Deserialize;

/// `?juntaId=` filter shared by the acciones, multas and prestamos lists.
///
/// The backend routes these as path segments (`/multas/junta/{id}`), so the
/// handlers interpolate the value into the upstream path rather than
/// forwarding a query string.
#[derive(Deserialize)]
pub struct JuntaFilter {
    #[serde(rename = "juntaId")]
    pub junta_id: Option<String>,
}

impl JuntaFilter {
    /// Upstream path for a filtered or unfiltered listing.
    pub fn upstream_path(&self, resource: &str) -> String {
        match &self.junta_id {
            Some(id) => format!("/{}/junta/{}", resource, id),
            None => format!("/{}", resource),
        }
    }
}

pub async fn request_logger(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let request_id = uuid::Uuid::new_v4().simple().to_string();
    let start = std::time::Instant::now();
    let response = next.run(req).await;
    let duration = start.elapsed();
    tracing::info!(
        "[{}] {} {} - status: {}, latency: {}ms",
        request_id,
        method,
        uri,
        response.status(),
        duration.as_millis()
    );
    response
}
