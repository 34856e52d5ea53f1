pub mod font_awesome;
pub mod material;

pub use font_awesome::FontAwesomeCatalog;
pub use material::MaterialCatalog;

use crate::app::ports::HttpClientPort;
use crate::error::{IconError, Result};
use tracing::debug;

/// Single GET returning the body text; non-2xx statuses are errors
pub(crate) async fn fetch_body(http: &dyn HttpClientPort, url: &str) -> Result<String> {
    debug!("GET {}", url);
    let response = http.get(url).await?;
    if !response.is_success() {
        return Err(IconError::Status {
            status: response.status,
            url: url.to_string(),
        });
    }
    debug!("Received {} bytes from {}", response.body.len(), url);
    Ok(response.body)
}
