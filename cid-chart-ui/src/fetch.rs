//! Dataset download through the browser's `fetch`.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// GET `url` and return the body as text.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("Failed to fetch {}: {:?}", url, e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| format!("Unexpected fetch result for {}", url))?;

    if !response.ok() {
        return Err(format!("Bad response for {}: HTTP {}", url, response.status()));
    }

    let text = response
        .text()
        .map_err(|e| format!("Failed to read body of {}: {:?}", url, e))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| format!("Failed to read body of {}: {:?}", url, e))?;

    let body = body
        .as_string()
        .ok_or_else(|| format!("Body of {} is not text", url))?;
    log::info!("[CID] fetched {} ({} bytes)", url, body.len());
    Ok(body)
}
