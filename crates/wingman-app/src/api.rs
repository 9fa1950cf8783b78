// crates/wingman-app/src/api.rs
// HTTP client for the generation endpoint

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{ReadableStreamDefaultReader, TextDecoder};
use wingman_types::GenerateRequest;

/// POST the composed prompt and stream the completion back.
///
/// The endpoint answers with a raw text byte stream. Each decoded chunk is
/// handed to `on_chunk` as it lands so the page can re-render the partial
/// answer; the full accumulated text is returned once the stream ends.
pub async fn stream_answers(prompt: &str, on_chunk: impl Fn(&str)) -> Result<String, String> {
    let window = web_sys::window().ok_or("No window")?;
    let location = window.location();
    let host = location.host().map_err(|_| "No host")?;
    let protocol = location.protocol().map_err(|_| "No protocol")?;

    let url = format!("{}//{}/api/generate", protocol, host);

    let resp = gloo_net::http::Request::post(&url)
        .json(&GenerateRequest {
            prompt: prompt.to_string(),
        })
        .map_err(|e| format!("{:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Fetch error: {:?}", e))?;

    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        return Err(format!("Generate error ({}): {}", resp.status(), text));
    }

    // A response without a body is an empty completion
    let Some(body) = resp.body() else {
        return Ok(String::new());
    };

    let reader: ReadableStreamDefaultReader = body.get_reader().unchecked_into();
    let decoder = TextDecoder::new().map_err(|e| format!("{:?}", e))?;
    let mut answers = String::new();

    loop {
        let result = JsFuture::from(reader.read())
            .await
            .map_err(|e| format!("Stream error: {:?}", e))?;

        let done = js_sys::Reflect::get(&result, &JsValue::from_str("done"))
            .map_err(|e| format!("{:?}", e))?
            .as_bool()
            .unwrap_or(true);
        if done {
            break;
        }

        let value = js_sys::Reflect::get(&result, &JsValue::from_str("value"))
            .map_err(|e| format!("{:?}", e))?;
        if value.is_undefined() {
            continue;
        }

        let chunk = decoder
            .decode_with_buffer_source(value.unchecked_ref())
            .map_err(|e| format!("Decode error: {:?}", e))?;
        answers.push_str(&chunk);
        on_chunk(&chunk);
    }

    log::debug!("Stream complete ({} bytes)", answers.len());

    Ok(answers)
}
