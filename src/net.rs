use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(context: &str, e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{}: {:?}", context, e)
}

async fn response_of(promise: js_sys::Promise, url: &str) -> anyhow::Result<web::Response> {
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| js_err(url, e))?;
    value
        .dyn_into::<web::Response>()
        .map_err(|e| js_err("not a Response", e))
}

/// GET `url` and return the body bytes. Non-2xx is an error.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = response_of(window.fetch_with_str(url), url).await?;
    if !resp.ok() {
        anyhow::bail!("GET {} -> HTTP {}", url, resp.status());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| js_err("array_buffer", e))?)
        .await
        .map_err(|e| js_err("array_buffer", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// POST a JSON body. Non-2xx is an error carrying the response text.
pub async fn post_json(url: &str, body: &str) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let headers = web::Headers::new().map_err(|e| js_err("Headers", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| js_err("Headers.set", e))?;
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));
    let request = web::Request::new_with_str_and_init(url, &init)
        .map_err(|e| js_err("Request", e))?;
    let resp = response_of(window.fetch_with_request(&request), url).await?;
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let text = match resp.text() {
        Ok(p) => JsFuture::from(p)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    anyhow::bail!("POST {} -> HTTP {} {}", url, status, text.trim())
}
