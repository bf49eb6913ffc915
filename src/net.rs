use shared::Settings;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::window;

/// Where the server publishes the settings it was started with.
pub const SETTINGS_PATH: &str = "/settings.json";

fn request_url(method: &str, url: &str) -> Result<Request, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);

    Request::new_with_str_and_init(url, &opts)
}

/// Fetches the server's settings. Fails when the page is served without the settings
/// route or the payload does not validate.
pub async fn fetch_settings() -> Result<Settings, JsValue> {
    let request = request_url("GET", SETTINGS_PATH)?;
    let response: Response = JsFuture::from(window().fetch_with_request(&request))
        .await?
        .dyn_into()?;

    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "{SETTINGS_PATH} answered with status {}",
            response.status()
        )));
    }

    let json = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("settings response is not text"))?;

    Settings::from_json(&json).map_err(|err| JsValue::from_str(&err.to_string()))
}
