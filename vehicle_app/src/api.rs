use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

// Used when there is no browser window to read the origin from.
const FALLBACK_ORIGIN: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vehicle {
    #[serde(rename = "VRM")]
    pub vrm: String,
    pub make: String,
    pub model: String,
    pub variant: String,
    pub colour: String,
    pub body_type: String,
    pub price: i64,
    pub mileage: i64,
    pub date_of_registration: String,
}

/// The JSON wrapper every API response comes in.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub count: Option<usize>,
    pub data: Option<T>,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ApiReply<T> {
    pub status: u16,
    pub body: Envelope<T>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Could not reach the vehicle service: {0}")]
    Network(#[source] reqwest::Error),
    #[error("The vehicle service sent an unreadable response: {0}")]
    Decode(#[source] reqwest::Error),
}

fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_ORIGIN.to_string());
    format!("{origin}{path}")
}

async fn fetch<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<ApiReply<T>, FetchError> {
    let resp = request.send().await.map_err(FetchError::Network)?;
    let status = resp.status().as_u16();
    let body = resp
        .json::<Envelope<T>>()
        .await
        .map_err(FetchError::Decode)?;
    Ok(ApiReply { status, body })
}

pub async fn list_all() -> Result<ApiReply<Vec<Vehicle>>, FetchError> {
    log::debug!("listing all vehicles");
    fetch(reqwest::Client::new().get(api_url("/api/vehicles"))).await
}

pub async fn search(query: &str) -> Result<ApiReply<Vec<Vehicle>>, FetchError> {
    log::debug!("searching vehicles for {query:?}");
    let request = reqwest::Client::new()
        .post(api_url("/api/vehicles/search"))
        .json(&serde_json::json!({ "query": query }));
    fetch(request).await
}

/// API path for a single vehicle; the VRM is one encoded path segment.
pub fn vrm_path(vrm: &str) -> String {
    format!("/api/vehicles/vrm/{}", urlencoding::encode(vrm))
}

/// Client route of a vehicle's detail page.
pub fn detail_route(vrm: &str) -> String {
    format!("/vehicle/{}", urlencoding::encode(vrm))
}

/// Inverse of the encoding in [`detail_route`]; malformed input is kept as is.
pub fn decode_route_vrm(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|vrm| vrm.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

pub async fn by_vrm(vrm: &str) -> Result<ApiReply<Vehicle>, FetchError> {
    log::debug!("fetching vehicle {vrm}");
    fetch(reqwest::Client::new().get(api_url(&vrm_path(vrm)))).await
}
