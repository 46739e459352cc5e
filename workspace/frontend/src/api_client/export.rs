use chrono::Utc;
use common::orders::export_file_name;
use common::{ApiError, ExportQuery};
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

use super::{browser_error, ApiClient};

/// Downloads the Excel report and saves it through a temporary anchor.
/// Returns the file name used.
pub async fn export_to_excel(client: &ApiClient, query: &ExportQuery) -> Result<String, ApiError> {
    let bytes = client
        .get_bytes("/api/export/excel", &query.query_params())
        .await?;
    let file_name = export_file_name(Utc::now().date_naive());
    save_file(&bytes, &file_name)?;
    log::info!("Saved export as {} ({} bytes)", file_name, bytes.len());
    Ok(file_name)
}

fn save_file(bytes: &[u8], file_name: &str) -> Result<(), ApiError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Browser("document unavailable".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| ApiError::Browser("document has no body".to_string()))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(|e| browser_error("Blob", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| browser_error("createObjectURL", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| browser_error("createElement", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ApiError::Browser("created element is not an anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    body.append_child(&anchor)
        .map_err(|e| browser_error("appendChild", e))?;
    anchor.click();
    anchor.remove();

    Url::revoke_object_url(&url).map_err(|e| browser_error("revokeObjectURL", e))
}
