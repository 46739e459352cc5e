use common::{ApiError, UploadResponse};
use web_sys::{File, FormData};

use super::{browser_error, ApiClient};

/// Uploads one CSV file as the multipart field `file`.
pub async fn upload_csv(client: &ApiClient, file: &File) -> Result<UploadResponse, ApiError> {
    log::info!("Uploading {} ({} bytes)", file.name(), file.size());

    let form = FormData::new().map_err(|e| browser_error("FormData", e))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| browser_error("FormData.append", e))?;

    let result = client.post_form::<UploadResponse>("/api/upload/csv", form).await;
    match &result {
        Ok(response) => log::info!("Upload processed {} rows", response.rows_processed),
        Err(e) => log::error!("Upload failed: {}", e),
    }
    result
}
