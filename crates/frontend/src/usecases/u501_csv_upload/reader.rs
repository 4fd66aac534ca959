use contracts::usecases::u501_csv_upload::{check_file_type, UploadError};
use wasm_bindgen_futures::JsFuture;

/// Checks the type, then reads the whole file as text
pub async fn read_csv_file(file: web_sys::File) -> Result<String, UploadError> {
    check_file_type(&file.name(), &file.type_())?;

    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| UploadError::Read(format!("{:?}", e)))?;

    value
        .as_string()
        .ok_or_else(|| UploadError::Read("file content is not text".to_string()))
}
