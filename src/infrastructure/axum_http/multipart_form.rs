use axum::extract::Multipart;

use crate::{
    domain::value_objects::forms::{FormFields, UploadFile},
    infrastructure::axum_http::error_responses::AppError,
};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Splits a multipart body into text fields and buffered file parts. A repeated text
/// field keeps its last value.
pub async fn read_form(mut multipart: Multipart) -> Result<(FormFields, Vec<UploadFile>), AppError> {
    let mut fields = FormFields::new();
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(err.body_text()))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| AppError::BadRequest(err.body_text()))?;

                files.push(UploadFile {
                    field_name,
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            None => {
                let value = field
                    .text()
                    .await
                    .map_err(|err| AppError::BadRequest(err.body_text()))?;
                fields.insert(field_name, value);
            }
        }
    }

    Ok((fields, files))
}
