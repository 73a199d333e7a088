use std::collections::HashMap;

use actix_multipart::Multipart;
use futures::StreamExt;

use crate::error::ApiError;

pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A staged multipart submission: the text fields plus at most one file,
/// fully read into memory before the handler touches it.
#[derive(Default)]
pub struct FormData {
    texts: HashMap<String, String>,
    file: Option<UploadedFile>,
}

impl FormData {
    /// Required text field. Missing or empty values are the uniform
    /// validation failure of every create endpoint.
    pub fn text(&self, name: &str) -> Result<String, ApiError> {
        match self.texts.get(name) {
            Some(value) if !value.trim().is_empty() => Ok(value.clone()),
            _ => Err(ApiError::BadRequest("All fields are required".to_string())),
        }
    }

    pub fn text_opt(&self, name: &str) -> Option<String> {
        self.texts
            .get(name)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }

    pub fn take_file(&mut self) -> Option<UploadedFile> {
        self.file.take()
    }

    pub fn require_file(&mut self) -> Result<UploadedFile, ApiError> {
        self.file
            .take()
            .ok_or_else(|| ApiError::BadRequest("All fields are required".to_string()))
    }

    #[cfg(test)]
    pub fn with_text(mut self, name: &str, value: &str) -> Self {
        self.texts.insert(name.to_string(), value.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_file(mut self, filename: &str, bytes: Vec<u8>) -> Self {
        self.file = Some(UploadedFile {
            filename: filename.to_string(),
            bytes,
        });
        self
    }
}

/// Drains the multipart stream. The field named `file_field` is staged as
/// the submission's file, everything else is collected as UTF-8 text.
pub async fn read_form(mut payload: Multipart, file_field: &str) -> Result<FormData, ApiError> {
    let mut form = FormData::default();

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| ApiError::BadRequest(format!("invalid form data: {}", e)))?;

        let (name, filename) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().map(|s| s.to_string()),
                cd.get_filename().map(|s| s.to_string()),
            ),
            None => (None, None),
        };
        let name = match name {
            Some(name) => name,
            None => continue,
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk =
                chunk.map_err(|e| ApiError::BadRequest(format!("invalid form data: {}", e)))?;
            bytes.extend_from_slice(&chunk);
        }

        if name == file_field {
            if !bytes.is_empty() {
                form.file = Some(UploadedFile {
                    filename: filename.unwrap_or_else(|| "upload".to_string()),
                    bytes,
                });
            }
        } else {
            let value = String::from_utf8(bytes)
                .map_err(|_| ApiError::BadRequest("invalid form data".to_string()))?;
            form.texts.insert(name, value);
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_field_is_bad_request() {
        let form = FormData::default().with_text("title", "Hello");
        let err = form.text("description").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert_eq!(err.to_string(), "All fields are required");
    }

    #[test]
    fn empty_required_field_is_bad_request() {
        let form = FormData::default().with_text("title", "   ");
        assert!(form.text("title").is_err());
    }

    #[test]
    fn present_field_round_trips() {
        let form = FormData::default().with_text("title", "Hello");
        assert_eq!(form.text("title").unwrap(), "Hello");
        assert_eq!(form.text_opt("title").unwrap(), "Hello");
        assert!(form.text_opt("missing").is_none());
    }

    #[test]
    fn missing_file_is_bad_request() {
        let mut form = FormData::default().with_text("title", "Hello");
        assert!(form.require_file().is_err());
    }

    #[test]
    fn staged_file_is_returned_once() {
        let mut form = FormData::default().with_file("cover.jpg", vec![1, 2, 3]);
        let file = form.require_file().unwrap();
        assert_eq!(file.filename, "cover.jpg");
        assert_eq!(file.bytes, vec![1, 2, 3]);
        assert!(form.take_file().is_none());
    }
}
