use anyhow::Context;
use serde::Deserialize;

use crate::{error::ApiError, multipart::UploadedFile};

/// Client for the external media host. Staged bytes go out, a durable URL
/// comes back; only that URL is ever persisted.
#[derive(Clone)]
pub struct MediaClient {
    http: reqwest::Client,
    upload_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl MediaClient {
    pub fn from_env() -> anyhow::Result<Self> {
        let upload_url = std::env::var("MEDIA_UPLOAD_URL").context("MEDIA_UPLOAD_URL not found")?;
        let api_key = std::env::var("MEDIA_API_KEY").context("MEDIA_API_KEY not found")?;
        Ok(Self {
            http: reqwest::Client::new(),
            upload_url,
            api_key,
        })
    }

    // Synchronous from the handler's perspective: the request is held open
    // until the host acknowledges, and there is no retry.
    pub async fn upload_image(&self, file: UploadedFile) -> Result<String, ApiError> {
        let part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.filename);
        let form = reqwest::multipart::Form::new()
            .text("api_key", self.api_key.clone())
            .part("file", part);

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .context("image upload failed")?
            .error_for_status()
            .context("image upload failed")?
            .json::<UploadResponse>()
            .await
            .context("image upload failed")?;

        Ok(response.secure_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_media_host_reply() {
        let body = r#"{
            "public_id": "abc123",
            "secure_url": "https://media.example.com/abc123/uploaded.jpg",
            "bytes": 1024
        }"#;
        let parsed: UploadResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.secure_url,
            "https://media.example.com/abc123/uploaded.jpg"
        );
    }

    #[test]
    fn rejects_reply_without_url() {
        let body = r#"{"public_id": "abc123"}"#;
        assert!(serde_json::from_str::<UploadResponse>(body).is_err());
    }
}
