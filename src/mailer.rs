use anyhow::Context;
use serde_json::json;

use crate::error::ApiError;

/// Mail-provider HTTP client, used only to deliver password-reset codes.
#[derive(Clone)]
pub struct Mailer {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl Mailer {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_url = std::env::var("MAIL_API_URL").context("MAIL_API_URL not found")?;
        let api_key = std::env::var("MAIL_API_KEY").context("MAIL_API_KEY not found")?;
        let from = std::env::var("MAIL_FROM").context("MAIL_FROM not found")?;
        Ok(Self {
            http: reqwest::Client::new(),
            api_url,
            api_key,
            from,
        })
    }

    pub async fn send_otp_email(&self, to: &str, name: &str, otp: i32) -> Result<(), ApiError> {
        let body = json!({
            "from": self.from,
            "to": to,
            "subject": "Password Reset OTP",
            "html": render_otp_html(name, otp),
        });

        self.http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("OTP sending failed")?
            .error_for_status()
            .context("OTP sending failed")?;

        Ok(())
    }
}

fn render_otp_html(name: &str, otp: i32) -> String {
    format!(
        "<div style=\"font-family: Arial, sans-serif; padding: 20px;\">\
           <h2>Hello {},</h2>\
           <p>We received a request to reset your password. \
              Use the following OTP code to continue:</p>\
           <div style=\"font-size: 30px; font-weight: 700; letter-spacing: 8px;\">{}</div>\
           <p>If you did not request a password reset, please ignore this email. \
              Do not share this OTP with anyone.</p>\
         </div>",
        name, otp
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mail_body_contains_code_and_name() {
        let html = render_otp_html("Jordan", 4321);
        assert!(html.contains("4321"));
        assert!(html.contains("Hello Jordan,"));
    }
}
