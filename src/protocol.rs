use serde::Serialize;

/// Uniform `{success, message}` envelope shared by every endpoint that has
/// no resource payload to attach.
#[derive(Default, Serialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub message: String,
}

impl SimpleResponse {
    pub fn ok<S: ToString>(message: S) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn err<S: ToString>(message: S) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope() {
        let resp = SimpleResponse::ok("Login successful");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Login successful");
    }

    #[test]
    fn err_envelope() {
        let resp = SimpleResponse::err("All fields are required");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "All fields are required");
    }
}
