use serde::Serialize;

// Response genérica del API: {success, message, data?, errors?}
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
            errors: None,
        }
    }

    pub fn failure(message: String, errors: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
            errors: Some(errors),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_message(message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: None,
            errors: None,
        }
    }
}
