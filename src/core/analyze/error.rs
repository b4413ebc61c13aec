//! Vision analysis error types.

use std::path::PathBuf;

/// Errors from reading the image, calling the model, or decoding its reply.
#[derive(Debug)]
pub enum AnalyzeError {
    Image {
        path: PathBuf,
        source: std::io::Error,
    },
    UnsupportedImage(PathBuf),
    ApiAuth(String),
    ApiMessage(String),
    EmptyResponse,
    InvalidResponse(serde_json::Error),
    MissingField(&'static str),
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl std::fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzeError::Image { path, source } => {
                write!(f, "Cannot read image {}: {}", path.display(), source)
            }
            AnalyzeError::UnsupportedImage(path) => write!(
                f,
                "Unsupported image type: {} (expected jpg, png, webp or gif)",
                path.display()
            ),
            AnalyzeError::ApiAuth(msg) => write!(f, "{}", msg),
            AnalyzeError::ApiMessage(msg) => write!(f, "API error: {}", msg),
            AnalyzeError::EmptyResponse => write!(f, "The model returned no content"),
            AnalyzeError::InvalidResponse(e) => {
                write!(f, "The model reply is not valid analysis JSON: {}", e)
            }
            AnalyzeError::MissingField(field) => {
                write!(f, "The model reply has an empty '{}' field", field)
            }
            AnalyzeError::Other(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AnalyzeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalyzeError::Image { source, .. } => Some(source),
            AnalyzeError::InvalidResponse(e) => Some(e),
            AnalyzeError::Other(e) => e.source(),
            AnalyzeError::UnsupportedImage(_)
            | AnalyzeError::ApiAuth(_)
            | AnalyzeError::ApiMessage(_)
            | AnalyzeError::EmptyResponse
            | AnalyzeError::MissingField(_) => None,
        }
    }
}

/// Map async-openai or API errors into AnalyzeError.
pub fn map_api_error<E>(e: E) -> AnalyzeError
where
    E: std::fmt::Display + Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    let s = e.to_string();
    if s.contains("401") || s.contains("invalid_api_key") || s.contains("Incorrect API key") {
        return AnalyzeError::ApiAuth(
            "API error (401): the API key was rejected. Check SOLVENOTE_API_KEY or run `solvenote config set-api-key`.".to_string(),
        );
    }
    if s.contains("\"error\"")
        && let Some((_, rest)) = s.split_once("\"message\":\"")
        && let Some((msg, _)) = rest.split_once('"')
    {
        return AnalyzeError::ApiMessage(msg.to_string());
    }
    AnalyzeError::Other(e.into())
}
