//! Vision model call: a photographed problem in, problem type, subject and
//! Markdown solution out.

mod error;
mod prompt;

use std::fs;
use std::path::Path;

use async_openai::Client;
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::config::Config;

pub use error::{AnalyzeError, map_api_error};

/// What the model reports about one problem. Field names follow the JSON schema
/// sent with the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub problem_type: String,
    pub subject: String,
    pub solution: String,
}

/// Send the image at `path` to the configured vision model.
pub async fn analyze_image(config: &Config, path: &Path) -> Result<AnalysisResult, AnalyzeError> {
    let data_url = image_data_url(path)?;
    let client = Client::with_config(config.openai_config.clone());

    log::info!("analyzing {} with {}", path.display(), config.model_id);
    let response: Value = client
        .chat()
        .create_byot(prompt::request_body(&config.model_id, &data_url))
        .await
        .map_err(map_api_error)?;

    parse_response(&response)
}

/// MIME type from the file extension (case-insensitive).
pub fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

fn image_data_url(path: &Path) -> Result<String, AnalyzeError> {
    let mime = mime_for(path).ok_or_else(|| AnalyzeError::UnsupportedImage(path.to_path_buf()))?;
    let bytes = fs::read(path).map_err(|source| AnalyzeError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("encoding {} bytes of {}", bytes.len(), mime);
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(&bytes)))
}

/// Decode the first choice's content as an [`AnalysisResult`]. Blank fields are errors.
fn parse_response(response: &Value) -> Result<AnalysisResult, AnalyzeError> {
    let content = response["choices"][0]["message"]["content"]
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .ok_or(AnalyzeError::EmptyResponse)?;

    let result: AnalysisResult =
        serde_json::from_str(content).map_err(AnalyzeError::InvalidResponse)?;

    if result.problem_type.trim().is_empty() {
        return Err(AnalyzeError::MissingField("problemType"));
    }
    if result.solution.trim().is_empty() {
        return Err(AnalyzeError::MissingField("solution"));
    }
    Ok(result)
}
