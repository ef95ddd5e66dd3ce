use serde::{Deserialize, Serialize};

/// Transcribed command from the voice assistant
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceCommand {
    #[serde(default)]
    pub command: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoiceAction {
    StockQuery,
    SalesQuery,
    CreditAdd,
    BillCreate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceResponse {
    pub success: bool,
    pub message: String,
    pub action: Option<VoiceAction>,
    pub data: Option<serde_json::Value>,
}
