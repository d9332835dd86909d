use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the UI shows after a successful call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub prompt: String,
    pub text: String,
    pub model_id: String,
    pub region: String,
    pub answered_at: DateTime<Utc>,
}

impl Answer {
    pub fn new(prompt: String, text: String, model_id: String, region: String) -> Self {
        Self {
            prompt,
            text,
            model_id,
            region,
            answered_at: Utc::now(),
        }
    }

    pub fn answered_at_label(&self) -> String {
        self.answered_at.format("%H:%M:%S UTC").to_string()
    }
}
