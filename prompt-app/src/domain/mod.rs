mod answer;
mod model_info;
mod model_response;
mod prompt_request;

pub use answer::Answer;
pub use model_info::ModelInfo;
pub use model_response::{ModelResponse, NO_RESPONSE};
pub use prompt_request::{PromptRequest, MAX_TOKENS_TO_SAMPLE};
