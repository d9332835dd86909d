mod prompt_validator;

pub use prompt_validator::PromptValidator;
