mod prompt_form;

pub use prompt_form::PromptForm;
