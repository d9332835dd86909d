pub mod bedrock;
pub mod validation;
