mod client;
mod runtime;

pub use client::BedrockClient;
pub use runtime::ModelRuntime;
