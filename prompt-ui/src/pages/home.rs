use crate::components::PromptForm;
use leptos::prelude::*;
use prompt_app::domain::{Answer, ModelInfo};
use server_fn::ServerFnError;

#[server(AskModelFn, "/api", endpoint = "ask_model")]
pub async fn ask_model(prompt: String) -> Result<Answer, ServerFnError> {
    use prompt_app::AppContext;

    let ctx = expect_context::<AppContext>();

    ctx.ask_model
        .execute(prompt)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(GetModelInfoFn, "/api", endpoint = "model_info")]
pub async fn get_model_info() -> Result<ModelInfo, ServerFnError> {
    use prompt_app::AppContext;

    let ctx = expect_context::<AppContext>();
    Ok(ctx.config().model_info())
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="hero__title">"Bedrock Prompt"</h1>
            <p class="hero__subtitle">
                "Send a prompt to a foundation model on Amazon Bedrock and read its reply."
            </p>
        </div>

        <PromptForm/>

        <HelpSection/>
    }
}

#[component]
fn HelpSection() -> impl IntoView {
    let model_info = Resource::new(|| (), |_| get_model_info());

    view! {
        <details class="help">
            <summary class="help__title">"Help & Setup"</summary>
            <div class="help__content">
                <h3>"Model"</h3>
                <Suspense fallback=move || view! { <p class="help__loading">"Loading..."</p> }>
                    {move || {
                        model_info.get().map(|result| match result {
                            Ok(info) => view! {
                                <p>
                                    "Prompts are sent to " <code>{info.model_id}</code>
                                    " in " <code>{info.region}</code> "."
                                </p>
                            }.into_any(),
                            Err(_) => view! {
                                <p class="help__error">"Could not load the model configuration."</p>
                            }.into_any(),
                        })
                    }}
                </Suspense>

                <h3>"AWS credentials"</h3>
                <p>"Credentials are picked up from the environment by the AWS default provider chain:"</p>
                <ul>
                    <li><code>"AWS_ACCESS_KEY_ID"</code> " / " <code>"AWS_SECRET_ACCESS_KEY"</code> " environment variables"</li>
                    <li>"the shared profile written by " <code>"aws configure"</code></li>
                    <li>"an IAM role when running on EC2, ECS or Lambda"</li>
                </ul>

                <h3>"Permissions"</h3>
                <p>
                    "The identity needs " <code>"bedrock:InvokeModel"</code>
                    " and model access enabled for the configured model in the Bedrock console."
                </p>

                <h3>"Configuration"</h3>
                <ul>
                    <li><code>"BEDROCK_MODEL_ID"</code> " selects the model"</li>
                    <li><code>"BEDROCK_REGION"</code> " or " <code>"AWS_REGION"</code> " selects the region"</li>
                </ul>
            </div>
        </details>
    }
}
