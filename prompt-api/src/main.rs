mod render;

use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use prompt_app::AppContext;
use prompt_ui::pages::{AskModelFn, GetModelInfoFn};
use prompt_ui::App;
use render::{render_answer_page, render_error_page, render_prompt_page, render_warning_page};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;

#[derive(Deserialize)]
struct PromptForm {
    #[serde(default)]
    prompt: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = AppContext::from_env().await;

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<AskModelFn>();
    server_fn::axum::register_explicit::<GetModelInfoFn>();
    tracing::info!("Registered server functions: AskModelFn, GetModelInfoFn");

    let app = Router::new()
        .route("/prompt", get(handle_prompt_link).post({
            let ctx = app_context.clone();
            move |form: Form<PromptForm>| {
                let ctx = ctx.clone();
                async move {
                    handle_prompt_form(ctx, form.0).await
                }
            }
        }))
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

async fn handle_prompt_form(ctx: AppContext, form: PromptForm) -> Response {
    match ctx.ask_model.execute(form.prompt).await {
        Ok(answer) => Html(render_answer_page(&answer)).into_response(),
        Err(e) if e.is_warning() => Html(render_warning_page(e.user_message())).into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Html(render_error_page(e.user_message(), &e.to_string())),
        )
            .into_response(),
    }
}

/// Shared result links only refill the form; the model is called on POST.
async fn handle_prompt_link(Query(form): Query<PromptForm>) -> Html<String> {
    Html(render_prompt_page(&form.prompt))
}

fn shell(_options: LeptosOptions) -> impl IntoView {
    use leptos::prelude::*;
    use leptos_meta::*;

    let submit_script = r#"
        document.addEventListener('DOMContentLoaded', function() {
            const form = document.querySelector('.prompt-form');
            const button = document.querySelector('.prompt-form__button');
            if (!form || !button) {
                return;
            }

            form.addEventListener('submit', function() {
                button.disabled = true;
                button.textContent = 'Thinking...';
                button.style.cursor = 'wait';
            });
        });
    "#;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Bedrock Prompt"</title>
                <style>{render::CSS}</style>
                <MetaTags/>
            </head>
            <body>
                <App/>
                <script>{submit_script}</script>
            </body>
        </html>
    }
}
