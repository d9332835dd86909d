use leptos::prelude::*;

/// Posts to `/prompt`. Empty input is allowed through so the server can
/// answer it with a warning.
#[component]
pub fn PromptForm() -> impl IntoView {
    view! {
        <form action="/prompt" method="post" class="prompt-form">
            <label for="prompt" class="prompt-form__label">"Enter your prompt:"</label>
            <textarea
                id="prompt"
                name="prompt"
                class="prompt-form__input"
                rows="6"
                placeholder="Ask the model anything..."
            ></textarea>
            <button type="submit" class="prompt-form__button">
                "Submit"
            </button>
        </form>
    }
}
