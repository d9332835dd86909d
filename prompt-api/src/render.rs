use prompt_app::domain::Answer;

pub fn render_answer_page(answer: &Answer) -> String {
    let encoded_prompt = urlencoding::encode(&answer.prompt);
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Response - Bedrock Prompt</title>
    <style>{CSS}</style>
    <script>history.replaceState(null, '', '/prompt?prompt={encoded_prompt}');</script>
</head>
<body>
    <main class="container">
        <div class="answer">
            <div class="answer__prompt">
                <p class="answer__label">Prompt</p>
                <pre class="answer__text">{prompt}</pre>
            </div>
            <h2 class="answer__title">Response:</h2>
            <pre class="answer__text answer__content">{text}</pre>
            <p class="answer__meta">{model_id} &middot; {region} &middot; {answered_at}</p>
            <div class="answer__actions">
                <a href="/" class="answer__button--primary" style="text-decoration:none;display:inline-block;">Ask Again</a>
            </div>
        </div>
    </main>
</body>
</html>"#,
        CSS = CSS,
        encoded_prompt = encoded_prompt,
        prompt = escape_html(&answer.prompt),
        text = escape_html(&answer.text),
        model_id = escape_html(&answer.model_id),
        region = escape_html(&answer.region),
        answered_at = answer.answered_at_label(),
    )
}

pub fn render_prompt_page(prompt: &str) -> String {
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Bedrock Prompt</title>
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <form action="/prompt" method="post" class="prompt-form">
            <label for="prompt" class="prompt-form__label">Enter your prompt:</label>
            <textarea id="prompt" name="prompt" class="prompt-form__input" rows="6">{prompt}</textarea>
            <button type="submit" class="prompt-form__button">Submit</button>
        </form>
        <a href="/" class="prompt-form__back">Start over</a>
    </main>
</body>
</html>"#, prompt = escape_html(prompt), CSS = CSS)
}

pub fn render_warning_page(message: &str) -> String {
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Bedrock Prompt</title>
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <div class="warning">
            <p class="warning__message">{message}</p>
            <a href="/" class="warning__retry" style="text-decoration:none;display:inline-block;margin-top:1rem;">Back</a>
        </div>
    </main>
</body>
</html>"#, message = escape_html(message), CSS = CSS)
}

pub fn render_error_page(message: &str, detail: &str) -> String {
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Error - Bedrock Prompt</title>
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <div class="error">
            <p class="error__title">Request failed</p>
            <p class="error__message">{message}</p>
            <details class="error__detail"><summary>Details</summary><pre>{detail}</pre></details>
            <a href="/" class="error__retry" style="text-decoration:none;display:inline-block;margin-top:1rem;">Try Again</a>
        </div>
    </main>
</body>
</html>"#, message = escape_html(message), detail = escape_html(detail), CSS = CSS)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub const CSS: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --gold: #ea9d34;
    --pine: #286983;
    --foam: #56949f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
code, pre { font-family: 'JetBrains Mono', ui-monospace, monospace; }
.container { max-width: 800px; margin: 0 auto; padding: 1.5rem; }
.hero { text-align: center; padding: 3rem 0 2rem; }
.hero__title { font-size: clamp(2rem, 5vw, 3rem); color: var(--pine); font-weight: 800; margin-bottom: 0.75rem; }
.hero__subtitle { color: var(--subtle); font-size: 1.1rem; max-width: 500px; margin: 0 auto; }
.prompt-form { display: flex; flex-direction: column; gap: 1rem; margin: 2rem 0; }
.prompt-form__label { font-weight: 600; }
.prompt-form__input {
    padding: 1rem 1.25rem; border: 2px solid var(--overlay); border-radius: 8px;
    background: var(--surface); color: var(--text); font-size: 1rem; font-family: inherit; resize: vertical;
}
.prompt-form__input:focus { outline: none; border-color: var(--pine); }
.prompt-form__input::placeholder { color: var(--muted); }
.prompt-form__button {
    align-self: flex-start; padding: 1rem 2rem; background: var(--pine); color: var(--base);
    border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer;
}
.prompt-form__button:hover { opacity: 0.9; }
.prompt-form__button:disabled { background: var(--muted); cursor: not-allowed; }
.prompt-form__back { color: var(--subtle); }
.answer {
    background: var(--surface); border: 2px solid var(--overlay);
    border-radius: 12px; padding: 1.5rem; margin: 2rem 0;
}
.answer__label { color: var(--subtle); font-size: 0.9rem; margin-bottom: 0.25rem; }
.answer__prompt { padding-bottom: 1rem; margin-bottom: 1rem; border-bottom: 2px solid var(--overlay); }
.answer__title { color: var(--pine); font-size: 1.4rem; margin-bottom: 1rem; }
.answer__text { white-space: pre-wrap; word-wrap: break-word; line-height: 1.7; }
.answer__content { font-family: inherit; font-size: 1.05rem; }
.answer__meta { margin-top: 1rem; color: var(--muted); font-size: 0.85rem; }
.answer__actions { margin-top: 1.5rem; padding-top: 1rem; border-top: 2px solid var(--overlay); }
.answer__button--primary { padding: 0.75rem 1.5rem; background: var(--pine); color: var(--base); border: none; border-radius: 8px; font-weight: 600; cursor: pointer; }
.warning { background: #fdf3e1; border: 2px solid var(--gold); border-radius: 8px; padding: 1.25rem; margin: 2rem 0; }
.warning__message { color: #8a5a14; font-weight: 600; }
.warning__retry { padding: 0.5rem 1rem; background: var(--gold); color: var(--base); border-radius: 4px; }
.error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1.25rem; margin: 2rem 0; }
.error__title { color: var(--love); font-weight: 700; margin-bottom: 0.5rem; }
.error__message { color: #8b3d4d; }
.error__detail { margin-top: 0.75rem; color: var(--subtle); font-size: 0.85rem; }
.error__detail pre { white-space: pre-wrap; margin-top: 0.5rem; }
.error__retry { padding: 0.5rem 1rem; background: var(--love); color: var(--base); border: none; border-radius: 4px; cursor: pointer; }
.help { margin-top: 2rem; padding: 1rem 1.25rem; background: var(--surface); border: 2px solid var(--overlay); border-radius: 8px; }
.help__title { cursor: pointer; font-weight: 600; color: var(--subtle); }
.help__content { margin-top: 1rem; line-height: 1.7; }
.help__content h3 { font-size: 1.05rem; color: var(--pine); margin: 1rem 0 0.25rem; }
.help__content li { margin-left: 1.5rem; list-style: disc; }
.help__error { color: var(--love); }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn answer(text: &str) -> Answer {
        Answer {
            prompt: "Hello".to_string(),
            text: text.to_string(),
            model_id: "anthropic.claude-v2".to_string(),
            region: "us-east-1".to_string(),
            answered_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn test_answer_page_shows_completion_verbatim() {
        let page = render_answer_page(&answer(" Hi there!"));

        assert!(page.contains(r#"<pre class="answer__text answer__content"> Hi there!</pre>"#));
        assert!(page.contains("Response:"));
        assert!(page.contains("anthropic.claude-v2 &middot; us-east-1 &middot; 03:04:05 UTC"));
    }

    #[test]
    fn test_answer_page_shows_fallback_text() {
        let page = render_answer_page(&answer("No response."));
        assert!(page.contains(">No response.</pre>"));
    }

    #[test]
    fn test_model_output_is_escaped() {
        let page = render_answer_page(&answer("<script>alert(1)</script>"));

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_prompt_is_encoded_in_history_url() {
        let mut answer = answer("ok");
        answer.prompt = "a b&c".to_string();
        let page = render_answer_page(&answer);

        assert!(page.contains("/prompt?prompt=a%20b%26c"));
    }

    #[test]
    fn test_prompt_page_refills_textarea() {
        let page = render_prompt_page("Hello\n</textarea><script>");

        assert!(page.contains(r#"action="/prompt" method="post""#));
        assert!(page.contains("Hello\n&lt;/textarea&gt;&lt;script&gt;</textarea>"));
        assert!(!page.contains("Response:"));
    }

    #[test]
    fn test_warning_page() {
        let page = render_warning_page("Please enter a prompt.");

        assert!(page.contains(r#"<p class="warning__message">Please enter a prompt.</p>"#));
        assert!(!page.contains("Response:"));
    }

    #[test]
    fn test_error_page_has_no_fallback_text() {
        let page = render_error_page(
            "The model call failed.",
            "Model invocation failed: AccessDeniedException",
        );

        assert!(page.contains("The model call failed."));
        assert!(page.contains("AccessDeniedException"));
        assert!(!page.contains("No response."));
        assert!(!page.contains("Response:"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
