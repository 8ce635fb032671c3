//! HTML page rendering
//!
//! All pages share one inline-styled shell; there is no template engine
//! behind this, just string assembly.

use axum::response::Html;

/// Wrap a page body in the shared HTML shell.
pub fn html_page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <style>
        body {{ font-family: sans-serif; background: #f4f4f4; padding: 40px; }}
        form {{ background: #fff; padding: 20px; border-radius: 8px; box-shadow: 0 0 8px #ccc; width: 300px; margin: auto; }}
        input {{ width: 100%; padding: 10px; margin: 8px 0; box-sizing: border-box; }}
        button {{ width: 100%; padding: 10px; background: #2c6fbb; color: #fff; border: none; }}
        a {{ color: #2c6fbb; text-decoration: none; }}
        h2, p {{ text-align: center; }}
    </style>
</head>
<body>
    <h2>{title}</h2>
    {body}
</body>
</html>
"#
    ))
}

/// The signup form.
pub fn signup_page() -> Html<String> {
    html_page(
        "Signup",
        r#"<form method="POST">
        <input name="username" placeholder="Username" required>
        <input type="password" name="password" placeholder="Password" required>
        <button type="submit">Signup</button>
    </form>
    <p>Already have an account? <a href="/login">Login</a></p>"#,
    )
}

/// The login form.
pub fn login_page() -> Html<String> {
    html_page(
        "Login",
        r#"<form method="POST">
        <input name="username" placeholder="Username" required>
        <input type="password" name="password" placeholder="Password" required>
        <button type="submit">Login</button>
    </form>
    <p>Don't have an account? <a href="/signup">Signup</a></p>"#,
    )
}

/// The protected dashboard greeting.
pub fn dashboard_page(username: &str) -> Html<String> {
    let display_name = html_escape(&title_case(username));
    html_page(
        "Dashboard",
        &format!(r#"<p>Welcome, {display_name}!</p><p><a href="/logout">Logout</a></p>"#),
    )
}

/// A confirmation page with a continue link.
pub fn success_page(message: &str, link: &str) -> Html<String> {
    html_page(
        "Success",
        &format!(r#"<p>{message}</p><p><a href="{link}">Continue</a></p>"#),
    )
}

/// A generic error page with a back link. Returns the raw body so the
/// caller can attach its own status code.
pub fn error_page(message: &str) -> String {
    html_page(
        "Error",
        &format!(
            r#"<p style="color: #c0392b">{message}</p><p><a href="javascript:history.back()">Go Back</a></p>"#
        ),
    )
    .0
}

/// Capitalize the first letter of each alphabetic run, lowercasing the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Escape text for interpolation into HTML.
fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
