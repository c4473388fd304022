//! Server-rendered HTML.
//!
//! Pages are plain `format!` templates. Everything that came from a user or
//! from the sheet goes through [`escape`] first.

pub mod home;
pub mod roster;
pub mod submit;

use axum::response::Html;

const STYLE: &str = r#"
    :root {
      --bg: #09090b;
      --panel: rgba(245, 158, 11, 0.05);
      --ink: #f4f4f5;
      --muted: #a1a1aa;
      --accent: #f59e0b;
      --danger: #f87171;
      --ok: #86efac;
      --border: rgba(245, 158, 11, 0.2);
      --sans: "Inter", "Segoe UI", system-ui, sans-serif;
    }
    body { margin: 0; background: linear-gradient(#09090b, #18181b 50%, #09090b); color: var(--ink); font-family: var(--sans); min-height: 100vh; }
    .wrap { max-width: 896px; margin: 0 auto; padding: 48px 16px; }
    .narrow { max-width: 448px; }
    a { color: var(--muted); }
    a:hover { color: var(--accent); }
    h1.brand { text-align: center; font-size: 48px; font-weight: 900; margin: 0; color: var(--accent); }
    .tagline { text-align: center; color: var(--muted); margin-top: 8px; }
    section { margin-top: 48px; }
    .card { background: var(--panel); border: 1px solid var(--border); border-radius: 16px; padding: 24px; }
    .button { display: inline-block; border: 0; border-radius: 999px; background: var(--accent); color: #18181b; font-weight: 600; padding: 12px 24px; text-decoration: none; cursor: pointer; }
    .button:disabled { opacity: 0.5; pointer-events: none; }
    table { width: 100%; border-collapse: collapse; text-align: left; }
    th, td { padding: 10px 16px; border-bottom: 1px solid rgba(161, 161, 170, 0.2); }
    th { font-weight: 600; }
    .state { text-align: center; padding: 32px; border-radius: 12px; border: 1px solid var(--border); }
    .state.error { border-color: rgba(248, 113, 113, 0.4); color: var(--danger); }
    .hint { font-size: 14px; color: var(--muted); }
    .banner { margin-bottom: 24px; border-radius: 12px; border: 1px solid rgba(34, 197, 94, 0.3); background: rgba(34, 197, 94, 0.15); color: var(--ok); padding: 12px 16px; }
    label { display: block; font-weight: 500; margin-bottom: 4px; }
    .field { margin-bottom: 20px; }
    input, select { box-sizing: border-box; width: 100%; padding: 10px 16px; border-radius: 8px; border: 1px solid #52525b; background: #27272a; color: var(--ink); }
    input.taken { border-color: var(--danger); }
    .field-error { color: var(--danger); font-size: 14px; margin-top: 6px; }
    .form-error { border-radius: 8px; background: rgba(239, 68, 68, 0.2); color: #fca5a5; padding: 8px 12px; }
    footer { margin-top: 64px; padding-top: 32px; border-top: 1px solid #27272a; text-align: center; color: #71717a; font-size: 14px; }
"#;

/// Wrap a page body in the shared document shell.
pub fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>{title}</title>
  <style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
    ))
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
