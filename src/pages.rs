//! Server-rendered views: home, results and login.

use std::fmt::Write;

use crate::results::ResultsView;

const BRAND: &str = "🇮🇳 n.ai.in";

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <link rel="stylesheet" href="/static/styles.css" />
  </head>
  <body>
{body}
  </body>
</html>
"#,
        title = escape_html(title),
    )
}

pub fn render_home() -> String {
    let body = format!(
        r#"    <div class="home">
      <h1 class="logo">{BRAND}</h1>
      <form method="post" action="/">
        <input type="text" name="query" placeholder="Search smarter than Google..." class="search-bar" />
        <button type="submit" class="search-btn">Search</button>
      </form>
      <a href="/login">Login</a>
    </div>"#
    );
    layout("n.ai.in", &body)
}

pub fn render_results(view: &ResultsView) -> String {
    let query = escape_html(&view.query);
    let mut body = format!(
        r#"    <div class="results">
      <div class="top-bar">
        <a class="logo-small" href="/">{BRAND}</a>
        <form method="get" action="/search">
          <input name="q" value="{query}" class="search-input" />
        </form>
      </div>
      <p class="meta">About {about} results (0.4 seconds)</p>
"#,
        about = view.about,
    );

    for result in &view.results {
        let link = escape_html(&result.link);
        // Writing to a String cannot fail.
        let _ = write!(
            body,
            r#"      <div class="result-card">
        <a href="{link}" target="_blank" class="title">{title}</a>
        <div class="link">{link}</div>
"#,
            title = escape_html(&result.title),
        );
        if let Some(snippet) = &result.snippet {
            let _ = writeln!(body, r#"        <p class="desc">{}</p>"#, escape_html(snippet));
        }
        body.push_str("      </div>\n");
    }
    body.push_str("    </div>");

    layout(&format!("{} - n.ai.in", view.query), &body)
}

pub fn render_login(notice: Option<&str>) -> String {
    let notice = notice
        .map(|n| format!(r#"      <p class="notice" role="alert">{}</p>"#, escape_html(n)))
        .unwrap_or_default();
    let body = format!(
        r#"    <div class="home">
      <h2>Login to n.ai.in</h2>
{notice}
      <form method="post" action="/login">
        <input name="email" type="email" placeholder="Email" />
        <input name="password" type="password" placeholder="Password" />
        <button type="submit">Login</button>
      </form>
    </div>"#
    );
    layout("Login - n.ai.in", &body)
}
