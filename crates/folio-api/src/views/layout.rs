use super::{PageContext, View, css, escape_html, js};
use crate::errors::PageError;

const TITLE: &str = "Folio";

fn nav_link(out: &mut String, view: &View, current: &View, label: &str) {
    let class = if view == current { " class=\"active\"" } else { "" };
    out.push_str(&format!(
        r#"<a href="{}"{class}>{}</a>"#,
        escape_html(&view.href()),
        escape_html(label)
    ));
}

fn selector(ctx: &PageContext<'_>) -> String {
    let mut nav = String::from(r#"<nav class="selector">"#);
    nav_link(&mut nav, &View::Fund, &ctx.view, &ctx.config.fund_label);
    for (key, label) in &ctx.portfolios {
        nav_link(&mut nav, &View::Portfolio((*key).to_string()), &ctx.view, label);
    }
    nav_link(&mut nav, &View::Analytics, &ctx.view, "Analytics");
    nav.push_str("</nav>");
    nav
}

/// Wraps `body` in the page chrome: header, selector and the refresh controls.
pub fn page(ctx: &PageContext<'_>, title: &str, body: &str) -> String {
    let poll_ms = ctx.config.poll_interval.as_millis();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{TITLE} | {title}</title>
    <style>
{css}
    </style>
</head>
<body data-poll-ms="{poll_ms}">
    <div class="container">
        <header>
            <h1>{title}</h1>
            {nav}
            <div class="controls">
                <span class="status" id="refreshStatus"></span>
                <button class="btn" id="refreshBtn" onclick="refreshPrices()">Refresh</button>
            </div>
        </header>
{body}
    </div>
    <script>
{js}
    </script>
</body>
</html>"#,
        title = escape_html(title),
        nav = selector(ctx),
        css = css::STYLES,
        js = js::SCRIPT,
    )
}

pub fn error_page(ctx: &PageContext<'_>, err: &PageError) -> String {
    let body = format!(
        r#"<div class="banner">{}</div>"#,
        escape_html(&err.public_message())
    );
    page(ctx, TITLE, &body)
}
