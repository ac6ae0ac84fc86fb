//! Small building blocks shared by the pages.

use super::escape_html;

/// A stat card. `value` and `note` are plain text.
pub fn stat_card(title: &str, value: &str, note: Option<&str>) -> String {
    let note = note
        .filter(|note| !note.is_empty())
        .map(|note| format!(r#"<div class="card-note">{}</div>"#, escape_html(note)))
        .unwrap_or_default();
    format!(
        r#"<div class="card"><div class="card-title">{}</div><div class="card-value">{}</div>{note}</div>"#,
        escape_html(title),
        escape_html(value),
    )
}

pub fn card_grid(cards: &[String]) -> String {
    format!(r#"<div class="grid">{}</div>"#, cards.concat())
}

/// A titled section. `body` must already be HTML.
pub fn section(title: &str, body: &str) -> String {
    format!("<section><h2>{}</h2>{body}</section>", escape_html(title))
}

/// A static table of plain-text cells.
pub fn simple_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut html = String::from(r#"<div class="table-wrap"><table><thead><tr>"#);
    for header in headers {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr></thead><tbody>");
    if rows.is_empty() {
        html.push_str(&format!(
            r#"<tr><td class="empty" colspan="{}">No data</td></tr>"#,
            headers.len()
        ));
    }
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></div>");
    html
}

pub fn empty_note(text: &str) -> String {
    format!(r#"<p class="empty">{}</p>"#, escape_html(text))
}
