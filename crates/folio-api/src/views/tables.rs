//! Sortable investment tables.
//!
//! Sorting happens on the server; each header links to the same page with the
//! toggled sort state in the query string.

use folio_display::{
    Column, ColumnKey, SortDirection, SortState, TableRow,
    cells::tone,
    format::format_tokens_received,
    number::to_fixed,
    rankings::{Ranked, ranked_total},
    sort::sort_rows,
};

use super::{View, escape_html, widgets::simple_table};

/// Renders a single cell from its raw sheet value.
pub type CellRenderer = fn(ColumnKey, &str) -> String;

const fn marker(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => " ▲",
        SortDirection::Desc => " ▼",
    }
}

fn header_href(view: &View, next: SortState) -> String {
    format!("{}&sort={}&dir={}", view.href(), next.key, next.direction)
}

fn header(html: &mut String, view: &View, column: &Column, state: SortState) {
    let active = column.key == state.key;
    html.push_str(&format!(
        r#"<th{}><a href="{}">{}{}</a></th>"#,
        if active { r#" class="sorted""# } else { "" },
        escape_html(&header_href(view, state.toggled(column.key))),
        escape_html(column.label),
        if active { marker(state.direction) } else { "" }
    ));
}

pub fn sortable_table<T: TableRow>(
    view: &View,
    mut rows: Vec<T>,
    columns: &[Column],
    state: SortState,
    render: CellRenderer,
) -> String {
    sort_rows(&mut rows, columns, state);

    let mut html = String::from(r#"<div class="table-wrap"><table><thead><tr>"#);
    for column in columns {
        header(&mut html, view, column, state);
    }
    html.push_str("</tr></thead><tbody>");

    if rows.is_empty() {
        html.push_str(&format!(
            r#"<tr><td class="empty" colspan="{}">No investments</td></tr>"#,
            columns.len()
        ));
    }

    for row in &rows {
        html.push_str("<tr>");
        for column in columns {
            let raw = row.cell(column.key);
            let text = if column.key == ColumnKey::Name {
                raw.to_owned()
            } else {
                render(column.key, raw)
            };
            let class = tone(column.key, &text).css_class();
            if class.is_empty() {
                html.push_str(&format!("<td>{}</td>", escape_html(&text)));
            } else {
                html.push_str(&format!(r#"<td class="{class}">{}</td>"#, escape_html(&text)));
            }
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table></div>");
    html
}

fn share_cell(share: f64) -> String {
    format!("{}%", to_fixed(share, 1))
}

/// Top positions with their share of `total`, closed by a row for the whole list.
pub fn ranked_table<T, F>(
    ranked: &[Ranked<'_, T>],
    name: F,
    total: f64,
    value_label: &str,
) -> String
where
    F: Fn(&T) -> &str,
{
    let mut rows: Vec<Vec<String>> = ranked
        .iter()
        .map(|pos| {
            vec![
                name(pos.row).to_owned(),
                format_tokens_received(&to_fixed(pos.value, 2)),
                share_cell(pos.share_of(total)),
            ]
        })
        .collect();

    if !ranked.is_empty() {
        let combined = ranked_total(ranked);
        let share = if total > 0.0 { combined / total * 100.0 } else { 0.0 };
        rows.push(vec![
            format!("Top {}", ranked.len()),
            format_tokens_received(&to_fixed(combined, 2)),
            share_cell(share),
        ]);
    }
    simple_table(&["Name", value_label, "% of Total"], &rows)
}
