//! Inline SVG charts.

use std::f64::consts::PI;

use folio_display::{
    categories::{CategoryBar, CategorySlice, max_roi},
    number::{floor_grouped, format_grouped},
    vesting::VestingSeries,
};

use super::{escape_html, widgets::empty_note};

pub const PALETTE: [&str; 15] = [
    "#6366f1", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#06b6d4", "#84cc16", "#f97316",
    "#ec4899", "#3b82f6", "#14b8a6", "#f43f5e", "#22c55e", "#a855f7", "#0ea5e9",
];

const REALISED_COLOR: &str = "#10b981";
const UNREALISED_COLOR: &str = "#6366f1";

const BAR_CHART_WIDTH: f64 = 900.0;
const BAR_CHART_HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 10.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 60.0;

const DONUT_SIZE: f64 = 360.0;
const DONUT_CENTER: f64 = 180.0;
const DONUT_OUTER: f64 = 130.0;
const DONUT_INNER: f64 = 75.0;

pub fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn plot_width() -> f64 {
    BAR_CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    BAR_CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

fn open_svg(width: f64, height: f64) -> String {
    format!(
        r#"<svg class="chart" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg" role="img">"#
    )
}

fn legend(entries: &[(&str, &str)]) -> String {
    let mut html = String::from(r#"<div class="legend">"#);
    for (label, swatch) in entries {
        html.push_str(&format!(
            r#"<span style="--swatch: {swatch}">{}</span>"#,
            escape_html(label)
        ));
    }
    html.push_str("</div>");
    html
}

fn axis(svg: &mut String, top_label: &str) {
    let bottom = MARGIN_TOP + plot_height();
    svg.push_str(&format!(
        r##"<line x1="{MARGIN_LEFT}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="#cbd5e1"/><text x="{label_x}" y="{top}" text-anchor="end">{top_label}</text><text x="{label_x}" y="{bottom}" text-anchor="end">0</text>"##,
        right = BAR_CHART_WIDTH - MARGIN_RIGHT,
        label_x = MARGIN_LEFT - 6.0,
        top = MARGIN_TOP + 10.0,
        top_label = escape_html(top_label)
    ));
}

fn x_label(svg: &mut String, x: f64, label: &str) {
    let y = MARGIN_TOP + plot_height() + 16.0;
    svg.push_str(&format!(
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="end" transform="rotate(-35 {x:.2} {y:.2})">{}</text>"#,
        escape_html(label)
    ));
}

/// Stacked monthly unlock amounts, one colour per project.
pub fn vesting_chart(series: &VestingSeries) -> String {
    if series.is_empty() || series.max_total <= 0.0 {
        return empty_note("No upcoming unlocks");
    }

    let slot = plot_width() / series.bars.len() as f64;
    let bar_width = (slot * 0.7).max(1.0);
    let bottom = MARGIN_TOP + plot_height();

    let mut svg = open_svg(BAR_CHART_WIDTH, BAR_CHART_HEIGHT);
    axis(&mut svg, &format!("${}", floor_grouped(series.max_total)));

    for (i, bar) in series.bars.iter().enumerate() {
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
        let mut y = bottom;
        for (project, amount) in &bar.segments {
            let height = amount / series.max_total * plot_height();
            y -= height;
            let fill = color(series.project_index(project).unwrap_or_default());
            svg.push_str(&format!(
                r#"<rect x="{x:.2}" y="{y:.2}" width="{bar_width:.2}" height="{height:.2}" fill="{fill}"><title>{}: ${}</title></rect>"#,
                escape_html(project),
                format_grouped(*amount, 0, 0)
            ));
        }
        x_label(&mut svg, x + bar_width / 2.0, &bar.label);
    }
    svg.push_str("</svg>");

    let entries: Vec<(&str, &str)> = series
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| (project.as_str(), color(i)))
        .collect();
    svg + &legend(&entries)
}

/// Realised and unrealised multiple side by side for each category.
pub fn category_chart(bars: &[CategoryBar<'_>]) -> String {
    if bars.is_empty() {
        return empty_note("No category data");
    }

    let max = max_roi(bars);
    let slot = plot_width() / bars.len() as f64;
    let bar_width = (slot * 0.35).max(1.0);
    let bottom = MARGIN_TOP + plot_height();

    let mut svg = open_svg(BAR_CHART_WIDTH, BAR_CHART_HEIGHT);
    axis(&mut svg, &format!("{max:.2}x"));

    for (i, bar) in bars.iter().enumerate() {
        let start = MARGIN_LEFT + slot * i as f64 + (slot - 2.0 * bar_width) / 2.0;
        let values = [
            ("Realised", bar.realised_roi, REALISED_COLOR),
            ("Unrealised", bar.unrealised_roi, UNREALISED_COLOR),
        ];
        for (j, (kind, roi, fill)) in values.into_iter().enumerate() {
            let height = roi.max(0.0) / max * plot_height();
            let x = start + bar_width * j as f64;
            svg.push_str(&format!(
                r#"<rect x="{x:.2}" y="{y:.2}" width="{bar_width:.2}" height="{height:.2}" fill="{fill}"><title>{} {kind}: {roi:.2}x</title></rect>"#,
                escape_html(&bar.category.category),
                y = bottom - height
            ));
        }
        x_label(&mut svg, start + bar_width, &bar.category.category);
    }
    svg.push_str("</svg>");

    svg + &legend(&[
        ("Realised ROI", REALISED_COLOR),
        ("Unrealised ROI", UNREALISED_COLOR),
    ])
}

fn polar(radius: f64, angle: f64) -> (f64, f64) {
    (
        DONUT_CENTER + radius * angle.cos(),
        DONUT_CENTER + radius * angle.sin(),
    )
}

/// Ring segment between `start` and `end`, in radians.
fn arc_path(start: f64, end: f64) -> String {
    let large_arc = u8::from(end - start > PI);
    let (ox0, oy0) = polar(DONUT_OUTER, start);
    let (ox1, oy1) = polar(DONUT_OUTER, end);
    let (ix1, iy1) = polar(DONUT_INNER, end);
    let (ix0, iy0) = polar(DONUT_INNER, start);
    format!(
        "M {ox0:.3} {oy0:.3} A {DONUT_OUTER} {DONUT_OUTER} 0 {large_arc} 1 {ox1:.3} {oy1:.3} \
         L {ix1:.3} {iy1:.3} A {DONUT_INNER} {DONUT_INNER} 0 {large_arc} 0 {ix0:.3} {iy0:.3} Z"
    )
}

/// Invested share per category, starting at twelve o'clock and going
/// clockwise.
pub fn donut_chart(slices: &[CategorySlice<'_>]) -> String {
    if slices.is_empty() {
        return empty_note("No category data");
    }

    let mut svg = open_svg(DONUT_SIZE, DONUT_SIZE);
    if let [slice] = slices {
        // A single category fills the ring; an arc from an angle to itself
        // would draw nothing.
        svg.push_str(&format!(
            r#"<circle cx="{DONUT_CENTER}" cy="{DONUT_CENTER}" r="{r}" fill="none" stroke="{fill}" stroke-width="{width}"><title>{}: 100.0%</title></circle>"#,
            escape_html(&slice.category.category),
            r = (DONUT_OUTER + DONUT_INNER) / 2.0,
            width = DONUT_OUTER - DONUT_INNER,
            fill = color(0)
        ));
    } else {
        let mut angle = -PI / 2.0;
        for (i, slice) in slices.iter().enumerate() {
            let sweep = slice.share / 100.0 * 2.0 * PI;
            svg.push_str(&format!(
                r#"<path d="{}" fill="{}"><title>{}: {:.1}%</title></path>"#,
                arc_path(angle, angle + sweep),
                color(i),
                escape_html(&slice.category.category),
                slice.share
            ));
            angle += sweep;
        }
    }
    svg.push_str("</svg>");

    let labels: Vec<String> = slices
        .iter()
        .map(|slice| format!("{} ({:.1}%)", slice.category.category, slice.share))
        .collect();
    let entries: Vec<(&str, &str)> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.as_str(), color(i)))
        .collect();
    svg + &legend(&entries)
}
