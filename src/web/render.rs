//! HTML rendering of the tracking page: form, alert, table and bar chart.
//!
//! Markup is assembled with `format!`; every user-provided value goes
//! through [`escape`].

use crate::config::Config;
use crate::core::chart::{CHART_TITLE, OperatorChart, X_LABEL, Y_LABEL};
use crate::core::submit::TrackingView;
use crate::models::form::EntryForm;
use crate::models::record::{COLUMNS, TrackingRecord};
use crate::models::status::Status;

pub const PAGE_TITLE: &str = "Laborprozess-Tracking";
pub const SUBMIT_LABEL: &str = "Eintrag hinzufügen";

const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

// SVG geometry
const CHART_W: usize = 720;
const CHART_H: usize = 360;
const MARGIN_L: usize = 60;
const MARGIN_R: usize = 20;
const MARGIN_T: usize = 50;
const MARGIN_B: usize = 60;

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Full page. `clicks` is written back into the hidden counter so the next
/// POST continues counting from there.
pub fn render_page(cfg: &Config, form: &EntryForm, clicks: u32, view: &TrackingView) -> String {
    let statuses: Vec<String> = Status::ALL.iter().map(|s| s.label().to_string()).collect();

    let alert = view.alert.as_deref().map(render_alert).unwrap_or_default();

    format!(
        "<!doctype html><html lang=\"de\"><head><meta charset=\"utf-8\">\
<title>{title}</title><link rel=\"stylesheet\" href=\"{STYLESHEET}\"></head>\
<body><div class=\"container py-3\">\
<h1>{title}</h1>\
<form method=\"post\" action=\"/\" id=\"entry-form\">\
<input type=\"hidden\" name=\"n_clicks\" value=\"{clicks}\">\
<div class=\"row mb-2\">\
<div class=\"col-6\"><input class=\"form-control\" type=\"date\" id=\"datum\" name=\"datum\" placeholder=\"Datum auswählen\" value=\"{datum}\"></div>\
<div class=\"col-6\"><input class=\"form-control\" type=\"time\" id=\"uhrzeit\" name=\"uhrzeit\" placeholder=\"Uhrzeit auswählen\" value=\"{uhrzeit}\"></div>\
</div>\
<input class=\"form-control mb-2\" type=\"text\" id=\"prozess\" name=\"prozess\" placeholder=\"Kommentar eingeben\" value=\"{prozess}\">\
{operator}{status}{operation}\
<button class=\"btn btn-primary mb-3\" type=\"submit\" id=\"submit\">{SUBMIT_LABEL}</button>\
</form>\
<div id=\"table-container\">{alert}{table}</div>\
<div id=\"bar-chart\">{chart}</div>\
</div></body></html>",
        title = PAGE_TITLE,
        datum = escape(form.datum.as_deref().unwrap_or("")),
        uhrzeit = escape(form.uhrzeit.as_deref().unwrap_or("")),
        prozess = escape(form.prozess.as_deref().unwrap_or("")),
        operator = render_select("operator", "Name eingeben", &cfg.operators, form.operator.as_deref()),
        status = render_select("status", "Status auswählen", &statuses, form.status.as_deref()),
        operation = render_select(
            "operation",
            "Operation auswählen",
            &cfg.operations,
            form.operation.as_deref()
        ),
        table = render_table(&view.records),
        chart = render_chart(&view.chart),
    )
}

fn render_select(name: &str, placeholder: &str, options: &[String], selected: Option<&str>) -> String {
    let mut out = format!(
        "<select class=\"form-select mb-2\" id=\"{name}\" name=\"{name}\"><option value=\"\">{}</option>",
        escape(placeholder)
    );
    for opt in options {
        let sel = if selected == Some(opt.as_str()) { " selected" } else { "" };
        let v = escape(opt);
        out.push_str(&format!("<option value=\"{v}\"{sel}>{v}</option>"));
    }
    out.push_str("</select>");
    out
}

pub fn render_alert(message: &str) -> String {
    format!(
        "<div class=\"alert alert-danger alert-dismissible\" role=\"alert\">{}\
<button type=\"button\" class=\"btn-close\" aria-label=\"Close\" onclick=\"this.parentElement.remove()\"></button></div>",
        escape(message)
    )
}

/// One `<tr>` per record, headers are the table's column names.
pub fn render_table(records: &[TrackingRecord]) -> String {
    let mut out = String::from("<table class=\"table table-striped table-bordered table-hover\"><thead><tr>");
    for col in COLUMNS {
        out.push_str(&format!("<th>{col}</th>"));
    }
    out.push_str("</tr></thead><tbody>");

    for rec in records {
        out.push_str("<tr>");
        for cell in rec.cells() {
            out.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        out.push_str("</tr>");
    }

    out.push_str("</tbody></table>");
    out
}

/// Step between y-axis ticks so that there are at most ~5 ticks.
fn tick_step(max: usize) -> usize {
    max.div_ceil(5).max(1)
}

/// Inline SVG bar chart. An empty chart renders as nothing.
pub fn render_chart(chart: &OperatorChart) -> String {
    if chart.is_empty() {
        return String::new();
    }

    let plot_w = CHART_W - MARGIN_L - MARGIN_R;
    let plot_h = CHART_H - MARGIN_T - MARGIN_B;
    let step = tick_step(chart.max_count());
    let y_max = chart.max_count().div_ceil(step) * step;
    let slot = plot_w / chart.bars.len();
    let bar_w = (slot * 4 / 5).max(1);
    let base_y = MARGIN_T + plot_h;

    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CHART_W}\" height=\"{CHART_H}\" role=\"img\">\
<text x=\"{}\" y=\"25\" font-size=\"18\">{}</text>",
        MARGIN_L,
        escape(CHART_TITLE)
    );

    // y axis with grid lines
    let mut tick = 0;
    while tick <= y_max {
        let y = base_y - tick * plot_h / y_max;
        out.push_str(&format!(
            "<line x1=\"{MARGIN_L}\" y1=\"{y}\" x2=\"{}\" y2=\"{y}\" stroke=\"#e5e5e5\"/>\
<text x=\"{}\" y=\"{}\" font-size=\"12\" text-anchor=\"end\">{tick}</text>",
            CHART_W - MARGIN_R,
            MARGIN_L - 6,
            y + 4
        ));
        tick += step;
    }

    for (i, bar) in chart.bars.iter().enumerate() {
        let h = bar.count * plot_h / y_max;
        let x = MARGIN_L + i * slot + slot.saturating_sub(bar_w) / 2;
        let label = escape(&bar.operator);
        out.push_str(&format!(
            "<rect class=\"bar\" data-operator=\"{label}\" x=\"{x}\" y=\"{}\" width=\"{bar_w}\" height=\"{h}\" fill=\"#636efa\">\
<title>{label}: {}</title></rect>\
<text x=\"{}\" y=\"{}\" font-size=\"12\" text-anchor=\"middle\">{label}</text>",
            base_y - h,
            bar.count,
            x + bar_w / 2,
            base_y + 18
        ));
    }

    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"13\" text-anchor=\"middle\">{}</text>\
<text x=\"16\" y=\"{}\" font-size=\"13\" text-anchor=\"middle\" transform=\"rotate(-90 16 {})\">{}</text></svg>",
        MARGIN_L + plot_w / 2,
        CHART_H - 12,
        escape(X_LABEL),
        MARGIN_T + plot_h / 2,
        MARGIN_T + plot_h / 2,
        escape(Y_LABEL)
    ));

    out
}
