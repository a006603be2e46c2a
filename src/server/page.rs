//! Server-rendered HTML for the candidate list

use crate::candidate::{Candidate, CandidateStatus};
use crate::server::routes::IndexParams;

/// Pre-filled search text
pub const DEFAULT_QUERY: &str = "Python Developer";

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;max-width:60rem}\
table{border-collapse:collapse;width:100%}td,th{padding:.4rem;border-bottom:1px solid #ddd;text-align:left}\
.notice{padding:.6rem;margin:1rem 0;background:#e8f5e9}.notice.warn{background:#fff3e0}\
form.inline{display:inline}";

pub fn render_index(candidates: &[Candidate], params: &IndexParams) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    html.push_str("<title>Resume Tracker</title>");
    html.push_str(&format!("<style>{}</style></head><body>", STYLE));
    html.push_str("<h1>📄 Resume Tracker</h1>");

    for (class, message) in notices(params) {
        html.push_str(&format!(
            "<div class=\"notice {}\">{}</div>",
            class,
            escape_html(&message)
        ));
    }

    let query = params
        .query
        .as_deref()
        .filter(|q| !q.trim().is_empty())
        .unwrap_or(DEFAULT_QUERY);
    html.push_str("<h2>Search Criteria</h2>");
    html.push_str("<form method=\"post\" action=\"/fetch\">");
    html.push_str(&format!(
        "<label>Job Title <input type=\"text\" name=\"query\" value=\"{}\"></label> ",
        escape_html(query)
    ));
    html.push_str("<button type=\"submit\">Fetch Resumes</button></form>");

    html.push_str("<h2>📋 Candidates</h2>");
    if candidates.is_empty() {
        html.push_str("<p>No candidates yet. Fetch some resumes to get started.</p>");
    } else {
        html.push_str("<table><thead><tr><th>Candidate</th><th>Email</th><th>Salary</th><th>Status</th></tr></thead><tbody>");
        for candidate in candidates {
            html.push_str(&render_row(candidate));
        }
        html.push_str("</tbody></table>");
    }

    html.push_str("<form method=\"post\" action=\"/export\"><p>");
    html.push_str("<button type=\"submit\">📤 Export to spreadsheet</button></p></form>");
    html.push_str("</body></html>");
    html
}

fn render_row(candidate: &Candidate) -> String {
    let mut options = String::new();
    for status in CandidateStatus::all() {
        let selected = if *status == candidate.status { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>",
            status.as_str(),
            selected
        ));
    }

    format!(
        "<tr><td>👤 {}</td><td>{}</td><td>{}</td><td>\
         <form class=\"inline\" method=\"post\" action=\"/candidates/{}/status\">\
         <select name=\"status\">{}</select> <button type=\"submit\">✔ Save</button></form></td></tr>",
        escape_html(&candidate.short_description()),
        escape_html(&candidate.email),
        escape_html(&candidate.salary),
        candidate.id,
        options
    )
}

fn notices(params: &IndexParams) -> Vec<(&'static str, String)> {
    let mut notices = Vec::new();
    if params.failed.unwrap_or(false) {
        notices.push(("warn", "⚠️ Resume search failed; nothing was saved.".to_string()));
    } else if let Some(saved) = params.saved {
        notices.push(("ok", format!("✅ {} resumes saved!", saved)));
    }
    if let Some(id) = params.updated {
        notices.push(("ok", format!("✅ Candidate {} updated.", id)));
    }
    if let Some(id) = params.missing {
        notices.push(("warn", format!("⚠️ Candidate {} not found; nothing changed.", id)));
    }
    if let Some(rows) = params.exported {
        notices.push(("ok", format!("✅ Exported {} candidates!", rows)));
    }
    notices
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
