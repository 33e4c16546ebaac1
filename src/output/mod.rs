//! Generates the run outputs: the JSON report, the HTML dashboard, and the
//! human-readable run summary.

pub mod html;
pub mod json;
pub mod summary;

pub use html::write_html_report;
pub use json::write_json_report;
pub use summary::write_run_summary;

/// Formats a statistic the way the report consumers expect: two decimals at
/// most, trailing zeros dropped, but always at least one decimal place
/// (e.g. `50.0`, `66.67`, `33.3`).
pub(crate) fn format_stat(value: f64) -> String {
    let mut s = format!("{:.2}", value);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.push('0');
    }
    s
}

/// Formats an integer with `,` thousands separators.
pub(crate) fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
