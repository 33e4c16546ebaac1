// src/output/html.rs

//! Renders the analysis report as a static, self-contained interactive
//! dashboard.
//!
//! The document embeds everything it needs except the Chart.js library,
//! which is referenced from the jsDelivr CDN. All interactivity (presence
//! filter, file-name search, context panels) runs client-side with vanilla
//! JS over server-rendered rows. Rows with the keyword come first, sorted by
//! descending mention count; rows without it follow, sorted by file name,
//! with continuous row numbering across both groups.

use crate::constants::{CHART_LABEL_MAX_CHARS, TOP_FILES_CHART_LIMIT};
use crate::core_types::{AnalysisReport, FileResult, Presence};
use crate::errors::{io_error_with_path, Result};
use crate::matcher::word_pattern;
use crate::output::{format_stat, format_thousands};
use log::debug;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Writes the dashboard to `path`, overwriting any existing file.
pub fn write_html_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let html = render_dashboard(report);
    fs::write(path, html).map_err(|e| io_error_with_path(e, path))?;
    debug!("HTML dashboard written to '{}'", path.display());
    Ok(())
}

/// Renders the full dashboard document.
pub fn render_dashboard(report: &AnalysisReport) -> String {
    let meta = &report.metadata;
    let summary = &report.summary;
    let keyword = escape_html(&meta.keyword);

    let (files_with, files_without) = partition_rows(&report.files);

    let mut html = String::with_capacity(64 * 1024);

    // --- Head ---
    html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!(
        "    <title>Análisis de \"{}\" en Corpus Textual</title>\n",
        keyword
    ));
    html.push_str("    <script src=\"https://cdn.jsdelivr.net/npm/chart.js\"></script>\n");
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n    <div class=\"container\">\n");

    // --- Header ---
    html.push_str(&format!(
        "        <h1>Análisis de \"{}\" en Corpus Textual</h1>\n",
        keyword
    ));
    html.push_str("        <p class=\"subtitle\">Proyecto LexiMus - Universidad de Salamanca</p>\n\n");
    html.push_str(&format!(
        "        <div class=\"palabra-buscada\">\n            <strong>Palabra buscada:</strong> \"{}\" (búsqueda EXACTA)\n        </div>\n\n",
        keyword
    ));

    // --- Summary cards ---
    html.push_str("        <div class=\"stats-grid\">\n");
    html.push_str(&stat_card(
        "Total Archivos",
        &meta.total_files.to_string(),
        &format!("{} palabras", format_thousands(meta.total_words)),
    ));
    html.push_str(&stat_card(
        &format!("Con \"{}\"", keyword),
        &summary.files_with_keyword.to_string(),
        &format!("{}% del total", format_stat(summary.percent_with_keyword)),
    ));
    html.push_str(&stat_card(
        &format!("Sin \"{}\"", keyword),
        &summary.files_without_keyword.to_string(),
        &format!("{}% del total", format_stat(summary.percent_without_keyword)),
    ));
    html.push_str(&stat_card(
        "Total Menciones",
        &summary.total_mentions.to_string(),
        &format!("{} por millón", format_stat(summary.frequency_per_million)),
    ));
    html.push_str("        </div>\n\n");

    // --- Charts ---
    html.push_str(&format!(
        "        <div class=\"chart-container\">\n            <h2>Distribución de Archivos por Presencia de \"{}\"</h2>\n            <div class=\"chart-wrapper\">\n                <canvas id=\"presenciaChart\"></canvas>\n            </div>\n        </div>\n\n",
        keyword
    ));
    html.push_str("        <div class=\"chart-container\">\n            <h2>Frecuencia de Menciones</h2>\n            <canvas id=\"frecuenciaChart\"></canvas>\n        </div>\n\n");

    // --- Table section ---
    html.push_str("        <div class=\"table-section\">\n            <h2>Detalle por Archivo</h2>\n\n");
    html.push_str("            <div class=\"search-box\">\n                <input type=\"text\" id=\"searchInput\" placeholder=\"Buscar por nombre de archivo...\">\n            </div>\n\n");
    html.push_str(&format!(
        "            <div class=\"filter-tabs\">\n                <button class=\"filter-tab active\" onclick=\"filtrarTabla(event, 'todos')\">\n                    Todos ({})\n                </button>\n                <button class=\"filter-tab\" onclick=\"filtrarTabla(event, 'con')\">\n                    Con \"{}\" ({})\n                </button>\n                <button class=\"filter-tab\" onclick=\"filtrarTabla(event, 'sin')\">\n                    Sin \"{}\" ({})\n                </button>\n            </div>\n\n",
        meta.total_files, keyword, summary.files_with_keyword, keyword, summary.files_without_keyword
    ));
    html.push_str(TABLE_HEAD);

    let highlighter = keyword_highlighter(&meta.keyword);
    let mut row_number = 1;
    for file in &files_with {
        html.push_str(&render_row_with_keyword(file, row_number, &highlighter));
        row_number += 1;
    }
    for file in &files_without {
        html.push_str(&render_row_without_keyword(file, row_number));
        row_number += 1;
    }

    html.push_str("                </tbody>\n            </table>\n        </div>\n\n");

    // --- Metadata block & footer ---
    html.push_str(&format!(
        "        <div class=\"metadata\">\n            <strong>Directorio analizado:</strong> {}<br>\n            <strong>Fecha de análisis:</strong> {}<br>\n            <strong>Total palabras procesadas:</strong> {}<br>\n            <strong>Palabra buscada:</strong> \"{}\" (búsqueda EXACTA, sensible a mayúsculas)\n        </div>\n\n",
        escape_html(&meta.directory),
        escape_html(&meta.analyzed_at),
        format_thousands(meta.total_words),
        keyword
    ));
    html.push_str(FOOTER);

    // --- Script ---
    html.push_str(&render_script(report, &files_with));

    html.push_str("</body>\n</html>\n");
    html
}

/// Splits the file results into the two dashboard groups: with-keyword rows
/// sorted by descending mention count (ties by file name), then
/// without-keyword rows sorted alphabetically.
fn partition_rows(files: &[FileResult]) -> (Vec<&FileResult>, Vec<&FileResult>) {
    let mut with: Vec<&FileResult> = files.iter().filter(|f| f.has_keyword).collect();
    let mut without: Vec<&FileResult> = files.iter().filter(|f| !f.has_keyword).collect();
    with.sort_by(|a, b| {
        b.mention_count
            .cmp(&a.mention_count)
            .then_with(|| a.file_name.cmp(&b.file_name))
    });
    without.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    (with, without)
}

fn stat_card(title: &str, number: &str, detail: &str) -> String {
    format!(
        "            <div class=\"stat-card\">\n                <h3>{}</h3>\n                <div class=\"number\">{}</div>\n                <div>{}</div>\n            </div>\n",
        title, number, detail
    )
}

fn render_row_with_keyword(file: &FileResult, row_number: usize, highlighter: &Regex) -> String {
    let context_id = format!("contexto_{}", row_number);
    let mut row = format!(
        "                    <tr data-filter=\"{}\">\n                        <td><strong>{}</strong></td>\n                        <td>{}</td>\n                        <td><span class=\"badge badge-success\">✓ SÍ</span></td>\n                        <td><span class=\"menciones-badge\">{}</span></td>\n                        <td>{}</td>\n                        <td>\n                            <button class=\"contexto-btn\" onclick=\"toggleContexto('{}')\">\n                                Ver contexto\n                            </button>\n                            <div id=\"{}\" class=\"contexto-detalle\">\n",
        Presence::WithKeyword.filter_tag(),
        row_number,
        escape_html(&file.file_name),
        file.mention_count,
        format_thousands(file.word_count),
        context_id,
        context_id
    );

    if file.contexts.is_empty() {
        row.push_str("                                <div class=\"contexto-item\">\n                                    No hay contextos disponibles.\n                                </div>\n");
    } else {
        for (i, occurrence) in file.contexts.iter().enumerate() {
            let highlighted = highlighter
                .replace_all(&escape_html(&occurrence.text), "<strong>$0</strong>")
                .into_owned();
            row.push_str(&format!(
                "                                <div class=\"contexto-item\">\n                                    <strong>Mención {}:</strong><br>\n                                    ...{}...\n                                </div>\n",
                i + 1,
                highlighted
            ));
        }
    }

    row.push_str("                            </div>\n                        </td>\n                    </tr>\n");
    row
}

fn render_row_without_keyword(file: &FileResult, row_number: usize) -> String {
    format!(
        "                    <tr data-filter=\"{}\">\n                        <td><strong>{}</strong></td>\n                        <td>{}</td>\n                        <td><span class=\"badge badge-danger\">✗ NO</span></td>\n                        <td><span class=\"menciones-badge\">0</span></td>\n                        <td>{}</td>\n                        <td>—</td>\n                    </tr>\n",
        Presence::WithoutKeyword.filter_tag(),
        row_number,
        escape_html(&file.file_name),
        format_thousands(file.word_count)
    )
}

fn render_script(report: &AnalysisReport, files_with: &[&FileResult]) -> String {
    let summary = &report.summary;
    let keyword = escape_html(&report.metadata.keyword);

    let top_files: Vec<&&FileResult> = files_with.iter().take(TOP_FILES_CHART_LIMIT).collect();
    let top_labels: Vec<String> = top_files
        .iter()
        .map(|f| truncate_label(&f.file_name))
        .collect();
    let top_values: Vec<usize> = top_files.iter().map(|f| f.mention_count).collect();

    // Chart data is embedded as JSON literals inside the inline script.
    let labels_json = escape_for_script(
        &serde_json::to_string(&top_labels).unwrap_or_else(|_| "[]".to_string()),
    );
    let values_json = escape_for_script(
        &serde_json::to_string(&top_values).unwrap_or_else(|_| "[]".to_string()),
    );

    format!(
        r#"    <script>
        // Pie chart: files with vs without the keyword
        const ctx1 = document.getElementById('presenciaChart').getContext('2d');
        new Chart(ctx1, {{
            type: 'pie',
            data: {{
                labels: ['Con "{keyword}"', 'Sin "{keyword}"'],
                datasets: [{{
                    data: [{with_count}, {without_count}],
                    backgroundColor: ['#10b981', '#ef4444'],
                    borderWidth: 2,
                    borderColor: '#fff'
                }}]
            }},
            options: {{
                responsive: true,
                maintainAspectRatio: true,
                plugins: {{
                    legend: {{
                        position: 'bottom',
                        labels: {{ font: {{ size: 14 }}, padding: 20 }}
                    }},
                    tooltip: {{
                        callbacks: {{
                            label: function(context) {{
                                const value = context.parsed || 0;
                                const total = {total_files} || 1;
                                const percentage = ((value / total) * 100).toFixed(1);
                                return context.label + ': ' + value + ' archivos (' + percentage + '%)';
                            }}
                        }}
                    }}
                }}
            }}
        }});

        // Horizontal bar chart: top files by mention count
        const ctx2 = document.getElementById('frecuenciaChart').getContext('2d');
        new Chart(ctx2, {{
            type: 'bar',
            data: {{
                labels: {labels_json},
                datasets: [{{
                    label: 'Menciones de "{keyword}"',
                    data: {values_json},
                    backgroundColor: '#667eea',
                    borderRadius: 8
                }}]
            }},
            options: {{
                responsive: true,
                indexAxis: 'y',
                scales: {{
                    x: {{ beginAtZero: true, ticks: {{ stepSize: 1 }} }}
                }},
                plugins: {{
                    legend: {{ display: false }},
                    tooltip: {{
                        callbacks: {{
                            label: function(context) {{
                                return 'Menciones: ' + context.parsed.x;
                            }}
                        }}
                    }}
                }}
            }}
        }});

        // Three-way presence filter over the per-row category tags
        function filtrarTabla(event, filtro) {{
            const filas = document.querySelectorAll('#tablaArchivos tbody tr');
            document.querySelectorAll('.filter-tab').forEach(tab => tab.classList.remove('active'));
            event.target.classList.add('active');

            filas.forEach(fila => {{
                const categoria = fila.getAttribute('data-filter');
                fila.style.display = (filtro === 'todos' || filtro === categoria) ? '' : 'none';
            }});
        }}

        // Show/hide a row's context panel
        function toggleContexto(id) {{
            document.getElementById(id).classList.toggle('visible');
        }}

        // Free-text filter on file name
        document.getElementById('searchInput').addEventListener('keyup', function() {{
            const filtro = this.value.toLowerCase();
            document.querySelectorAll('#tablaArchivos tbody tr').forEach(fila => {{
                const archivo = fila.cells[1].textContent.toLowerCase();
                fila.style.display = archivo.includes(filtro) ? '' : 'none';
            }});
        }});
    </script>
"#,
        keyword = keyword,
        with_count = summary.files_with_keyword,
        without_count = summary.files_without_keyword,
        total_files = report.metadata.total_files,
        labels_json = labels_json,
        values_json = values_json,
    )
}

/// Truncates a chart label to [`CHART_LABEL_MAX_CHARS`] characters, with an
/// ellipsis when the name is longer.
fn truncate_label(name: &str) -> String {
    if name.chars().count() > CHART_LABEL_MAX_CHARS {
        let truncated: String = name.chars().take(CHART_LABEL_MAX_CHARS).collect();
        format!("{}...", truncated)
    } else {
        name.to_string()
    }
}

/// Escapes text for interpolation into HTML content and attribute values.
fn escape_html(s: &str) -> String {
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

/// Prevents an embedded JSON literal from terminating the inline script block.
fn escape_for_script(s: &str) -> String {
    s.replace("</script>", "<\\/script>")
}

/// Compiles the regex that wraps whole-word keyword matches in the
/// (already HTML-escaped) context text.
fn keyword_highlighter(keyword: &str) -> Regex {
    // The keyword is escaped twice (HTML entities, then regex metacharacters),
    // so the pattern is always a valid literal.
    Regex::new(&word_pattern(&escape_html(keyword)))
        .expect("escaped keyword must compile to a valid pattern")
}

// ─── Static template pieces ───

const STYLE: &str = r#"    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            padding: 20px;
            min-height: 100vh;
        }
        .container {
            max-width: 1400px;
            margin: 0 auto;
            background: white;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            padding: 40px;
        }
        h1 {
            text-align: center;
            color: #333;
            margin-bottom: 10px;
            font-size: 2.5em;
        }
        .subtitle {
            text-align: center;
            color: #666;
            margin-bottom: 30px;
            font-size: 1.1em;
        }
        .palabra-buscada {
            text-align: center;
            background: #f8f9fa;
            padding: 15px;
            border-radius: 10px;
            margin-bottom: 30px;
            font-size: 0.95em;
        }
        .palabra-buscada strong {
            color: #667eea;
        }
        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
            margin-bottom: 40px;
        }
        .stat-card {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 25px;
            border-radius: 15px;
            box-shadow: 0 5px 15px rgba(0,0,0,0.1);
            text-align: center;
            transition: transform 0.3s ease;
        }
        .stat-card:hover {
            transform: translateY(-5px);
        }
        .stat-card h3 {
            font-size: 0.9em;
            opacity: 0.9;
            margin-bottom: 10px;
        }
        .stat-card .number {
            font-size: 2.5em;
            font-weight: bold;
            margin-bottom: 5px;
        }
        .chart-container {
            background: #f8f9fa;
            padding: 30px;
            border-radius: 15px;
            margin-bottom: 30px;
            box-shadow: 0 5px 15px rgba(0,0,0,0.05);
        }
        .chart-container h2 {
            color: #333;
            margin-bottom: 20px;
            text-align: center;
        }
        .chart-wrapper {
            max-width: 600px;
            margin: 0 auto;
        }
        .table-section {
            background: #fff;
            padding: 30px;
            border-radius: 15px;
            margin-bottom: 30px;
            border: 1px solid #e0e0e0;
        }
        .table-section h2 {
            color: #333;
            margin-bottom: 20px;
            padding-bottom: 10px;
            border-bottom: 3px solid #667eea;
        }
        .filter-tabs {
            display: flex;
            gap: 10px;
            margin-bottom: 20px;
            flex-wrap: wrap;
        }
        .filter-tab {
            padding: 10px 20px;
            border: none;
            background: #e9ecef;
            border-radius: 8px;
            cursor: pointer;
            font-size: 1em;
            transition: all 0.3s ease;
        }
        .filter-tab.active {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
        }
        .filter-tab:hover {
            background: #dee2e6;
        }
        .filter-tab.active:hover {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 20px;
        }
        th {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 15px;
            text-align: left;
            font-weight: 600;
            position: sticky;
            top: 0;
            z-index: 10;
        }
        td {
            padding: 12px 15px;
            border-bottom: 1px solid #eee;
        }
        tr:hover {
            background: #f8f9fa;
        }
        .badge {
            display: inline-block;
            padding: 4px 12px;
            border-radius: 20px;
            font-weight: bold;
            font-size: 0.85em;
        }
        .badge-success {
            background: #d1fae5;
            color: #065f46;
        }
        .badge-danger {
            background: #fee2e2;
            color: #991b1b;
        }
        .menciones-badge {
            background: #667eea;
            color: white;
            padding: 4px 10px;
            border-radius: 15px;
            font-weight: bold;
            font-size: 0.9em;
        }
        .contexto-btn {
            background: #f3f4f6;
            border: 1px solid #d1d5db;
            padding: 5px 12px;
            border-radius: 6px;
            cursor: pointer;
            font-size: 0.85em;
            transition: all 0.2s ease;
        }
        .contexto-btn:hover {
            background: #e5e7eb;
        }
        .contexto-detalle {
            display: none;
            margin-top: 10px;
            padding: 15px;
            background: #f9fafb;
            border-left: 4px solid #667eea;
            border-radius: 6px;
            font-size: 0.9em;
            line-height: 1.6;
        }
        .contexto-detalle.visible {
            display: block;
        }
        .contexto-item {
            margin-bottom: 10px;
            padding: 10px;
            background: white;
            border-radius: 4px;
            border: 1px solid #e5e7eb;
        }
        .contexto-item strong {
            color: #667eea;
        }
        .metadata {
            background: #f8f9fa;
            padding: 20px;
            border-radius: 10px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #666;
        }
        footer {
            text-align: center;
            margin-top: 40px;
            padding-top: 20px;
            border-top: 2px solid #eee;
            color: #666;
        }
        .search-box {
            margin-bottom: 20px;
        }
        .search-box input {
            width: 100%;
            padding: 12px 20px;
            border: 2px solid #e5e7eb;
            border-radius: 10px;
            font-size: 1em;
            transition: border 0.3s ease;
        }
        .search-box input:focus {
            outline: none;
            border-color: #667eea;
        }
    </style>
"#;

const TABLE_HEAD: &str = r#"            <table id="tablaArchivos">
                <thead>
                    <tr>
                        <th style="width: 5%;">#</th>
                        <th style="width: 40%;">Archivo</th>
                        <th style="width: 15%;">Presencia</th>
                        <th style="width: 15%;">Menciones</th>
                        <th style="width: 15%;">Palabras</th>
                        <th style="width: 10%;">Contexto</th>
                    </tr>
                </thead>
                <tbody>
"#;

const FOOTER: &str = r#"        <footer>
            <p><strong>LexiMus: Léxico y ontología de la música en español</strong></p>
            <p>Universidad de Salamanca | Instituto Complutense de Ciencias Musicales | Universidad de La Rioja</p>
        </footer>
    </div>

"#;
