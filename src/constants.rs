// src/constants.rs

/// File extension (without the dot) that marks a corpus file.
pub const TXT_EXTENSION: &str = "txt";

/// Fixed name of the JSON report written to the current working directory.
pub const JSON_OUTPUT_FILE: &str = "resultados_busqueda.json";

/// Fixed name of the HTML dashboard written to the current working directory.
pub const HTML_OUTPUT_FILE: &str = "resultados_busqueda.html";

/// Number of characters of surrounding text kept on each side of a match.
pub const CONTEXT_WINDOW_CHARS: usize = 100;

/// Maximum number of occurrence contexts stored per file. All occurrences
/// still count toward the file's mention total.
pub const MAX_CONTEXTS_PER_FILE: usize = 5;

/// Number of files shown in the dashboard's top-mentions bar chart.
pub const TOP_FILES_CHART_LIMIT: usize = 10;

/// Maximum width of a file-name label in the bar chart before truncation.
pub const CHART_LABEL_MAX_CHARS: usize = 30;
