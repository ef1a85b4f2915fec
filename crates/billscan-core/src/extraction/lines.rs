/// Markers that flag a line as naming the provider.
const HOSPITAL_MARKERS: &[&str] = &["HOSPITAL", "MEDICAL CENTER", "HEALTH", "CLINIC"];

/// Lines must be longer than this (in characters, after trimming) to count as
/// a procedure description.
const MIN_DESCRIPTION_CHARS: usize = 10;

/// Return the first line (trimmed) carrying a hospital marker, or an empty string.
pub fn extract_hospital_name(text: &str) -> String {
    text.split('\n')
        .find(|line| {
            let upper = line.to_uppercase();
            HOSPITAL_MARKERS.iter().any(|marker| upper.contains(marker))
        })
        .map(|line| line.trim().to_string())
        .unwrap_or_default()
}

/// Collect lines that read like procedure descriptions, in source order.
///
/// Lines with a `$`, the literal `TOTAL` or `DATE`, or only digits and
/// whitespace are treated as headers, footers or amounts and skipped.
pub fn extract_procedure_descriptions(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| is_description(line))
        .map(str::to_string)
        .collect()
}

fn is_description(line: &str) -> bool {
    line.chars().count() > MIN_DESCRIPTION_CHARS
        && !line.contains('$')
        && !line.contains("TOTAL")
        && !line.contains("DATE")
        && !is_numeric_line(line)
}

/// A digit followed by nothing but digits and whitespace.
fn is_numeric_line(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_digit())
        && line.chars().all(|c| c.is_ascii_digit() || c.is_whitespace())
}
