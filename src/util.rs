pub fn quoted(text: &str) -> String {
    format!("\"{text}\"")
}

/// Splits `**strong**` markers out of a key point. An unmatched marker is kept
/// as literal text.
pub fn emphasis_spans(text: &str) -> Vec<(String, bool)> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };

        if open > 0 {
            spans.push((rest[..open].to_string(), false));
        }
        if close > 0 {
            spans.push((after_open[..close].to_string(), true));
        }
        rest = &after_open[close + 2..];
    }

    if !rest.is_empty() {
        spans.push((rest.to_string(), false));
    }

    spans
}
