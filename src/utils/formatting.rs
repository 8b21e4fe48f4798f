//! Formatting utilities used for CLI and report outputs.

/// Seconds → "HHh MMm SSs", hours are not wrapped into days.
pub fn secs2readable(secs: f64) -> String {
    let total = secs.abs().round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let sign = if secs < 0.0 && total > 0 { "-" } else { "" };
    format!("{}{:02}h {:02}m {:02}s", sign, hours, minutes, seconds)
}

/// "new york city" → "New York City"
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
