//! Formatting utilities for listing display values.

/// Format a file size for display (e.g., "500B", "1.5K", "3.4M").
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None => "-".to_string(),
        Some(bytes) => {
            if bytes >= 1_000_000 {
                format!("{:.1}M", bytes as f64 / 1_000_000.0)
            } else if bytes >= 1_000 {
                format!("{:.1}K", bytes as f64 / 1_000.0)
            } else {
                format!("{}B", bytes)
            }
        }
    }
}

/// Shorten a description for card display.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(None), "-");
        assert_eq!(format_size(Some(500)), "500B");
        assert_eq!(format_size(Some(1500)), "1.5K");
        assert_eq!(format_size(Some(1_500_000)), "1.5M");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer description", 10), "a longe...");
    }
}
