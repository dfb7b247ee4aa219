//! Copying component logs to the system clipboard

use arboard::Clipboard;
use tracing::debug;

/// Text placed on the clipboard for a block of log lines
pub fn log_text(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

/// Copy log lines, returning the status line shown to the user
pub fn copy_log_lines(lines: &[String]) -> Result<String, String> {
    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Clipboard unavailable: {}", e))?;

    clipboard
        .set_text(log_text(lines))
        .map_err(|e| format!("Failed to copy logs: {}", e))?;

    debug!("Copied {} log lines", lines.len());
    Ok(match lines.len() {
        1 => "Copied 1 log line".to_string(),
        n => format!("Copied {} log lines", n),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_text_ends_with_newline() {
        let lines = vec!["a".to_string(), "b".to_string()];
        assert_eq!(log_text(&lines), "a\nb\n");
        assert_eq!(log_text(&[]), "");
    }
}
