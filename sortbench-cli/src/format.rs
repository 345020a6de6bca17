//! Operator-facing diagnostic formatting.

/// Prefix every line of captured subprocess output for readability when it
/// is echoed into the operator log.
pub fn indent_diagnostic(text: &str) -> String {
    text.lines()
        .map(|line| format!("  |  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
