use scraper::ElementRef;

/// Concatenated text content of a node, whitespace-collapsed.
pub fn extract_text(node: ElementRef) -> String {
    collapse_ws(&node.text().collect::<String>())
}

/// Collapse every whitespace run (including &nbsp; leftovers) to one space.
pub fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercase-hyphenated form of a lottery name, the shape NLB result pages
/// are addressed by.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Trailing integer of a heading like "Ada Kotipathi 2608". Kept as the
/// original string so leading zeros survive.
pub fn trailing_number(s: &str) -> Option<String> {
    let token = s.split_whitespace().next_back()?;
    if token.chars().all(|c| c.is_ascii_digit()) && !token.is_empty() {
        Some(token.to_string())
    } else {
        None
    }
}
