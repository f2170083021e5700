//! Quote-aware line tokenizer for scene files.
//!
//! A line is split on the double-quote character. Unquoted stretches are
//! whitespace-split into tokens, quoted stretches are kept verbatim as a
//! single token. Quoting is never repaired: a dangling quote simply turns
//! the rest of the line into one quoted token.

/// Splits a single line into its tokens.
///
/// # Examples
///
/// ```
/// use scenesheet::scene::tokenizer::tokenize_line;
///
/// let tokens = tokenize_line(r#"/-show/name/ "My Scene Name" extra"#);
/// assert_eq!(tokens, vec!["/-show/name/", "My Scene Name", "extra"]);
/// ```
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for (index, segment) in line.split('"').enumerate() {
        if index % 2 == 1 {
            tokens.push(segment.to_string());
        } else {
            // A blank stretch between two quoted strings contributes nothing
            tokens.extend(segment.split_whitespace().map(String::from));
        }
    }

    tokens
}

/// Tokenizes every `\n`-separated line of a scene file.
pub fn tokenize(content: &str) -> Vec<Vec<String>> {
    content.split('\n').map(tokenize_line).collect()
}
