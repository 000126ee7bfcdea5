//! Small text helpers shared by the interpreter and the front-end.

const FENCE: &str = "```";

/// Removes markdown code-fence markup from a model reply.
///
/// Every ```` ``` ```` marker is dropped together with a directly following
/// lowercase language tag and one newline; the result is trimmed.
pub fn strip_code_fences(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(FENCE) {
        cleaned.push_str(&rest[..start]);
        rest = &rest[start + FENCE.len()..];

        let tag_len = rest
            .bytes()
            .take_while(|b| b.is_ascii_lowercase())
            .count();
        rest = &rest[tag_len..];
        if let Some(stripped) = rest.strip_prefix('\n') {
            rest = stripped;
        }
    }
    cleaned.push_str(rest);

    cleaned.trim().to_string()
}

/// Renders code as ` NN | line` rows, numbering from 1.
pub fn number_lines(code: &str) -> Vec<String> {
    code.split('\n')
        .enumerate()
        .map(|(index, line)| format!("{:>3} | {}", index + 1, line))
        .collect()
}
