#[cfg(test)]
#[path = "wrap_test.rs"]
mod tests;

/// Word wraps text to `line_max_width` columns. Blank input lines are kept as a
/// single space so they still take up a row. Words longer than the width are
/// left on their own line rather than split.
pub fn wrap_lines(text: &str, line_max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for full_line in text.split('\n') {
        if full_line.trim().is_empty() {
            lines.push(" ".to_string());
            continue;
        }

        let mut char_count = 0;
        let mut current_line: Vec<&str> = vec![];

        for word in full_line.split(' ') {
            let word_length = word.chars().count();
            if !current_line.is_empty() && word_length + char_count + 1 > line_max_width {
                lines.push(current_line.join(" ").trim_end().to_string());
                current_line = vec![word];
                char_count = word_length + 1;
            } else {
                current_line.push(word);
                char_count += word_length + 1;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line.join(" ").trim_end().to_string());
        }
    }

    return lines;
}
