//! Greedy word wrapping.

/// Fill `text` into lines of at most `width` columns.
///
/// Lines break only at whitespace. Words are never split, so a word longer
/// than `width` sits alone on an over-long line. Runs of whitespace collapse
/// to a single space. Every line after the first starts with `indent`, which
/// counts toward the width. A width of 0 disables wrapping.
pub fn fill(text: &str, width: usize, indent: &str) -> String {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };

    if width == 0 {
        return std::iter::once(first)
            .chain(words)
            .collect::<Vec<_>>()
            .join(" ");
    }

    let indent_width = indent.chars().count();
    let mut output = String::from(first);
    let mut line_width = first.chars().count();

    for word in words {
        let word_width = word.chars().count();
        if line_width + 1 + word_width <= width {
            output.push(' ');
            line_width += 1;
        } else {
            output.push('\n');
            output.push_str(indent);
            line_width = indent_width;
        }
        output.push_str(word);
        line_width += word_width;
    }

    output
}
