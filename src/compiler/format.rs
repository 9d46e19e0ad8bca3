//! Re-indentation of emitted source.
//!
//! Lowering writes one statement or brace per line with no indentation;
//! this pass indents each line by its brace depth.

const INDENT: &str = "    ";

/// Brace counts of one line, ignoring braces inside string literals.
struct BraceCount {
    opens: usize,
    closes: usize,
    /// Closing braces before any other token on the line
    leading_closes: usize,
}

fn count_braces(line: &str) -> BraceCount {
    let mut count = BraceCount {
        opens: 0,
        closes: 0,
        leading_closes: 0,
    };
    let mut in_string = false;
    let mut escaped = false;
    let mut at_start = true;

    for c in line.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                at_start = false;
            }
            '{' => {
                count.opens += 1;
                at_start = false;
            }
            '}' => {
                count.closes += 1;
                if at_start {
                    count.leading_closes += 1;
                }
            }
            ' ' | '\t' => {}
            _ => at_start = false,
        }
    }

    count
}

pub fn format_source(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut depth: usize = 0;

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() {
            result.push('\n');
            continue;
        }

        let count = count_braces(line);
        result.push_str(&INDENT.repeat(depth.saturating_sub(count.leading_closes)));
        result.push_str(line);
        result.push('\n');

        depth = (depth + count.opens).saturating_sub(count.closes);
    }

    result
}
