//! Display strings derived from search state

/// `QT-001` style identifier for the quote at `index`
pub fn quote_id(index: usize) -> String {
    format!("QT-{:03}", index + 1)
}

pub fn results_heading(count: usize) -> String {
    format!("Results ({})", count)
}

/// Caption above the results; an empty query reads as "All"
pub fn category_caption(query: &str) -> String {
    if query.is_empty() {
        "Category: All".to_string()
    } else {
        format!("Category: {}", capitalize_words(query))
    }
}

pub fn topic_caption(query: &str) -> String {
    format!("Topic: {}", capitalize_words(query))
}

/// Quote wrapped in straight double quotes
pub fn quoted(text: &str) -> String {
    format!("\"{}\"", text)
}

fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}
