//! Corpus tokenization

/// Token marking a page break in imported book text
pub const PAGE_BREAK: &str = "----------------------------------------";

/// Tokens produced from one block of corpus text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub tokens: Vec<String>,
    pub markers_skipped: usize,
}

/// Split `text` into word tokens
///
/// Tokens are whitespace separated. Page-break markers are dropped and the
/// first character of every token is lowercased, so sentence-initial
/// capitals fold onto the same word while inner capitals are kept.
///
/// # Examples
/// ```
/// use wordtrie::corpus::tokenize;
///
/// let tokenized = tokenize("The cat  sat\nOn McGregor");
/// assert_eq!(tokenized.tokens, ["the", "cat", "sat", "on", "mcGregor"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Tokenized {
    let mut tokenized = Tokenized::default();
    for token in text.split_whitespace() {
        if token == PAGE_BREAK {
            tokenized.markers_skipped += 1;
            continue;
        }
        tokenized.tokens.push(lowercase_first(token));
    }
    tokenized
}

fn lowercase_first(token: &str) -> String {
    let mut chars = token.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut word = String::with_capacity(token.len());
        word.push(first.to_ascii_lowercase());
        word.push_str(chars.as_str());
        word
    })
}
