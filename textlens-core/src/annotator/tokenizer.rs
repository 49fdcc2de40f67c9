//! Surface tokenization for the lexicon annotator

use regex::Regex;

use crate::error::Result;

/// Surface class of a raw token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Letters, possibly joined by apostrophes or hyphens
    Word,
    /// Digits only
    Number,
    /// Letters mixed with digits ("3rd", "B52")
    Alphanumeric,
    /// Punctuation character
    Punctuation,
    /// Currency, math or other symbol character
    Symbol,
    /// Whitespace run
    Whitespace,
    /// Contraction or possessive ending split off a word ("n't", "'s")
    Clitic,
}

/// A token before annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'t> {
    /// Slice of the input
    pub text: &'t str,
    /// Byte offset in the input
    pub offset: usize,
    /// Surface class
    pub kind: TokenKind,
}

impl RawToken<'_> {
    /// Byte offset one past the token
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Whitespace run that carries layout (a line break or more than one
    /// character); single spaces only separate tokens
    pub fn is_layout_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
            && (self.text.contains('\n') || self.text.chars().nth(1).is_some())
    }
}

const SYMBOLS: &[char] = &[
    '$', '%', '&', '+', '<', '=', '>', '^', '`', '|', '~', '#', '@', '*', '£', '€', '¥', '¢',
    '©', '®', '°', '±', '×', '÷', '§', '¶', '†', '™',
];

/// Regex-driven tokenizer
///
/// Apostrophes and hyphens stay inside words. Configured clitic endings
/// are then split off as separate [`TokenKind::Clitic`] tokens, so
/// "don't" yields "do" and "n't".
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    /// Normalized clitic forms, longest first
    clitics: Vec<String>,
}

impl Tokenizer {
    const PATTERN: &'static str =
        r"(?s)\s+|[\p{L}\p{M}\p{N}]+(?:['’\-][\p{L}\p{M}\p{N}]+)*|.";

    /// Compile the tokenizer
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(Self::PATTERN)?,
            clitics: Vec::new(),
        })
    }

    /// Compile the tokenizer with clitic endings to split off words
    pub fn with_clitics<'a>(forms: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut clitics: Vec<String> = forms.into_iter().map(normalize_clitic).collect();
        clitics.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        clitics.dedup();

        Ok(Self {
            clitics,
            ..Self::new()?
        })
    }

    /// Split text into raw tokens covering every character
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<RawToken<'t>> {
        let mut tokens = Vec::new();
        for m in self.pattern.find_iter(text) {
            let token = RawToken {
                text: m.as_str(),
                offset: m.start(),
                kind: classify(m.as_str()),
            };
            match self.split_clitic(&token) {
                Some((stem, clitic)) => {
                    tokens.push(stem);
                    tokens.push(clitic);
                }
                None => tokens.push(token),
            }
        }
        tokens
    }

    /// Split a word into its stem and a trailing clitic. The stem must be
    /// non-empty and end in a letter.
    fn split_clitic<'t>(&self, token: &RawToken<'t>) -> Option<(RawToken<'t>, RawToken<'t>)> {
        if token.kind != TokenKind::Word || self.clitics.is_empty() {
            return None;
        }

        let total = token.text.chars().count();
        self.clitics.iter().find_map(|form| {
            let len = form.chars().count();
            if total <= len {
                return None;
            }

            let (split, _) = token.text.char_indices().nth(total - len)?;
            let (stem, tail) = token.text.split_at(split);
            let stem_ends_in_letter = stem.chars().last().is_some_and(char::is_alphabetic);
            if !stem_ends_in_letter || normalize_clitic(tail) != *form {
                return None;
            }

            Some((
                RawToken {
                    text: stem,
                    offset: token.offset,
                    kind: classify(stem),
                },
                RawToken {
                    text: tail,
                    offset: token.offset + split,
                    kind: TokenKind::Clitic,
                },
            ))
        })
    }
}

/// Lowercase with typographic apostrophes folded to ASCII
pub(crate) fn normalize_clitic(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == '’' { '\'' } else { c })
        .collect()
}

fn classify(text: &str) -> TokenKind {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return TokenKind::Punctuation;
    };

    if first.is_whitespace() {
        return TokenKind::Whitespace;
    }

    let has_alpha = text.chars().any(char::is_alphabetic);
    let has_digit = text.chars().any(char::is_numeric);
    match (has_alpha, has_digit) {
        (true, true) => TokenKind::Alphanumeric,
        (true, false) => TokenKind::Word,
        (false, true) => TokenKind::Number,
        (false, false) if chars.next().is_none() && SYMBOLS.contains(&first) => TokenKind::Symbol,
        (false, false) if first.is_alphanumeric() => TokenKind::Word,
        (false, false) => TokenKind::Punctuation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(&str, TokenKind)> {
        Tokenizer::new()
            .unwrap()
            .tokenize(text)
            .into_iter()
            .map(|t| (t.text, t.kind))
            .collect()
    }

    #[test]
    fn test_words_punctuation_and_spaces() {
        assert_eq!(
            kinds("Hello, world!"),
            vec![
                ("Hello", TokenKind::Word),
                (",", TokenKind::Punctuation),
                (" ", TokenKind::Whitespace),
                ("world", TokenKind::Word),
                ("!", TokenKind::Punctuation),
            ]
        );
    }

    #[test]
    fn test_apostrophes_and_hyphens_stay_inside_words() {
        let tokens = kinds("don't guarda-chuva");
        assert_eq!(tokens[0], ("don't", TokenKind::Word));
        assert_eq!(tokens[2], ("guarda-chuva", TokenKind::Word));
    }

    #[test]
    fn test_clitics_split_off_words() {
        let tokenizer = Tokenizer::with_clitics(["n't", "'s", "'ll"]).unwrap();
        let tokens: Vec<(&str, TokenKind)> = tokenizer
            .tokenize("Don’t John's we'll")
            .into_iter()
            .map(|t| (t.text, t.kind))
            .collect();
        assert_eq!(
            tokens,
            vec![
                ("Do", TokenKind::Word),
                ("n’t", TokenKind::Clitic),
                (" ", TokenKind::Whitespace),
                ("John", TokenKind::Word),
                ("'s", TokenKind::Clitic),
                (" ", TokenKind::Whitespace),
                ("we", TokenKind::Word),
                ("'ll", TokenKind::Clitic),
            ]
        );
    }

    #[test]
    fn test_clitic_split_keeps_offsets() {
        let text = "isn’t it's";
        let tokens = Tokenizer::with_clitics(["n't", "'s"]).unwrap().tokenize(text);
        for token in &tokens {
            assert_eq!(&text[token.offset..token.end()], token.text);
        }
        let rebuilt: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_words_without_a_stem_are_not_split() {
        let tokenizer = Tokenizer::with_clitics(["'s", "n't"]).unwrap();
        let texts: Vec<&str> = tokenizer
            .tokenize("o'clock rock'n'roll")
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["o'clock", " ", "rock'n'roll"]);
    }

    #[test]
    fn test_numbers_and_symbols() {
        assert_eq!(
            kinds("$42 3rd"),
            vec![
                ("$", TokenKind::Symbol),
                ("42", TokenKind::Number),
                (" ", TokenKind::Whitespace),
                ("3rd", TokenKind::Alphanumeric),
            ]
        );
    }

    #[test]
    fn test_accented_words() {
        assert_eq!(kinds("ação"), vec![("ação", TokenKind::Word)]);
    }

    #[test]
    fn test_offsets_cover_input() {
        let text = "Olá,  mundo.\n\nFim";
        let tokens = Tokenizer::new().unwrap().tokenize(text);
        let rebuilt: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, text);
        for pair in tokens.windows(2) {
            assert_eq!(pair[0].end(), pair[1].offset);
        }
    }

    #[test]
    fn test_layout_whitespace() {
        let tokens = Tokenizer::new().unwrap().tokenize("a b  c\nd");
        let layout: Vec<bool> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Whitespace)
            .map(|t| t.is_layout_whitespace())
            .collect();
        assert_eq!(layout, vec![false, true, true]);
    }
}
