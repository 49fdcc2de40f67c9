//! Rule-based annotator driven by a language configuration
//!
//! This is the bundled stand-in for a statistical tagger: closed-class
//! words come from the lexicon, proper nouns from capitalization, and
//! everything else from suffix rules. It is deterministic for a given
//! input and holds no mutable state, so one instance can serve many
//! threads.

use std::collections::{HashMap, HashSet};

use super::tokenizer::{normalize_clitic, RawToken, TokenKind, Tokenizer};
use super::Annotator;
use crate::error::Result;
use crate::language::config::{LanguageConfig, LemmaRule};
use crate::model::{AnnotatedDocument, AnnotatedToken, EntitySpan, PartOfSpeech, SentenceSpan};

/// Precedence for words listed under more than one closed-class tag
const TAG_PRECEDENCE: &[&str] = &[
    "AUX", "DET", "ADP", "PRON", "CCONJ", "SCONJ", "PART", "ADV", "INTJ", "NUM",
];

/// Characters that stay with the sentence they directly follow
const CLOSING_MARKS: &[char] = &['"', '\'', '”', '’', ')', ']', '}', '»'];

#[derive(Debug, Clone)]
struct SuffixTag {
    suffix: String,
    pos: PartOfSpeech,
    min_stem: usize,
}

/// Annotator built from one [`LanguageConfig`]
#[derive(Debug, Clone)]
pub struct LexiconAnnotator {
    code: String,
    name: String,
    tokenizer: Tokenizer,
    stopwords: HashSet<String>,
    closed_class: HashMap<String, PartOfSpeech>,
    irregular: HashMap<String, String>,
    clitics: HashMap<String, (PartOfSpeech, String)>,
    lemma_rules: Vec<LemmaRule>,
    pos_rules: Vec<SuffixTag>,
    terminators: HashSet<char>,
    abbreviations: HashSet<String>,
    connectors: HashSet<String>,
    gazetteer: HashMap<String, String>,
    default_entity_label: String,
}

impl LexiconAnnotator {
    /// Compile a language configuration into lookup tables
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate()?;

        let mut tags: Vec<&String> = config.lexicon.tags.keys().collect();
        tags.sort_by_key(|tag| {
            let rank = TAG_PRECEDENCE
                .iter()
                .position(|t| *t == tag.as_str())
                .unwrap_or(TAG_PRECEDENCE.len());
            (rank, tag.as_str())
        });

        let mut closed_class = HashMap::new();
        for tag in tags {
            let pos = PartOfSpeech::from_tag(tag);
            for word in &config.lexicon.tags[tag] {
                closed_class
                    .entry(word.to_lowercase())
                    .or_insert_with(|| pos.clone());
            }
        }

        let mut labels: Vec<&String> = config.entities.gazetteer.keys().collect();
        labels.sort();
        let mut gazetteer = HashMap::new();
        for label in labels {
            for name in &config.entities.gazetteer[label] {
                gazetteer
                    .entry(name.clone())
                    .or_insert_with(|| label.clone());
            }
        }

        let pos_rules = config
            .morphology
            .pos_rules
            .iter()
            .map(|rule| SuffixTag {
                suffix: rule.suffix.to_lowercase(),
                pos: PartOfSpeech::from_tag(&rule.tag),
                min_stem: rule.min_stem,
            })
            .collect();

        let clitics = config
            .lexicon
            .clitics
            .iter()
            .map(|clitic| {
                let form = normalize_clitic(&clitic.form);
                let lemma = clitic.lemma.clone().unwrap_or_else(|| form.clone());
                (form, (PartOfSpeech::from_tag(&clitic.tag), lemma))
            })
            .collect();

        Ok(Self {
            code: config.code().to_string(),
            name: config.name().to_string(),
            tokenizer: Tokenizer::with_clitics(
                config.lexicon.clitics.iter().map(|c| c.form.as_str()),
            )?,
            stopwords: config.stopword_set(),
            closed_class,
            irregular: config
                .lexicon
                .lemmas
                .iter()
                .map(|(form, lemma)| (form.to_lowercase(), lemma.clone()))
                .collect(),
            clitics,
            lemma_rules: config.morphology.lemma_rules.clone(),
            pos_rules,
            terminators: config.sentences.terminators.iter().copied().collect(),
            abbreviations: config.sentences.abbreviations.iter().cloned().collect(),
            connectors: config.entities.connectors.iter().cloned().collect(),
            gazetteer,
            default_entity_label: config.entities.default_label.clone(),
        })
    }

    /// Language name from the configuration
    pub fn language_name(&self) -> &str {
        &self.name
    }

    fn irregular_or_lower(&self, lower: &str) -> String {
        self.irregular
            .get(lower)
            .cloned()
            .unwrap_or_else(|| lower.to_string())
    }

    fn lemmatize(&self, lower: &str) -> String {
        if let Some(lemma) = self.irregular.get(lower) {
            return lemma.clone();
        }

        for rule in &self.lemma_rules {
            if let Some(stem) = lower.strip_suffix(rule.suffix.as_str()) {
                if stem.chars().count() >= rule.min_stem {
                    let mut lemma = stem.to_string();
                    if rule.undouble {
                        undouble(&mut lemma);
                    }
                    lemma.push_str(&rule.replacement);
                    return lemma;
                }
            }
        }

        lower.to_string()
    }

    fn guess_pos(&self, lower: &str) -> PartOfSpeech {
        self.pos_rules
            .iter()
            .find(|rule| {
                lower
                    .strip_suffix(rule.suffix.as_str())
                    .is_some_and(|stem| stem.chars().count() >= rule.min_stem)
            })
            .map(|rule| rule.pos.clone())
            .unwrap_or(PartOfSpeech::Noun)
    }

    fn is_terminator(&self, token: &RawToken<'_>) -> bool {
        token.kind == TokenKind::Punctuation
            && token.text.chars().all(|c| self.terminators.contains(&c))
    }

    /// Whether the terminator at `index` closes its sentence
    fn ends_sentence(&self, text: &str, tokens: &[RawToken<'_>], index: usize) -> bool {
        let token = &tokens[index];
        if !self.is_terminator(token) {
            return false;
        }

        if token.text != "." {
            return true;
        }

        // A dot glued to a following word or number ("e.g", "3.14", "site.com")
        let next_attached = tokens
            .get(index + 1)
            .filter(|next| next.offset == token.end());
        if next_attached.is_some_and(|next| {
            matches!(
                next.kind,
                TokenKind::Word | TokenKind::Number | TokenKind::Alphanumeric
            )
        }) {
            return false;
        }

        let word_start = text[..token.offset]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(pos, c)| pos + c.len_utf8())
            .unwrap_or(0);
        let preceding =
            text[word_start..token.offset].trim_start_matches(|c: char| !c.is_alphanumeric());

        if self.abbreviations.contains(preceding) {
            return false;
        }

        // Single capital initial ("J. Smith")
        let mut chars = preceding.chars();
        !matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
    }

    fn segment(&self, text: &str, tokens: &[RawToken<'_>]) -> Vec<SentenceSpan> {
        let mut spans = Vec::new();
        let mut current: Option<(usize, usize)> = None;
        let mut closed = false;

        for (i, token) in tokens.iter().enumerate() {
            if token.kind == TokenKind::Whitespace {
                if let Some((_, end)) = current.as_mut() {
                    *end = i + 1;
                }
                continue;
            }

            if closed {
                let attached = i > 0 && tokens[i - 1].end() == token.offset;
                let continues = attached
                    && (self.is_terminator(token)
                        || (token.kind == TokenKind::Punctuation
                            && token.text.chars().all(|c| CLOSING_MARKS.contains(&c))));
                if !continues {
                    if let Some((start, end)) = current.take() {
                        spans.push(SentenceSpan::new(start, end));
                    }
                    closed = false;
                }
            }

            let (_, end) = current.get_or_insert((i, i));
            *end = i + 1;

            if self.ends_sentence(text, tokens, i) {
                closed = true;
            }
        }

        if let Some((start, end)) = current {
            spans.push(SentenceSpan::new(start, end));
        }

        spans
    }

    /// Indices of words that open a sentence or a line
    fn initial_positions(tokens: &[RawToken<'_>], spans: &[SentenceSpan]) -> HashSet<usize> {
        let is_wordlike = |t: &RawToken<'_>| {
            matches!(
                t.kind,
                TokenKind::Word | TokenKind::Number | TokenKind::Alphanumeric
            )
        };

        let mut initial: HashSet<usize> = spans
            .iter()
            .filter_map(|span| span.range().find(|&i| is_wordlike(&tokens[i])))
            .collect();

        for (i, pair) in tokens.windows(2).enumerate() {
            if pair[0].kind == TokenKind::Whitespace
                && pair[0].text.contains('\n')
                && is_wordlike(&pair[1])
            {
                initial.insert(i + 1);
            }
        }

        initial
    }

    fn annotate_token(
        &self,
        raw: &RawToken<'_>,
        sentence_initial: bool,
        mid_capitalized: &HashSet<&str>,
    ) -> AnnotatedToken {
        match raw.kind {
            TokenKind::Whitespace => AnnotatedToken::whitespace(raw.text),
            TokenKind::Punctuation => AnnotatedToken::punctuation(raw.text),
            TokenKind::Symbol => AnnotatedToken::word(raw.text, raw.text, PartOfSpeech::Symbol),
            TokenKind::Number => AnnotatedToken::word(raw.text, raw.text, PartOfSpeech::Numeral),
            TokenKind::Alphanumeric => {
                AnnotatedToken::word(raw.text, raw.text.to_lowercase(), PartOfSpeech::Other)
            }
            TokenKind::Word => self.annotate_word(raw.text, sentence_initial, mid_capitalized),
            TokenKind::Clitic => self.annotate_clitic(raw.text),
        }
    }

    fn annotate_clitic(&self, text: &str) -> AnnotatedToken {
        let form = normalize_clitic(text);
        let (pos, lemma) = self
            .clitics
            .get(&form)
            .cloned()
            .unwrap_or_else(|| (PartOfSpeech::Particle, form.clone()));

        let token = AnnotatedToken::word(text, lemma, pos);
        if self.stopwords.contains(&form) {
            token.stopword()
        } else {
            token
        }
    }

    fn annotate_word(
        &self,
        text: &str,
        sentence_initial: bool,
        mid_capitalized: &HashSet<&str>,
    ) -> AnnotatedToken {
        let lower = text.to_lowercase();
        let is_stop = self.stopwords.contains(&lower);
        let proper = is_capitalized(text)
            && (!sentence_initial
                || mid_capitalized.contains(text)
                || self.gazetteer.contains_key(text));

        let (pos, lemma) = match self.closed_class.get(&lower) {
            Some(pos) if !proper || lower.chars().count() == 1 => {
                (pos.clone(), self.irregular_or_lower(&lower))
            }
            _ if proper => (PartOfSpeech::ProperNoun, text.to_string()),
            _ if is_stop => (self.guess_pos(&lower), self.irregular_or_lower(&lower)),
            _ => (self.guess_pos(&lower), self.lemmatize(&lower)),
        };

        let token = AnnotatedToken::word(text, lemma, pos);
        if is_stop {
            token.stopword()
        } else {
            token
        }
    }

    fn extract_entities(
        &self,
        text: &str,
        raw: &[RawToken<'_>],
        tokens: &[AnnotatedToken],
    ) -> Vec<EntitySpan> {
        let is_proper = |i: usize| {
            tokens
                .get(i)
                .is_some_and(|t| t.pos == PartOfSpeech::ProperNoun)
        };

        let mut entities = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            if !is_proper(i) {
                i += 1;
                continue;
            }

            let start = i;
            let mut end = i + 1;
            loop {
                if is_proper(end) {
                    end += 1;
                } else if is_proper(end + 1)
                    && self.connectors.contains(tokens[end].text.as_str())
                {
                    end += 2;
                } else {
                    break;
                }
            }

            let span_text = &text[raw[start].offset..raw[end - 1].end()];
            let label = self
                .gazetteer
                .get(span_text)
                .unwrap_or(&self.default_entity_label);
            entities.push(EntitySpan::new(span_text, label));
            i = end;
        }

        entities
    }
}

impl Annotator for LexiconAnnotator {
    fn language_code(&self) -> &str {
        &self.code
    }

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument> {
        let raw: Vec<RawToken<'_>> = self
            .tokenizer
            .tokenize(text)
            .into_iter()
            .filter(|t| t.kind != TokenKind::Whitespace || t.is_layout_whitespace())
            .collect();

        let sentences = self.segment(text, &raw);
        let initial = Self::initial_positions(&raw, &sentences);
        let mid_capitalized: HashSet<&str> = raw
            .iter()
            .enumerate()
            .filter(|(i, t)| t.kind == TokenKind::Word && !initial.contains(i))
            .filter(|(_, t)| is_capitalized(t.text))
            .map(|(_, t)| t.text)
            .collect();

        let tokens: Vec<AnnotatedToken> = raw
            .iter()
            .enumerate()
            .map(|(i, t)| self.annotate_token(t, initial.contains(&i), &mid_capitalized))
            .collect();

        let entities = self.extract_entities(text, &raw, &tokens);

        tracing::trace!(
            "Annotated {} tokens, {} sentences, {} entities with {} model",
            tokens.len(),
            sentences.len(),
            entities.len(),
            self.code
        );

        Ok(AnnotatedDocument::new(tokens, sentences, entities))
    }
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Drop one letter of a doubled final consonant ("runn" -> "run")
fn undouble(stem: &mut String) {
    let mut tail = stem.chars().rev();
    if let (Some(last), Some(prev)) = (tail.next(), tail.next()) {
        if last == prev && last.is_alphabetic() && !"aeiouylsz".contains(last) {
            stem.pop();
        }
    }
}
