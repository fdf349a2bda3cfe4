//! Tokenizers: spells producing `Vec<RuneSequence>`.

use crate::rune::Rune;
use crate::sequence::RuneSequence;
use crate::spell::Spell;
use std::mem;
use unicode_segmentation::UnicodeSegmentation;

/// Splits a sequence into tokens separated by classified whitespace.
///
/// Whitespace runes are dropped; every token inherits the source's primary
/// language. An empty or all-whitespace input yields no tokens.
#[derive(Copy, Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl Spell for WhitespaceTokenizer {
    type Input = RuneSequence;
    type Output = Vec<RuneSequence>;

    fn apply(&self, input: &RuneSequence) -> Vec<RuneSequence> {
        let mut tokens = Vec::new();
        let mut current = RuneSequence::with_language(input.primary_language());
        for rune in input {
            if rune.is_whitespace() {
                if !current.is_empty() {
                    tokens.push(mem::replace(
                        &mut current,
                        RuneSequence::with_language(input.primary_language()),
                    ));
                }
            } else {
                current.push(rune.clone());
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }
        tokens
    }

    fn name(&self) -> &str {
        "WhitespaceTokenizer"
    }

    fn description(&self) -> String {
        "Tokenize on Unicode whitespace".to_string()
    }
}

/// Splits a sequence into words along UAX-29 word boundaries.
///
/// Uses `unicode-segmentation`, so punctuation and whitespace fall away and
/// scripts without spaces still segment sensibly. Tokens inherit the
/// source's primary language.
#[derive(Copy, Clone, Debug, Default)]
pub struct WordTokenizer;

impl Spell for WordTokenizer {
    type Input = RuneSequence;
    type Output = Vec<RuneSequence>;

    fn apply(&self, input: &RuneSequence) -> Vec<RuneSequence> {
        let text: String = input.iter().map(Rune::scalar).collect();
        text.unicode_words()
            .map(|word| {
                let mut token = RuneSequence::from(word);
                token.set_primary_language(input.primary_language());
                token
            })
            .collect()
    }

    fn name(&self) -> &str {
        "WordTokenizer"
    }

    fn description(&self) -> String {
        "Tokenize on UAX-29 word boundaries".to_string()
    }
}
