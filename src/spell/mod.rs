//! The spell library: named, pure text transformations.
//!
//! A spell declares its input and output types, is callable over a borrowed
//! input, and describes itself. Most spells map [`RuneSequence`] to
//! [`RuneSequence`]; tokenizers produce `Vec<RuneSequence>` and encoders
//! produce `String`. Spells hold only construction-time configuration, so
//! applying one twice to equal input yields equal output.
//!
//! Built-ins live in [`core`](self::core), [`filter`], [`language`], and
//! [`token`];
//! [`compose`](compose()) chains two compatible spells into one. The factory
//! functions at this level mirror the most common configurations:
//!
//! ```
//! use rune_caster::{spell, RuneSequence, Spell};
//!
//! let cleaned = spell::cleanup().apply(&RuneSequence::from("  Hello\t WORLD  "));
//! assert_eq!(cleaned, "hello world");
//! ```

use crate::language::Language;
use crate::rune::Rune;
use crate::sequence::RuneSequence;
use crate::unicode::{Category, NormalizationForm, Script};
use std::fmt;

pub mod compose;
pub mod core;
pub mod filter;
pub mod language;
pub mod token;

pub use self::compose::{compose, Composition};
pub use self::core::{
    CaseConverter, CaseMode, ToUtf8, TrimEdges, UnicodeNormalizer, WhitespaceNormalizer,
};
pub use self::filter::{CategoryFilter, PunctuationFilter, ScriptFilter};
pub use self::language::{GraphemeToPhoneme, LanguageDetector};
pub use self::token::{WhitespaceTokenizer, WordTokenizer};

/// A named, pure text transformation with declared input and output types.
///
/// Implementations must be deterministic and must not mutate their input;
/// `apply` borrows the input and produces a freshly owned output. Chaining
/// validity is carried by the type system: composing two spells requires the
/// first's `Output` to equal the second's `Input`, so a mismatched pipeline
/// is a compile error rather than a runtime failure.
pub trait Spell {
    /// The type this spell consumes.
    type Input;
    /// The type this spell produces.
    type Output;

    /// Applies the transformation.
    fn apply(&self, input: &Self::Input) -> Self::Output;

    /// A short identifying name.
    fn name(&self) -> &str;

    /// A human-readable description of what the spell does.
    fn description(&self) -> String;
}

impl<S: Spell + ?Sized> Spell for &S {
    type Input = S::Input;
    type Output = S::Output;

    fn apply(&self, input: &Self::Input) -> Self::Output {
        (**self).apply(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// A user-supplied spell wrapping a callable.
///
/// The open end of the otherwise closed spell set: anything callable as
/// `Fn(&RuneSequence) -> RuneSequence` becomes a pipeline-compatible spell
/// with a name and description.
pub struct FnSpell<F> {
    transform: F,
    name: String,
    description: String,
}

impl<F> FnSpell<F>
where
    F: Fn(&RuneSequence) -> RuneSequence,
{
    /// Wraps a callable with a name and description.
    pub fn new(transform: F, name: impl Into<String>, description: impl Into<String>) -> Self {
        FnSpell {
            transform,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A custom spell whose callable is boxed, for storing heterogeneous
/// user-supplied spells together.
pub type BoxedSpell = FnSpell<Box<dyn Fn(&RuneSequence) -> RuneSequence>>;

impl BoxedSpell {
    /// Boxes a callable into a [`BoxedSpell`].
    pub fn boxed(
        transform: impl Fn(&RuneSequence) -> RuneSequence + 'static,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        FnSpell::new(Box::new(transform), name, description)
    }
}

impl<F> Spell for FnSpell<F>
where
    F: Fn(&RuneSequence) -> RuneSequence,
{
    type Input = RuneSequence;
    type Output = RuneSequence;

    fn apply(&self, input: &RuneSequence) -> RuneSequence {
        (self.transform)(input)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

impl<F> fmt::Debug for FnSpell<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnSpell({})", self.name)
    }
}

/// Creates a custom spell from a callable.
pub fn custom<F>(
    transform: F,
    name: impl Into<String>,
    description: impl Into<String>,
) -> FnSpell<F>
where
    F: Fn(&RuneSequence) -> RuneSequence,
{
    FnSpell::new(transform, name, description)
}

/// Creates a spell applying `transform` to each rune independently.
///
/// The output inherits the input's primary language.
pub fn per_rune<F>(
    transform: F,
    name: impl Into<String>,
    description: impl Into<String>,
) -> FnSpell<impl Fn(&RuneSequence) -> RuneSequence>
where
    F: Fn(&Rune) -> Rune,
{
    FnSpell::new(
        move |input: &RuneSequence| {
            let mut out = RuneSequence::with_language(input.primary_language());
            for rune in input {
                out.push(transform(rune));
            }
            out
        },
        name,
        description,
    )
}

/// Creates a spell keeping only the runes matching `predicate`.
///
/// The output inherits the input's primary language.
pub fn retain<F>(
    predicate: F,
    name: impl Into<String>,
    description: impl Into<String>,
) -> FnSpell<impl Fn(&RuneSequence) -> RuneSequence>
where
    F: Fn(&Rune) -> bool,
{
    FnSpell::new(
        move |input: &RuneSequence| {
            let mut out = RuneSequence::with_language(input.primary_language());
            for rune in input {
                if predicate(rune) {
                    out.push(rune.clone());
                }
            }
            out
        },
        name,
        description,
    )
}

// === Factory functions for the common configurations ===

/// Whitespace normalizer with the default settings: collapse runs and trim
/// the edges.
pub fn whitespace() -> WhitespaceNormalizer {
    WhitespaceNormalizer::default()
}

/// Whitespace normalizer with explicit collapse/trim settings.
pub fn whitespace_with(collapse: bool, trim: bool) -> WhitespaceNormalizer {
    WhitespaceNormalizer::new(collapse, trim)
}

/// Lowercase converter.
pub fn lowercase() -> CaseConverter {
    CaseConverter::new(CaseMode::Lower)
}

/// Uppercase converter.
pub fn uppercase() -> CaseConverter {
    CaseConverter::new(CaseMode::Upper)
}

/// Titlecase converter.
pub fn titlecase() -> CaseConverter {
    CaseConverter::new(CaseMode::Title)
}

/// NFC normalizer.
pub fn unicode_nfc() -> UnicodeNormalizer {
    UnicodeNormalizer::new(NormalizationForm::Nfc)
}

/// NFD normalizer.
pub fn unicode_nfd() -> UnicodeNormalizer {
    UnicodeNormalizer::new(NormalizationForm::Nfd)
}

/// NFKC normalizer.
pub fn unicode_nfkc() -> UnicodeNormalizer {
    UnicodeNormalizer::new(NormalizationForm::Nfkc)
}

/// NFKD normalizer.
pub fn unicode_nfkd() -> UnicodeNormalizer {
    UnicodeNormalizer::new(NormalizationForm::Nfkd)
}

/// Edge-whitespace trimmer.
pub fn trim() -> TrimEdges {
    TrimEdges
}

/// Filter removing punctuation.
pub fn remove_punctuation() -> PunctuationFilter {
    PunctuationFilter::new(true)
}

/// Filter keeping only punctuation.
pub fn keep_punctuation() -> PunctuationFilter {
    PunctuationFilter::new(false)
}

/// Filter removing runes of the given categories.
pub fn filter_categories(categories: Vec<Category>, remove: bool) -> CategoryFilter {
    CategoryFilter::new(categories, remove)
}

/// Filter removing runes of the given scripts.
pub fn filter_scripts(scripts: Vec<Script>, remove: bool) -> ScriptFilter {
    ScriptFilter::new(scripts, remove)
}

/// Script-majority language detector.
pub fn language_detector() -> LanguageDetector {
    LanguageDetector
}

/// Grapheme-to-phoneme converter for `language`.
pub fn to_phoneme(language: Language) -> GraphemeToPhoneme {
    GraphemeToPhoneme::new(language)
}

/// Tokenizer splitting on classified whitespace.
pub fn whitespace_tokenizer() -> WhitespaceTokenizer {
    WhitespaceTokenizer
}

/// Tokenizer splitting on UAX-29 word boundaries.
pub fn word_tokenizer() -> WordTokenizer {
    WordTokenizer
}

/// UTF-8 text encoder, for ending a pipeline in a `String`.
pub fn to_utf8() -> ToUtf8 {
    ToUtf8
}

/// The standard cleanup pipeline: whitespace normalization, NFC, lowercase.
pub fn cleanup() -> impl Spell<Input = RuneSequence, Output = RuneSequence> {
    compose(compose(whitespace(), unicode_nfc()), lowercase())
}

/// The display pipeline: whitespace normalization, NFC, titlecase.
pub fn display_formatter() -> impl Spell<Input = RuneSequence, Output = RuneSequence> {
    compose(compose(whitespace(), unicode_nfc()), titlecase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_spell() {
        let reverser = custom(
            |input: &RuneSequence| input.iter().rev().cloned().collect(),
            "Reverser",
            "Reverses rune order",
        );
        assert_eq!(reverser.apply(&RuneSequence::from("abc")), "cba");
        assert_eq!("Reverser", reverser.name());
    }

    #[test]
    fn test_per_rune_spell() {
        let masker = per_rune(
            |rune| {
                if rune.is_digit() {
                    Rune::new('#')
                } else {
                    rune.clone()
                }
            },
            "DigitMasker",
            "Replaces digits with #",
        );
        assert_eq!(masker.apply(&RuneSequence::from("a1b2")), "a#b#");
    }

    #[test]
    fn test_retain_spell() {
        let letters_only = retain(Rune::is_letter, "LettersOnly", "Keeps letters");
        assert_eq!(letters_only.apply(&RuneSequence::from("a1! b2")), "ab");
    }

    #[test]
    fn test_boxed_spell() {
        let spells: Vec<BoxedSpell> = vec![
            BoxedSpell::boxed(|input| input.clone(), "Identity", "No-op"),
            BoxedSpell::boxed(
                |input| input.substr(0, 1),
                "FirstRune",
                "Keeps the first rune",
            ),
        ];
        let input = RuneSequence::from("xyz");
        assert_eq!(spells[0].apply(&input), "xyz");
        assert_eq!(spells[1].apply(&input), "x");
    }

    #[test]
    fn test_spell_by_reference() {
        let lower = lowercase();
        let by_ref = &lower;
        assert_eq!(by_ref.apply(&RuneSequence::from("AB")), "ab");
    }

    #[test]
    fn test_cleanup_pipeline() {
        let spell = cleanup();
        assert_eq!(spell.apply(&RuneSequence::from("  A  B  ")), "a b");
        assert!(spell.apply(&RuneSequence::new()).is_empty());
    }

    #[test]
    fn test_empty_input_closure() {
        let empty = RuneSequence::new();
        assert!(whitespace().apply(&empty).is_empty());
        assert!(lowercase().apply(&empty).is_empty());
        assert!(unicode_nfc().apply(&empty).is_empty());
        assert!(trim().apply(&empty).is_empty());
        assert!(remove_punctuation().apply(&empty).is_empty());
        assert!(language_detector().apply(&empty).is_empty());
        assert!(whitespace_tokenizer().apply(&empty).is_empty());
        assert!(to_utf8().apply(&empty).is_empty());
    }
}
