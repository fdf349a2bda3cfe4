//! Core transformations: whitespace normalization, case conversion,
//! Unicode normalization, edge trimming, and text encoding.

use crate::rune::Rune;
use crate::sequence::RuneSequence;
use crate::spell::Spell;
use crate::unicode::{self, NormalizationForm};
use smallvec::SmallVec;
use unicode_normalization::UnicodeNormalization;

/// Normalizes whitespace to the canonical space U+0020.
///
/// Pass one replaces every classified-whitespace rune with a canonical
/// space, collapsing runs to a single space when `collapse` is set. Pass two
/// drops leading and trailing spaces when `trim` is set. Replacement runes
/// keep the language hint of the whitespace they replace.
#[derive(Copy, Clone, Debug)]
pub struct WhitespaceNormalizer {
    collapse: bool,
    trim: bool,
}

impl WhitespaceNormalizer {
    /// Creates a normalizer with explicit collapse/trim settings.
    pub const fn new(collapse: bool, trim: bool) -> Self {
        WhitespaceNormalizer { collapse, trim }
    }

    /// Returns whether whitespace runs collapse to a single space.
    pub const fn collapse(&self) -> bool {
        self.collapse
    }

    /// Returns whether edge whitespace is removed.
    pub const fn trim(&self) -> bool {
        self.trim
    }
}

impl Default for WhitespaceNormalizer {
    fn default() -> Self {
        WhitespaceNormalizer::new(true, true)
    }
}

impl Spell for WhitespaceNormalizer {
    type Input = RuneSequence;
    type Output = RuneSequence;

    fn apply(&self, input: &RuneSequence) -> RuneSequence {
        let mut normalized = RuneSequence::with_language(input.primary_language());
        normalized.reserve(input.len());

        let mut prev_was_whitespace = false;
        for rune in input {
            if rune.is_whitespace() {
                if !(self.collapse && prev_was_whitespace) {
                    normalized.push(Rune::with_language(
                        unicode::CANONICAL_SPACE,
                        rune.language(),
                    ));
                }
                prev_was_whitespace = true;
            } else {
                normalized.push(rune.clone());
                prev_was_whitespace = false;
            }
        }

        if !self.trim {
            return normalized;
        }
        let start = normalized
            .iter()
            .position(|rune| !rune.is_whitespace())
            .unwrap_or(normalized.len());
        let end = normalized
            .iter()
            .rposition(|rune| !rune.is_whitespace())
            .map_or(start, |last| last + 1);
        normalized.substr(start, end - start)
    }

    fn name(&self) -> &str {
        "WhitespaceNormalizer"
    }

    fn description(&self) -> String {
        let mut desc = String::from("Whitespace normalizer (");
        if self.collapse {
            desc.push_str("collapse multiple");
            if self.trim {
                desc.push_str(", ");
            }
        }
        if self.trim {
            desc.push_str("trim edges");
        }
        desc.push(')');
        desc
    }
}

/// The case transformation applied by [`CaseConverter`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CaseMode {
    /// Convert every cased scalar to lowercase.
    Lower,
    /// Convert every cased scalar to uppercase.
    Upper,
    /// Uppercase the first scalar of each whitespace-delimited word and
    /// lowercase the rest.
    Title,
}

/// Converts text case using the full Unicode case mappings.
///
/// Mappings may expand (one scalar to several); every produced rune keeps
/// the language hint of the rune it was mapped from. Title mode tracks the
/// word boundary in a per-call local, so no state leaks between calls.
#[derive(Copy, Clone, Debug)]
pub struct CaseConverter {
    mode: CaseMode,
}

type CaseMapped = SmallVec<[char; 3]>;

fn map_lower(scalar: char) -> CaseMapped {
    scalar.to_lowercase().collect()
}

fn map_upper(scalar: char) -> CaseMapped {
    scalar.to_uppercase().collect()
}

impl CaseConverter {
    /// Creates a converter for the given mode.
    pub const fn new(mode: CaseMode) -> Self {
        CaseConverter { mode }
    }

    /// Returns the conversion mode.
    pub const fn mode(&self) -> CaseMode {
        self.mode
    }

    fn push_mapped(out: &mut RuneSequence, rune: &Rune, mapped: CaseMapped) {
        for scalar in mapped {
            out.push(Rune::with_language(scalar, rune.language()));
        }
    }
}

impl Spell for CaseConverter {
    type Input = RuneSequence;
    type Output = RuneSequence;

    fn apply(&self, input: &RuneSequence) -> RuneSequence {
        let mut converted = RuneSequence::with_language(input.primary_language());
        converted.reserve(input.len());

        match self.mode {
            CaseMode::Lower => {
                for rune in input {
                    Self::push_mapped(&mut converted, rune, map_lower(rune.scalar()));
                }
            }
            CaseMode::Upper => {
                for rune in input {
                    Self::push_mapped(&mut converted, rune, map_upper(rune.scalar()));
                }
            }
            CaseMode::Title => {
                let mut at_word_start = true;
                for rune in input {
                    if rune.is_whitespace() {
                        converted.push(rune.clone());
                        at_word_start = true;
                    } else {
                        let mapped = if at_word_start {
                            map_upper(rune.scalar())
                        } else {
                            map_lower(rune.scalar())
                        };
                        Self::push_mapped(&mut converted, rune, mapped);
                        at_word_start = false;
                    }
                }
            }
        }
        converted
    }

    fn name(&self) -> &str {
        "CaseConverter"
    }

    fn description(&self) -> String {
        match self.mode {
            CaseMode::Lower => "Lowercase Conversion",
            CaseMode::Upper => "Uppercase Conversion",
            CaseMode::Title => "Titlecase Conversion",
        }
        .to_string()
    }
}

/// Applies a Unicode normalization form via `unicode-normalization`.
///
/// Output runes re-detect their language hints from the normalized scalars;
/// the sequence keeps the input's primary language.
#[derive(Copy, Clone, Debug)]
pub struct UnicodeNormalizer {
    form: NormalizationForm,
}

impl UnicodeNormalizer {
    /// Creates a normalizer for the given form.
    pub const fn new(form: NormalizationForm) -> Self {
        UnicodeNormalizer { form }
    }

    /// Returns the normalization form.
    pub const fn form(&self) -> NormalizationForm {
        self.form
    }
}

impl Spell for UnicodeNormalizer {
    type Input = RuneSequence;
    type Output = RuneSequence;

    fn apply(&self, input: &RuneSequence) -> RuneSequence {
        let scalars = input.iter().map(Rune::scalar);
        let mut normalized: RuneSequence = match self.form {
            NormalizationForm::Nfc => scalars.nfc().map(Rune::new).collect(),
            NormalizationForm::Nfd => scalars.nfd().map(Rune::new).collect(),
            NormalizationForm::Nfkc => scalars.nfkc().map(Rune::new).collect(),
            NormalizationForm::Nfkd => scalars.nfkd().map(Rune::new).collect(),
        };
        normalized.set_primary_language(input.primary_language());
        normalized
    }

    fn name(&self) -> &str {
        "UnicodeNormalizer"
    }

    fn description(&self) -> String {
        match self.form {
            NormalizationForm::Nfc => "Unicode NFC Normalization",
            NormalizationForm::Nfd => "Unicode NFD Normalization",
            NormalizationForm::Nfkc => "Unicode NFKC Normalization",
            NormalizationForm::Nfkd => "Unicode NFKD Normalization",
        }
        .to_string()
    }
}

/// Removes leading and trailing whitespace, leaving the interior untouched.
#[derive(Copy, Clone, Debug, Default)]
pub struct TrimEdges;

impl Spell for TrimEdges {
    type Input = RuneSequence;
    type Output = RuneSequence;

    fn apply(&self, input: &RuneSequence) -> RuneSequence {
        let start = input
            .iter()
            .position(|rune| !rune.is_whitespace())
            .unwrap_or(input.len());
        let end = input
            .iter()
            .rposition(|rune| !rune.is_whitespace())
            .map_or(start, |last| last + 1);
        input.substr(start, end - start)
    }

    fn name(&self) -> &str {
        "TrimEdges"
    }

    fn description(&self) -> String {
        "Trim leading/trailing whitespace".to_string()
    }
}

/// Encodes a sequence to UTF-8 text, for pipelines that end in a `String`.
#[derive(Copy, Clone, Debug, Default)]
pub struct ToUtf8;

impl Spell for ToUtf8 {
    type Input = RuneSequence;
    type Output = String;

    fn apply(&self, input: &RuneSequence) -> String {
        input.iter().map(Rune::scalar).collect()
    }

    fn name(&self) -> &str {
        "ToUtf8"
    }

    fn description(&self) -> String {
        "Encode as UTF-8 text".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn seq(text: &str) -> RuneSequence {
        RuneSequence::from(text)
    }

    #[test]
    fn test_whitespace_normalizer_collapses_and_trims() {
        let normalizer = WhitespaceNormalizer::default();
        assert_eq!(normalizer.apply(&seq("  Hello   World  ")), "Hello World");
        assert_eq!(normalizer.apply(&seq("\t\tHello\n\nWorld\r\n")), "Hello World");
    }

    #[test]
    fn test_whitespace_normalizer_flag_combinations() {
        let input = seq("  Hello   World  ");
        assert_eq!(
            WhitespaceNormalizer::new(true, false).apply(&input),
            " Hello World "
        );
        assert_eq!(
            WhitespaceNormalizer::new(false, true).apply(&input),
            "Hello   World"
        );
    }

    #[test]
    fn test_whitespace_normalizer_degenerate_inputs() {
        let normalizer = WhitespaceNormalizer::default();
        assert!(normalizer.apply(&RuneSequence::new()).is_empty());
        assert!(normalizer.apply(&seq("   \t\n   ")).is_empty());
        // Without trimming, an all-whitespace input keeps one space when
        // collapsing and one per input rune otherwise.
        assert_eq!(WhitespaceNormalizer::new(true, false).apply(&seq(" \t\n")), " ");
        assert_eq!(
            WhitespaceNormalizer::new(false, false).apply(&seq(" \t\n")),
            "   "
        );
    }

    #[test]
    fn test_whitespace_normalizer_heterogeneous_whitespace() {
        // NBSP and tab both normalize to the canonical space.
        let normalizer = WhitespaceNormalizer::new(false, false);
        assert_eq!(normalizer.apply(&seq("a\u{A0}b\tc")), "a b c");
    }

    #[test]
    fn test_whitespace_normalizer_keeps_language_metadata() {
        let input = RuneSequence::from_utf8_with_language(b"a  b", Language::German);
        let out = WhitespaceNormalizer::default().apply(&input);
        assert_eq!(Language::German, out.primary_language());
        assert_eq!(Language::German, out[1].language());
    }

    #[test]
    fn test_whitespace_normalizer_idempotent() {
        let normalizer = WhitespaceNormalizer::default();
        let once = normalizer.apply(&seq("  a \t b  "));
        assert_eq!(once, normalizer.apply(&once));
    }

    #[test]
    fn test_whitespace_normalizer_description() {
        assert_eq!(
            "Whitespace normalizer (collapse multiple, trim edges)",
            WhitespaceNormalizer::default().description()
        );
        assert_eq!(
            "Whitespace normalizer (collapse multiple)",
            WhitespaceNormalizer::new(true, false).description()
        );
        assert_eq!(
            "Whitespace normalizer (trim edges)",
            WhitespaceNormalizer::new(false, true).description()
        );
    }

    #[test]
    fn test_case_converter_lower_upper() {
        assert_eq!(
            CaseConverter::new(CaseMode::Lower).apply(&seq("Hello WORLD")),
            "hello world"
        );
        assert_eq!(
            CaseConverter::new(CaseMode::Upper).apply(&seq("Hello world")),
            "HELLO WORLD"
        );
    }

    #[test]
    fn test_case_converter_full_mappings() {
        // The sharp s expands to SS on uppercase.
        assert_eq!(CaseConverter::new(CaseMode::Upper).apply(&seq("straße")), "STRASSE");
        assert_eq!(CaseConverter::new(CaseMode::Lower).apply(&seq("ÉCOLE")), "école");
    }

    #[test]
    fn test_case_converter_titlecase() {
        let title = CaseConverter::new(CaseMode::Title);
        assert_eq!(title.apply(&seq("hello world")), "Hello World");
        assert_eq!(title.apply(&seq("hELLO wORLD")), "Hello World");
        assert_eq!(title.apply(&seq("3rd place")), "3rd Place");
        // Uncased scripts pass through untouched.
        assert_eq!(title.apply(&seq("한글 text")), "한글 Text");
    }

    #[test]
    fn test_case_converter_no_state_across_calls() {
        let title = CaseConverter::new(CaseMode::Title);
        // A trailing in-word position must not leak into the next call.
        assert_eq!(title.apply(&seq("ab")), "Ab");
        assert_eq!(title.apply(&seq("cd")), "Cd");
    }

    #[test]
    fn test_ascii_case_round_trip() {
        let lower = CaseConverter::new(CaseMode::Lower);
        let upper = CaseConverter::new(CaseMode::Upper);
        let text = seq("MiXeD Case");
        assert_eq!(lower.apply(&upper.apply(&text)), lower.apply(&text));
    }

    #[test]
    fn test_unicode_normalizer_nfc_nfd() {
        // e + combining acute composes to é under NFC.
        let decomposed = seq("e\u{0301}cole");
        let nfc = UnicodeNormalizer::new(NormalizationForm::Nfc).apply(&decomposed);
        assert_eq!(nfc, "école");
        let nfd = UnicodeNormalizer::new(NormalizationForm::Nfd).apply(&nfc);
        assert_eq!(nfd, "e\u{0301}cole");
    }

    #[test]
    fn test_unicode_normalizer_nfkc_compatibility() {
        // Fullwidth A compatibility-decomposes to plain A.
        let nfkc = UnicodeNormalizer::new(NormalizationForm::Nfkc).apply(&seq("Ａ"));
        assert_eq!(nfkc, "A");
        // NFC leaves it alone.
        let nfc = UnicodeNormalizer::new(NormalizationForm::Nfc).apply(&seq("Ａ"));
        assert_eq!(nfc, "Ａ");
    }

    #[test]
    fn test_trim_edges() {
        let trim = TrimEdges;
        assert_eq!(trim.apply(&seq("  a  b  ")), "a  b");
        assert!(trim.apply(&seq("   ")).is_empty());
        assert!(trim.apply(&RuneSequence::new()).is_empty());
        // Idempotent.
        let once = trim.apply(&seq(" x "));
        assert_eq!(once, trim.apply(&once));
    }

    #[test]
    fn test_trim_inherits_primary_language() {
        let input = RuneSequence::from_utf8(" 한국어 ".as_bytes());
        assert_eq!(
            Language::Korean,
            TrimEdges.apply(&input).primary_language()
        );
    }

    #[test]
    fn test_to_utf8_spell() {
        assert_eq!("한글 ok", ToUtf8.apply(&seq("한글 ok")));
    }
}
