//! Language-aware spells: script-based detection and grapheme-to-phoneme
//! conversion.

use crate::language::Language;
use crate::rune::Rune;
use crate::sequence::RuneSequence;
use crate::spell::Spell;
use crate::unicode::Script;

/// Scripts eligible for the majority vote, in tie-break order.
const VOTED_SCRIPTS: [Script; 11] = [
    Script::Latin,
    Script::Hangul,
    Script::Hiragana,
    Script::Katakana,
    Script::Han,
    Script::Arabic,
    Script::Cyrillic,
    Script::Greek,
    Script::Hebrew,
    Script::Devanagari,
    Script::Thai,
];

/// Maps a winning script to its most likely language.
///
/// Distinguishing Chinese from Japanese would need more than scripts, so a
/// Han majority defaults to Japanese at the sequence level (per-rune
/// detection defaults Han to Chinese instead). Scripts without a mapping
/// yield Unknown.
fn script_language(script: Script) -> Language {
    match script {
        Script::Latin => Language::English,
        Script::Hangul => Language::Korean,
        Script::Hiragana | Script::Katakana | Script::Han => Language::Japanese,
        Script::Cyrillic => Language::Russian,
        Script::Arabic => Language::Arabic,
        Script::Devanagari => Language::Hindi,
        _ => Language::Unknown,
    }
}

/// Detects the dominant language of a sequence from its scripts.
///
/// Counts runes per script, takes the most frequent one (earlier scripts in
/// the enumeration win ties), and stores the mapped language as the output's
/// primary language. Per-rune data is left untouched.
#[derive(Copy, Clone, Debug, Default)]
pub struct LanguageDetector;

impl Spell for LanguageDetector {
    type Input = RuneSequence;
    type Output = RuneSequence;

    fn apply(&self, input: &RuneSequence) -> RuneSequence {
        let mut counts = [0usize; VOTED_SCRIPTS.len()];
        for rune in input {
            if let Some(slot) = VOTED_SCRIPTS.iter().position(|&s| s == rune.script()) {
                counts[slot] += 1;
            }
        }

        let mut winner = None;
        let mut best = 0;
        for (slot, &count) in counts.iter().enumerate() {
            if count > best {
                winner = Some(VOTED_SCRIPTS[slot]);
                best = count;
            }
        }

        let mut result = input.clone();
        result.set_primary_language(winner.map_or(Language::Unknown, script_language));
        result
    }

    fn name(&self) -> &str {
        "LanguageDetector"
    }

    fn description(&self) -> String {
        "Detects the primary language of text based on script analysis".to_string()
    }
}

// Revised-romanization jamo tables for Hangul syllable decomposition.
const CHOSEONG: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "", "j", "jj", "ch", "k", "t", "p",
    "h",
];
const JUNGSEONG: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "yo", "u", "wo", "we",
    "wi", "yu", "eu", "ui", "i",
];
const JONGSEONG: [&str; 28] = [
    "", "g", "kk", "gs", "n", "nj", "nh", "d", "l", "lg", "lm", "lb", "ls", "lt", "lp", "lh", "m",
    "b", "bs", "s", "ss", "ng", "j", "ch", "k", "t", "p", "h",
];

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_END: u32 = 0xD7A3;
const JUNGSEONG_COUNT: u32 = 21;
const JONGSEONG_COUNT: u32 = 28;

/// Romanizes one Hangul syllable block by arithmetic jamo decomposition.
fn hangul_phoneme(scalar: char) -> Option<String> {
    let cp = scalar as u32;
    if !(SYLLABLE_BASE..=SYLLABLE_END).contains(&cp) {
        return None;
    }
    let index = cp - SYLLABLE_BASE;
    let lead = index / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    let vowel = (index % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT;
    let tail = index % JONGSEONG_COUNT;
    Some(format!(
        "{}{}{}",
        CHOSEONG[lead as usize], JUNGSEONG[vowel as usize], JONGSEONG[tail as usize]
    ))
}

/// Attaches per-rune phonetic annotations for a target language.
///
/// A placeholder for full G2P systems: built-in rules cover Hangul syllable
/// romanization for Korean and lowercased identity for Latin letters in
/// English; any rune without a rule keeps an empty phoneme. The text itself
/// is unchanged.
#[derive(Copy, Clone, Debug)]
pub struct GraphemeToPhoneme {
    language: Language,
}

impl GraphemeToPhoneme {
    /// Creates a converter targeting `language`.
    pub const fn new(language: Language) -> Self {
        GraphemeToPhoneme { language }
    }

    /// Returns the target language.
    pub const fn target_language(&self) -> Language {
        self.language
    }

    fn phoneme_for(&self, rune: &Rune) -> String {
        match self.language {
            Language::Korean => hangul_phoneme(rune.scalar()).unwrap_or_default(),
            Language::English => {
                let scalar = rune.scalar();
                if scalar.is_ascii_alphabetic() {
                    scalar.to_ascii_lowercase().to_string()
                } else {
                    String::new()
                }
            }
            _ => String::new(),
        }
    }
}

impl Spell for GraphemeToPhoneme {
    type Input = RuneSequence;
    type Output = RuneSequence;

    fn apply(&self, input: &RuneSequence) -> RuneSequence {
        let mut result = RuneSequence::with_language(input.primary_language());
        result.reserve(input.len());
        for rune in input {
            let mut annotated = rune.clone();
            annotated.set_phoneme(self.phoneme_for(rune));
            result.push(annotated);
        }
        result
    }

    fn name(&self) -> &str {
        "GraphemeToPhoneme"
    }

    fn description(&self) -> String {
        format!("Grapheme-to-phoneme conversion ({})", self.language)
    }
}
