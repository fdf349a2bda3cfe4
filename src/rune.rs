use crate::encoding;
use crate::error::{Encoding, Error, Result};
use crate::language::Language;
use crate::unicode;
use std::cmp::Ordering;
use std::fmt;
use std::hash;

/// A single decoded character with its linguistic metadata.
///
/// A `Rune` wraps one Unicode scalar value together with a language hint
/// (auto-detected from the scalar's block at construction) and an optional
/// phonetic annotation. Identity is the scalar value alone; the metadata
/// never participates in equality, ordering, or hashing.
///
/// ```
/// use rune_caster::{Language, Rune};
///
/// let rune = Rune::new('한');
/// assert_eq!(Language::Korean, rune.language());
/// assert_eq!(vec![0xED, 0x95, 0x9C], rune.to_utf8());
/// ```
#[derive(Clone, Default)]
pub struct Rune {
    scalar: char,
    language: Language,
    phoneme: String,
}

impl Rune {
    /// Creates a rune from a character, auto-detecting its language hint.
    pub fn new(scalar: char) -> Self {
        Rune {
            scalar,
            language: Self::detect_language(scalar),
            phoneme: String::new(),
        }
    }

    /// Creates a rune with an explicit language hint.
    pub fn with_language(scalar: char, language: Language) -> Self {
        Rune {
            scalar,
            language,
            phoneme: String::new(),
        }
    }

    /// Creates a rune with an explicit language hint and phonetic annotation.
    pub fn with_phoneme(scalar: char, language: Language, phoneme: impl Into<String>) -> Self {
        Rune {
            scalar,
            language,
            phoneme: phoneme.into(),
        }
    }

    /// Creates a rune from a raw scalar value, failing on surrogates and
    /// values beyond U+10FFFF.
    pub fn from_u32(value: u32) -> Result<Self> {
        match char::from_u32(value) {
            Some(scalar) => Ok(Self::new(scalar)),
            None if (0xD800..=0xDFFF).contains(&value) => {
                Err(Error::invalid(Encoding::Utf32, "surrogate scalar value"))
            }
            None => Err(Error::invalid(Encoding::Utf32, "scalar value out of range")),
        }
    }

    /// Strictly decodes one UTF-8 encoded character.
    ///
    /// Fails with [`Error::InvalidEncoding`] on truncated sequences, invalid
    /// continuation bytes, overlong encodings, and out-of-range values.
    /// Bytes past the first encoded character are ignored.
    pub fn decode_utf8(bytes: &[u8]) -> Result<Self> {
        let (scalar, _) = encoding::decode_utf8(bytes)?;
        Ok(Self::new(scalar))
    }

    /// Strictly decodes one UTF-8 encoded character with a language hint
    /// applied when auto-detection finds nothing.
    pub fn decode_utf8_with_language(bytes: &[u8], language: Language) -> Result<Self> {
        let mut rune = Self::decode_utf8(bytes)?;
        if !rune.language.is_known() {
            rune.language = language;
        }
        Ok(rune)
    }

    /// Strictly decodes one UTF-16 encoded character.
    ///
    /// Fails with [`Error::InvalidEncoding`] on unpaired surrogates.
    /// Units past the first encoded character are ignored.
    pub fn decode_utf16(units: &[u16]) -> Result<Self> {
        let (scalar, _) = encoding::decode_utf16(units)?;
        Ok(Self::new(scalar))
    }

    /// Returns the wrapped character.
    pub const fn scalar(&self) -> char {
        self.scalar
    }

    /// Returns the scalar value as a `u32`.
    pub const fn value(&self) -> u32 {
        self.scalar as u32
    }

    /// Returns the language hint.
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Replaces the language hint.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Returns the phonetic annotation, empty when none has been attached.
    pub fn phoneme(&self) -> &str {
        &self.phoneme
    }

    /// Replaces the phonetic annotation.
    pub fn set_phoneme(&mut self, phoneme: impl Into<String>) {
        self.phoneme = phoneme.into();
    }

    /// Returns the number of bytes this rune needs in UTF-8, between 1 and 4.
    pub fn len_utf8(&self) -> usize {
        encoding::len_utf8(self.value())
    }

    /// Encodes this rune as UTF-8 into the provided buffer and returns the
    /// subslice that was written.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is shorter than four bytes.
    pub fn encode_utf8<'a>(&self, dst: &'a mut [u8]) -> &'a [u8] {
        let len = encoding::encode_utf8(self.value(), dst);
        &dst[..len]
    }

    /// Encodes this rune as UTF-8.
    pub fn to_utf8(&self) -> Vec<u8> {
        let mut buf = [0u8; encoding::MAX_UTF8_LEN];
        let len = encoding::encode_utf8(self.value(), &mut buf);
        buf[..len].to_vec()
    }

    /// Encodes this rune as UTF-16, one unit for BMP characters and a
    /// surrogate pair beyond.
    pub fn to_utf16(&self) -> Vec<u16> {
        let mut buf = [0u16; encoding::MAX_UTF16_LEN];
        let len = encoding::encode_utf16(self.value(), &mut buf);
        buf[..len].to_vec()
    }

    /// Returns the UTF-32 encoding, which is the scalar value itself.
    pub const fn to_utf32(&self) -> u32 {
        self.scalar as u32
    }

    /// Returns the general category of this rune.
    pub const fn category(&self) -> unicode::Category {
        unicode::category(self.scalar)
    }

    /// Returns the script of this rune.
    pub const fn script(&self) -> unicode::Script {
        unicode::script(self.scalar)
    }

    /// Returns whether this rune is in the ASCII range.
    pub const fn is_ascii(&self) -> bool {
        unicode::is_ascii(self.scalar)
    }

    /// Returns whether this rune is a Latin-script letter.
    pub const fn is_latin(&self) -> bool {
        unicode::is_latin(self.scalar)
    }

    /// Returns whether this rune is Hangul.
    pub const fn is_hangul(&self) -> bool {
        unicode::is_hangul(self.scalar)
    }

    /// Returns whether this rune is Hiragana.
    pub const fn is_hiragana(&self) -> bool {
        unicode::is_hiragana(self.scalar)
    }

    /// Returns whether this rune is Katakana.
    pub const fn is_katakana(&self) -> bool {
        unicode::is_katakana(self.scalar)
    }

    /// Returns whether this rune is a CJK Unified Ideograph.
    pub const fn is_kanji(&self) -> bool {
        unicode::is_kanji(self.scalar)
    }

    /// Returns whether this rune is an emoji or pictographic symbol.
    pub const fn is_emoji(&self) -> bool {
        unicode::is_emoji(self.scalar)
    }

    /// Returns whether this rune is a letter of any covered script.
    pub const fn is_letter(&self) -> bool {
        unicode::is_letter(self.scalar)
    }

    /// Returns whether this rune is a decimal digit.
    pub const fn is_digit(&self) -> bool {
        unicode::is_digit(self.scalar)
    }

    /// Returns whether this rune is whitespace.
    pub const fn is_whitespace(&self) -> bool {
        unicode::is_whitespace(self.scalar)
    }

    /// Returns whether this rune is punctuation.
    pub const fn is_punctuation(&self) -> bool {
        unicode::is_punctuation(self.scalar)
    }

    /// Returns whether this rune is a vowel.
    ///
    /// A closed enumeration: the ten Latin vowel letters, the Hangul
    /// compatibility jamo vowel block U+314F–U+3163, and the five Hiragana
    /// and Katakana vowels. Letters outside the enumeration are consonants.
    pub const fn is_vowel(&self) -> bool {
        let cp = self.scalar as u32;
        matches!(
            self.scalar,
            'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U'
        ) || (cp >= 0x314F && cp <= 0x3163)
            || matches!(self.scalar, 'あ' | 'い' | 'う' | 'え' | 'お')
            || matches!(self.scalar, 'ア' | 'イ' | 'ウ' | 'エ' | 'オ')
    }

    /// Returns whether this rune is a letter outside the vowel enumeration.
    pub const fn is_consonant(&self) -> bool {
        self.is_letter() && !self.is_vowel()
    }

    /// Block-range language detection, first match wins.
    ///
    /// Han ideographs default to Chinese since the script is shared across
    /// CJK; ASCII non-letters resolve to Unknown, not English.
    fn detect_language(scalar: char) -> Language {
        if unicode::is_hangul(scalar) {
            Language::Korean
        } else if unicode::is_hiragana(scalar) || unicode::is_katakana(scalar) {
            Language::Japanese
        } else if unicode::is_kanji(scalar) {
            Language::Chinese
        } else if unicode::is_latin(scalar) {
            Language::English
        } else if unicode::is_cyrillic(scalar) {
            Language::Russian
        } else if unicode::is_arabic(scalar) {
            Language::Arabic
        } else if unicode::is_hebrew(scalar) {
            Language::Hebrew
        } else if unicode::is_thai(scalar) {
            Language::Thai
        } else {
            Language::Unknown
        }
    }
}

impl PartialEq for Rune {
    fn eq(&self, other: &Rune) -> bool {
        self.scalar == other.scalar
    }
}

impl Eq for Rune {}

impl PartialOrd for Rune {
    fn partial_cmp(&self, other: &Rune) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rune {
    fn cmp(&self, other: &Rune) -> Ordering {
        self.scalar.cmp(&other.scalar)
    }
}

impl hash::Hash for Rune {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.scalar.hash(state);
    }
}

impl PartialEq<char> for Rune {
    fn eq(&self, other: &char) -> bool {
        self.scalar == *other
    }
}

impl PartialEq<Rune> for char {
    fn eq(&self, other: &Rune) -> bool {
        *self == other.scalar
    }
}

impl From<char> for Rune {
    fn from(scalar: char) -> Self {
        Rune::new(scalar)
    }
}

impl From<Rune> for char {
    fn from(rune: Rune) -> Self {
        rune.scalar
    }
}

impl fmt::Display for Rune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scalar)
    }
}

impl fmt::Debug for Rune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rune('{}'", self.scalar.escape_debug())?;
        if self.language.is_known() {
            write!(f, ", {}", self.language)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_detection() {
        assert_eq!(Language::Korean, Rune::new('한').language());
        assert_eq!(Language::Korean, Rune::new('ㅏ').language());
        assert_eq!(Language::Japanese, Rune::new('あ').language());
        assert_eq!(Language::Japanese, Rune::new('ア').language());
        assert_eq!(Language::Chinese, Rune::new('漢').language());
        assert_eq!(Language::English, Rune::new('A').language());
        assert_eq!(Language::English, Rune::new('é').language());
        assert_eq!(Language::Russian, Rune::new('д').language());
        assert_eq!(Language::Arabic, Rune::new('م').language());
        assert_eq!(Language::Hebrew, Rune::new('א').language());
        assert_eq!(Language::Thai, Rune::new('ท').language());
        assert_eq!(Language::Unknown, Rune::new('!').language());
        assert_eq!(Language::Unknown, Rune::new('3').language());
    }

    #[test]
    fn test_identity_is_scalar_only() {
        let plain = Rune::new('a');
        let tagged = Rune::with_phoneme('a', Language::Korean, "ah");
        assert_eq!(plain, tagged);
        assert_eq!(plain.cmp(&tagged), Ordering::Equal);
        assert_eq!('a', plain);
        assert_ne!(plain, Rune::new('b'));
    }

    #[test]
    fn test_utf8_round_trip() {
        for ch in ['A', 'é', '가', '😀'] {
            let rune = Rune::new(ch);
            let bytes = rune.to_utf8();
            assert_eq!(rune, Rune::decode_utf8(&bytes).unwrap());
        }
    }

    #[test]
    fn test_utf16_round_trip() {
        for ch in ['A', '가', '😀'] {
            let rune = Rune::new(ch);
            let units = rune.to_utf16();
            assert_eq!(rune, Rune::decode_utf16(&units).unwrap());
        }
    }

    #[test]
    fn test_hangul_utf8_bytes() {
        assert_eq!(vec![0xEA, 0xB0, 0x80], Rune::new('가').to_utf8());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(Rune::decode_utf8(b"\xFF").is_err());
        assert!(Rune::decode_utf8(b"").is_err());
        assert!(Rune::decode_utf8(b"\xC3").is_err());
        assert!(Rune::decode_utf16(&[0xD800]).is_err());
        assert!(Rune::from_u32(0xD800).is_err());
        assert!(Rune::from_u32(0x110000).is_err());
    }

    #[test]
    fn test_decode_with_language_hint() {
        let rune = Rune::decode_utf8_with_language(b"!", Language::French).unwrap();
        assert_eq!(Language::French, rune.language());
        // A detected language wins over the hint.
        let rune = Rune::decode_utf8_with_language("한".as_bytes(), Language::French).unwrap();
        assert_eq!(Language::Korean, rune.language());
    }

    #[test]
    fn test_vowel_enumeration() {
        assert!(Rune::new('a').is_vowel());
        assert!(Rune::new('E').is_vowel());
        assert!(Rune::new('ㅏ').is_vowel());
        assert!(Rune::new('あ').is_vowel());
        assert!(Rune::new('オ').is_vowel());
        assert!(!Rune::new('k').is_vowel());
        assert!(Rune::new('k').is_consonant());
        // Letters outside the enumeration count as consonants.
        assert!(Rune::new('漢').is_consonant());
        // Non-letters are neither.
        assert!(!Rune::new('!').is_vowel());
        assert!(!Rune::new('!').is_consonant());
    }

    #[test]
    fn test_classification_wrappers() {
        let rune = Rune::new('한');
        assert!(rune.is_hangul());
        assert!(rune.is_letter());
        assert_eq!(unicode::Script::Hangul, rune.script());
        assert_eq!(unicode::Category::Letter, rune.category());
        assert!(Rune::new('😀').is_emoji());
        assert!(Rune::new('\t').is_whitespace());
    }

    #[test]
    fn test_debug_fmt() {
        assert_eq!("Rune('A', English)", format!("{:?}", Rune::new('A')));
        assert_eq!("Rune('!')", format!("{:?}", Rune::new('!')));
    }
}
