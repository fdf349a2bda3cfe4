use crate::encoding;
use crate::error::{Error, Result};
use crate::language::Language;
use crate::rune::Rune;
use log::trace;
use std::cmp::Ordering;
use std::fmt;
use std::hash;
use std::ops;

/// An ordered sequence of [`Rune`]s representing a decoded string.
///
/// The sequence owns its runes outright and carries a `primary_language`
/// summary, derived by majority vote over the per-rune hints whenever the
/// sequence is built from encoded text. Mutating operations (`push`,
/// `append`, ...) and slicing (`substr`) deliberately do not re-derive it;
/// call [`RuneSequence::detect_primary_language`] to recompute.
///
/// Sequence-level decoding is lossy: malformed characters are skipped and
/// decoding continues. Strict per-character decoding lives on [`Rune`].
///
/// ```
/// use rune_caster::{Language, RuneSequence};
///
/// let seq = RuneSequence::from_utf8("안녕하세요 hi".as_bytes());
/// assert_eq!(Language::Korean, seq.primary_language());
/// assert_eq!(seq, "안녕하세요 hi");
/// ```
#[derive(Clone, Default)]
pub struct RuneSequence {
    runes: Vec<Rune>,
    primary_language: Language,
}

impl RuneSequence {
    /// Creates an empty sequence with an unknown primary language.
    pub const fn new() -> Self {
        RuneSequence {
            runes: Vec::new(),
            primary_language: Language::Unknown,
        }
    }

    /// Creates an empty sequence with the given primary language.
    pub const fn with_language(language: Language) -> Self {
        RuneSequence {
            runes: Vec::new(),
            primary_language: language,
        }
    }

    /// Decodes a UTF-8 byte sequence, skipping malformed characters.
    ///
    /// A bad leading byte is skipped by one byte; a well-formed leading byte
    /// whose sequence turns out malformed or truncated is skipped by its
    /// declared length. Decoding itself never fails.
    pub fn from_utf8(bytes: &[u8]) -> Self {
        let mut runes = Vec::with_capacity(bytes.len());
        let mut skipped = 0usize;
        let mut i = 0;
        while i < bytes.len() {
            match encoding::len_from_first_byte(bytes[i]) {
                None => {
                    i += 1;
                    skipped += 1;
                }
                Some(declared) => match encoding::decode_utf8(&bytes[i..]) {
                    Ok((scalar, consumed)) => {
                        runes.push(Rune::new(scalar));
                        i += consumed;
                    }
                    Err(_) => {
                        i += declared;
                        skipped += 1;
                    }
                },
            }
        }
        if skipped > 0 {
            trace!("from_utf8: skipped {skipped} malformed character(s)");
        }
        Self::from_runes(runes)
    }

    /// Decodes a UTF-8 byte sequence and forces `language` onto every rune
    /// whose own detection found nothing; the sequence's primary language
    /// becomes `language`.
    pub fn from_utf8_with_language(bytes: &[u8], language: Language) -> Self {
        let mut seq = Self::from_utf8(bytes);
        for rune in &mut seq.runes {
            if !rune.language().is_known() {
                rune.set_language(language);
            }
        }
        seq.primary_language = language;
        seq
    }

    /// Decodes a UTF-16 code-unit sequence, skipping unpaired surrogates.
    pub fn from_utf16(units: &[u16]) -> Self {
        let mut runes = Vec::with_capacity(units.len());
        let mut skipped = 0usize;
        let mut i = 0;
        while i < units.len() {
            match encoding::decode_utf16(&units[i..]) {
                Ok((scalar, consumed)) => {
                    runes.push(Rune::new(scalar));
                    i += consumed;
                }
                Err(_) => {
                    i += 1;
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            trace!("from_utf16: skipped {skipped} malformed unit(s)");
        }
        Self::from_runes(runes)
    }

    /// Decodes a UTF-32 scalar sequence, skipping surrogate and
    /// out-of-range values.
    pub fn from_utf32(values: &[u32]) -> Self {
        let mut runes = Vec::with_capacity(values.len());
        let mut skipped = 0usize;
        for &value in values {
            match char::from_u32(value) {
                Some(scalar) => runes.push(Rune::new(scalar)),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            trace!("from_utf32: skipped {skipped} invalid scalar value(s)");
        }
        Self::from_runes(runes)
    }

    fn from_runes(runes: Vec<Rune>) -> Self {
        let primary_language = majority_language(runes.iter());
        RuneSequence {
            runes,
            primary_language,
        }
    }

    /// Encodes the sequence as UTF-8.
    pub fn to_utf8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.runes.len() * 2);
        let mut buf = [0u8; encoding::MAX_UTF8_LEN];
        for rune in &self.runes {
            bytes.extend_from_slice(rune.encode_utf8(&mut buf));
        }
        bytes
    }

    /// Encodes the sequence as UTF-16.
    pub fn to_utf16(&self) -> Vec<u16> {
        let mut units = Vec::with_capacity(self.runes.len());
        let mut buf = [0u16; encoding::MAX_UTF16_LEN];
        for rune in &self.runes {
            let len = encoding::encode_utf16(rune.value(), &mut buf);
            units.extend_from_slice(&buf[..len]);
        }
        units
    }

    /// Encodes the sequence as UTF-32, one scalar value per rune.
    pub fn to_utf32(&self) -> Vec<u32> {
        self.runes.iter().map(Rune::value).collect()
    }

    /// Returns the number of runes.
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    /// Returns whether the sequence holds no runes.
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// Reserves capacity for at least `additional` more runes.
    pub fn reserve(&mut self, additional: usize) {
        self.runes.reserve(additional);
    }

    /// Removes all runes, keeping the primary language.
    pub fn clear(&mut self) {
        self.runes.clear();
    }

    /// Returns the rune at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<&Rune> {
        self.runes.get(index)
    }

    /// Returns the rune at `index`, or [`Error::IndexOutOfRange`].
    pub fn at(&self, index: usize) -> Result<&Rune> {
        self.runes.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.runes.len(),
        })
    }

    /// Returns the first rune, if any.
    pub fn first(&self) -> Option<&Rune> {
        self.runes.first()
    }

    /// Returns the last rune, if any.
    pub fn last(&self) -> Option<&Rune> {
        self.runes.last()
    }

    /// Returns an iterator over the runes.
    pub fn iter(&self) -> std::slice::Iter<'_, Rune> {
        self.runes.iter()
    }

    /// Appends one rune. The primary language is not re-derived.
    pub fn push(&mut self, rune: Rune) {
        self.runes.push(rune);
    }

    /// Removes and returns the last rune, if any.
    pub fn pop(&mut self) -> Option<Rune> {
        self.runes.pop()
    }

    /// Inserts a rune at `index`, shifting the tail right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, rune: Rune) {
        self.runes.insert(index, rune);
    }

    /// Removes and returns the rune at `index`, shifting the tail left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Rune {
        self.runes.remove(index)
    }

    /// Resizes to `new_len` runes, filling with clones of `fill`.
    pub fn resize(&mut self, new_len: usize, fill: Rune) {
        self.runes.resize(new_len, fill);
    }

    /// Appends all runes of `other`. The primary language is not re-derived.
    pub fn append(&mut self, other: &RuneSequence) {
        self.runes.extend_from_slice(&other.runes);
    }

    /// Decodes `text` and appends it. The primary language is not re-derived.
    pub fn push_str(&mut self, text: &str) {
        self.runes.extend(text.chars().map(Rune::new));
    }

    /// Returns the subsequence starting at `start`, clamped to the sequence,
    /// inheriting the primary language verbatim.
    pub fn substr_from(&self, start: usize) -> RuneSequence {
        self.substr(start, usize::MAX)
    }

    /// Returns up to `length` runes starting at `start`.
    ///
    /// `start` past the end yields an empty sequence; `length` is clamped to
    /// the remaining runes. The result inherits the source's current primary
    /// language without re-derivation.
    pub fn substr(&self, start: usize, length: usize) -> RuneSequence {
        if start >= self.runes.len() {
            return RuneSequence::with_language(self.primary_language);
        }
        let end = start.saturating_add(length).min(self.runes.len());
        RuneSequence {
            runes: self.runes[start..end].to_vec(),
            primary_language: self.primary_language,
        }
    }

    /// Finds the first occurrence of `needle` at or after `from`.
    ///
    /// Matching is elementwise rune equality, i.e. scalar values only.
    /// An empty needle matches at `from` immediately.
    pub fn find(&self, needle: &RuneSequence, from: usize) -> Option<usize> {
        if needle.is_empty() {
            return Some(from);
        }
        if from >= self.runes.len() || needle.len() > self.runes.len() - from {
            return None;
        }
        self.runes[from..]
            .windows(needle.len())
            .position(|window| window == needle.runes.as_slice())
            .map(|pos| pos + from)
    }

    /// Finds the first occurrence of `needle` at or after `from`.
    pub fn find_rune(&self, needle: &Rune, from: usize) -> Option<usize> {
        if from >= self.runes.len() {
            return None;
        }
        self.runes[from..]
            .iter()
            .position(|rune| rune == needle)
            .map(|pos| pos + from)
    }

    /// Returns whether `needle` occurs anywhere in the sequence.
    pub fn contains(&self, needle: &RuneSequence) -> bool {
        self.find(needle, 0).is_some()
    }

    /// Returns whether `needle` occurs anywhere in the sequence.
    pub fn contains_rune(&self, needle: &Rune) -> bool {
        self.find_rune(needle, 0).is_some()
    }

    /// Returns whether the sequence begins with `prefix`.
    pub fn starts_with(&self, prefix: &RuneSequence) -> bool {
        self.runes.starts_with(&prefix.runes)
    }

    /// Returns whether the sequence ends with `suffix`.
    pub fn ends_with(&self, suffix: &RuneSequence) -> bool {
        self.runes.ends_with(&suffix.runes)
    }

    /// Returns the primary language summary.
    pub const fn primary_language(&self) -> Language {
        self.primary_language
    }

    /// Replaces the primary language summary.
    pub fn set_primary_language(&mut self, language: Language) {
        self.primary_language = language;
    }

    /// Recomputes the majority-vote language over the current runes without
    /// mutating the sequence.
    pub fn detect_primary_language(&self) -> Language {
        majority_language(self.runes.iter())
    }
}

/// Majority vote over the known per-rune hints; first-seen language wins
/// ties, no known hint at all yields `Unknown`.
fn majority_language<'a>(runes: impl Iterator<Item = &'a Rune>) -> Language {
    let mut counts: Vec<(Language, usize)> = Vec::new();
    for rune in runes {
        let language = rune.language();
        if !language.is_known() {
            continue;
        }
        match counts.iter_mut().find(|(seen, _)| *seen == language) {
            Some((_, count)) => *count += 1,
            None => counts.push((language, 1)),
        }
    }
    let mut best = Language::Unknown;
    let mut best_count = 0;
    for (language, count) in counts {
        if count > best_count {
            best = language;
            best_count = count;
        }
    }
    best
}

impl PartialEq for RuneSequence {
    fn eq(&self, other: &RuneSequence) -> bool {
        self.runes == other.runes
    }
}

impl Eq for RuneSequence {}

impl PartialOrd for RuneSequence {
    fn partial_cmp(&self, other: &RuneSequence) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RuneSequence {
    fn cmp(&self, other: &RuneSequence) -> Ordering {
        self.runes.cmp(&other.runes)
    }
}

impl hash::Hash for RuneSequence {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.runes.hash(state);
    }
}

impl PartialEq<str> for RuneSequence {
    fn eq(&self, other: &str) -> bool {
        self.runes.iter().map(Rune::scalar).eq(other.chars())
    }
}

impl PartialEq<&str> for RuneSequence {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl ops::Index<usize> for RuneSequence {
    type Output = Rune;

    fn index(&self, index: usize) -> &Rune {
        &self.runes[index]
    }
}

impl From<&str> for RuneSequence {
    fn from(text: &str) -> Self {
        text.chars().map(Rune::new).collect()
    }
}

impl From<String> for RuneSequence {
    fn from(text: String) -> Self {
        RuneSequence::from(text.as_str())
    }
}

impl From<Rune> for RuneSequence {
    fn from(rune: Rune) -> Self {
        std::iter::once(rune).collect()
    }
}

impl From<char> for RuneSequence {
    fn from(scalar: char) -> Self {
        RuneSequence::from(Rune::new(scalar))
    }
}

impl FromIterator<Rune> for RuneSequence {
    fn from_iter<T: IntoIterator<Item = Rune>>(iter: T) -> Self {
        Self::from_runes(iter.into_iter().collect())
    }
}

impl FromIterator<char> for RuneSequence {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::from_runes(iter.into_iter().map(Rune::new).collect())
    }
}

impl Extend<Rune> for RuneSequence {
    fn extend<T: IntoIterator<Item = Rune>>(&mut self, iter: T) {
        self.runes.extend(iter);
    }
}

impl IntoIterator for RuneSequence {
    type Item = Rune;
    type IntoIter = std::vec::IntoIter<Rune>;

    fn into_iter(self) -> Self::IntoIter {
        self.runes.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuneSequence {
    type Item = &'a Rune;
    type IntoIter = std::slice::Iter<'a, Rune>;

    fn into_iter(self) -> Self::IntoIter {
        self.runes.iter()
    }
}

impl fmt::Display for RuneSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rune in &self.runes {
            write!(f, "{}", rune.scalar())?;
        }
        Ok(())
    }
}

impl fmt::Debug for RuneSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for rune in &self.runes {
            write!(f, "{}", rune.scalar().escape_debug())?;
        }
        write!(f, "\"")
    }
}
