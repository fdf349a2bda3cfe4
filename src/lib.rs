#![deny(missing_docs, missing_debug_implementations)]
//! Unicode-aware text processing: runes, sequences, and spell pipelines.
//!
//! The [`Rune`] type wraps one Unicode scalar value together with linguistic
//! metadata (a language hint auto-detected from its block, an optional
//! phonetic annotation). [`RuneSequence`] is an owned, ordered collection of
//! runes with UTF-8/16/32 conversion, searching and slicing, and a derived
//! primary-language summary.
//!
//! Transformations are [`Spell`]s: named, pure functions with declared input
//! and output types. Built-ins cover whitespace normalization, case
//! conversion, Unicode normalization, trimming, category/script/punctuation
//! filtering, language detection, grapheme-to-phoneme annotation, and
//! tokenization; [`spell::compose()`] chains compatible spells and the
//! [`Caster`] pipeline (or the `|` operator) applies them fluently:
//!
//! ```
//! use rune_caster::{spell, RuneSequence};
//!
//! let input = RuneSequence::from("  Hello   WORLD!   This  is  a\tTEST\n\n  ");
//! let result = input | spell::whitespace() | spell::lowercase() | spell::unicode_nfc();
//! assert_eq!(result, "hello world! this is a test");
//! ```
//!
//! # Decoding strictness
//!
//! Sequence-level decoding ([`RuneSequence::from_utf8`] and friends) is
//! lossy: malformed characters are skipped and decoding continues. The
//! single-character factories on [`Rune`] are strict and return
//! [`Error::InvalidEncoding`] instead. Bulk text processing stays resilient
//! while explicit character construction stays checked.

pub(crate) mod encoding;

pub(crate) mod error;

pub(crate) mod language;

pub(crate) mod rune;

pub(crate) mod sequence;

pub(crate) mod caster;

pub mod spell;

pub mod unicode;

pub use caster::Caster;

pub use error::{Encoding, Error, Result};

pub use language::Language;

pub use rune::Rune;

pub use sequence::RuneSequence;

pub use spell::Spell;

pub use unicode::{Category, NormalizationForm, Script};
