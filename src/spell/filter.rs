//! Membership filters over categories, scripts, and punctuation.
//!
//! Each filter is a single stable pass: a rune is kept iff its membership
//! matches the filter's keep/remove mode. Order is preserved and the
//! output inherits the input's primary language.

use crate::rune::Rune;
use crate::sequence::RuneSequence;
use crate::spell::Spell;
use crate::unicode::{Category, Script};

fn filtered<F>(input: &RuneSequence, keep: F) -> RuneSequence
where
    F: Fn(&Rune) -> bool,
{
    let mut result = RuneSequence::with_language(input.primary_language());
    result.reserve(input.len());
    for rune in input {
        if keep(rune) {
            result.push(rune.clone());
        }
    }
    result
}

/// Removes, or keeps only, runes of specific general categories.
#[derive(Clone, Debug)]
pub struct CategoryFilter {
    categories: Vec<Category>,
    remove: bool,
}

impl CategoryFilter {
    /// Creates a filter over `categories`; `remove` selects whether matching
    /// runes are dropped (`true`) or are the only ones kept (`false`).
    pub fn new(categories: Vec<Category>, remove: bool) -> Self {
        CategoryFilter { categories, remove }
    }

    /// Returns the filtered categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns whether matching runes are removed rather than kept.
    pub const fn is_remove_mode(&self) -> bool {
        self.remove
    }
}

impl Spell for CategoryFilter {
    type Input = RuneSequence;
    type Output = RuneSequence;

    fn apply(&self, input: &RuneSequence) -> RuneSequence {
        filtered(input, |rune| {
            self.categories.contains(&rune.category()) != self.remove
        })
    }

    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn description(&self) -> String {
        format!(
            "Category filter ({} {} categories)",
            if self.remove { "remove" } else { "keep only" },
            self.categories.len()
        )
    }
}

/// Removes, or keeps only, runes of specific scripts.
#[derive(Clone, Debug)]
pub struct ScriptFilter {
    scripts: Vec<Script>,
    remove: bool,
}

impl ScriptFilter {
    /// Creates a filter over `scripts`; `remove` selects whether matching
    /// runes are dropped (`true`) or are the only ones kept (`false`).
    pub fn new(scripts: Vec<Script>, remove: bool) -> Self {
        ScriptFilter { scripts, remove }
    }

    /// Returns the filtered scripts.
    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }

    /// Returns whether matching runes are removed rather than kept.
    pub const fn is_remove_mode(&self) -> bool {
        self.remove
    }
}

impl Spell for ScriptFilter {
    type Input = RuneSequence;
    type Output = RuneSequence;

    fn apply(&self, input: &RuneSequence) -> RuneSequence {
        filtered(input, |rune| {
            self.scripts.contains(&rune.script()) != self.remove
        })
    }

    fn name(&self) -> &str {
        "ScriptFilter"
    }

    fn description(&self) -> String {
        format!(
            "Script filter ({} {} scripts)",
            if self.remove { "remove" } else { "keep only" },
            self.scripts.len()
        )
    }
}

/// Removes, or keeps only, punctuation runes.
#[derive(Copy, Clone, Debug)]
pub struct PunctuationFilter {
    remove: bool,
}

impl PunctuationFilter {
    /// Creates a punctuation filter; `remove` selects whether punctuation is
    /// dropped (`true`) or is the only content kept (`false`).
    pub const fn new(remove: bool) -> Self {
        PunctuationFilter { remove }
    }

    /// Returns whether punctuation is removed rather than kept.
    pub const fn is_remove_mode(&self) -> bool {
        self.remove
    }
}

impl Spell for PunctuationFilter {
    type Input = RuneSequence;
    type Output = RuneSequence;

    fn apply(&self, input: &RuneSequence) -> RuneSequence {
        filtered(input, |rune| rune.is_punctuation() != self.remove)
    }

    fn name(&self) -> &str {
        "PunctuationFilter"
    }

    fn description(&self) -> String {
        if self.remove {
            "Remove punctuation".to_string()
        } else {
            "Keep only punctuation".to_string()
        }
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
    fn test_category_filter_remove_and_keep() {
        let input = seq("ab1 2c!");
        let no_digits = CategoryFilter::new(vec![Category::Number], true);
        assert_eq!(no_digits.apply(&input), "ab c!");

        let letters_only = CategoryFilter::new(vec![Category::Letter], false);
        assert_eq!(letters_only.apply(&input), "abc");
    }

    #[test]
    fn test_category_filter_keep_remove_symmetry() {
        let input = seq("ab1 2c!");
        let removed = CategoryFilter::new(vec![Category::Number], true).apply(&input);
        let kept = CategoryFilter::new(vec![Category::Number], false).apply(&input);
        assert_eq!(input.len(), removed.len() + kept.len());
        assert_eq!(kept, "12");
    }

    #[test]
    fn test_script_filter() {
        let input = seq("한글 and латиница");
        let hangul_only = ScriptFilter::new(vec![Script::Hangul], false);
        assert_eq!(hangul_only.apply(&input), "한글");

        let no_cyrillic = ScriptFilter::new(vec![Script::Cyrillic], true);
        assert_eq!(no_cyrillic.apply(&input), "한글 and ");
    }

    #[test]
    fn test_punctuation_filter() {
        let input = seq("wait... what?!");
        assert_eq!(PunctuationFilter::new(true).apply(&input), "wait what");
        assert_eq!(PunctuationFilter::new(false).apply(&input), "...?!");
    }

    #[test]
    fn test_filters_preserve_order_and_language() {
        let input = RuneSequence::from_utf8("한a글b".as_bytes());
        let hangul_only = ScriptFilter::new(vec![Script::Hangul], false);
        let out = hangul_only.apply(&input);
        assert_eq!(out, "한글");
        assert_eq!(Language::Korean, out.primary_language());
    }

    #[test]
    fn test_filters_on_empty_input() {
        let empty = RuneSequence::new();
        assert!(CategoryFilter::new(vec![Category::Letter], true)
            .apply(&empty)
            .is_empty());
        assert!(ScriptFilter::new(vec![Script::Latin], false)
            .apply(&empty)
            .is_empty());
        assert!(PunctuationFilter::new(true).apply(&empty).is_empty());
    }
}
