//! Chaining two compatible spells into one.

use crate::spell::Spell;
use std::fmt;

/// Two spells glued into one: the first's output feeds the second.
///
/// The trait bound `B: Spell<Input = A::Output>` makes an incompatible pair
/// a compile error. Each composition node is its own value with a combined
/// name and description; chains of any length are nested pairwise
/// compositions and behave associatively.
///
/// ```
/// use rune_caster::{spell, RuneSequence, Spell};
///
/// let tidy = spell::compose(spell::whitespace(), spell::lowercase());
/// assert_eq!("WhitespaceNormalizer→CaseConverter", tidy.name());
/// assert_eq!(tidy.apply(&RuneSequence::from("  A  B  ")), "a b");
/// ```
pub struct Composition<A, B> {
    first: A,
    second: B,
    name: String,
    description: String,
}

impl<A, B> Composition<A, B>
where
    A: Spell,
    B: Spell<Input = A::Output>,
{
    /// Composes `first` with `second`.
    pub fn new(first: A, second: B) -> Self {
        let name = format!("{}→{}", first.name(), second.name());
        let description = format!("{} → {}", first.description(), second.description());
        Composition {
            first,
            second,
            name,
            description,
        }
    }

    /// Returns the first spell of the composition.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Returns the second spell of the composition.
    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A, B> Spell for Composition<A, B>
where
    A: Spell,
    B: Spell<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn apply(&self, input: &Self::Input) -> Self::Output {
        let intermediate = self.first.apply(input);
        self.second.apply(&intermediate)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

impl<A, B> fmt::Debug for Composition<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Composition({})", self.name)
    }
}

/// Composes two spells; the first's output type must equal the second's
/// input type.
pub fn compose<A, B>(first: A, second: B) -> Composition<A, B>
where
    A: Spell,
    B: Spell<Input = A::Output>,
{
    Composition::new(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::RuneSequence;
    use crate::spell;

    #[test]
    fn test_composed_behavior_and_metadata() {
        let tidy = compose(spell::whitespace(), spell::uppercase());
        assert_eq!(tidy.apply(&RuneSequence::from(" a\tb ")), "A B");
        assert_eq!("WhitespaceNormalizer→CaseConverter", tidy.name());
        assert_eq!(
            "Whitespace normalizer (collapse multiple, trim edges) → Uppercase Conversion",
            tidy.description()
        );
    }

    #[test]
    fn test_composition_is_associative_in_effect() {
        let input = RuneSequence::from("  tHe QUICK  foX ");
        let left = compose(compose(spell::whitespace(), spell::lowercase()), spell::titlecase());
        let right = compose(spell::whitespace(), compose(spell::lowercase(), spell::titlecase()));
        assert_eq!(left.apply(&input), right.apply(&input));
    }

    #[test]
    fn test_composition_across_output_types() {
        // A sequence-to-sequence spell chains into a string-producing one.
        let render = compose(spell::trim(), spell::to_utf8());
        assert_eq!("abc", render.apply(&RuneSequence::from("  abc  ")));
    }

    #[test]
    fn test_composition_on_empty_input() {
        let tidy = compose(spell::whitespace(), spell::lowercase());
        assert!(tidy.apply(&RuneSequence::new()).is_empty());
    }

    #[test]
    fn test_nested_accessors() {
        let tidy = compose(spell::whitespace(), spell::lowercase());
        assert_eq!("WhitespaceNormalizer", tidy.first().name());
        assert_eq!("CaseConverter", tidy.second().name());
    }
}
