//! The fluent casting pipeline and the `|` pipe operator.

use crate::sequence::RuneSequence;
use crate::spell::Spell;
use std::fmt;
use std::ops;

/// A typed pipeline container holding one value.
///
/// Each [`cast`](Caster::cast) applies a spell whose declared input type
/// matches the held value's type and returns a new caster holding the
/// spell's output; a mismatched spell is a compile error. Only the latest
/// value is retained, and [`result`](Caster::result) moves it out.
///
/// ```
/// use rune_caster::{spell, Caster, RuneSequence};
///
/// let result = Caster::new(RuneSequence::from("  MiXeD   text "))
///     .cast(spell::whitespace())
///     .cast(spell::lowercase())
///     .result();
/// assert_eq!(result, "mixed text");
/// ```
pub struct Caster<T> {
    value: T,
}

impl<T> Caster<T> {
    /// Wraps a value to start a pipeline.
    pub fn new(value: T) -> Self {
        Caster { value }
    }

    /// Applies a spell and returns a caster holding its output.
    pub fn cast<S>(self, spell: S) -> Caster<S::Output>
    where
        S: Spell<Input = T>,
    {
        Caster {
            value: spell.apply(&self.value),
        }
    }

    /// Borrows the held value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consumes the caster and returns the held value.
    pub fn result(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Caster<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Caster({:?})", self.value)
    }
}

/// Pipe syntax over sequences: `seq | spell1 | spell2` applies the spells
/// left to right, each step yielding the spell's output value.
impl<S> ops::BitOr<S> for RuneSequence
where
    S: Spell<Input = RuneSequence>,
{
    type Output = S::Output;

    fn bitor(self, spell: S) -> S::Output {
        spell.apply(&self)
    }
}

/// Pipe syntax over casters: `caster | spell` is [`Caster::cast`].
impl<T, S> ops::BitOr<S> for Caster<T>
where
    S: Spell<Input = T>,
{
    type Output = Caster<S::Output>;

    fn bitor(self, spell: S) -> Caster<S::Output> {
        self.cast(spell)
    }
}
