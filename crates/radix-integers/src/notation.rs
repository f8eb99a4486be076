//! Output notations.

/// The notation used when rendering numbers and expressions.
///
/// The notations differ in where operators and signs go, never in the
/// digits written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Operators between operands, e.g. `(2+3)`; a number's sign is a
    /// leading `-`.
    #[default]
    Infix,
    /// Polish notation, e.g. `+ 2 3`; `-2` is written `- 0 2`.
    Prefix,
    /// Reverse polish notation, e.g. `2 3 +`; `-2` is written `0 2 -`.
    Postfix,
}
