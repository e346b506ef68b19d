use crate::ast::{fmt::Latex, provenance::Provenance};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An integer literal of any size. Literals are never signed; `-2` is a [`Negation`] of `2`.
///
/// [`Negation`]: crate::ast::Negation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Integer {
    /// The decimal digits of the literal, without leading zeros (`"0"` for zero).
    pub value: String,

    /// The parse-tree fragment this literal was built from.
    pub provenance: Option<Provenance>,
}

impl Integer {
    /// Creates an integer literal with no provenance.
    pub fn new(value: u64) -> Self {
        Self { value: value.to_string(), provenance: None }
    }

    /// Creates an integer literal with no provenance from its decimal digits, dropping leading
    /// zeros. Returns [`None`] if `digits` is empty or holds anything but ASCII digits.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }

        let significant = digits.trim_start_matches('0');
        let value = if significant.is_empty() { "0" } else { significant };
        Some(Self { value: value.to_owned(), provenance: None })
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Latex for Integer {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A decimal literal, such as `2.5`.
///
/// The value is finite and non-negative, like every literal the parser reads; `-2.5` is a
/// [`Negation`] of `2.5`. Other values print as text that does not read back as a decimal.
///
/// [`Negation`]: crate::ast::Negation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Decimal {
    /// The value of the literal.
    pub value: f64,

    /// The parse-tree fragment this literal was built from.
    pub provenance: Option<Provenance>,
}

impl Decimal {
    /// Creates a decimal literal with no provenance.
    ///
    /// Debug builds panic if `value` is negative (including `-0.0`), infinite or NaN.
    pub fn new(value: f64) -> Self {
        debug_assert!(
            value.is_finite() && value.is_sign_positive(),
            "decimal literal must be finite and non-negative, got {}",
            value,
        );
        Self { value, provenance: None }
    }
}

/// Always prints a fractional part, so that the output reads back as a decimal.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = self.value.to_string();
        if value.contains('.') || !self.value.is_finite() {
            f.write_str(&value)
        } else {
            write!(f, "{}.0", value)
        }
    }
}

impl Latex for Decimal {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A variable, such as `x`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    /// The name of the variable.
    pub name: String,

    /// The parse-tree fragment this variable was built from.
    pub provenance: Option<Provenance>,
}

impl Variable {
    /// Creates a variable with no provenance.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), provenance: None }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Latex for Variable {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn decimal_keeps_fraction() {
        assert_eq!(Decimal::new(2.0).to_string(), "2.0");
        assert_eq!(Decimal::new(2.5).to_string(), "2.5");
        assert_eq!(Decimal::new(0.1).to_string(), "0.1");
        assert_eq!(Decimal::new(1e20).to_string(), "100000000000000000000.0");
    }

    #[test]
    fn literal_latex() {
        assert_eq!(Integer::new(42).as_display().to_string(), "42");
        assert_eq!(Variable::new("x_1").as_display().to_string(), "x_1");
    }

    #[test]
    fn integer_digits() {
        let big = Integer::from_digits("18446744073709551616").unwrap();
        assert_eq!(big.to_string(), "18446744073709551616");

        assert_eq!(Integer::from_digits("007").unwrap(), Integer::new(7));
        assert_eq!(Integer::from_digits("000").unwrap().to_string(), "0");
        assert!(Integer::from_digits("").is_none());
        assert!(Integer::from_digits("12a").is_none());
        assert!(Integer::from_digits("-3").is_none());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "finite and non-negative")]
    fn negative_decimal_rejected() {
        Decimal::new(-1.5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "finite and non-negative")]
    fn nan_decimal_rejected() {
        Decimal::new(f64::NAN);
    }
}
