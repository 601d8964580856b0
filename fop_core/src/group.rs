//! Taxpayer groups of the simplified tax system.

use std::fmt;

/// The single tax group of a taxpayer.
///
/// Groups 1 and 2 pay a fixed monthly amount up to a maximum, group 3 pays a percentage of income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaxGroup {
    #[default]
    One,
    Two,
    Three,
}

impl TaxGroup {
    /// Parse a group from user input.
    ///
    /// Missing or non-numeric input falls back to group 1, numbers outside `1..=3` are clamped to group 3.
    /// Surrounding whitespace makes the input non-numeric.
    pub fn from_param(param: Option<&str>) -> Self {
        let Some(number) = param.and_then(|param| param.parse::<i64>().ok()) else {
            return TaxGroup::One;
        };
        match number {
            1 => TaxGroup::One,
            2 => TaxGroup::Two,
            _ => TaxGroup::Three,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            TaxGroup::One => 1,
            TaxGroup::Two => 2,
            TaxGroup::Three => 3,
        }
    }
}

impl fmt::Display for TaxGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use crate::group::TaxGroup;

    #[test]
    fn test_from_param() {
        assert_eq!(TaxGroup::from_param(None), TaxGroup::One);
        assert_eq!(TaxGroup::from_param(Some("")), TaxGroup::One);
        assert_eq!(TaxGroup::from_param(Some("abc")), TaxGroup::One);
        assert_eq!(TaxGroup::from_param(Some("1")), TaxGroup::One);
        assert_eq!(TaxGroup::from_param(Some("2")), TaxGroup::Two);
        assert_eq!(TaxGroup::from_param(Some("3")), TaxGroup::Three);
        assert_eq!(TaxGroup::from_param(Some(" 2 ")), TaxGroup::One);
        assert_eq!(TaxGroup::from_param(Some("2 ")), TaxGroup::One);
        assert_eq!(TaxGroup::from_param(Some("+2")), TaxGroup::Two);
    }

    #[test]
    fn test_from_param_out_of_range() {
        assert_eq!(TaxGroup::from_param(Some("5")), TaxGroup::Three);
        assert_eq!(TaxGroup::from_param(Some("0")), TaxGroup::Three);
        assert_eq!(TaxGroup::from_param(Some("-1")), TaxGroup::Three);
        assert_eq!(TaxGroup::from_param(Some("99999999999")), TaxGroup::Three);
    }

    #[test]
    fn test_number() {
        assert_eq!(TaxGroup::One.number(), 1);
        assert_eq!(TaxGroup::Two.number(), 2);
        assert_eq!(TaxGroup::Three.to_string(), "3");
    }
}
