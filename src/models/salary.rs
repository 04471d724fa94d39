//! Gross salary model and free-text salary input parsing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A gross annual salary that is known to be strictly positive.
///
/// Every calculation takes a `GrossSalary`, so the positivity precondition
/// is checked once, at construction.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::models::GrossSalary;
/// use rust_decimal::Decimal;
///
/// let salary = GrossSalary::new(Decimal::new(35000, 0)).unwrap();
/// assert_eq!(salary.amount(), Decimal::new(35000, 0));
///
/// assert!(GrossSalary::new(Decimal::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct GrossSalary(Decimal);

impl GrossSalary {
    /// Creates a gross salary, rejecting zero and negative amounts.
    pub fn new(amount: Decimal) -> EngineResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(EngineError::InvalidSalary { value: amount });
        }
        Ok(Self(amount))
    }

    /// Returns the salary amount.
    pub fn amount(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for GrossSalary {
    type Error = EngineError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GrossSalary> for Decimal {
    fn from(salary: GrossSalary) -> Self {
        salary.0
    }
}

/// Parses the free-text salary field.
///
/// Every non-digit character is stripped first, so `"35.000 €"` and
/// `"35000"` both read as 35000. Returns `None` when nothing usable is left:
/// no digits, a value of zero, or more digits than a `u64` holds. `None` is
/// the empty state; callers must not compute anything for it.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::models::parse_salary_input;
/// use rust_decimal::Decimal;
///
/// let salary = parse_salary_input("35.000 €").unwrap();
/// assert_eq!(salary.amount(), Decimal::new(35000, 0));
///
/// assert!(parse_salary_input("abc").is_none());
/// assert!(parse_salary_input("0").is_none());
/// ```
pub fn parse_salary_input(raw: &str) -> Option<GrossSalary> {
    let digits = strip_non_digits(raw);
    if digits.is_empty() {
        return None;
    }

    let value: u64 = digits.parse().ok()?;
    GrossSalary::new(Decimal::from(value)).ok()
}

/// Removes every character that is not an ASCII digit.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
