//! Display formatting for calculation results.
//!
//! All on-screen and exported figures go through these functions: currency
//! in `es-ES` euros with no decimals, fixed-point multipliers, percentages
//! and `es-ES` short dates.

mod currency;
mod date;
mod numbers;

pub use currency::{
    CURRENCY_SPACING, CURRENCY_SYMBOL, GROUP_SEPARATOR, format_currency, format_salary_input,
    parse_currency,
};
pub use date::format_date_es;
pub use numbers::{format_fixed, format_multiplier, format_percentage};
