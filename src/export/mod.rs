//! Export and share artifacts generated from a calculation result.
//!
//! Both are plain text built synchronously from a [`CalculationResult`];
//! only handing them to the platform (download, share sheet, clipboard)
//! touches the outside world, and that goes through [`SharePlatform`].
//!
//! [`CalculationResult`]: crate::models::CalculationResult

mod argument_sheet;
mod share;

use serde::{Deserialize, Serialize};

pub use argument_sheet::{
    ArgumentSheet, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME, build_argument_sheet,
};
pub use share::{SHARE_TITLE, SharePayload, SharePlatform, ShareOutcome, build_share_text, share};

/// A short confirmation shown after an export or share action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    /// Headline.
    pub title: String,
    /// Secondary line.
    pub description: String,
}
