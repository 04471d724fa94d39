//! Share text and the native-share / clipboard fallback.
//!
//! The host platform is reached through the [`SharePlatform`] trait. Sharing
//! first tries the native share sheet; when the platform has none, or the
//! user dismisses it, the text is copied to the clipboard instead.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::format::{format_currency, format_multiplier};
use crate::models::CalculationResult;

use super::Confirmation;

/// Title passed to the native share sheet.
pub const SHARE_TITLE: &str = "¿Cuánto le cuesto a mi jefe?";

/// Everything handed to the platform when sharing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    /// Share sheet title.
    pub title: String,
    /// Message text, ending with the call to action. Does not include the URL.
    pub text: String,
    /// The page URL.
    pub url: String,
}

impl SharePayload {
    /// Builds the payload for a result and the current page URL.
    pub fn new(result: &CalculationResult, url: impl Into<String>) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: build_share_text(result),
            url: url.into(),
        }
    }

    /// The text written to the clipboard: message followed by the URL.
    pub fn clipboard_text(&self) -> String {
        format!("{}{}", self.text, self.url)
    }
}

/// Renders the share message.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::calculation::derive;
/// use employer_cost_engine::export::build_share_text;
///
/// let result = derive("35000", "office").unwrap();
/// assert_eq!(
///     build_share_text(&result),
///     "🤯 Descubrí que cobro 24.378\u{a0}€/año pero le cuesto a mi jefe 54.003\u{a0}€. \
///      Multiplicador del dolor: x2.22\n\nCalcula el tuyo: "
/// );
/// ```
pub fn build_share_text(result: &CalculationResult) -> String {
    format!(
        "🤯 Descubrí que cobro {}/año pero le cuesto a mi jefe {}. Multiplicador del dolor: x{}\n\nCalcula el tuyo: ",
        format_currency(result.estimated_net_salary),
        format_currency(result.total_employer_cost),
        format_multiplier(result.total_employer_cost, result.estimated_net_salary)
    )
}

/// The host platform's share capabilities.
pub trait SharePlatform {
    /// Whether a native share sheet exists.
    fn native_share_available(&self) -> bool;

    /// Opens the native share sheet. An error means it failed or was
    /// dismissed.
    fn native_share(&self, payload: &SharePayload) -> EngineResult<()>;

    /// Writes text to the clipboard.
    fn copy_to_clipboard(&self, text: &str) -> EngineResult<()>;
}

/// How a share request was fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareOutcome {
    /// The native share sheet accepted the payload.
    Shared,
    /// The text went to the clipboard instead.
    Copied,
}

impl ShareOutcome {
    /// The message to show the user, if any. The native sheet is its own
    /// feedback, so only the clipboard path has one.
    pub fn confirmation(self) -> Option<Confirmation> {
        match self {
            ShareOutcome::Shared => None,
            ShareOutcome::Copied => Some(Confirmation {
                title: "¡Copiado al portapapeles!".to_string(),
                description: "Ahora pégalo donde quieras llorar públicamente.".to_string(),
            }),
        }
    }
}

/// Shares the payload, falling back to the clipboard.
///
/// Only a clipboard failure is reported as an error; a failed native share
/// is logged and absorbed by the fallback.
pub fn share<P: SharePlatform + ?Sized>(
    platform: &P,
    payload: &SharePayload,
) -> EngineResult<ShareOutcome> {
    if platform.native_share_available() {
        match platform.native_share(payload) {
            Ok(()) => {
                info!("Shared through native share sheet");
                return Ok(ShareOutcome::Shared);
            }
            Err(err) => {
                warn!(error = %err, "Native share failed, copying to clipboard");
            }
        }
    }

    platform
        .copy_to_clipboard(&payload.clipboard_text())
        .map_err(|err| EngineError::ShareFailed {
            message: format!("clipboard fallback failed: {}", err),
        })?;
    info!("Copied share text to clipboard");
    Ok(ShareOutcome::Copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::derive;
    use crate::format::parse_currency;
    use rust_decimal::{Decimal, RoundingStrategy};
    use std::cell::RefCell;

    const URL: &str = "https://cuantolecuestoamijefe.com/";

    struct FakePlatform {
        available: bool,
        native_ok: bool,
        clipboard_ok: bool,
        shared: RefCell<Vec<SharePayload>>,
        clipboard: RefCell<Vec<String>>,
    }

    impl FakePlatform {
        fn new(available: bool, native_ok: bool, clipboard_ok: bool) -> Self {
            Self {
                available,
                native_ok,
                clipboard_ok,
                shared: RefCell::new(vec![]),
                clipboard: RefCell::new(vec![]),
            }
        }
    }

    impl SharePlatform for FakePlatform {
        fn native_share_available(&self) -> bool {
            self.available
        }

        fn native_share(&self, payload: &SharePayload) -> EngineResult<()> {
            if self.native_ok {
                self.shared.borrow_mut().push(payload.clone());
                Ok(())
            } else {
                Err(EngineError::ShareFailed {
                    message: "AbortError".to_string(),
                })
            }
        }

        fn copy_to_clipboard(&self, text: &str) -> EngineResult<()> {
            if self.clipboard_ok {
                self.clipboard.borrow_mut().push(text.to_string());
                Ok(())
            } else {
                Err(EngineError::ShareFailed {
                    message: "NotAllowedError".to_string(),
                })
            }
        }
    }

    fn payload() -> SharePayload {
        SharePayload::new(&derive("35000", "office").unwrap(), URL)
    }

    #[test]
    fn test_share_text_exact() {
        assert_eq!(
            payload().text,
            "🤯 Descubrí que cobro 24.378\u{a0}€/año pero le cuesto a mi jefe 54.003\u{a0}€. Multiplicador del dolor: x2.22\n\nCalcula el tuyo: "
        );
    }

    #[test]
    fn test_clipboard_text_appends_url() {
        let payload = payload();
        assert!(payload.clipboard_text().ends_with("Calcula el tuyo: https://cuantolecuestoamijefe.com/"));
        assert_eq!(payload.title, SHARE_TITLE);
    }

    #[test]
    fn test_share_text_figures_read_back_as_rounded_result() {
        let result = derive("52345", "transport").unwrap();
        let text = build_share_text(&result);

        let net_text = text
            .split("cobro ")
            .nth(1)
            .and_then(|rest| rest.split("/año").next())
            .unwrap();
        let total_text = text
            .split("mi jefe ")
            .nth(1)
            .and_then(|rest| rest.split(". Multiplicador").next())
            .unwrap();

        let round = |d: Decimal| d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(parse_currency(net_text), Some(round(result.estimated_net_salary)));
        assert_eq!(parse_currency(total_text), Some(round(result.total_employer_cost)));
    }

    #[test]
    fn test_native_share_success() {
        let platform = FakePlatform::new(true, true, true);
        let outcome = share(&platform, &payload()).unwrap();

        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(platform.shared.borrow().len(), 1);
        assert!(platform.clipboard.borrow().is_empty());
        assert!(outcome.confirmation().is_none());
    }

    #[test]
    fn test_native_share_unavailable_copies() {
        let platform = FakePlatform::new(false, true, true);
        let outcome = share(&platform, &payload()).unwrap();

        assert_eq!(outcome, ShareOutcome::Copied);
        assert!(platform.shared.borrow().is_empty());
        assert_eq!(platform.clipboard.borrow()[0], payload().clipboard_text());
    }

    #[test]
    fn test_native_share_rejected_copies() {
        let platform = FakePlatform::new(true, false, true);
        let outcome = share(&platform, &payload()).unwrap();

        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(platform.clipboard.borrow().len(), 1);
        assert_eq!(
            outcome.confirmation().unwrap().title,
            "¡Copiado al portapapeles!"
        );
    }

    #[test]
    fn test_clipboard_failure_is_reported() {
        let platform = FakePlatform::new(false, false, false);
        match share(&platform, &payload()) {
            Err(EngineError::ShareFailed { message }) => {
                assert!(message.contains("clipboard fallback failed"));
            }
            other => panic!("Expected ShareFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_share_outcome_serialization() {
        assert_eq!(
            serde_json::to_string(&ShareOutcome::Copied).unwrap(),
            "\"copied\""
        );
    }
}
