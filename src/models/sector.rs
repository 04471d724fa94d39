//! Sector model and related types.
//!
//! This module defines the [`Sector`] enum identifying the industry risk
//! categories a salary can be computed for.

use serde::{Deserialize, Serialize};

/// The industry category used to pick the accident-insurance rate.
///
/// `Office` is the default: it is the category applied whenever a caller
/// supplies an identifier that is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    /// Office work (IT, administration...).
    #[default]
    Office,
    /// Construction.
    Construction,
    /// Transport.
    Transport,
}

impl Sector {
    /// All sectors in selector order.
    pub const ALL: [Sector; 3] = [Sector::Office, Sector::Construction, Sector::Transport];

    /// Returns the identifier used on the wire and in configuration files.
    ///
    /// # Examples
    ///
    /// ```
    /// use employer_cost_engine::models::Sector;
    ///
    /// assert_eq!(Sector::Construction.id(), "construction");
    /// ```
    pub fn id(self) -> &'static str {
        match self {
            Sector::Office => "office",
            Sector::Construction => "construction",
            Sector::Transport => "transport",
        }
    }

    /// Parses an identifier. Matching is exact; `None` for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use employer_cost_engine::models::Sector;
    ///
    /// assert_eq!(Sector::from_id("transport"), Some(Sector::Transport));
    /// assert_eq!(Sector::from_id("mining"), None);
    /// ```
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sector| sector.id() == id)
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
