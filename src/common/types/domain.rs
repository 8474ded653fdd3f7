//! Domain-specific types for the balloon overlay

use serde::{Deserialize, Serialize};

/// Balloon visibility
/// Two states only; there is no transitional or animated state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Not painted (initial state)
    #[default]
    Hidden,
    /// Painted on every pass
    Shown,
}

impl Visibility {
    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown)
    }
}

impl From<bool> for Visibility {
    fn from(visible: bool) -> Self {
        if visible { Self::Shown } else { Self::Hidden }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hidden() {
        assert_eq!(Visibility::default(), Visibility::Hidden);
        assert!(!Visibility::default().is_shown());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Visibility::from(true), Visibility::Shown);
        assert_eq!(Visibility::from(false), Visibility::Hidden);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Visibility::Shown).unwrap(),
            "\"shown\""
        );
        let parsed: Visibility = serde_json::from_str("\"hidden\"").unwrap();
        assert_eq!(parsed, Visibility::Hidden);
    }
}
