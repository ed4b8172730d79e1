use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Theme;

/// Identifies one of the two bundled presets.
///
/// The lowercase string form is what gets persisted, so renaming a variant
/// is a breaking change for saved preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariantId {
    #[default]
    Corporate,
    Social,
}

impl ThemeVariantId {
    pub const ALL: [ThemeVariantId; 2] = [ThemeVariantId::Corporate, ThemeVariantId::Social];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Corporate => "corporate",
            Self::Social => "social",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Corporate => Self::Social,
            Self::Social => Self::Corporate,
        }
    }

    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Corporate => Theme::corporate(),
            Self::Social => Theme::social(),
        }
    }
}

impl fmt::Display for ThemeVariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme variant \"{0}\"")]
pub struct UnknownThemeVariant(pub String);

impl FromStr for ThemeVariantId {
    type Err = UnknownThemeVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownThemeVariant(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_form_round_trips() {
        for variant in ThemeVariantId::ALL {
            assert_eq!(variant.as_str().parse::<ThemeVariantId>(), Ok(variant));
            assert_eq!(variant.to_string(), variant.as_str());
        }
    }

    #[test]
    fn parsing_is_lenient_about_case_and_whitespace() {
        assert_eq!(" Social\n".parse(), Ok(ThemeVariantId::Social));
        assert_eq!("CORPORATE".parse(), Ok(ThemeVariantId::Corporate));
    }

    #[test]
    fn parsing_rejects_unknown_values() {
        assert_eq!(
            "dark".parse::<ThemeVariantId>(),
            Err(UnknownThemeVariant("dark".into()))
        );
        assert!("".parse::<ThemeVariantId>().is_err());
    }

    #[test]
    fn toggled_is_an_involution() {
        for variant in ThemeVariantId::ALL {
            assert_ne!(variant.toggled(), variant);
            assert_eq!(variant.toggled().toggled(), variant);
        }
    }

    #[test]
    fn default_is_corporate() {
        assert_eq!(ThemeVariantId::default(), ThemeVariantId::Corporate);
    }

    #[test]
    fn each_variant_maps_to_its_preset() {
        assert_eq!(ThemeVariantId::Corporate.theme().name, Theme::corporate().name);
        assert_eq!(ThemeVariantId::Social.theme().name, Theme::social().name);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&ThemeVariantId::Social).unwrap(),
            "\"social\""
        );
    }
}
