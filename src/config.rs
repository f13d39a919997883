//! Configuration (spec §4.14/§6), mirroring the teacher crate's
//! `FecConfig`: flags the caller can set in code, or optionally load from a
//! TOML fragment.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordWidth {
    Word32,
    Word64,
}

impl Default for WordWidth {
    fn default() -> Self {
        #[cfg(feature = "word64")]
        {
            WordWidth::Word64
        }
        #[cfg(not(feature = "word64"))]
        {
            WordWidth::Word32
        }
    }
}

/// Configuration flags for a [`crate::Raptor`] instance (spec §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaptorConfig {
    pub use_prepass: bool,
    pub use_optimal_esis: bool,
    pub word_width: WordWidth,
}

impl Default for RaptorConfig {
    fn default() -> Self {
        Self {
            use_prepass: true,
            use_optimal_esis: false,
            word_width: WordWidth::default(),
        }
    }
}

impl RaptorConfig {
    /// Loads flags from a `[raptor]` TOML table, falling back to defaults
    /// for any field the TOML omits (mirrors `FecConfig::from_toml`'s
    /// `unwrap_or` pattern).
    pub fn from_toml(s: &str) -> Result<Self, Box<dyn std::error::Error>> {
        #[derive(Deserialize, Default)]
        struct Root {
            raptor: Option<Raptor>,
        }

        #[derive(Deserialize, Default)]
        struct Raptor {
            use_prepass: Option<bool>,
            use_optimal_esis: Option<bool>,
        }

        let raw: Root = toml::from_str(s)?;
        let section = raw.raptor.unwrap_or_default();
        let defaults = RaptorConfig::default();
        Ok(RaptorConfig {
            use_prepass: section.use_prepass.unwrap_or(defaults.use_prepass),
            use_optimal_esis: section.use_optimal_esis.unwrap_or(defaults.use_optimal_esis),
            word_width: defaults.word_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let c = RaptorConfig::default();
        assert!(c.use_prepass);
        assert!(!c.use_optimal_esis);
    }

    #[test]
    fn from_toml_overrides_only_present_fields() {
        let c = RaptorConfig::from_toml("[raptor]\nuse_prepass = false\n").unwrap();
        assert!(!c.use_prepass);
        assert!(!c.use_optimal_esis);
    }

    #[test]
    fn from_toml_tolerates_missing_section() {
        let c = RaptorConfig::from_toml("").unwrap();
        assert_eq!(c, RaptorConfig::default());
    }
}
