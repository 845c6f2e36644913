use serde::Deserialize;

/// Spaces module configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpacesConfig {
    /// Maximum length of a space name, in characters.
    pub max_name_length: usize,
}

impl Default for SpacesConfig {
    fn default() -> Self {
        Self {
            max_name_length: 100,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn empty_section_uses_defaults() {
        let cfg: SpacesConfig = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(cfg.max_name_length, 100);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res: Result<SpacesConfig, _> = serde_saphyr::from_str("max_spaces: 3\n");
        assert!(res.is_err());
    }
}
