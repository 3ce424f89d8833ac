// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Default minimum message length.
pub const DEFAULT_MIN_LENGTH: usize = 1;

/// Sentinel for "no maximum length". Capped at `i64::MAX` so it survives a
/// round trip through TOML integers; `usize::MAX` where `usize` is narrower.
pub const UNLIMITED_LENGTH: usize = if usize::BITS >= i64::BITS {
    i64::MAX as usize
} else {
    usize::MAX
};

/// Default pattern, matching any message.
pub const DEFAULT_PATTERN: &str = ".*";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;

    #[test]
    fn test_default_config() {
        let config = LintConfig::default();
        assert_eq!(config.min_length, DEFAULT_MIN_LENGTH);
        assert_eq!(config.max_length, UNLIMITED_LENGTH);
        assert_eq!(config.pattern, DEFAULT_PATTERN);
    }

    #[test]
    fn test_unlimited_length_fits_toml_integer() {
        assert!(UNLIMITED_LENGTH as u128 <= i64::MAX as u128);
        assert!(UNLIMITED_LENGTH as u128 >= u32::MAX as u128);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_unlimited_length_is_i64_max_on_64_bit() {
        assert_eq!(UNLIMITED_LENGTH as u64, i64::MAX as u64);
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let toml_str = LintConfig::default().to_toml().unwrap();
        let parsed: LintConfig = toml::from_str(&toml_str).expect("default config should parse");
        assert_eq!(parsed, LintConfig::default());
    }
}
