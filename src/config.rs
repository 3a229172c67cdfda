use crate::strings::Locale;
use crate::theme::ThemePreference;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::Parser))]
#[cfg_attr(not(target_arch = "wasm32"), command(version, about = "Roll a six-sided die"))]
pub struct Config {
    /// Seed the die for a reproducible sequence of rolls.
    #[cfg_attr(not(target_arch = "wasm32"), arg(long))]
    pub seed: Option<u64>,

    /// Language of the UI, e.g. `fr` or `en_US.UTF-8`.
    #[cfg_attr(not(target_arch = "wasm32"), arg(long, env = "LANG"))]
    pub locale: Option<String>,

    #[cfg_attr(
        not(target_arch = "wasm32"),
        arg(long, value_enum, default_value_t = ThemePreference::System)
    )]
    pub theme: ThemePreference,
}

impl Config {
    pub fn locale(&self) -> Locale {
        self.locale
            .as_deref()
            .map(Locale::from_tag)
            .unwrap_or_default()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_flags() {
        let config =
            Config::try_parse_from(["dice-roller", "--seed", "7", "--locale", "fr_FR", "--theme", "dark"])
                .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.locale(), Locale::Fr);
        assert_eq!(config.theme, ThemePreference::Dark);
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Config::try_parse_from(["dice-roller", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn defaults_to_english() {
        let config = Config::default();
        assert_eq!(config.locale(), Locale::En);
        assert_eq!(config.theme, ThemePreference::System);
        assert_eq!(config.seed, None);
    }
}
