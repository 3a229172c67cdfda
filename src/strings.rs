/// UI languages with a translated string table. Everything else shows English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Parse a POSIX or BCP 47 tag such as `fr_FR.UTF-8` or `en-US`.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(|c| c == '_' || c == '-' || c == '.' || c == '@')
            .next()
            .unwrap_or_default();
        match language.to_ascii_lowercase().as_str() {
            "fr" => Locale::Fr,
            _ => Locale::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    locale: Locale,
}

impl Strings {
    pub fn for_locale(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn app_name(&self) -> &'static str {
        match self.locale {
            Locale::En => "Dice Roller",
            Locale::Fr => "Lanceur de dé",
        }
    }

    pub fn roll(&self) -> &'static str {
        match self.locale {
            Locale::En => "Roll",
            Locale::Fr => "Lancer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_tags() {
        assert_eq!(Locale::from_tag("fr"), Locale::Fr);
        assert_eq!(Locale::from_tag("fr_FR.UTF-8"), Locale::Fr);
        assert_eq!(Locale::from_tag("FR-ca"), Locale::Fr);
        assert_eq!(Locale::from_tag("en_GB"), Locale::En);
        assert_eq!(Locale::from_tag("C"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
        assert_eq!(Locale::from_tag("de_DE@euro"), Locale::En);
    }

    #[test]
    fn roll_label_is_translated() {
        assert_eq!(Strings::for_locale(Locale::En).roll(), "Roll");
        assert_eq!(Strings::for_locale(Locale::Fr).roll(), "Lancer");
        assert_eq!(Strings::for_locale(Locale::default()).app_name(), "Dice Roller");
    }
}
