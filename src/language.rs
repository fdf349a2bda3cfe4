use std::fmt;

/// A language classification attached to runes and sequences.
///
/// Follows ISO 639-1 codes where applicable. The set is intentionally a
/// closed enumeration; scripts without a detection rule map to `Unknown`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Language {
    /// Unknown or undetected language.
    #[default]
    Unknown,
    /// Korean (ko).
    Korean,
    /// English (en).
    English,
    /// Japanese (ja).
    Japanese,
    /// Chinese (zh).
    Chinese,
    /// Arabic (ar).
    Arabic,
    /// Russian (ru).
    Russian,
    /// Spanish (es).
    Spanish,
    /// French (fr).
    French,
    /// German (de).
    German,
    /// Italian (it).
    Italian,
    /// Portuguese (pt).
    Portuguese,
    /// Dutch (nl).
    Dutch,
    /// Turkish (tr).
    Turkish,
    /// Hebrew (he).
    Hebrew,
    /// Thai (th).
    Thai,
    /// Vietnamese (vi).
    Vietnamese,
    /// Hindi (hi).
    Hindi,
    /// Greek (el).
    Greek,
}

impl Language {
    /// Returns the ISO 639-1 code for this language, or `"unknown"`.
    pub const fn code(self) -> &'static str {
        match self {
            Language::Unknown => "unknown",
            Language::Korean => "ko",
            Language::English => "en",
            Language::Japanese => "ja",
            Language::Chinese => "zh",
            Language::Arabic => "ar",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Dutch => "nl",
            Language::Turkish => "tr",
            Language::Hebrew => "he",
            Language::Thai => "th",
            Language::Vietnamese => "vi",
            Language::Hindi => "hi",
            Language::Greek => "el",
        }
    }

    /// Returns the English name of this language.
    pub const fn name(self) -> &'static str {
        match self {
            Language::Unknown => "Unknown",
            Language::Korean => "Korean",
            Language::English => "English",
            Language::Japanese => "Japanese",
            Language::Chinese => "Chinese",
            Language::Arabic => "Arabic",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Dutch => "Dutch",
            Language::Turkish => "Turkish",
            Language::Hebrew => "Hebrew",
            Language::Thai => "Thai",
            Language::Vietnamese => "Vietnamese",
            Language::Hindi => "Hindi",
            Language::Greek => "Greek",
        }
    }

    /// Returns whether this is a known (detected) language.
    pub const fn is_known(self) -> bool {
        !matches!(self, Language::Unknown)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn test_codes() {
        assert_eq!("ko", Language::Korean.code());
        assert_eq!("en", Language::English.code());
        assert_eq!("unknown", Language::Unknown.code());
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!("Japanese", Language::Japanese.to_string());
        assert_eq!("Unknown", Language::default().to_string());
    }

    #[test]
    fn test_is_known() {
        assert!(Language::Thai.is_known());
        assert!(!Language::Unknown.is_known());
    }
}
