//! Naming styles: structural names to SQL identifiers.

use std::borrow::Cow;

use heck::{ToShoutySnakeCase, ToSnakeCase};

/// Deterministic transform from a type or field name to a table or column name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStyle {
    /// Name used verbatim
    Normal,
    /// `userName` -> `user_name`
    #[default]
    Camelhump,
    /// `userName` -> `USERNAME`
    Uppercase,
    /// `userName` -> `username`
    Lowercase,
    /// `userName` -> `USER_NAME`
    CamelhumpAndUppercase,
    /// `userName` -> `user_name`
    CamelhumpAndLowercase,
}

impl NamingStyle {
    /// Apply the style to a raw structural name.
    ///
    /// # Examples
    ///
    /// ```
    /// use entable_core::NamingStyle;
    ///
    /// assert_eq!(NamingStyle::Camelhump.apply("UserInfo"), "user_info");
    /// assert_eq!(NamingStyle::CamelhumpAndUppercase.apply("userName"), "USER_NAME");
    /// assert_eq!(NamingStyle::Normal.apply("userName"), "userName");
    /// ```
    #[must_use]
    pub fn apply<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self {
            NamingStyle::Normal => Cow::Borrowed(raw),
            NamingStyle::Camelhump | NamingStyle::CamelhumpAndLowercase => {
                Cow::Owned(raw.to_snake_case())
            }
            NamingStyle::CamelhumpAndUppercase => Cow::Owned(raw.to_shouty_snake_case()),
            NamingStyle::Uppercase => Cow::Owned(raw.to_uppercase()),
            NamingStyle::Lowercase => Cow::Owned(raw.to_lowercase()),
        }
    }

    /// Parse a style name (case-insensitive, `_`/`-` separators optional).
    ///
    /// Accepts `camelhumpAndUppercase` as well as `camelhump_and_uppercase`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "normal" => Some(NamingStyle::Normal),
            "camelhump" | "snakecase" | "snake" => Some(NamingStyle::Camelhump),
            "uppercase" => Some(NamingStyle::Uppercase),
            "lowercase" => Some(NamingStyle::Lowercase),
            "camelhumpanduppercase" => Some(NamingStyle::CamelhumpAndUppercase),
            "camelhumpandlowercase" => Some(NamingStyle::CamelhumpAndLowercase),
            _ => None,
        }
    }

    /// Variant name, as written in generated code.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            NamingStyle::Normal => "Normal",
            NamingStyle::Camelhump => "Camelhump",
            NamingStyle::Uppercase => "Uppercase",
            NamingStyle::Lowercase => "Lowercase",
            NamingStyle::CamelhumpAndUppercase => "CamelhumpAndUppercase",
            NamingStyle::CamelhumpAndLowercase => "CamelhumpAndLowercase",
        }
    }
}

/// Resolve a table or column name.
///
/// A non-empty explicit name wins and is returned verbatim; otherwise the
/// style transform is applied to the raw structural name.
#[must_use]
pub fn resolve_name<'a>(raw: &'a str, explicit: Option<&'a str>, style: NamingStyle) -> Cow<'a, str> {
    match explicit {
        Some(name) if !name.is_empty() => Cow::Borrowed(name),
        _ => style.apply(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles() {
        assert_eq!(NamingStyle::Camelhump.apply("userName"), "user_name");
        assert_eq!(NamingStyle::CamelhumpAndLowercase.apply("UserInfo"), "user_info");
        assert_eq!(NamingStyle::CamelhumpAndUppercase.apply("UserInfo"), "USER_INFO");
        assert_eq!(NamingStyle::Uppercase.apply("userName"), "USERNAME");
        assert_eq!(NamingStyle::Lowercase.apply("UserName"), "username");
        assert_eq!(NamingStyle::Normal.apply("UserName"), "UserName");
        assert_eq!(NamingStyle::Camelhump.apply("user_name"), "user_name");
    }

    #[test]
    fn test_explicit_name_skips_style() {
        assert_eq!(
            resolve_name("userName", Some("USR_NM"), NamingStyle::Camelhump),
            "USR_NM"
        );
        assert_eq!(
            resolve_name("userName", Some(""), NamingStyle::Camelhump),
            "user_name"
        );
        assert_eq!(resolve_name("userName", None, NamingStyle::Normal), "userName");
    }

    #[test]
    fn test_parse_style() {
        assert_eq!(
            NamingStyle::parse("camelhumpAndUppercase"),
            Some(NamingStyle::CamelhumpAndUppercase)
        );
        assert_eq!(
            NamingStyle::parse("camelhump_and_lowercase"),
            Some(NamingStyle::CamelhumpAndLowercase)
        );
        assert_eq!(NamingStyle::parse("NORMAL"), Some(NamingStyle::Normal));
        assert_eq!(NamingStyle::parse("kebab"), None);
    }
}
