/// Sort direction for ORDER BY clauses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    /// Parse a direction keyword (case-insensitive). An empty string means `ASC`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("asc") {
            Some(OrderDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Some(OrderDirection::Desc)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }

    /// Variant name, as written in generated code.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "Asc",
            OrderDirection::Desc => "Desc",
        }
    }
}

impl core::fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_parse() {
        assert_eq!(OrderDirection::parse(""), Some(OrderDirection::Asc));
        assert_eq!(OrderDirection::parse("asc"), Some(OrderDirection::Asc));
        assert_eq!(OrderDirection::parse(" DESC "), Some(OrderDirection::Desc));
        assert_eq!(OrderDirection::parse("descending"), None);
    }
}
