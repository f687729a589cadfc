//! Semantic value type tags for mapped columns
//!
//! Provides the classification used by column descriptors and by the derive
//! macro when it inspects a field's Rust type.

/// Categorizes the value carried by a mapped column.
///
/// This is the single source of truth for type detection: the derive macro
/// calls [`ValueType::from_type_string`] on the field's type tokens and emits
/// the matching variant.
///
/// # Examples
///
/// ```
/// use entable_types::ValueType;
///
/// assert_eq!(ValueType::from_type_string("i64"), ValueType::Integer);
/// assert_eq!(ValueType::from_type_string("Option<String>"), ValueType::Text);
/// assert_eq!(ValueType::from_type_string("uuid::Uuid"), ValueType::Uuid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueType {
    /// `i8` through `i64`, `u8` through `u32`, `isize`, `usize`
    Integer,
    /// `u64`, `i128`, `u128`
    BigInteger,
    /// `f32`, `f64`
    Real,
    /// `rust_decimal::Decimal`, `BigDecimal`
    Decimal,
    /// `bool`
    Boolean,
    /// `String`, `&str`, `char`, `CompactString`
    Text,
    /// `Vec<u8>`, `[u8; N]`, `Bytes`
    Bytes,
    /// `NaiveDate`, `time::Date`
    Date,
    /// `NaiveTime`, `time::Time`
    Time,
    /// `NaiveDateTime`, `DateTime<Tz>`, `OffsetDateTime`, `PrimitiveDateTime`, `SystemTime`
    Timestamp,
    /// `uuid::Uuid`
    Uuid,
    /// `serde_json::Value`
    Json,
    /// Anything else; the column is still mapped, only the tag is unknown
    #[default]
    Other,
}

impl ValueType {
    /// Detect the value type from a type string representation.
    ///
    /// `Option<T>` is unwrapped. Order matters: more specific types are
    /// checked before more general ones.
    #[must_use]
    pub fn from_type_string(type_str: &str) -> Self {
        let type_str = type_str.replace(' ', "");

        if let Some(inner) = type_str
            .strip_prefix("Option<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return Self::from_type_string(inner);
        }

        if type_str.contains("[u8;") || type_str.contains("Vec<u8>") || type_str.ends_with("Bytes")
        {
            return ValueType::Bytes;
        }
        if type_str.contains("Uuid") {
            return ValueType::Uuid;
        }
        if type_str.contains("serde_json::Value") || type_str == "Value" {
            return ValueType::Json;
        }
        if type_str.contains("Decimal") {
            return ValueType::Decimal;
        }
        if type_str.contains("NaiveDateTime")
            || type_str.contains("DateTime<")
            || type_str.contains("OffsetDateTime")
            || type_str.contains("PrimitiveDateTime")
            || type_str.contains("SystemTime")
        {
            return ValueType::Timestamp;
        }
        if type_str.contains("NaiveDate") || type_str.ends_with("time::Date") {
            return ValueType::Date;
        }
        if type_str.contains("NaiveTime") || type_str.ends_with("time::Time") {
            return ValueType::Time;
        }
        if type_str.contains("String") || type_str == "&str" || type_str == "&'staticstr" {
            return ValueType::Text;
        }

        match type_str.as_str() {
            "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" | "isize" | "usize" => {
                ValueType::Integer
            }
            "u64" | "i128" | "u128" => ValueType::BigInteger,
            "f32" | "f64" => ValueType::Real,
            "bool" => ValueType::Boolean,
            "char" => ValueType::Text,
            _ => ValueType::Other,
        }
    }

    /// Variant name, as written in generated code.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            ValueType::Integer => "Integer",
            ValueType::BigInteger => "BigInteger",
            ValueType::Real => "Real",
            ValueType::Decimal => "Decimal",
            ValueType::Boolean => "Boolean",
            ValueType::Text => "Text",
            ValueType::Bytes => "Bytes",
            ValueType::Date => "Date",
            ValueType::Time => "Time",
            ValueType::Timestamp => "Timestamp",
            ValueType::Uuid => "Uuid",
            ValueType::Json => "Json",
            ValueType::Other => "Other",
        }
    }

    /// Parse a variant name as accepted by `#[column(value_type = "...")]`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        const ALL: [ValueType; 13] = [
            ValueType::Integer,
            ValueType::BigInteger,
            ValueType::Real,
            ValueType::Decimal,
            ValueType::Boolean,
            ValueType::Text,
            ValueType::Bytes,
            ValueType::Date,
            ValueType::Time,
            ValueType::Timestamp,
            ValueType::Uuid,
            ValueType::Json,
            ValueType::Other,
        ];
        let normalized: String = s.chars().filter(|c| *c != '_').collect();
        ALL.into_iter()
            .find(|ty| ty.variant_name().eq_ignore_ascii_case(&normalized))
    }
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.variant_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_detection() {
        assert_eq!(ValueType::from_type_string("i32"), ValueType::Integer);
        assert_eq!(ValueType::from_type_string("u64"), ValueType::BigInteger);
        assert_eq!(ValueType::from_type_string("f64"), ValueType::Real);
        assert_eq!(ValueType::from_type_string("bool"), ValueType::Boolean);
        assert_eq!(ValueType::from_type_string("char"), ValueType::Text);
    }

    #[test]
    fn test_wrapped_and_library_types() {
        assert_eq!(ValueType::from_type_string("Option < i64 >"), ValueType::Integer);
        assert_eq!(ValueType::from_type_string("Vec<u8>"), ValueType::Bytes);
        assert_eq!(ValueType::from_type_string("[u8; 16]"), ValueType::Bytes);
        assert_eq!(
            ValueType::from_type_string("chrono::NaiveDateTime"),
            ValueType::Timestamp
        );
        assert_eq!(ValueType::from_type_string("NaiveDate"), ValueType::Date);
        assert_eq!(ValueType::from_type_string("time::Time"), ValueType::Time);
        assert_eq!(
            ValueType::from_type_string("DateTime<Utc>"),
            ValueType::Timestamp
        );
        assert_eq!(ValueType::from_type_string("Uuid"), ValueType::Uuid);
        assert_eq!(
            ValueType::from_type_string("rust_decimal::Decimal"),
            ValueType::Decimal
        );
        assert_eq!(ValueType::from_type_string("Address"), ValueType::Other);
    }

    #[test]
    fn test_parse_variant_name() {
        assert_eq!(ValueType::parse("text"), Some(ValueType::Text));
        assert_eq!(ValueType::parse("big_integer"), Some(ValueType::BigInteger));
        assert_eq!(ValueType::parse("Timestamp"), Some(ValueType::Timestamp));
        assert_eq!(ValueType::parse("varchar"), None);
    }
}
