use entable_core::{GenerationStrategy, NamingStyle, TypeKind};
use entable_types::{OrderDirection, ValueType};
use syn::spanned::Spanned;
use syn::{Attribute, Error, LitStr, Path, Result};

/// Arguments of `#[entity(...)]` on the struct.
#[derive(Default)]
pub(crate) struct EntityAttributes {
    pub(crate) table: Option<String>,
    pub(crate) style: Option<NamingStyle>,
    pub(crate) kind: Option<TypeKind>,
    pub(crate) mapped: bool,
    pub(crate) extends: Option<Path>,
}

impl EntityAttributes {
    pub(crate) fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("entity")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("table") || meta.path.is_ident("name") {
                    parsed.table = Some(meta.value()?.parse::<LitStr>()?.value());
                } else if meta.path.is_ident("style") {
                    parsed.style = Some(parse_style(&meta.value()?.parse::<LitStr>()?)?);
                } else if meta.path.is_ident("kind") {
                    let lit: LitStr = meta.value()?.parse()?;
                    let kind = TypeKind::parse(&lit.value()).ok_or_else(|| {
                        Error::new(lit.span(), "kind must be one of: record, map, collection")
                    })?;
                    parsed.kind = Some(kind);
                } else if meta.path.is_ident("mapped") {
                    parsed.mapped = true;
                } else if meta.path.is_ident("extends") {
                    parsed.extends = Some(meta.value()?.parse::<Path>()?);
                } else {
                    return Err(meta.error(
                        "Unrecognized entity attribute.\n\
                         Supported attributes:\n\
                         - table = \"name\": explicit table name\n\
                         - style = \"camelhump\": naming style for this type\n\
                         - kind = \"record\" | \"map\" | \"collection\"\n\
                         - mapped: walk into this type when it is extended\n\
                         - extends = Parent: inherit the fields of another Entity",
                    ));
                }
                Ok(())
            })?;
        }
        Ok(parsed)
    }
}

/// Key generation as written on a field.
pub(crate) enum GenerationAttr {
    Sequence(String),
    Generated {
        strategy: GenerationStrategy,
        generator: String,
    },
}

/// Arguments of `#[column(...)]` on a field.
#[derive(Default)]
pub(crate) struct ColumnAttributes {
    pub(crate) name: Option<String>,
    pub(crate) id: bool,
    pub(crate) transient: bool,
    pub(crate) order_by: Option<OrderDirection>,
    pub(crate) value_type: Option<ValueType>,
    pub(crate) generation: Option<GenerationAttr>,
    pub(crate) style: Option<NamingStyle>,
}

impl ColumnAttributes {
    pub(crate) fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("column")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    parsed.name = Some(meta.value()?.parse::<LitStr>()?.value());
                } else if meta.path.is_ident("style") {
                    parsed.style = Some(parse_style(&meta.value()?.parse::<LitStr>()?)?);
                } else if meta.path.is_ident("id") || meta.path.is_ident("primary") {
                    parsed.id = true;
                } else if meta.path.is_ident("transient") {
                    parsed.transient = true;
                } else if meta.path.is_ident("order_by") {
                    let direction = if meta.input.peek(syn::Token![=]) {
                        let lit: LitStr = meta.value()?.parse()?;
                        OrderDirection::parse(&lit.value()).ok_or_else(|| {
                            Error::new(lit.span(), "order_by must be \"asc\" or \"desc\"")
                        })?
                    } else {
                        OrderDirection::Asc
                    };
                    parsed.order_by = Some(direction);
                } else if meta.path.is_ident("value_type") {
                    let lit: LitStr = meta.value()?.parse()?;
                    let value_type = ValueType::parse(&lit.value())
                        .ok_or_else(|| Error::new(lit.span(), "Unknown value type"))?;
                    parsed.value_type = Some(value_type);
                } else if meta.path.is_ident("sequence") {
                    let lit: LitStr = meta.value()?.parse()?;
                    set_generation(&mut parsed, GenerationAttr::Sequence(lit.value()), lit.span())?;
                } else if meta.path.is_ident("uuid") {
                    set_generation(
                        &mut parsed,
                        GenerationAttr::Generated {
                            strategy: GenerationStrategy::Auto,
                            generator: "UUID".to_string(),
                        },
                        meta.path.span(),
                    )?;
                } else if meta.path.is_ident("generated") {
                    let span = meta.path.span();
                    let mut strategy = GenerationStrategy::Auto;
                    let mut generator = String::new();
                    meta.parse_nested_meta(|inner| {
                        if inner.path.is_ident("strategy") {
                            let lit: LitStr = inner.value()?.parse()?;
                            strategy = GenerationStrategy::parse(&lit.value()).ok_or_else(|| {
                                Error::new(
                                    lit.span(),
                                    "strategy must be one of: auto, identity, sequence, table",
                                )
                            })?;
                        } else if inner.path.is_ident("generator") {
                            generator = inner.value()?.parse::<LitStr>()?.value();
                        } else {
                            return Err(inner.error(
                                "generated(...) accepts strategy = \"...\" and generator = \"...\"",
                            ));
                        }
                        Ok(())
                    })?;
                    set_generation(
                        &mut parsed,
                        GenerationAttr::Generated {
                            strategy,
                            generator,
                        },
                        span,
                    )?;
                } else {
                    return Err(meta.error(
                        "Unrecognized column attribute.\n\
                         Supported attributes:\n\
                         - name = \"col\": explicit column name\n\
                         - style = \"normal\": naming style for this column\n\
                         - id: part of the primary key\n\
                         - transient: not mapped\n\
                         - order_by / order_by = \"desc\": default ordering\n\
                         - value_type = \"text\": override the inferred value type\n\
                         - sequence = \"seq_name\": key drawn from a sequence\n\
                         - uuid: client-generated UUID key\n\
                         - generated(strategy = \"identity\", generator = \"MySql\")",
                    ));
                }
                Ok(())
            })?;
        }
        Ok(parsed)
    }
}

fn set_generation(
    parsed: &mut ColumnAttributes,
    generation: GenerationAttr,
    span: proc_macro2::Span,
) -> Result<()> {
    if parsed.generation.is_some() {
        return Err(Error::new(
            span,
            "sequence, uuid and generated(...) are mutually exclusive",
        ));
    }
    parsed.generation = Some(generation);
    Ok(())
}

fn parse_style(lit: &LitStr) -> Result<NamingStyle> {
    NamingStyle::parse(&lit.value()).ok_or_else(|| {
        Error::new(
            lit.span(),
            "Unknown naming style.\n\
             Supported styles: normal, camelhump, uppercase, lowercase, \
             camelhump_and_uppercase, camelhump_and_lowercase",
        )
    })
}
