use common::*;
use entable::error::EntableError;
use entable::prelude::*;
use entable::{KeyGeneration, TypeKind, ValueType};

mod common;

fn registry() -> EntityRegistry {
    EntityRegistry::new(MapperConfig::default())
}

#[test]
fn resolves_user_mapping() {
    let registry = registry();
    let table = registry.resolve::<User>().unwrap();

    assert_eq!(table.entity(), "User");
    assert_eq!(table.name(), "sys_user");
    assert_eq!(table.columns().len(), 3);
    assert_eq!(table.all_columns(), "id,user_name,status");
    assert_eq!(table.select_columns(), "id,user_name AS name,status");
    assert_eq!(table.primary_key_where(), "id = ?");
    assert_eq!(table.order_by_clause(), "status DESC");

    let id = table.column_for("id").unwrap();
    assert!(id.is_primary_key());
    assert_eq!(id.value_type(), ValueType::Integer);
    assert_eq!(id.key_generation(), &KeyGeneration::JdbcIdentity);
    assert!(table.column_for("scratch").is_none());
}

#[test]
fn jdbc_identity_sets_generated_keys() {
    let registry = registry();
    registry.resolve::<User>().unwrap();

    let keys = registry.generated_keys::<User>().unwrap().unwrap();
    assert_eq!(keys.property, "id");
    assert_eq!(keys.column, "id");

    let table = registry.table::<User>().unwrap();
    assert_eq!(table.key_properties(), Some("id"));
    assert_eq!(table.key_columns(), Some("id"));
}

#[test]
fn type_style_overrides_default() {
    let registry = registry();
    let table = registry.resolve::<UserInfo>().unwrap();

    assert_eq!(table.name(), "USER_INFO");
    assert_eq!(table.all_columns(), "ID,USER_NAME,`DESC`");
    // Quoted and case-only differences select without an alias.
    assert_eq!(table.select_columns(), "ID,USER_NAME AS userName,`DESC`");
    assert_eq!(table.primary_key_where(), "ID = ?");
}

#[test]
fn field_style_overrides_type_style() {
    let registry = registry();
    let table = registry.resolve::<LoginEvent>().unwrap();

    assert_eq!(table.name(), "LOGIN_EVENT");
    // An explicit column name still wins over any style.
    assert_eq!(table.all_columns(), "EVENT_ID,remoteAddr,agent");
    assert_eq!(table.primary_key_where(), "EVENT_ID = ?");
}

#[test]
fn configured_style_applies_without_type_style() {
    let registry = EntityRegistry::new(MapperConfig::default().with_style(NamingStyle::Uppercase));
    let table = registry.resolve::<Membership>().unwrap();

    assert_eq!(table.name(), "MEMBERSHIP");
    assert_eq!(table.all_columns(), "USER_ID,GROUP_ID,ROLE");
}

#[test]
fn inherited_fields_follow_own_fields() {
    let registry = registry();
    let table = registry.resolve::<Article>().unwrap();

    assert_eq!(table.name(), "article");
    assert_eq!(table.all_columns(), "id,title,created_at");
    assert_eq!(table.order_by_clause(), "created_at ASC");
}

#[test]
fn container_base_ends_inheritance() {
    let registry = registry();

    let document = registry.resolve::<Document>().unwrap();
    assert_eq!(document.all_columns(), "id");

    // A container base marked as mapped is still walked.
    let profile = registry.resolve::<Profile>().unwrap();
    assert_eq!(profile.all_columns(), "id,theme");
}

#[test]
fn map_kind_never_aliases() {
    let registry = registry();
    let table = registry.resolve::<KvRow>().unwrap();

    assert_eq!(table.name(), "kv_row");
    assert_eq!(table.kind(), TypeKind::Map);
    assert_eq!(table.select_columns(), "row_key,row_value");
    assert_eq!(table.primary_key_where(), "row_key = ?");
}

#[test]
fn composite_primary_key() {
    let registry = registry();
    let table = registry.resolve::<Membership>().unwrap();

    assert_eq!(table.primary_key_where(), "user_id = ? AND group_id = ?");
    let keys: Vec<_> = table.primary_key_columns().map(|c| c.property()).collect();
    assert_eq!(keys, ["user_id", "group_id"]);
    assert_eq!(table.order_by_clause(), "");
}

#[test]
fn every_column_is_key_without_declared_id() {
    let registry = registry();
    let table = registry.resolve::<AuditEntry>().unwrap();

    assert_eq!(table.primary_key_columns().len(), 2);
    assert_eq!(table.primary_key_where(), "actor = ? AND action = ?");
    assert!(table.columns().iter().all(|c| !c.is_primary_key()));
}

#[test]
fn key_generation_policies() {
    let registry = registry();

    let counter = registry.resolve::<Counter>().unwrap();
    assert_eq!(
        counter.column_for("id").unwrap().key_generation(),
        &KeyGeneration::DatabaseIdentity {
            generator: Some("SELECT LAST_INSERT_ID()".into())
        }
    );
    assert_eq!(
        counter.column_for("hits").unwrap().value_type(),
        ValueType::BigInteger
    );
    assert!(registry.generated_keys::<Counter>().unwrap().is_none());

    let invoice = registry.resolve::<Invoice>().unwrap();
    assert_eq!(
        invoice.column_for("id").unwrap().key_generation(),
        &KeyGeneration::Sequence {
            name: "seq_invoice".into()
        }
    );

    let session = registry.resolve::<Session>().unwrap();
    assert_eq!(
        session.column_for("token").unwrap().key_generation(),
        &KeyGeneration::Uuid
    );
}

#[test]
fn empty_sequence_name_is_invalid() {
    let registry = registry();
    let err = registry.resolve::<BrokenSequence>().unwrap_err();

    assert!(matches!(
        err,
        EntableError::InvalidDeclaration {
            type_name: "BrokenSequence",
            field: "id",
            ..
        }
    ));
    assert!(!registry.is_resolved::<BrokenSequence>());
}

#[test]
fn unsupported_strategy_is_not_cached() {
    let registry = registry();

    for _ in 0..2 {
        let err = registry.resolve::<TableGenerated>().unwrap_err();
        assert!(matches!(
            err,
            EntableError::UnsupportedKeyStrategy {
                type_name: "TableGenerated",
                field: "id",
                ..
            }
        ));
    }

    let stats = registry.stats();
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.resolutions, 0);
    assert_eq!(stats.size, 0);
}

#[test]
fn lookup_before_resolve_is_an_error() {
    let registry = registry();

    let err = registry.table::<User>().unwrap_err();
    assert!(matches!(err, EntableError::UnresolvedType("User")));
    assert!(registry.statements::<User>().is_err());
    assert!(registry.generated_keys::<User>().is_err());

    registry.resolve::<User>().unwrap();
    assert!(registry.table::<User>().is_ok());
}

#[test]
fn later_style_does_not_replace_mapping() {
    let registry = registry();
    let first = registry
        .resolve_with_style::<Membership>(NamingStyle::Camelhump)
        .unwrap();
    let second = registry
        .resolve_with_style::<Membership>(NamingStyle::CamelhumpAndUppercase)
        .unwrap();

    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(second.name(), "membership");

    let stats = registry.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.size, 1);
}
