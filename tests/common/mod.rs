#![allow(dead_code, non_snake_case)]

use entable::prelude::*;

#[derive(Entity)]
#[entity(table = "sys_user")]
pub struct User {
    #[column(id, generated(generator = "JDBC"))]
    pub id: i64,
    #[column(name = "user_name")]
    pub name: String,
    #[column(order_by = "desc")]
    pub status: String,
    #[column(transient)]
    pub scratch: Option<String>,
}

#[derive(Entity)]
#[entity(style = "camelhump_and_uppercase")]
pub struct UserInfo {
    #[column(id)]
    pub id: i64,
    pub userName: String,
    #[column(name = "`DESC`")]
    pub desc: Option<String>,
}

#[derive(Entity)]
#[entity(mapped)]
pub struct Audited {
    #[column(order_by)]
    pub created_at: String,
}

#[derive(Entity)]
#[entity(extends = Audited)]
pub struct Article {
    #[column(id)]
    pub id: i64,
    pub title: String,
}

#[derive(Entity)]
#[entity(kind = "map")]
pub struct Attributes {
    pub extra: String,
}

#[derive(Entity)]
#[entity(extends = Attributes)]
pub struct Document {
    #[column(id)]
    pub id: i64,
}

#[derive(Entity)]
#[entity(kind = "map", mapped)]
pub struct Settings {
    pub theme: String,
}

#[derive(Entity)]
#[entity(extends = Settings)]
pub struct Profile {
    #[column(id)]
    pub id: i64,
}

#[derive(Entity)]
#[entity(kind = "map", table = "kv_row")]
pub struct KvRow {
    #[column(id, name = "row_key")]
    pub key: String,
    #[column(name = "row_value")]
    pub value: String,
}

#[derive(Entity)]
pub struct Membership {
    #[column(id)]
    pub user_id: i64,
    #[column(id)]
    pub group_id: i64,
    pub role: String,
}

#[derive(Entity)]
pub struct AuditEntry {
    pub actor: String,
    pub action: String,
}

#[derive(Entity)]
pub struct Counter {
    #[column(id, generated(strategy = "identity", generator = "MySql"))]
    pub id: i64,
    pub hits: u64,
}

#[derive(Entity)]
pub struct Ticket {
    #[column(id, generated(strategy = "identity"))]
    pub id: i64,
    pub subject: String,
}

#[derive(Entity)]
pub struct Invoice {
    #[column(id, sequence = "seq_invoice")]
    pub id: i64,
    pub total: f64,
}

#[derive(Entity)]
pub struct Session {
    #[column(id, uuid)]
    pub token: String,
    pub user_id: i64,
}

#[derive(Entity)]
pub struct BrokenSequence {
    #[column(id, sequence = "")]
    pub id: i64,
}

#[derive(Entity)]
pub struct TableGenerated {
    #[column(id, generated(strategy = "table"))]
    pub id: i64,
}

#[derive(Entity)]
#[entity(style = "camelhump_and_uppercase")]
pub struct LoginEvent {
    #[column(id)]
    pub eventId: i64,
    #[column(style = "normal")]
    pub remoteAddr: String,
    #[column(style = "lowercase", name = "agent")]
    pub userAgent: String,
}
