use serde::Serialize;

/// Council roster entry. `title` is the protocol title as written in the
/// appointment act ("Alcalde Municipal", "Concejal Segundo", ...); the
/// role-weight table matches on it for report ordering.
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub title: String,
}
