//! Database row models for the client directory.
//! These are thin wrappers around SQLite rows.

#[derive(Debug, Clone)]
pub struct ClientRow {
    pub id: String,
    pub account_type: String, // 'Athlete' | 'Coach'
    pub first_name: String,
    pub last_name: String,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub status: String, // 'active' | 'archived'
}

impl ClientRow {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone)]
pub struct GroupRow {
    pub group_id: i64,
    pub group_name: String,
    pub date_created: String,
    pub member_count: i64,
}
