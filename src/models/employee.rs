use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    // Assigned by the store; absent on create requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Employee {
    #[cfg(test)]
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Employee {
            id: None,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }

    pub fn with_id(self, id: i64) -> Self {
        Employee { id: Some(id), ..self }
    }

    /// Returns a copy of `self` carrying the name and email of `replacement`.
    /// The identifier is never taken from the replacement.
    pub fn replaced_by(&self, replacement: &Employee) -> Employee {
        Employee {
            id: self.id,
            first_name: replacement.first_name.clone(),
            last_name: replacement.last_name.clone(),
            email: replacement.email.clone(),
        }
    }
}
