use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{Identifiable, Month};

/// A planned spend ceiling for one category in one calendar month.
///
/// At most one budget exists per `(category, month)` pair; the service
/// layer upserts to keep that true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub category: String,
    pub amount: f64,
    pub month: Month,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    pub fn new(category: impl Into<String>, amount: f64, month: Month) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            amount,
            month,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}
