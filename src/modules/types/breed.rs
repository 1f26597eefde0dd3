//! Breed record

use serde::{Deserialize, Serialize};

/// A row of the `breed` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    /// Primary key
    pub id: String,
    /// English name
    pub name_en: String,
    /// Thai name
    pub name_th: String,
    /// Short name / code
    pub short_name: String,
    /// Free-text remark, serialized as `null` when absent
    pub remark: Option<String>,
}

impl Breed {
    /// Column list in positional mapping order
    pub const COLUMNS: [&'static str; 5] = ["id", "name_en", "name_th", "short_name", "remark"];

    pub fn new(
        id: impl Into<String>,
        name_en: impl Into<String>,
        name_th: impl Into<String>,
        short_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name_en: name_en.into(),
            name_th: name_th.into(),
            short_name: short_name.into(),
            remark: None,
        }
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }
}
