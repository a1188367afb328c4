//! Staff and work-site table models.
//!
//! Field and variant names are English, but the serialized form keeps the
//! Japanese column names and labels that end up inside the system prompt.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Experience tier of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum SkillLevel {
    #[serde(rename = "ベテラン")]
    #[strum(to_string = "ベテラン")]
    Veteran,
    #[serde(rename = "中堅")]
    #[strum(to_string = "中堅")]
    Mid,
    #[serde(rename = "新人")]
    #[strum(to_string = "新人")]
    Novice,
}

/// Work difficulty of a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Difficulty {
    #[serde(rename = "低")]
    #[strum(to_string = "低")]
    Low,
    #[serde(rename = "中")]
    #[strum(to_string = "中")]
    Medium,
    #[serde(rename = "高(要交渉)")]
    #[strum(to_string = "高(要交渉)")]
    HighNeedsNegotiation,
}

/// Interpersonal stress expected at a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum StressLevel {
    #[serde(rename = "普通")]
    #[strum(to_string = "普通")]
    Normal,
    #[serde(rename = "高い(管理人が厳しい)")]
    #[strum(to_string = "高い(管理人が厳しい)")]
    HighStrictManager,
    #[serde(rename = "低い")]
    #[strum(to_string = "低い")]
    Low,
}

/// A single staff member available for dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    #[serde(rename = "名前")]
    pub name: String,
    #[serde(rename = "スキル")]
    pub skill: SkillLevel,
    #[serde(rename = "性格")]
    pub personality: String,
    #[serde(rename = "苦手")]
    pub weakness: String,
    #[serde(rename = "希望")]
    pub preference: String,
}

impl StaffRecord {
    pub fn new(
        name: impl Into<String>,
        skill: SkillLevel,
        personality: impl Into<String>,
        weakness: impl Into<String>,
        preference: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            skill,
            personality: personality.into(),
            weakness: weakness.into(),
            preference: preference.into(),
        }
    }
}

/// A single work site for today's route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRecord {
    #[serde(rename = "現場名")]
    pub name: String,
    #[serde(rename = "作業難易度")]
    pub difficulty: Difficulty,
    #[serde(rename = "対人ストレス")]
    pub stress: StressLevel,
    #[serde(rename = "所要時間(分)")]
    pub duration_minutes: u32,
}

/// The staff table. Replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffTable(Vec<StaffRecord>);

impl StaffTable {
    pub fn new(records: Vec<StaffRecord>) -> Self {
        Self(records)
    }

    pub fn records(&self) -> &[StaffRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes the table as a JSON array of records, non-ASCII kept as is.
    pub fn to_json(&self) -> String {
        records_to_json(&self.0)
    }
}

/// The work-site table. Replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteTable(Vec<SiteRecord>);

impl SiteTable {
    pub fn new(records: Vec<SiteRecord>) -> Self {
        Self(records)
    }

    pub fn records(&self) -> &[SiteRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes the table as a JSON array of records, non-ASCII kept as is.
    pub fn to_json(&self) -> String {
        records_to_json(&self.0)
    }
}

// Plain structs of strings, enums and integers cannot fail to serialize.
fn records_to_json<T: Serialize>(records: &[T]) -> String {
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_display_in_japanese() {
        assert_eq!(SkillLevel::Veteran.to_string(), "ベテラン");
        assert_eq!(Difficulty::HighNeedsNegotiation.to_string(), "高(要交渉)");
        assert_eq!(StressLevel::HighStrictManager.to_string(), "高い(管理人が厳しい)");
    }

    #[test]
    fn test_site_record_json_uses_column_names() {
        let table = SiteTable::new(vec![SiteRecord {
            name: "中央ビル".to_string(),
            difficulty: Difficulty::Low,
            stress: StressLevel::Normal,
            duration_minutes: 60,
        }]);

        assert_eq!(
            table.to_json(),
            r#"[{"現場名":"中央ビル","作業難易度":"低","対人ストレス":"普通","所要時間(分)":60}]"#
        );
    }

    #[test]
    fn test_staff_record_json_round_trips_through_labels() {
        let record = StaffRecord::new("田中(C)", SkillLevel::Novice, "内向的", "厳しい管理人", "メンター同行希望");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""スキル":"新人""#));

        let parsed: StaffRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
