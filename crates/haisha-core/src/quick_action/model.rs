//! Quick Action domain models.

use serde::{Deserialize, Serialize};

/// A one-step canned instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickActionSlot {
    /// Slot identifier ("1", "2", ...).
    pub slot_id: String,
    /// Short label shown in the action list.
    pub label: String,
    /// Instruction sent as if the user had typed it.
    pub instruction: String,
}

impl QuickActionSlot {
    pub fn new(
        slot_id: impl Into<String>,
        label: impl Into<String>,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            slot_id: slot_id.into(),
            label: label.into(),
            instruction: instruction.into(),
        }
    }
}

/// The fixed set of quick actions offered next to the input line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickActionConfig {
    pub slots: Vec<QuickActionSlot>,
}

impl Default for QuickActionConfig {
    fn default() -> Self {
        Self {
            slots: vec![
                QuickActionSlot::new(
                    "1",
                    "田中さん体調不良",
                    "田中さんは今日メンタル不調なので、対人ストレスの低い現場だけにしてください",
                ),
                QuickActionSlot::new(
                    "2",
                    "佐藤さんに集中",
                    "佐藤さんに件数を多めに割り当てて、難しい現場を任せてください",
                ),
                QuickActionSlot::new(
                    "3",
                    "鈴木さんは近場のみ",
                    "鈴木さんは遠距離を避けて、近いエリアでまとめてください",
                ),
            ],
        }
    }
}

impl QuickActionConfig {
    /// Creates the default three-slot config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a slot by its ID.
    pub fn get_slot(&self, slot_id: &str) -> Option<&QuickActionSlot> {
        self.slots.iter().find(|s| s.slot_id == slot_id)
    }
}
