//! System prompt assembly.
//!
//! The prompt is built from typed table snapshots and a handful of constant
//! sections. Bump [`PROMPT_VERSION`] whenever any of the constants change.

use crate::fixture::{SiteTable, StaffTable};
use std::fmt::Write;

/// Version of the prompt text below.
pub const PROMPT_VERSION: &str = "1.0.0";

/// Role definition given to the model.
pub const ROLE_PREAMBLE: &str = "あなたは熟練の配車担当者です。以下の「社員データ」と「現場データ」をもとに、\n\
ユーザーの指示に従って最適な人員配置（ルート組み）を提案してください。";

/// Dispatch policy, in priority order of appearance.
pub const POLICY_RULES: [&str; 3] = [
    "新人や内向的な社員には「対人ストレス」が高い現場（管理人が厳しい等）を避ける。",
    "ベテランには難易度が高い現場や、件数を多く割り当てる。",
    "ユーザーからの特記事項（体調不良など）を最優先する。",
];

/// Expected answer layout.
pub const OUTPUT_FORMAT: &str = "提案は以下のフォーマットで行ってください。\n\
- **配置案の概要**: なぜこの配置にしたかの全体的な理由\n\
- **個別割り当て**:\n  \
  - [社員名]: [担当現場名] (理由: ...)";

/// Builds the system prompt embedding both tables as JSON.
pub fn build_system_prompt(staff: &StaffTable, sites: &SiteTable) -> String {
    let mut prompt = String::new();

    // Writing into a String is infallible.
    let _ = writeln!(prompt, "{ROLE_PREAMBLE}");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "# 判断基準");
    for (index, rule) in POLICY_RULES.iter().enumerate() {
        let _ = writeln!(prompt, "{}. {}", index + 1, rule);
    }
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "# 出力形式");
    let _ = writeln!(prompt, "{OUTPUT_FORMAT}");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "# データ");
    let _ = writeln!(prompt, "[社員リスト]: {}", staff.to_json());
    let _ = write!(prompt, "[現場リスト]: {}", sites.to_json());

    prompt
}

/// Short description of what the model was shown for one instruction.
pub fn context_summary(instruction: &str, staff: &StaffTable, sites: &SiteTable) -> String {
    format!(
        "User Instruction: {instruction}\n\nData Context Used:\nStaff: {} records\nSites: {} records",
        staff.len(),
        sites.len()
    )
}
