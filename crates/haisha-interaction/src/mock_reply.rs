//! Canned reply used when no credential is configured.
//!
//! The assignment in the reply is fixed text. It does not look at the
//! tables, only the instruction is echoed back.

/// Marker opening every mock reply.
pub const MOCK_MARKER: &str = "**(模擬モードでの回答です)**";

/// Number of instruction characters echoed in the summary line.
pub const ECHO_PREFIX_CHARS: usize = 10;

/// Returns the first `max_chars` characters of `text`.
pub fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Renders the mock reply for an instruction.
pub fn render_mock_reply(instruction: &str) -> String {
    let prefix = char_prefix(instruction, ECHO_PREFIX_CHARS);
    format!(
        "{MOCK_MARKER}
承知いたしました。ご指示の「{instruction}」を考慮し、以下の配置を提案します。

**配置案の概要:**
{prefix}... という点を重視し、田中(C)さんには心理的負担の少ない現場を、佐藤(A)さんには難所を任せる構成にしました。

**個別割り当て:**
* **佐藤(A)**: 中央ビル、緑区役所
    * *理由*: 難易度「高」の現場ですが、ベテランの佐藤さんなら確実に対応可能です。
* **鈴木(B)**: 港北倉庫、南ショッピングモール
    * *理由*: 移動距離を考慮し、近隣エリアでまとめました。
* **田中(C)**: 青葉区マンション
    * *理由*: 内向的な性格を考慮し、対人ストレスが「低い」現場を選定しました。指示通り無理のない配置です。"
    )
}
