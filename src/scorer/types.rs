use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordScoreEntry {
    pub word: String,
    pub score: u32,
    pub combo_level: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoreSummary {
    pub total: u64,
    // In first-seen order
    pub entries: Vec<WordScoreEntry>,
    pub unique_count: usize,
}
