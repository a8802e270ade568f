use serde::{Deserialize, Serialize};

/// One exam attempt as posted by the proctoring front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub student_name: String,
    pub duration: String,
    pub submission_type: String,
    pub timestamp: String,
    pub task1: TaskAnswer,
    pub task2: TaskAnswer,
    pub violations: Violations,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAnswer {
    pub answer: String,
    pub word_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violations {
    pub total_violations: u64,
    pub warning_count: u64,
    pub detailed: DetailedViolations,
    pub typing_data: TypingData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedViolations {
    pub tab_switching: u64,
    pub app_switching: u64,
    pub high_typing_speed: u64,
    pub paste_detected: u64,
    pub rapid_keystrokes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingData {
    pub task1: TaskTyping,
    pub task2: TaskTyping,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTyping {
    pub max_speed: u64,
    pub speed_violations: u64,
    pub paste_events: u64,
}
