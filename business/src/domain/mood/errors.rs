#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MoodError {
    #[error("mood.unknown")]
    Unknown,
}
