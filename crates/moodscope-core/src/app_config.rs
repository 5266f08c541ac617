use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Custom emotion lexicon (CSV or YAML). Absence is not fatal.
    pub lexicon_path: PathBuf,
    /// Number of top-ranked emotions counted per message in batch runs.
    pub top_emotions: usize,
    /// Default destination for exported text reports.
    pub report_path: PathBuf,
}
