use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_ANALYSIS_DELAY_MS: u64 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Application configuration loaded explicitly from environment variables.
///
/// Without an answers file the questionnaire runs interactively on stdin.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON answers file. `Some` switches to batch mode.
    pub answers_path: Option<PathBuf>,
    pub output: OutputFormat,
    /// Pause before the result is shown in interactive mode.
    pub analysis_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `HEADACHE_ANSWERS_PATH`: answers file to diagnose (must exist)
    /// - `HEADACHE_OUTPUT`: `text` (default) or `json`
    /// - `HEADACHE_ANALYSIS_DELAY_MS`: pacing delay in milliseconds (default 800)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let answers_path = match lookup("HEADACHE_ANSWERS_PATH") {
            Some(path) => {
                let path = PathBuf::from(path);
                if !path.is_file() {
                    return Err(AppError::Config(format!(
                        "answers file not found at {}",
                        path.display()
                    )));
                }
                Some(path)
            }
            None => None,
        };

        let output = match lookup("HEADACHE_OUTPUT")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "HEADACHE_OUTPUT must be \"text\" or \"json\", got {other:?}"
                )));
            }
        };

        let delay_ms = match lookup("HEADACHE_ANALYSIS_DELAY_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::Config(format!(
                    "HEADACHE_ANALYSIS_DELAY_MS must be a whole number of milliseconds, got {raw:?}"
                ))
            })?,
            None => DEFAULT_ANALYSIS_DELAY_MS,
        };

        Ok(Self {
            answers_path,
            output,
            analysis_delay: Duration::from_millis(delay_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert!(config.answers_path.is_none());
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.analysis_delay, Duration::from_millis(800));
    }

    #[test]
    fn test_output_and_delay() {
        let config = load(&[
            ("HEADACHE_OUTPUT", " JSON "),
            ("HEADACHE_ANALYSIS_DELAY_MS", "0"),
        ])
        .unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.analysis_delay, Duration::ZERO);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            load(&[("HEADACHE_OUTPUT", "xml")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            load(&[("HEADACHE_ANALYSIS_DELAY_MS", "-5")]),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_missing_answers_file() {
        let err = load(&[("HEADACHE_ANSWERS_PATH", "/nonexistent/answers.json")]).unwrap_err();
        assert!(err.to_string().contains("answers file not found"));
    }

    #[test]
    fn test_existing_answers_file() {
        let path = std::env::temp_dir().join(format!("headache-config-{}.json", std::process::id()));
        std::fs::write(&path, "[]").unwrap();
        let config = load(&[("HEADACHE_ANSWERS_PATH", path.to_str().unwrap())]).unwrap();
        assert_eq!(config.answers_path.as_deref(), Some(path.as_path()));
        std::fs::remove_file(&path).unwrap();
    }
}
