//! Application settings. Defaults are compiled in; the grading endpoint,
//! failure policy and log level can be overridden at build time through
//! environment variables read with `option_env!`.

use std::fmt;
use std::str::FromStr;

use log::{warn, LevelFilter};

/// Deployed handwriting grading function.
const DEFAULT_GRADING_URL: &str = "/.netlify/functions/evaluate-handwriting";

pub const STORAGE_KEY: &str = "chemistry_master_users_v1";

/// What the handwriting feature does when the grading call fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GradingFailurePolicy {
    /// Return a fallback result that marks every answer correct.
    #[default]
    AssumeCorrect,
    /// Show the error to the student.
    SurfaceError,
    /// Try again up to `max_attempts` calls in total, then show the error.
    Retry { max_attempts: u32 },
}

impl FromStr for GradingFailurePolicy {
    type Err = String;

    /// `assume-correct`, `surface-error`, `retry` (3 attempts) or `retry:N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "assume-correct" => Ok(GradingFailurePolicy::AssumeCorrect),
            "surface-error" => Ok(GradingFailurePolicy::SurfaceError),
            "retry" => Ok(GradingFailurePolicy::Retry { max_attempts: 3 }),
            other => {
                let n = other
                    .strip_prefix("retry:")
                    .ok_or_else(|| format!("unknown grading failure policy '{other}'"))?;
                let max_attempts: u32 = n
                    .parse()
                    .map_err(|_| format!("invalid retry count '{n}'"))?;
                if max_attempts == 0 {
                    return Err("retry count must be at least 1".to_string());
                }
                Ok(GradingFailurePolicy::Retry { max_attempts })
            }
        }
    }
}

impl fmt::Display for GradingFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradingFailurePolicy::AssumeCorrect => f.write_str("assume-correct"),
            GradingFailurePolicy::SurfaceError => f.write_str("surface-error"),
            GradingFailurePolicy::Retry { max_attempts } => write!(f, "retry:{max_attempts}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradingConfig {
    pub endpoint: String,
    pub on_failure: GradingFailurePolicy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub grading: GradingConfig,
    pub log_level: LevelFilter,
    pub storage_key: &'static str,
    /// Points for each correct balancing or builder answer.
    pub points_per_correct: u32,
    /// Challenges per balancing or builder round.
    pub round_size: usize,
    /// Questions drawn for one drill stage.
    pub drill_questions: usize,
    /// Percentage of correct drill answers needed to pass a stage.
    pub stage_pass_percent: u32,
    pub initial_unlocked_stages: u32,
    pub initial_challenge_attempts: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grading: GradingConfig {
                endpoint: DEFAULT_GRADING_URL.to_string(),
                on_failure: GradingFailurePolicy::default(),
            },
            log_level: LevelFilter::Info,
            storage_key: STORAGE_KEY,
            points_per_correct: 10,
            round_size: 5,
            drill_questions: 8,
            stage_pass_percent: 80,
            initial_unlocked_stages: 3,
            initial_challenge_attempts: 3,
        }
    }
}

impl AppConfig {
    /// Defaults with build-time overrides applied.
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("CHEM_MASTER_GRADING_URL"),
            option_env!("CHEM_MASTER_GRADING_POLICY"),
            option_env!("CHEM_MASTER_LOG"),
        )
    }

    /// Applies textual overrides; invalid values are logged and ignored.
    pub fn with_overrides(
        mut self,
        endpoint: Option<&str>,
        policy: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        if let Some(url) = endpoint.map(str::trim).filter(|u| !u.is_empty()) {
            self.grading.endpoint = url.to_string();
        }
        if let Some(raw) = policy {
            match raw.parse() {
                Ok(p) => self.grading.on_failure = p,
                Err(e) => warn!("ignoring grading policy override: {e}"),
            }
        }
        if let Some(raw) = log_level {
            match raw.trim().parse() {
                Ok(level) => self.log_level = level,
                Err(_) => warn!("ignoring unknown log level '{raw}'"),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.grading.on_failure, GradingFailurePolicy::AssumeCorrect);
        assert_eq!(cfg.points_per_correct, 10);
        assert_eq!(cfg.initial_unlocked_stages, 3);
        assert_eq!(cfg.initial_challenge_attempts, 3);
        assert_eq!(cfg.storage_key, "chemistry_master_users_v1");
    }

    #[test]
    fn policy_parsing() {
        assert_eq!("assume-correct".parse(), Ok(GradingFailurePolicy::AssumeCorrect));
        assert_eq!("surface-error".parse(), Ok(GradingFailurePolicy::SurfaceError));
        assert_eq!("retry".parse(), Ok(GradingFailurePolicy::Retry { max_attempts: 3 }));
        assert_eq!("retry:5".parse(), Ok(GradingFailurePolicy::Retry { max_attempts: 5 }));
        assert!("retry:0".parse::<GradingFailurePolicy>().is_err());
        assert!("random-score".parse::<GradingFailurePolicy>().is_err());
    }

    #[test]
    fn policy_display_round_trips() {
        for p in [
            GradingFailurePolicy::AssumeCorrect,
            GradingFailurePolicy::SurfaceError,
            GradingFailurePolicy::Retry { max_attempts: 4 },
        ] {
            assert_eq!(p.to_string().parse(), Ok(p));
        }
    }

    #[test]
    fn overrides_apply_and_bad_values_are_ignored() {
        let cfg = AppConfig::default().with_overrides(
            Some("https://grader.example/api"),
            Some("retry:2"),
            Some("debug"),
        );
        assert_eq!(cfg.grading.endpoint, "https://grader.example/api");
        assert_eq!(cfg.grading.on_failure, GradingFailurePolicy::Retry { max_attempts: 2 });
        assert_eq!(cfg.log_level, LevelFilter::Debug);

        let cfg = AppConfig::default().with_overrides(Some("  "), Some("bogus"), Some("loud"));
        assert_eq!(cfg, AppConfig::default());
    }
}
