//! End-of-session report.
//!
//! Maps a [`SessionOutcome`] to the lines shown to the player. Rendering is
//! left to the caller.

use serde::{Deserialize, Serialize};

use crate::session::SessionOutcome;

/// Classification of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Won,
    Lost,
    Aborted,
}

/// Messages summarizing one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub kind: ReportKind,
    /// Correct answers given before the session ended.
    pub score: usize,
    /// Outcome message.
    pub headline: String,
    /// Abort cause, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SessionReport {
    pub fn from_outcome(outcome: &SessionOutcome) -> Self {
        match outcome {
            SessionOutcome::Won { score } => Self {
                kind: ReportKind::Won,
                score: *score,
                headline: "Congratulations, you answered every question!".into(),
                reason: None,
            },
            SessionOutcome::Lost { score } => Self {
                kind: ReportKind::Lost,
                score: *score,
                headline: "Incorrect answer. Game over.".into(),
                reason: None,
            },
            SessionOutcome::Aborted { score, reason } => Self {
                kind: ReportKind::Aborted,
                score: *score,
                headline: format!("Session aborted: {reason}"),
                reason: Some(reason.clone()),
            },
        }
    }

    pub fn score_line(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Headline followed by the score line.
    pub fn lines(&self) -> Vec<String> {
        vec![self.headline.clone(), self.score_line()]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&SessionOutcome> for SessionReport {
    fn from(outcome: &SessionOutcome) -> Self {
        Self::from_outcome(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn won_report() {
        let report = SessionReport::from_outcome(&SessionOutcome::Won { score: 4 });
        assert_eq!(report.kind, ReportKind::Won);
        assert!(report.headline.contains("Congratulations"));
        assert_eq!(report.lines()[1], "Score: 4");
    }

    #[test]
    fn lost_report_keeps_score_before_miss() {
        let report = SessionReport::from_outcome(&SessionOutcome::Lost { score: 2 });
        assert_eq!(report.kind, ReportKind::Lost);
        assert!(report.headline.contains("Incorrect"));
        assert_eq!(report.score_line(), "Score: 2");
    }

    #[test]
    fn aborted_report_names_cause() {
        let outcome = SessionOutcome::Aborted {
            score: 1,
            reason: "input closed".into(),
        };
        let report = SessionReport::from(&outcome);
        assert_eq!(report.kind, ReportKind::Aborted);
        assert_eq!(report.headline, "Session aborted: input closed");
        assert_eq!(report.reason.as_deref(), Some("input closed"));
        assert_eq!(report.lines(), vec!["Session aborted: input closed", "Score: 1"]);
    }

    #[test]
    fn json_omits_reason_unless_aborted() {
        let won = SessionReport::from_outcome(&SessionOutcome::Won { score: 0 });
        let json = won.to_json().unwrap();
        assert!(json.contains(r#""kind": "won""#));
        assert!(!json.contains("reason"));

        let parsed: SessionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, won);
    }
}
