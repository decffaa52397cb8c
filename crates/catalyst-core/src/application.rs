use serde::{Deserialize, Serialize};

use crate::choice::closed_enum;

closed_enum! {
    /// Hiring-pipeline stage of a job application.
    pub enum ApplicationStatus ("status") {
        Applied => "applied",
        Screening => "screening",
        Interview => "interview",
        Technical => "technical",
        Offer => "offer",
        Rejected => "rejected",
        Withdrawn => "withdrawn",
    }
}

impl ApplicationStatus {
    /// Still in play: neither rejected nor withdrawn.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Rejected | Self::Withdrawn)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: u32,
    pub company: String,
    pub role: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub notes: String,
    pub applied_date: String,
    pub last_updated: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(
            " Interview ".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::Interview
        );
    }

    #[test]
    fn test_status_parse_error_lists_values() {
        let err = "hired".parse::<ApplicationStatus>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid status 'hired'. Must be one of: applied, screening, interview, technical, offer, rejected, withdrawn"
        );
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ApplicationStatus::Offer).unwrap();
        assert_eq!(json, "\"offer\"");
    }

    #[test]
    fn test_active_statuses() {
        assert!(ApplicationStatus::Offer.is_active());
        assert!(!ApplicationStatus::Rejected.is_active());
        assert!(!ApplicationStatus::Withdrawn.is_active());
    }
}
