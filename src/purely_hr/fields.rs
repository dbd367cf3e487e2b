use serde::{Deserialize, Serialize};

use super::macros::tag_enum;

/// Root element every PurelyHR export is wrapped in.
pub const ROOT_TAG: &str = "DataService";

/// Attribute on each entry element carrying the request identifier.
pub const ID_ATTRIBUTE: &str = "ID";

/// Attribute on each entry element carrying the approval status.
pub const STATUS_ATTRIBUTE: &str = "Status";

tag_enum! {
    /// Child elements read from each entry, in the order they are read.
    /// The string is the exact element tag in the export.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Field {
        TimeOffDate => "TimeOffDate",
        TimeStart => "TimeStart",
        TimeEnd => "TimeEnd",
        TimeOffHours => "TimeOffHours",
        TimeOffTypeName => "TimeOffTypeName",
        LoginId => "LoginID",
        Firstname => "Firstname",
        Lastname => "Lastname",
        UserCategory => "UserCategory",
        SubmittedDate => "SubmittedDate",
        Deducted => "Deducted",
        Comment => "Comment",
    }
}

impl Field {
    pub fn tag(&self) -> &'static str {
        self.as_str()
    }
}

tag_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum TimeOffStatus {
        Approved => "Approved",
        Pending => "Pending",
        Denied => "Denied",
        Cancelled => "Cancelled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_matches_export_layout() {
        let tags: Vec<&str> = Field::ALL.iter().map(Field::tag).collect();
        assert_eq!(
            tags,
            vec![
                "TimeOffDate",
                "TimeStart",
                "TimeEnd",
                "TimeOffHours",
                "TimeOffTypeName",
                "LoginID",
                "Firstname",
                "Lastname",
                "UserCategory",
                "SubmittedDate",
                "Deducted",
                "Comment",
            ]
        );
    }

    #[test]
    fn test_status_from_str_ignores_case() {
        assert_eq!("approved".parse::<TimeOffStatus>(), Ok(TimeOffStatus::Approved));
        assert_eq!("DENIED".parse::<TimeOffStatus>(), Ok(TimeOffStatus::Denied));
        assert!("Archived".parse::<TimeOffStatus>().is_err());
    }

    #[test]
    fn test_display_uses_export_tag() {
        assert_eq!(Field::LoginId.to_string(), "LoginID");
        assert_eq!(TimeOffStatus::Pending.to_string(), "Pending");
    }
}
