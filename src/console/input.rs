use crate::config::AppConfig;
use crate::console::input::InputError::{InvalidChoice, NotANumber, PlanNotOffered};
use crate::member::membership_id::InvalidMembershipId;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Invalid choice. Please try again.")]
    InvalidChoice(String),
    #[error("A membership plan is a whole number of months [input: {0}]")]
    NotANumber(String),
    #[error("This membership plan is not offered [months: {0}]")]
    PlanNotOffered(i32),
    #[error(transparent)]
    InvalidMembershipId(#[from] InvalidMembershipId),
}

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    AddMember,
    DisplayMembers,
    Exit,
    RemoveMember,
    MarkAttendance,
    CancelMembership,
    RenewMembership,
}

impl Choice {
    /// Menu entries, in display order.
    pub const ALL: [Choice; 7] = [
        Choice::AddMember,
        Choice::DisplayMembers,
        Choice::Exit,
        Choice::RemoveMember,
        Choice::MarkAttendance,
        Choice::CancelMembership,
        Choice::RenewMembership,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Choice::AddMember => "1",
            Choice::DisplayMembers => "2",
            Choice::Exit => "3",
            Choice::RemoveMember => "4",
            Choice::MarkAttendance => "5",
            Choice::CancelMembership => "6",
            Choice::RenewMembership => "7",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Choice::AddMember => "Add Member",
            Choice::DisplayMembers => "Display Members",
            Choice::Exit => "Exit",
            Choice::RemoveMember => "Remove Member",
            Choice::MarkAttendance => "Mark Attendance",
            Choice::CancelMembership => "Cancel Membership",
            Choice::RenewMembership => "Renew Membership",
        }
    }
}

impl FromStr for Choice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Choice::ALL
            .into_iter()
            .find(|choice| choice.key() == s.trim())
            .ok_or_else(|| InvalidChoice(s.to_owned()))
    }
}

/// Parse a number of months and check it against the plans offered.
pub fn parse_duration(input: &str, config: &AppConfig) -> Result<i32, InputError> {
    let duration_months = input
        .trim()
        .parse::<i32>()
        .map_err(|_| NotANumber(input.trim().to_owned()))?;

    if config.is_duration_allowed(duration_months) {
        Ok(duration_months)
    } else {
        Err(PlanNotOffered(duration_months))
    }
}

/// Human description of the plans offered, e.g. `1 month, 3 months`.
pub fn describe_plans(config: &AppConfig) -> String {
    let durations: &[i32] = if config.allowed_durations().is_empty() {
        &[1, 3, 6, 12]
    } else {
        config.allowed_durations()
    };

    durations
        .iter()
        .map(|duration| match *duration {
            1 => "1 month".to_owned(),
            duration => format!("{duration} months"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DATE_FORMAT;
    use parameterized::{ide, parameterized};

    ide!();

    fn config_with_plans() -> AppConfig {
        AppConfig::new(vec![1, 3, 6, 12], None, DEFAULT_DATE_FORMAT.to_owned())
    }

    #[parameterized(
        input = {"1", "2", "3", " 4 ", "5\n", "6", "7"},
        expected_choice = {
            Choice::AddMember,
            Choice::DisplayMembers,
            Choice::Exit,
            Choice::RemoveMember,
            Choice::MarkAttendance,
            Choice::CancelMembership,
            Choice::RenewMembership,
        }
    )]
    fn should_parse_choice(input: &str, expected_choice: Choice) {
        assert_eq!(Ok(expected_choice), Choice::from_str(input));
    }

    #[parameterized(input = {"", "0", "8", "exit", "1.0"})]
    fn should_not_parse_choice(input: &str) {
        assert_eq!(Err(InvalidChoice(input.to_owned())), Choice::from_str(input));
    }

    #[parameterized(
        input = {"1", " 12 ", "-3", "0", "240"},
        expected_duration = {1, 12, -3, 0, 240}
    )]
    fn should_parse_any_duration_when_no_plan_is_configured(input: &str, expected_duration: i32) {
        assert_eq!(Ok(expected_duration), parse_duration(input, &AppConfig::default()));
    }

    #[parameterized(
        input = {"", "three", "3.5", "99999999999"},
        expected_error = {
            NotANumber("".to_owned()),
            NotANumber("three".to_owned()),
            NotANumber("3.5".to_owned()),
            NotANumber("99999999999".to_owned()),
        }
    )]
    fn should_not_parse_duration(input: &str, expected_error: InputError) {
        assert_eq!(Err(expected_error), parse_duration(input, &AppConfig::default()));
    }

    #[parameterized(
        input = {"6", "5"},
        expected_result = {Ok(6), Err(PlanNotOffered(5))}
    )]
    fn should_check_duration_against_plans(input: &str, expected_result: Result<i32, InputError>) {
        assert_eq!(expected_result, parse_duration(input, &config_with_plans()));
    }

    #[parameterized(
        config = {
            AppConfig::default(),
            AppConfig::new(vec![1, 24], None, DEFAULT_DATE_FORMAT.to_owned()),
        },
        expected_description = {
            "1 month, 3 months, 6 months, 12 months",
            "1 month, 24 months",
        }
    )]
    fn should_describe_plans(config: AppConfig, expected_description: &str) {
        assert_eq!(expected_description, describe_plans(&config));
    }
}
