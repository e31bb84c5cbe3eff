use rand::Rng;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Every membership id lies within this range, so that it always has 4 digits.
pub const MEMBERSHIP_ID_RANGE: RangeInclusive<u16> = 1000..=9999;

static MEMBERSHIP_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("Membership id regex should be valid"));

/// A human-facing 4-digit identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MembershipId(u16);

impl MembershipId {
    /// Draw an id uniformly from [MEMBERSHIP_ID_RANGE].
    /// Nothing prevents two draws from returning the same id.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.random_range(MEMBERSHIP_ID_RANGE))
    }
}

impl Display for MembershipId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MembershipId {
    type Err = InvalidMembershipId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !MEMBERSHIP_ID_REGEX.is_match(s) {
            return Err(InvalidMembershipId(s.to_owned()));
        }

        s.parse::<u16>()
            .ok()
            .filter(|id| MEMBERSHIP_ID_RANGE.contains(id))
            .map(MembershipId)
            .ok_or_else(|| InvalidMembershipId(s.to_owned()))
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("A membership ID is made of 4 digits, between 1000 and 9999 [id: {0}]")]
pub struct InvalidMembershipId(pub String);
