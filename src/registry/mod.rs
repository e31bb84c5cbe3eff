use crate::member::Member;
use crate::member::membership_id::{MEMBERSHIP_ID_RANGE, MembershipId};
use crate::notice::{Notice, Notifier};
use crate::registry::error::RegistryError;
use crate::registry::error::RegistryError::MembershipIdsExhausted;
use chrono::{Local, NaiveDateTime};
use rand::Rng;
use std::fmt::Write as _;
use std::io::{ErrorKind, Write};

pub mod error;

type Result<T, E = RegistryError> = std::result::Result<T, E>;

const SEPARATOR: &str = "--------------------------------------------------";

/// The in-memory list of members, in insertion order.
///
/// Randomness (for membership ids) and the destination of notices are both
/// provided at construction.
pub struct MembershipRegistry<G: Rng, N: Notifier> {
    members: Vec<Member>,
    rng: G,
    notifier: N,
}

impl<G: Rng, N: Notifier> MembershipRegistry<G, N> {
    pub fn new(rng: G, notifier: N) -> Self {
        Self {
            members: vec![],
            rng,
            notifier,
        }
    }

    pub fn add_member(&mut self, name: String, duration_months: i32) -> Result<MembershipId> {
        self.add_member_at(name, duration_months, Local::now().naive_local())
    }

    /// Append a new member, identified by a freshly generated membership id.
    /// No check is done on the name: two members can share a name.
    pub fn add_member_at(
        &mut self,
        name: String,
        duration_months: i32,
        now: NaiveDateTime,
    ) -> Result<MembershipId> {
        let membership_id = self.generate_membership_id()?;
        self.members.push(Member::create_at(
            name.clone(),
            membership_id,
            duration_months,
            now,
        ));
        info!("Member added [id: {membership_id}, duration: {duration_months}]");
        self.notifier.notify(&Notice::MemberAdded {
            name,
            membership_id,
        });

        Ok(membership_id)
    }

    /// Draw random ids until one is not used by any member.
    pub fn generate_membership_id(&mut self) -> Result<MembershipId> {
        if self.members.len() >= MEMBERSHIP_ID_RANGE.len() {
            error!("Can't generate a membership id, all of them are in use.");
            return Err(MembershipIdsExhausted(self.members.len()));
        }

        loop {
            let membership_id = MembershipId::random(&mut self.rng);
            if self.find_member(&membership_id).is_none() {
                return Ok(membership_id);
            }
            debug!("Membership id already in use, drawing another one [id: {membership_id}]");
        }
    }

    /// Remove every member with the given id and return how many were removed.
    /// Removal is reported even if no member matched.
    pub fn remove_member(&mut self, membership_id: &MembershipId) -> usize {
        let previous_len = self.members.len();
        self.members
            .retain(|member| member.membership_id() != membership_id);
        let removed = previous_len - self.members.len();
        if removed == 0 {
            debug!("No member to remove [id: {membership_id}]");
        }

        self.notifier.notify(&Notice::MemberRemoved {
            membership_id: *membership_id,
            removed,
        });
        removed
    }

    pub fn display_members<W: Write>(
        &self,
        output: &mut W,
        date_format: &str,
    ) -> std::io::Result<()> {
        writeln!(output, "\nMember List:")?;
        for member in &self.members {
            writeln!(output, "{SEPARATOR}")?;
            writeln!(output, "Name: {}", member.name())?;
            writeln!(output, "ID: {}", member.membership_id())?;
            writeln!(output, "Active: {}", member.is_active())?;
            writeln!(output, "Attendance: {}", member.attendance_count())?;
            writeln!(
                output,
                "Expiration Date: {}",
                format_date(member.expiration_date(), date_format)?
            )?;
            writeln!(output, "{SEPARATOR}")?;
        }
        writeln!(output)
    }

    /// Retrieve a member by its 0-based position.
    pub fn get_member(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }

    pub fn find_member(&self, membership_id: &MembershipId) -> Option<&Member> {
        self.members
            .iter()
            .find(|member| member.membership_id() == membership_id)
    }

    pub fn renew_membership(
        &mut self,
        membership_id: &MembershipId,
        additional_months: i32,
    ) -> Option<Notice> {
        self.apply(membership_id, |member| {
            member.renew_membership(additional_months)
        })
    }

    pub fn cancel_membership(&mut self, membership_id: &MembershipId) -> Option<Notice> {
        self.apply(membership_id, Member::cancel_membership)
    }

    pub fn mark_attendance(&mut self, membership_id: &MembershipId) -> Option<Notice> {
        self.apply(membership_id, Member::mark_attendance)
    }

    /// Apply `operation` to the member with the given id and forward the outcome.
    /// Return `None` when no member has this id.
    fn apply<F>(&mut self, membership_id: &MembershipId, operation: F) -> Option<Notice>
    where
        F: FnOnce(&mut Member) -> Notice,
    {
        let Some(member) = self
            .members
            .iter_mut()
            .find(|member| member.membership_id() == membership_id)
        else {
            debug!("Unknown member [id: {membership_id}]");
            return None;
        };

        let notice = operation(member);
        self.notifier.notify(&notice);
        Some(notice)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

/// Render `date` into a string first: a format chrono can't apply to a naive date-time
/// (e.g. `%z`) is reported as an error instead of aborting the write.
fn format_date(date: &NaiveDateTime, date_format: &str) -> std::io::Result<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", date.format(date_format)).map_err(|_| {
        error!("Can't format date [format: {date_format}]");
        std::io::Error::new(
            ErrorKind::InvalidInput,
            format!("Invalid date format: {date_format}"),
        )
    })?;
    Ok(rendered)
}
