use crate::member::membership_id::MembershipId;
use std::fmt::{Display, Formatter};
use std::io::Write;

/// The outcome of an operation on members.
///
/// Business-rule violations (renewing an active membership, cancelling an inactive one,
/// attending while inactive) are not errors: the operation leaves the member untouched
/// and reports a rejection notice instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    MemberAdded { name: String, membership_id: MembershipId },
    MemberRemoved { membership_id: MembershipId, removed: usize },
    Renewed { name: String },
    AlreadyActive { name: String },
    Cancelled { name: String },
    AlreadyInactive { name: String },
    AttendanceRecorded { name: String, total: u32 },
    AttendanceRejected { name: String },
}

impl Notice {
    /// Whether the notice is set apart from the menu by blank lines when written to the console.
    fn is_framed(&self) -> bool {
        matches!(
            self,
            Notice::MemberAdded { .. } | Notice::MemberRemoved { .. }
        )
    }

    /// Whether the operation has been rejected and left the member unchanged.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Notice::AlreadyActive { .. }
                | Notice::AlreadyInactive { .. }
                | Notice::AttendanceRejected { .. }
        )
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::MemberAdded {
                name,
                membership_id,
            } => write!(f, "New member added: {name} with ID: {membership_id}"),
            Notice::MemberRemoved { membership_id, .. } => {
                write!(f, "Member with ID {membership_id} removed.")
            }
            Notice::Renewed { name } => write!(f, "Membership renewed for: {name}"),
            Notice::AlreadyActive { name } => {
                write!(f, "Membership is already active for: {name}")
            }
            Notice::Cancelled { name } => write!(f, "Membership canceled for: {name}"),
            Notice::AlreadyInactive { name } => {
                write!(f, "Membership is already inactive for: {name}")
            }
            Notice::AttendanceRecorded { name, total } => {
                write!(f, "{name} has attended the gym. Total attendance: {total}")
            }
            Notice::AttendanceRejected { name } => {
                write!(f, "{name} cannot attend. Membership is inactive.")
            }
        }
    }
}

/// Where notices go once an operation has been performed.
pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// Writes each notice on its own line; additions and removals are surrounded by blank lines.
///
/// A failed write is logged and otherwise ignored: the operation has already been applied
/// and a notice is no reason to stop the session. Failures of the console prompts
/// themselves end the session with [crate::error::ApplicationError::Io].
pub struct ConsoleNotifier<W: Write> {
    output: W,
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, notice: &Notice) {
        let result = if notice.is_framed() {
            writeln!(self.output, "\n{notice}\n")
        } else {
            writeln!(self.output, "{notice}")
        };
        if let Err(e) = result {
            error!("Can't write notice [notice: {notice:?}]\n{e:#?}");
        }
    }
}

/// Keeps every notice, mostly useful to assert on outcomes.
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: &Notice) {
        self.push(notice.clone());
    }
}
