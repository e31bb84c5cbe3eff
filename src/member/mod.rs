use crate::member::membership_id::MembershipId;
use crate::notice::Notice;
use chrono::{Local, Months, NaiveDateTime};
use derive_getters::Getters;

pub mod membership_id;

/// A gym member's record.
///
/// The expiration date is never set directly: it is always derived from the moment
/// the membership was last (re)activated and the total number of months purchased.
#[derive(Debug, Clone, Getters, PartialEq, Eq)]
pub struct Member {
    name: String,
    membership_id: MembershipId,
    #[getter(skip)]
    active: bool,
    attendance_count: u32,
    duration_months: i32,
    activated_at: NaiveDateTime,
    expiration_date: NaiveDateTime,
}

impl Member {
    pub fn create(name: String, membership_id: MembershipId, duration_months: i32) -> Self {
        Self::create_at(name, membership_id, duration_months, now())
    }

    /// Neither the name nor the duration are checked:
    /// a non-positive duration results in an expiration date at or before `now`.
    pub fn create_at(
        name: String,
        membership_id: MembershipId,
        duration_months: i32,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            name,
            membership_id,
            active: true,
            attendance_count: 0,
            duration_months,
            activated_at: now,
            expiration_date: compute_expiration_date(now, duration_months),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn renew_membership(&mut self, additional_months: i32) -> Notice {
        self.renew_membership_at(additional_months, now())
    }

    /// Reactivate an inactive membership.
    /// The new expiration date starts from `now` and spans the whole duration purchased
    /// so far, additional months included. It doesn't extend the previous expiration date.
    pub fn renew_membership_at(&mut self, additional_months: i32, now: NaiveDateTime) -> Notice {
        let name = self.name.clone();
        if self.active {
            debug!("Renewal ignored, membership is active [id: {}]", self.membership_id);
            return Notice::AlreadyActive { name };
        }

        self.active = true;
        self.duration_months = self.duration_months.saturating_add(additional_months);
        self.activated_at = now;
        self.expiration_date = compute_expiration_date(now, self.duration_months);
        info!(
            "Membership renewed [id: {}, duration: {}, expiration: {}]",
            self.membership_id, self.duration_months, self.expiration_date
        );
        Notice::Renewed { name }
    }

    pub fn cancel_membership(&mut self) -> Notice {
        let name = self.name.clone();
        if !self.active {
            debug!("Cancellation ignored, membership is inactive [id: {}]", self.membership_id);
            return Notice::AlreadyInactive { name };
        }

        self.active = false;
        info!("Membership canceled [id: {}]", self.membership_id);
        Notice::Cancelled { name }
    }

    pub fn mark_attendance(&mut self) -> Notice {
        let name = self.name.clone();
        if !self.active {
            debug!("Attendance rejected, membership is inactive [id: {}]", self.membership_id);
            return Notice::AttendanceRejected { name };
        }

        self.attendance_count = self.attendance_count.saturating_add(1);
        Notice::AttendanceRecorded {
            name,
            total: self.attendance_count,
        }
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Shift `from` by `duration_months` months.
/// Days past the end of the target month are clamped to its last day.
/// Out-of-range results saturate to the latest (or earliest) representable date-time.
fn compute_expiration_date(from: NaiveDateTime, duration_months: i32) -> NaiveDateTime {
    let months = Months::new(duration_months.unsigned_abs());
    if duration_months >= 0 {
        from.checked_add_months(months).unwrap_or(NaiveDateTime::MAX)
    } else {
        from.checked_sub_months(months).unwrap_or(NaiveDateTime::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use parameterized::{ide, parameterized};
    use std::str::FromStr;

    ide!();

    fn membership_id() -> MembershipId {
        MembershipId::from_str("1234").unwrap()
    }

    fn date_time(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    fn inactive_member(duration_months: i32, now: NaiveDateTime) -> Member {
        let mut member = Member::create_at("Ben".to_owned(), membership_id(), duration_months, now);
        member.cancel_membership();
        member
    }

    // region create
    #[parameterized(
        duration_months = {0, 1, 3, 6, 12, 1, 13, -2},
        now = {
            date_time(2026, 10, 19),
            date_time(2026, 10, 19),
            date_time(2026, 10, 19),
            date_time(2026, 10, 19),
            date_time(2026, 10, 19),
            date_time(2025, 1, 31),
            date_time(2024, 1, 31),
            date_time(2026, 10, 19),
        },
        expected_expiration_date = {
            date_time(2026, 10, 19),
            date_time(2026, 11, 19),
            date_time(2027, 1, 19),
            date_time(2027, 4, 19),
            date_time(2027, 10, 19),
            date_time(2025, 2, 28),
            date_time(2025, 2, 28),
            date_time(2026, 8, 19),
        }
    )]
    fn should_create_member(
        duration_months: i32,
        now: NaiveDateTime,
        expected_expiration_date: NaiveDateTime,
    ) {
        let member = Member::create_at("Ava".to_owned(), membership_id(), duration_months, now);

        assert_eq!("Ava", member.name());
        assert_eq!(&membership_id(), member.membership_id());
        assert!(member.is_active());
        assert_eq!(0, *member.attendance_count());
        assert_eq!(duration_months, *member.duration_months());
        assert_eq!(&now, member.activated_at());
        assert_eq!(&expected_expiration_date, member.expiration_date());
    }

    #[test]
    fn should_create_member_with_empty_name() {
        let member = Member::create(String::new(), membership_id(), 1);

        assert_eq!("", member.name());
        assert!(member.is_active());
    }

    #[test]
    fn should_create_member_expiring_from_now() {
        let before = now();
        let member = Member::create("Ava".to_owned(), membership_id(), 3);
        let after = now();

        assert!(compute_expiration_date(before, 3) <= *member.expiration_date());
        assert!(*member.expiration_date() <= compute_expiration_date(after, 3));
    }

    #[parameterized(
        duration_months = {i32::MAX, i32::MIN},
        expected_expiration_date = {NaiveDateTime::MAX, NaiveDateTime::MIN}
    )]
    fn should_saturate_expiration_date(
        duration_months: i32,
        expected_expiration_date: NaiveDateTime,
    ) {
        let member = Member::create_at(
            "Ava".to_owned(),
            membership_id(),
            duration_months,
            date_time(2026, 10, 19),
        );

        assert_eq!(&expected_expiration_date, member.expiration_date());
    }
    // endregion

    // region renew_membership
    #[test]
    fn should_renew_inactive_membership_from_renewal_date() {
        let mut member = inactive_member(12, date_time(2026, 1, 10));
        let renewal_date = date_time(2026, 3, 10);

        let notice = member.renew_membership_at(3, renewal_date);

        assert_eq!(
            Notice::Renewed {
                name: "Ben".to_owned()
            },
            notice
        );
        assert!(member.is_active());
        assert_eq!(15, *member.duration_months());
        assert_eq!(&renewal_date, member.activated_at());
        assert_eq!(&date_time(2027, 6, 10), member.expiration_date());
    }

    #[test]
    fn should_not_renew_active_membership() {
        let now = date_time(2026, 10, 19);
        let mut member = Member::create_at("Ava".to_owned(), membership_id(), 1, now);
        let expected_member = member.clone();

        let notice = member.renew_membership_at(3, date_time(2026, 11, 1));

        assert_eq!(
            Notice::AlreadyActive {
                name: "Ava".to_owned()
            },
            notice
        );
        assert_eq!(expected_member, member);
    }

    #[test]
    fn should_only_renew_once() {
        let mut member = inactive_member(1, date_time(2026, 1, 10));
        member.renew_membership(2);
        let expected_member = member.clone();

        let notice = member.renew_membership(2);

        assert!(notice.is_rejection());
        assert_eq!(expected_member, member);
        assert_eq!(3, *member.duration_months());
    }
    // endregion

    // region cancel_membership
    #[test]
    fn should_cancel_membership() {
        let mut member = Member::create("Ava".to_owned(), membership_id(), 1);

        let notice = member.cancel_membership();

        assert_eq!(
            Notice::Cancelled {
                name: "Ava".to_owned()
            },
            notice
        );
        assert!(!member.is_active());
    }

    #[test]
    fn should_cancel_membership_once() {
        let mut member = Member::create("Ava".to_owned(), membership_id(), 1);
        member.cancel_membership();
        let expected_member = member.clone();

        let notice = member.cancel_membership();

        assert_eq!(
            Notice::AlreadyInactive {
                name: "Ava".to_owned()
            },
            notice
        );
        assert!(!member.is_active());
        assert_eq!(expected_member, member);
    }
    // endregion

    // region mark_attendance
    #[parameterized(times = {1, 2, 10})]
    fn should_mark_attendance(times: u32) {
        let mut member = Member::create("Ava".to_owned(), membership_id(), 1);

        let notices = (0..times)
            .map(|_| member.mark_attendance())
            .collect::<Vec<_>>();

        assert_eq!(times, *member.attendance_count());
        assert_eq!(
            Some(&Notice::AttendanceRecorded {
                name: "Ava".to_owned(),
                total: times
            }),
            notices.last()
        );
    }

    #[test]
    fn should_not_mark_attendance_when_inactive() {
        let mut member = Member::create("Ava".to_owned(), membership_id(), 1);
        member.mark_attendance();
        member.cancel_membership();

        let notice = member.mark_attendance();

        assert_eq!(
            Notice::AttendanceRejected {
                name: "Ava".to_owned()
            },
            notice
        );
        assert_eq!(1, *member.attendance_count());
    }

    #[test]
    fn should_mark_attendance_again_after_renewal() {
        let mut member = inactive_member(1, date_time(2026, 1, 10));
        member.renew_membership(1);

        member.mark_attendance();

        assert_eq!(1, *member.attendance_count());
    }
    // endregion
}
