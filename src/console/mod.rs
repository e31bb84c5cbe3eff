use crate::config::AppConfig;
use crate::console::input::{Choice, InputError, describe_plans, parse_duration};
use crate::error::{ApplicationError, Result};
use crate::member::membership_id::MembershipId;
use crate::notice::{Notice, Notifier};
use crate::registry::MembershipRegistry;
use rand::Rng;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::ops::ControlFlow::{Break, Continue};

pub mod input;

/// The line-based menu operators use to manage members.
///
/// Reaching the end of the input has the same effect as choosing to exit.
pub struct Console<'a, I: BufRead, O: Write> {
    input: I,
    output: O,
    config: &'a AppConfig,
}

impl<'a, I: BufRead, O: Write> Console<'a, I, O> {
    pub fn new(input: I, output: O, config: &'a AppConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    pub fn run<G: Rng, N: Notifier>(
        &mut self,
        registry: &mut MembershipRegistry<G, N>,
    ) -> Result<()> {
        loop {
            self.display_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let choice = match line.parse::<Choice>() {
                Ok(Choice::Exit) => break,
                Ok(choice) => choice,
                Err(e) => {
                    debug!("{e:?}");
                    writeln!(self.output, "\n{e}\n")?;
                    continue;
                }
            };

            match self.execute(choice, registry) {
                Ok(Continue(())) => {}
                Ok(Break(())) => break,
                Err(ApplicationError::Registry(e)) => {
                    writeln!(self.output, "\n{e}\n")?;
                }
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "\nExiting the system. Thank you!\n")?;
        Ok(())
    }

    fn display_menu(&mut self) -> Result<()> {
        for choice in Choice::ALL {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    /// Break when the input is exhausted before the command is complete.
    fn execute<G: Rng, N: Notifier>(
        &mut self,
        choice: Choice,
        registry: &mut MembershipRegistry<G, N>,
    ) -> Result<ControlFlow<()>> {
        match choice {
            Choice::AddMember => {
                writeln!(self.output)?;
                let Some(name) = self.prompt("Enter member name: ")? else {
                    return Ok(Break(()));
                };
                let Some(duration_months) = self.prompt_duration()? else {
                    return Ok(Break(()));
                };
                registry.add_member(name, duration_months)?;
            }
            Choice::DisplayMembers => {
                registry.display_members(&mut self.output, self.config.date_format())?;
            }
            Choice::Exit => return Ok(Break(())),
            Choice::RemoveMember => {
                let Some(membership_id) = self.prompt_membership_id()? else {
                    return Ok(Break(()));
                };
                registry.remove_member(&membership_id);
            }
            Choice::MarkAttendance => {
                let Some(membership_id) = self.prompt_membership_id()? else {
                    return Ok(Break(()));
                };
                let notice = registry.mark_attendance(&membership_id);
                self.report_unknown_member(notice, &membership_id)?;
            }
            Choice::CancelMembership => {
                let Some(membership_id) = self.prompt_membership_id()? else {
                    return Ok(Break(()));
                };
                let notice = registry.cancel_membership(&membership_id);
                self.report_unknown_member(notice, &membership_id)?;
            }
            Choice::RenewMembership => {
                let Some(membership_id) = self.prompt_membership_id()? else {
                    return Ok(Break(()));
                };
                let Some(additional_months) = self.prompt_duration()? else {
                    return Ok(Break(()));
                };
                let notice = registry.renew_membership(&membership_id, additional_months);
                self.report_unknown_member(notice, &membership_id)?;
            }
        }

        Ok(Continue(()))
    }

    fn report_unknown_member(
        &mut self,
        notice: Option<Notice>,
        membership_id: &MembershipId,
    ) -> Result<()> {
        if notice.is_none() {
            writeln!(self.output, "No member found with ID {membership_id}.")?;
        }
        Ok(())
    }

    /// Ask for a number of months until a valid one is given.
    fn prompt_duration(&mut self) -> Result<Option<i32>> {
        let text = format!("Choose membership plan ({}): ", describe_plans(self.config));
        self.prompt_until_valid(&text, parse_duration)
    }

    /// Ask for a membership id until a well-formed one is given.
    fn prompt_membership_id(&mut self) -> Result<Option<MembershipId>> {
        self.prompt_until_valid("Enter membership ID: ", |line, _| {
            line.parse::<MembershipId>().map_err(InputError::from)
        })
    }

    fn prompt_until_valid<T, F>(&mut self, text: &str, parse: F) -> Result<Option<T>>
    where
        F: Fn(&str, &AppConfig) -> Result<T, InputError>,
    {
        while let Some(line) = self.prompt(text)? {
            match parse(&line, self.config) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    warn!("Invalid input [input: {line}]\n{e:?}");
                    writeln!(self.output, "{e}")?;
                }
            }
        }

        Ok(None)
    }

    /// Write `text`, then read a line. Return `None` once the input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input reached.");
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}
