use crate::modules::shift_requests::core::request::Request;
use crate::modules::shift_requests::core::submission::LAST_HOUR;
use crate::modules::shift_requests::use_cases::create_submission::{
    command::ProposedEntry,
    decision::{DecideError, Decision},
};
use crate::shared::infrastructure::gateway::EntryDraft;

/// Stops at the first entry that breaks a rule; input order is kept.
pub fn decide_create_submission(
    already_submitted: bool,
    request: &Request,
    entries: &[ProposedEntry],
) -> Decision {
    if already_submitted {
        return Decision::Rejected {
            reason: DecideError::AlreadySubmitted,
        };
    }
    let mut drafts = Vec::with_capacity(entries.len());
    for entry in entries {
        if !request.covers(&entry.date) {
            return Decision::Rejected {
                reason: DecideError::DateOutOfRange {
                    date: entry.date.format(),
                },
            };
        }
        if !(0..=i64::from(LAST_HOUR)).contains(&entry.hour) {
            return Decision::Rejected {
                reason: DecideError::HourOutOfRange { hour: entry.hour },
            };
        }
        drafts.push(EntryDraft {
            date: entry.date.format(),
            hour: entry.hour,
        });
    }
    Decision::Accepted { entries: drafts }
}
