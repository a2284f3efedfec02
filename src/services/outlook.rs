//! Outlook compose deep links for mailing a distribution list.

use serde::Serialize;

use crate::domain::distribution::{DistributionEntry, DistributionList};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DistributionReader;
use crate::services::session::screen_role;
use crate::services::{ServiceError, ServiceResult};

pub const OUTLOOK_COMPOSE_BASE_URL: &str = "https://outlook.office.com/mail/deeplink/compose";

#[derive(Serialize)]
struct ComposeQuery<'a> {
    to: String,
    subject: &'a str,
    body: &'a str,
}

/// De-duplicates the recipient emails of a distribution list, preserving
/// order; returns the recipients and how many entries were filtered out
/// (blank or repeated addresses).
pub fn extract_recipients(entries: &[DistributionEntry]) -> (Vec<String>, usize) {
    let mut recipients = Vec::new();
    let mut filtered_out = 0;

    for entry in entries {
        let email = entry.email_address.trim();
        if email.is_empty() {
            continue;
        }
        if recipients.iter().any(|existing| existing == email) {
            filtered_out += 1;
            continue;
        }
        recipients.push(email.to_string());
    }

    (recipients, filtered_out)
}

/// Builds the compose URL for the given recipients.
pub fn build_compose_link(
    entries: &[DistributionEntry],
    subject: Option<&str>,
    body: Option<&str>,
) -> ServiceResult<String> {
    let (recipients, filtered_out) = extract_recipients(entries);
    if recipients.is_empty() {
        return Err(ServiceError::Validation(
            "No recipients with email addresses".to_string(),
        ));
    }
    if filtered_out > 0 {
        log::info!("Filtered {filtered_out} duplicate distribution recipients");
    }

    let query = ComposeQuery {
        to: recipients.join(";"),
        subject: subject.unwrap_or_default(),
        body: body.unwrap_or_default(),
    };
    let query = serde_html_form::to_string(&query)
        .map_err(|err| ServiceError::Internal(format!("Failed to encode compose link: {err}")))?;

    Ok(format!("{OUTLOOK_COMPOSE_BASE_URL}?{query}"))
}

/// Loads a record's distribution list and builds the compose link for it.
pub fn compose_distribution_email<R>(
    repo: &R,
    user: &AuthenticatedUser,
    owner: &str,
    list: DistributionList,
    subject: Option<&str>,
    body: Option<&str>,
) -> ServiceResult<String>
where
    R: DistributionReader + ?Sized,
{
    screen_role(user)?;
    let entries = repo.list_distribution(owner, list)?;
    build_compose_link(&entries, subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(attn: &str, email: &str) -> DistributionEntry {
        DistributionEntry {
            owner: "C104233".to_string(),
            list: DistributionList::LossRun,
            recipient_category: "Account Owner".to_string(),
            attn_to: attn.to_string(),
            email_address: email.to_string(),
            dist_via: "Email".to_string(),
        }
    }

    #[test]
    fn recipients_are_deduplicated_in_order() {
        let entries = vec![
            entry("A", "a@example.com"),
            entry("B", ""),
            entry("C", "c@example.com"),
            entry("D", "a@example.com"),
        ];

        let (recipients, filtered_out) = extract_recipients(&entries);
        assert_eq!(recipients, vec!["a@example.com", "c@example.com"]);
        assert_eq!(filtered_out, 1);
    }

    #[test]
    fn compose_link_carries_recipients_and_subject() {
        let entries = vec![entry("A", "a@example.com"), entry("C", "c@example.com")];
        let link =
            build_compose_link(&entries, Some("Q3 Loss Run"), Some("Attached.")).unwrap();

        assert!(link.starts_with(OUTLOOK_COMPOSE_BASE_URL));
        assert!(link.contains("a%40example.com%3Bc%40example.com"));
        assert!(link.contains("subject=Q3+Loss+Run"));
    }

    #[test]
    fn empty_list_is_a_validation_error() {
        let err = build_compose_link(&[], None, None).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
