//! Distribution-list sync fired by contact-assignment changes.
//!
//! When an account owner, loss-control rep or underwriter assignment
//! changes, the loss-run and claim-review recipient lists follow
//! immediately: the old attention-to entry is removed from both lists and
//! the new selection inserted, resolved against its reference list.
//!
//! The sync is best effort. Every one of the four operations is attempted
//! regardless of individual failures, a failure is reported to the caller,
//! and the field edit that triggered the sync is never reverted. Handlers
//! run the calls synchronously in request order, so two changes to the same
//! record cannot interleave their delete/insert pairs; the lists converge on
//! the last writer.

use validator::Validate;

use crate::domain::distribution::{ContactField, DistributionEntry, DistributionList};
use crate::domain::types::ContactEmail;
use crate::forms::contact::ContactChangeForm;
use crate::forms::first_validation_message;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{DistributionWriter, ReferenceReader};
use crate::services::session::screen_role;
use crate::services::{ServiceError, ServiceResult};

/// Which screen the contact change came from; decides the recipient
/// category written into the lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactScreen {
    Program,
    Account,
    PolicyType,
}

fn recipient_category(
    screen: ContactScreen,
    field: ContactField,
    staff_title: Option<&str>,
) -> String {
    match field {
        ContactField::LossCtlRep1 => "Risk Solutions Consultant".to_string(),
        ContactField::LossCtlRep2 => "Risk Solutions Rep".to_string(),
        ContactField::Underwriter => "Underwriter".to_string(),
        ContactField::AcctOwner => match screen {
            // The account screen carries the owner's staff title through.
            ContactScreen::Account => staff_title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or("Account Owner")
                .to_string(),
            _ => "Account Owner".to_string(),
        },
    }
}

/// Applies one contact change to both distribution lists.
///
/// An unknown selection (free-typed text that matches no reference entry)
/// is a no-op, matching the screens that only sync resolved selections.
pub fn sync_contact_change<R>(
    repo: &R,
    user: &AuthenticatedUser,
    screen: ContactScreen,
    form: &ContactChangeForm,
) -> ServiceResult<()>
where
    R: ReferenceReader + DistributionWriter + ?Sized,
{
    screen_role(user)?;
    form.validate()
        .map_err(|errors| ServiceError::Validation(first_validation_message(&errors)))?;

    let field: ContactField = form
        .field
        .parse()
        .map_err(|_| ServiceError::Validation(format!("Unknown contact field: {}", form.field)))?;

    let new_value = form.new_value.trim();
    if new_value.is_empty() {
        return Ok(());
    }

    let (attn_to, email_address, staff_title) = if field.uses_staff_directory() {
        match repo.find_staff_by_name(new_value)? {
            Some(contact) => (contact.name, contact.email, contact.title),
            None => return Ok(()),
        }
    } else {
        match repo.find_rep_by_name(new_value)? {
            Some(rep) => (rep.rep_name, rep.email, None),
            None => return Ok(()),
        }
    };

    // Recipient addresses are normalized when they parse; a malformed
    // directory entry is carried through untouched rather than dropped.
    let email_address = email_address
        .map(|email| {
            ContactEmail::new(email.as_str())
                .map(ContactEmail::into_inner)
                .unwrap_or(email)
        })
        .unwrap_or_default();

    let category = recipient_category(screen, field, staff_title.as_deref());
    let old_value = form.old_value.trim();
    let mut failures: Vec<String> = Vec::new();

    for list in DistributionList::BOTH {
        if !old_value.is_empty() {
            if let Err(err) = repo.delete_distribution_entry(&form.owner, list, old_value) {
                log::error!("Failed to remove {old_value} from {list} distribution: {err}");
                failures.push(format!("remove from {list}"));
            }
        }
    }

    for list in DistributionList::BOTH {
        let entry = DistributionEntry {
            owner: form.owner.clone(),
            list,
            recipient_category: category.clone(),
            attn_to: attn_to.clone(),
            email_address: email_address.clone(),
            dist_via: "Email".to_string(),
        };
        if let Err(err) = repo.upsert_distribution_entry(&entry) {
            log::error!("Failed to add {attn_to} to {list} distribution: {err}");
            failures.push(format!("add to {list}"));
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::DistributionSync(failures.join(", ")))
    }
}
