//! List/search view services.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::dates::format_form_date;
use crate::domain::policy::Policy;
use crate::dto::search::{AccountSearchRow, PolicyListFilter, PolicySummary, ProgramSearchRow};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{AccountReader, ProgramReader};
use crate::services::session::screen_role;
use crate::services::{ServiceError, ServiceResult};

/// Program search variants; the column set differs per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgramSearchBy {
    ProgramName,
    ProducerCode,
}

impl FromStr for ProgramSearchBy {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "program_name" => Ok(ProgramSearchBy::ProgramName),
            "producer_code" => Ok(ProgramSearchBy::ProducerCode),
            other => Err(ServiceError::Validation(format!(
                "Invalid search type: {other}"
            ))),
        }
    }
}

/// Runs the program search for the chosen variant.
///
/// Producer-code search joins the agent roster and drops rows without an
/// agent code; name search lists every program.
pub fn search_program_records<R>(
    repo: &R,
    user: &AuthenticatedUser,
    search_by: ProgramSearchBy,
) -> ServiceResult<Vec<ProgramSearchRow>>
where
    R: ProgramReader + ?Sized,
{
    screen_role(user)?;

    let rows = match search_by {
        ProgramSearchBy::ProgramName => repo
            .list_programs()?
            .into_iter()
            .map(|program| ProgramSearchRow {
                program_name: program.program_name,
                onboard_date: format_form_date(program.onboard_dt),
                agent_code: None,
                agent_name: None,
            })
            .collect(),
        ProgramSearchBy::ProducerCode => repo
            .list_programs_with_agents()?
            .into_iter()
            .map(|(agent, program)| ProgramSearchRow {
                program_name: program.program_name,
                onboard_date: format_form_date(program.onboard_dt),
                agent_code: agent.agent_code,
                agent_name: agent.agent_name,
            })
            .collect(),
    };

    Ok(rows)
}

/// Type-ahead account search on customer name or number.
pub fn search_account_records<R>(
    repo: &R,
    user: &AuthenticatedUser,
    term: &str,
) -> ServiceResult<Vec<AccountSearchRow>>
where
    R: AccountReader + ?Sized,
{
    screen_role(user)?;

    let term = term.trim();
    if term.is_empty() {
        return Ok(Vec::new());
    }

    let rows = repo
        .search_accounts(term)?
        .into_iter()
        .map(|account| AccountSearchRow {
            customer_num: account.customer_num,
            customer_name: account.customer_name,
            acct_status: account.acct_status,
            onboard_date: format_form_date(account.onboard_date),
        })
        .collect();

    Ok(rows)
}

/// Numeric-aware string comparison ("HN9" sorts before "HN10").
fn natural_compare(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        match (a_chars.peek().copied(), b_chars.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ac), Some(bc)) => {
                if ac.is_ascii_digit() && bc.is_ascii_digit() {
                    let mut a_num = String::new();
                    while let Some(&c) = a_chars.peek() {
                        if !c.is_ascii_digit() {
                            break;
                        }
                        a_num.push(c);
                        a_chars.next();
                    }
                    let mut b_num = String::new();
                    while let Some(&c) = b_chars.peek() {
                        if !c.is_ascii_digit() {
                            break;
                        }
                        b_num.push(c);
                        b_chars.next();
                    }
                    let a_val: u64 = a_num.parse().unwrap_or(0);
                    let b_val: u64 = b_num.parse().unwrap_or(0);
                    match a_val.cmp(&b_val) {
                        Ordering::Equal => {}
                        other => return other,
                    }
                } else {
                    match ac.cmp(&bc) {
                        Ordering::Equal => {
                            a_chars.next();
                            b_chars.next();
                        }
                        other => return other,
                    }
                }
            }
        }
    }
}

/// Projects and orders the policy browser rows: by policy number, then the
/// latest mod first, both numeric-aware; filters match the browser inputs.
pub fn policy_summaries(policies: &[Policy], filter: &PolicyListFilter) -> Vec<PolicySummary> {
    let mut rows: Vec<PolicySummary> = policies
        .iter()
        .filter(|policy| {
            filter
                .status
                .as_deref()
                .is_none_or(|status| policy.policy_status.as_deref() == Some(status))
                && filter
                    .policy_num
                    .as_deref()
                    .is_none_or(|num| policy.policy_num.contains(num))
                && filter.policy_type.as_deref().is_none_or(|ty| {
                    policy
                        .policy_type
                        .as_deref()
                        .is_some_and(|value| value.contains(ty))
                })
        })
        .filter_map(|policy| {
            policy.pk_number.map(|pk_number| PolicySummary {
                pk_number,
                pol_pref: policy.pol_pref.clone().unwrap_or_default(),
                policy_num: policy.policy_num.clone(),
                pol_mod: policy.pol_mod.clone(),
                account_name: policy.account_name.clone().unwrap_or_default(),
                incept_date: format_form_date(policy.incept_date),
                exp_date: format_form_date(policy.exp_date),
                policy_type: policy.policy_type.clone().unwrap_or_default(),
                policy_status: policy.policy_status.clone().unwrap_or_default(),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        natural_compare(&a.policy_num, &b.policy_num)
            .then_with(|| natural_compare(&b.pol_mod, &a.pol_mod))
    });

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(pk: i32, num: &str, mod_: &str, status: &str) -> Policy {
        Policy {
            pk_number: Some(pk),
            policy_num: num.to_string(),
            pol_mod: mod_.to_string(),
            policy_status: Some(status.to_string()),
            ..Policy::default()
        }
    }

    #[test]
    fn natural_compare_orders_embedded_numbers() {
        assert_eq!(natural_compare("HN9", "HN10"), Ordering::Less);
        assert_eq!(natural_compare("HN10", "HN9"), Ordering::Greater);
        assert_eq!(natural_compare("HN10", "HN10"), Ordering::Equal);
        assert_eq!(natural_compare("AB1", "AC1"), Ordering::Less);
    }

    #[test]
    fn latest_mod_sorts_first_within_a_policy() {
        let policies = vec![
            policy(1, "HN5501", "00", "Expired Mod"),
            policy(2, "HN5501", "02", "Active"),
            policy(3, "HN5501", "01", "Expired Mod"),
            policy(4, "HN549", "00", "Active"),
        ];

        let rows = policy_summaries(&policies, &PolicyListFilter::default());
        let keys: Vec<(String, String)> = rows
            .into_iter()
            .map(|r| (r.policy_num, r.pol_mod))
            .collect();

        assert_eq!(
            keys,
            vec![
                ("HN549".to_string(), "00".to_string()),
                ("HN5501".to_string(), "02".to_string()),
                ("HN5501".to_string(), "01".to_string()),
                ("HN5501".to_string(), "00".to_string()),
            ]
        );
    }

    #[test]
    fn filters_narrow_the_rows() {
        let policies = vec![
            policy(1, "HN5501", "00", "Active"),
            policy(2, "HN5502", "00", "Canceled"),
        ];

        let filter = PolicyListFilter {
            status: Some("Active".to_string()),
            ..PolicyListFilter::default()
        };
        let rows = policy_summaries(&policies, &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].policy_num, "HN5501");

        let filter = PolicyListFilter {
            policy_num: Some("5502".to_string()),
            ..PolicyListFilter::default()
        };
        let rows = policy_summaries(&policies, &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].policy_num, "HN5502");
    }
}
