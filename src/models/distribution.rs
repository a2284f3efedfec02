use diesel::prelude::*;

use crate::domain::distribution::{DistributionEntry as DomainEntry, DistributionList};
use crate::domain::types::TypeConstraintError;

/// Diesel row model for a distribution-list entry.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::distribution_entries)]
pub struct DistributionEntry {
    pub id: i32,
    pub owner: String,
    pub kind: String,
    pub recipient_category: String,
    pub attn_to: String,
    pub email_address: String,
    pub dist_via: String,
}

/// Insertable form of [`DistributionEntry`], also used for the upsert.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::distribution_entries)]
pub struct NewDistributionEntry {
    pub owner: String,
    pub kind: String,
    pub recipient_category: String,
    pub attn_to: String,
    pub email_address: String,
    pub dist_via: String,
}

impl TryFrom<DistributionEntry> for DomainEntry {
    type Error = TypeConstraintError;

    fn try_from(record: DistributionEntry) -> Result<Self, Self::Error> {
        let list: DistributionList = record.kind.parse()?;
        Ok(DomainEntry {
            owner: record.owner,
            list,
            recipient_category: record.recipient_category,
            attn_to: record.attn_to,
            email_address: record.email_address,
            dist_via: record.dist_via,
        })
    }
}

impl From<&DomainEntry> for NewDistributionEntry {
    fn from(entry: &DomainEntry) -> Self {
        Self {
            owner: entry.owner.clone(),
            kind: entry.list.as_str().to_string(),
            recipient_category: entry.recipient_category.clone(),
            attn_to: entry.attn_to.clone(),
            email_address: entry.email_address.clone(),
            dist_via: entry.dist_via.clone(),
        }
    }
}
