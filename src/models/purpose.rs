use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::purpose::{NewPurpose as DomainNewPurpose, Purpose as DomainPurpose};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::purposes)]
pub struct Purpose {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::purposes)]
pub struct NewPurpose<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Purpose> for DomainPurpose {
    fn from(value: Purpose) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewPurpose> for NewPurpose<'a> {
    fn from(value: &'a DomainNewPurpose) -> Self {
        Self {
            id: value.id.as_str(),
            name: value.name.as_str(),
            updated_at: value.updated_at,
        }
    }
}
