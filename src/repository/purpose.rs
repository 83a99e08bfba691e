use diesel::prelude::*;

use crate::domain::purpose::{NewPurpose as DomainNewPurpose, Purpose as DomainPurpose};
use crate::models::purpose::{NewPurpose as DbNewPurpose, Purpose as DbPurpose};
use crate::repository::{DieselRepository, PurposeReader, PurposeWriter, RepositoryResult};

impl PurposeReader for DieselRepository {
    fn list_purposes(&self) -> RepositoryResult<Vec<DomainPurpose>> {
        use crate::schema::purposes;

        let mut conn = self.conn()?;
        let purposes = purposes::table
            .order((purposes::name.asc(), purposes::id.asc()))
            .load::<DbPurpose>(&mut conn)?;

        Ok(purposes.into_iter().map(Into::into).collect())
    }
}

impl PurposeWriter for DieselRepository {
    fn upsert_purpose(&self, purpose: &DomainNewPurpose) -> RepositoryResult<DomainPurpose> {
        use crate::schema::purposes;

        let mut conn = self.conn()?;
        let row = DbNewPurpose::from(purpose);

        let stored = diesel::insert_into(purposes::table)
            .values(&row)
            .on_conflict(purposes::id)
            .do_update()
            .set(&row)
            .get_result::<DbPurpose>(&mut conn)?;

        Ok(stored.into())
    }
}
