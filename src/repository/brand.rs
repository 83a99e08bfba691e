use diesel::prelude::*;

use crate::domain::brand::{Brand as DomainBrand, NewBrand as DomainNewBrand};
use crate::models::brand::{Brand as DbBrand, NewBrand as DbNewBrand};
use crate::repository::{BrandReader, BrandWriter, DieselRepository, RepositoryResult};

impl BrandReader for DieselRepository {
    fn list_brands(&self) -> RepositoryResult<Vec<DomainBrand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let items = brands::table
            .order((brands::name.asc(), brands::id.asc()))
            .load::<DbBrand>(&mut conn)?;

        Ok(items.into_iter().map(DomainBrand::from).collect())
    }
}

impl BrandWriter for DieselRepository {
    fn upsert_brand(&self, brand: &DomainNewBrand) -> RepositoryResult<DomainBrand> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let row = DbNewBrand::from(brand);

        let stored = diesel::insert_into(brands::table)
            .values(&row)
            .on_conflict(brands::id)
            .do_update()
            .set(&row)
            .get_result::<DbBrand>(&mut conn)?;

        Ok(stored.into())
    }
}
