use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::banner::{Banner, NewBanner};
use crate::domain::types::BannerId;
use crate::models::banner::{Banner as DbBanner, NewBanner as DbNewBanner};
use crate::repository::{BannerReader, BannerWriter, DieselRepository};

/// Convert rows one by one, skipping the ones that fail validation so a
/// single bad row does not hide the rest.
fn valid_banners(rows: Vec<DbBanner>) -> Vec<Banner> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            match Banner::try_from(row) {
                Ok(banner) => Some(banner),
                Err(e) => {
                    log::warn!("Skipping invalid banner row {id}: {e}");
                    None
                }
            }
        })
        .collect()
}

impl BannerReader for DieselRepository {
    fn list_active_banners(&self) -> RepositoryResult<Vec<Banner>> {
        use crate::schema::banners;

        let mut conn = self.conn()?;

        let items = banners::table
            .filter(banners::is_active.eq(true))
            .order((banners::order_position.asc(), banners::id.asc()))
            .load::<DbBanner>(&mut conn)?;

        Ok(valid_banners(items))
    }

    fn list_banners(&self) -> RepositoryResult<Vec<Banner>> {
        use crate::schema::banners;

        let mut conn = self.conn()?;

        let items = banners::table
            .order((banners::order_position.asc(), banners::id.asc()))
            .load::<DbBanner>(&mut conn)?;

        Ok(valid_banners(items))
    }

    fn get_banner_by_id(&self, id: BannerId) -> RepositoryResult<Option<Banner>> {
        use crate::schema::banners;

        let mut conn = self.conn()?;

        let banner = banners::table
            .filter(banners::id.eq(id.get()))
            .first::<DbBanner>(&mut conn)
            .optional()?;

        let banner = banner.map(TryInto::try_into).transpose()?;
        Ok(banner)
    }
}

impl BannerWriter for DieselRepository {
    fn create_banner(&self, banner: &NewBanner) -> RepositoryResult<usize> {
        use crate::schema::banners;

        let mut conn = self.conn()?;
        let db_banner: DbNewBanner = banner.clone().into();

        let affected = diesel::insert_into(banners::table)
            .values(db_banner)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn set_banner_active(&self, id: BannerId, is_active: bool) -> RepositoryResult<usize> {
        use crate::schema::banners;

        let mut conn = self.conn()?;

        let affected = diesel::update(banners::table.filter(banners::id.eq(id.get())))
            .set((
                banners::is_active.eq(is_active),
                banners::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_banner(&self, id: BannerId) -> RepositoryResult<usize> {
        use crate::schema::banners;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(banners::table.filter(banners::id.eq(id.get()))).execute(&mut conn)?;

        Ok(affected)
    }
}
