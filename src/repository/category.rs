use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, CategorySlug};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::name.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                Category::try_from(row)
                    .map_err(|e| log::warn!("Skipping invalid category row {id}: {e}"))
                    .ok()
            })
            .collect::<Vec<Category>>();

        Ok(items)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(id.get()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }

    fn get_category_by_slug(&self, slug: &CategorySlug) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::slug.eq(slug.as_str()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let affected = diesel::insert_into(categories::table)
            .values(db_category)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
