pub mod banners;
pub mod categories;
