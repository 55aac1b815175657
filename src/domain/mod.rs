pub mod banner;
pub mod category;
pub mod navigation;
pub mod types;
