pub mod budget;
pub mod category;
pub mod daily;
pub mod summary;
pub mod ui;
