pub mod dashboard;
pub mod format;
pub mod home;
pub mod panels;
pub mod table;
