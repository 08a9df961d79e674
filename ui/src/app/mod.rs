pub mod app_services;
pub mod home_page;
pub mod sign_up_page;

pub use app_services::{AppServices, BlogServices};
pub use home_page::HomePage;
pub use sign_up_page::SignUpPage;
