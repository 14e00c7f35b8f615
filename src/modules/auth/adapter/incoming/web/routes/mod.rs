mod login;
mod logout;

pub use login::{login_handler, login_page_handler};
pub use logout::logout_handler;
