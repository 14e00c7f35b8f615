pub mod form;
pub mod notice;
pub mod pages;

pub use form::{FormError, FormFields};
pub use notice::{redirect_with_notice, NoticeQuery};
pub use pages::PageRenderer;
