pub mod dashboard;
pub mod notify;

pub use dashboard::{Dashboard, Modal};
pub use notify::{Notice, NoticeLevel, Notices};
