pub mod api;
pub mod gallery;
pub mod package;
pub mod page;
pub mod preferences;
pub mod user;

pub use api::{AuthResponse, GalleryResponse, InitialData, LoginRequest, SignUpRequest};
pub use gallery::GalleryImage;
pub use package::Package;
pub use page::Page;
pub use preferences::{Language, TextDirection, Theme};
pub use user::{Transaction, TransactionStatus, User};
