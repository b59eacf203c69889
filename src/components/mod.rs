pub mod app;
pub mod footer;
pub mod header;
pub mod pages;

pub use app::App;
pub use footer::Footer;
pub use header::{Header, UserMenu};
pub use pages::{
    DashboardPage, HomePage, LoadingScreen, LoginPage, ProfilePage, SignUpPage, StudioPage,
};
