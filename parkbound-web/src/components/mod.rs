pub mod banner;
pub mod cookie_banner;
pub mod footer;
pub mod header;
pub mod lightbox;
pub mod loading;

pub use banner::Banner;
pub use cookie_banner::CookieBanner;
pub use footer::Footer;
pub use header::Header;
pub use lightbox::Lightbox;
pub use loading::LoadingScreen;
