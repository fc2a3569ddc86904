pub mod blog;
pub mod celebrate;
pub mod celebration;
pub mod home;
pub mod not_found;
pub mod photos;

pub use blog::Blog;
pub use celebrate::Celebrate;
pub use celebration::CelebrationHub;
pub use home::Home;
pub use not_found::NotFound;
pub use photos::Photos;
