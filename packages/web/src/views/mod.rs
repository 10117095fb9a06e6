mod home;
pub use home::Home;

mod shorts;
pub use shorts::Shorts;

mod not_found;
pub use not_found::NotFound;
