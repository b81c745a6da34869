mod detail;
mod home;

pub use detail::DetailPage;
pub use home::HomePage;
