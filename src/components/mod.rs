mod home;
mod layout;
mod random;

pub use home::Home;
pub use layout::DefaultLayout;
pub use random::Random;
