pub mod fetching;
pub mod imaging;
pub mod messages;
pub mod state;

pub use state::*;
