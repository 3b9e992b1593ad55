pub mod controller;
pub mod keyboard;
pub mod media;
pub mod session;

pub use controller::*;
pub use keyboard::*;
pub use media::*;
pub use session::*;
