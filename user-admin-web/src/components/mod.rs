pub mod providers;

mod button;
mod error;
mod input;
mod loader;
mod toasts;

pub use button::Button;
pub use error::Error;
pub use input::Input;
pub use loader::Loader;
pub use toasts::Toasts;
