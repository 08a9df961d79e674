pub mod loading_button;
pub mod password_input;
pub mod text_input;

pub use loading_button::*;
pub use password_input::*;
pub use text_input::*;
