//! Reusable UI components

mod button;
mod toast;

pub use button::render_button;
pub use toast::render_toasts;
