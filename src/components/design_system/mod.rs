//! Design System Components
//!
//! Reusable UI building blocks shared by the chat and documents views.

mod badge;
mod button;
mod card;
mod input;
mod loading;
mod modal;
mod toast;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use card::{Card, CardBody, CardHeader};
pub use input::Input;
pub use loading::{LoadingSpinner, TypingIndicator};
pub use modal::Modal;
pub use toast::NotificationToast;
