//! User Interface Components
//!
//! Reusable Dioxus components for the blog front-end:
//!
//! - **forms**: the account sign-up form
//! - **input**: labelled inputs, password input, loading button
//! - **feed**: home feed, trending list, post cards
//! - **display**: loading and error status lines

pub mod display;
pub mod feed;
pub mod forms;
pub mod input;
