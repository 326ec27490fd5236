//! Core library components.
//!
//! The two REST clients, the local credential lookup and the `init` and
//! `hook` workflows built on top of them.

pub mod constants;
pub mod local;
pub mod provision;
pub mod register;
pub mod target;
pub mod telegram;
pub mod vercel;
pub mod webhook;
