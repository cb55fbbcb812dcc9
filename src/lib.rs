#![allow(clippy::type_complexity)]

pub mod assets;
pub mod body;
pub mod config;
pub mod err;
pub mod http;
pub mod opt;
pub mod texts;
