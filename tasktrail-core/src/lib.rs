//! # tasktrail-core
//!
//! Business logic of the activity trail: repository traits, use cases and
//! the feed message renderer. Persistence and delivery are provided by the
//! adapter crates.

pub mod entities {
    pub use tasktrail_entities::{
        activity::*, board::*, column::*, id::*, task::*, time::*, user::*,
    };
}

pub mod feed;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;
