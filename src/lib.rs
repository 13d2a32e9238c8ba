#![allow(non_camel_case_types)]

pub mod pw;
pub mod spa;

mod glue;

pub use glue::*;
