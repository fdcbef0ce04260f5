#![doc = include_str!("../README.md")]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]

pub mod class;
pub mod layout;
pub mod navigation;
pub mod prelude;

/// A clone-on-write string shared by component props.
pub type SharedString = std::borrow::Cow<'static, str>;
