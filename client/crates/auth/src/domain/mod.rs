//! Auth Domain Layer

pub mod entity;
pub mod gateway;
pub mod value_object;
