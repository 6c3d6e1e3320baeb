//! Value Objects for the Auth Domain

pub mod alias;
pub mod credentials;
pub mod token;

pub use alias::ApplicationAlias;
pub use credentials::Credentials;
pub use token::AuthToken;
