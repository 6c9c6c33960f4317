pub mod client;
pub mod playlist;
pub mod token;
pub mod video;

pub use client::YouTube;
pub use token::Token;
