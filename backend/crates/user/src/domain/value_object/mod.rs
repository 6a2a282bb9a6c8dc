//! Value Objects

pub mod email;
pub mod user_name;
pub mod wallet_address;

pub use email::{Email, EmailError};
pub use user_name::{UserName, UserNameError};
pub use wallet_address::WalletAddress;
