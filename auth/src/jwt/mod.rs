pub mod claims;
pub mod codec;
pub mod errors;
pub mod handler;

pub use claims::AccessClaims;
pub use claims::Expiring;
pub use claims::RefreshClaims;
pub use codec::TokenCodec;
pub use errors::JwtError;
pub use handler::JwtHandler;
