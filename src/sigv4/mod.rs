mod credentials;
mod signer;

pub use credentials::Credentials;
pub(crate) use signer::SigningRequest;
pub use signer::SigV4Signer;
