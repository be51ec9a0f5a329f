pub mod call_service;
pub mod identity_provider;
pub mod token;

pub use call_service::CallServiceClient;
pub use identity_provider::IdentityClient;
