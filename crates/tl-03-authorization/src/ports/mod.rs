pub mod inbound;
pub mod outbound;

pub use inbound::AuthorizationApi;
pub use outbound::ContentStore;
