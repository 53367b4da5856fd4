pub mod basic;
pub mod codec;
pub mod credentials;
pub mod factory;
pub mod policy;
pub mod resolver;
pub mod scheme;
pub mod session;
pub mod store;

pub use basic::BasicAuth;
pub use factory::build_auth_scheme;
pub use policy::{PathPolicy, require_auth};
pub use resolver::PrincipalResolver;
pub use scheme::{AuthOutcome, AuthScheme, BaseAuth};
pub use session::SessionAuth;
pub use store::{SessionStore, UserStore};
