//! zbx-core - Core types for the Zabbix JSON-RPC API toolkit.

pub mod auth;
pub mod error;
pub mod params;
pub mod resources;
pub mod traits;
pub mod types;

pub use auth::AuthScheme;
pub use error::{
    ApiError, AuthError, ConfigError, DecodeError, Error, ProjectionError, TransportError,
};
pub use params::{GetParameters, OUTPUT_COUNT, OUTPUT_EXTEND, SORT_ASC, SORT_DESC};
pub use resources::{
    Host, HostCreateResponse, HostDeleteResponse, HostGetParameters, HostGroup,
    HostGroupGetParameters, HostInterface, HostUpdateResponse, InterfaceDetails, Inventory, Macro,
    Problem, ProblemGetParameters, Proxy, ProxyCreateParameters, ProxyCreateResponse,
    ProxyDeleteResponse, ProxyGetParameters, Tag, Template, TemplateGetParameters, Token,
    TokenCreateResponse, TokenDeleteResponse, TokenGenerateResponse,
};
pub use traits::ManagementApi;
pub use types::{ApiUrl, BearerToken};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
