//! Resource record types for the remote API.
//!
//! These are external data contracts: the session and dispatch core treats
//! them as opaque payloads. IDs and timestamps are kept as strings where the
//! remote renders them that way.

mod host;
mod hostgroup;
mod interface;
mod inventory;
mod macros;
mod problem;
mod proxy;
mod tag;
mod template;
mod token;

pub use host::{
    Host, HostCreateResponse, HostDeleteResponse, HostGetParameters, HostUpdateResponse,
    HOST_STATUS_MONITORED, HOST_STATUS_UNMONITORED, MONITORED_BY_PROXY, MONITORED_BY_PROXY_GROUP,
    MONITORED_BY_SERVER, TLS_CERT, TLS_NO_ENCRYPTION, TLS_PSK,
};
pub use hostgroup::{HostGroup, HostGroupGetParameters};
pub use interface::{
    HostInterface, InterfaceDetails, INTERFACE_AGENT, INTERFACE_IPMI, INTERFACE_JMX,
    INTERFACE_SNMP,
};
pub use inventory::Inventory;
pub use macros::Macro;
pub use problem::{
    Problem, ProblemAcknowledge, ProblemGetParameters, ProblemMediaUrl, ProblemSuppressionRef,
    ProblemTag, ProblemTagFilter,
};
pub use proxy::{
    Proxy, ProxyCreateParameters, ProxyCreateResponse, ProxyDeleteResponse, ProxyGetParameters,
    PROXY_MODE_ACTIVE, PROXY_MODE_PASSIVE,
};
pub use tag::Tag;
pub use template::{Template, TemplateGetParameters};
pub use token::{Token, TokenCreateResponse, TokenDeleteResponse, TokenGenerateResponse};
