//! Access to the Tolgee translation service.
//!
//! ## Module Structure
//!
//! - `transport`: the "send request, get status and body" seam, backed by reqwest
//! - `client`: fetching and pushing translations over that seam

mod client;
mod transport;

pub use client::{NAMESPACE, RemoteClient, Resolution};
pub use transport::{
    HttpClientConfig, HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport,
    build_http_client,
};
