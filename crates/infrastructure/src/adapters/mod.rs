//! Port implementations backed by reqwest.

mod callback;
mod reqwest_client;

pub use callback::HttpCallbackNotifier;
pub use reqwest_client::ReqwestHttpClient;
