pub mod api_client;

pub use api_client::BackendApi;
#[cfg(target_arch = "wasm32")]
pub use api_client::ApiClient;
