pub mod request_body;
pub mod request_params;

pub use request_body::ApiJson;
pub use request_params::{ApiPath, PageParam};
