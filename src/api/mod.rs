pub mod request;
pub mod response;
pub mod routes;

pub use request::AuthorizeRequest;
pub use response::AuthorizeResponse;
pub use routes::{create_router, AppState};
