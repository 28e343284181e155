mod get_session;
mod request_code;
mod verify_code;

pub use get_session::{__path_get_session_handler, get_session_handler};
pub use request_code::{
    CodeSent, RequestCodeRequest, __path_request_code_handler, request_code_handler,
};
pub use verify_code::{VerifyCodeRequest, __path_verify_code_handler, verify_code_handler};
