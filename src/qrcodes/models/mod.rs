pub mod function_event;
pub mod function_response;
pub mod generated_qr_code;
pub mod logo_placement;
pub mod render_request;
