pub mod feedback;
pub mod feedback_dto;
pub mod feedback_response;
pub mod submit_feedback_request;
