pub mod create_snippet_request;
pub mod snippet_dto;
pub mod snippet_response;
pub mod snippets;
pub mod submission_dto;
pub mod submission_list_response;
