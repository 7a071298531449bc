pub mod api_response;
pub mod validated_wrapper;
