use serde::Serialize;

#[derive(Serialize)]
pub struct AddMediaResponse {
    pub result: bool,
    pub media_id: i32,
}

impl AddMediaResponse {
    pub fn new(media_id: i32) -> Self {
        Self {
            result: true,
            media_id,
        }
    }
}
