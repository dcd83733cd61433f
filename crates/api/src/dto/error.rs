use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct ErrorBody {
    pub error: String,
}
