pub mod mock_upstream;

pub use mock_upstream::{gemini_reply, MockUpstream};
