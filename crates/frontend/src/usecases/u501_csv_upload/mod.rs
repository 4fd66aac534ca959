mod reader;
pub mod view;

pub use view::UploadPage;
