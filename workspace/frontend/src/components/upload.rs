mod file_upload;

pub use file_upload::FileUpload;
