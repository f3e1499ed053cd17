pub mod directory_path;
pub mod output_folder;
pub mod path_error;

pub use directory_path::DirectoryPath;
pub use output_folder::OutputFolder;
pub use path_error::PathError;
