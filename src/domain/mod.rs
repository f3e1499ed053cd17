pub mod folder;
pub mod image_stat;
pub mod scale_decision;
pub mod upscale;

// --- public re-exports ---
pub use folder::{DirectoryPath, OutputFolder, PathError};
pub use image_stat::{DecodeError, ImageStat};
pub use scale_decision::{ScaleDecision, SkipReason, TargetMegapixels, TooLargeError};
pub use upscale::{upscale_file, UpscaleError};
