pub mod editor;
pub mod fs;
pub mod navigation;
