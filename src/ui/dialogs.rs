use std::path::PathBuf;

use rfd::FileDialog;

use crate::engine::codec::OPEN_EXTENSIONS;

pub fn pick_image() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Upload Image")
        .add_filter("Image files", &OPEN_EXTENSIONS)
        .pick_file()
}

pub fn pick_save_path(default_name: &str) -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Save Image")
        .set_file_name(default_name)
        .add_filter("PNG files", &["png"])
        .add_filter("JPEG files", &["jpg", "jpeg"])
        .add_filter("All files", &["*"])
        .save_file()
}
