use crate::errors::VizError;
use crate::histogram::{self, PixelBuffer};

use super::{LoaderMessage, VizApp};
use std::path::PathBuf;

impl VizApp {
    pub fn open_image_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(
                "Images",
                &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp"],
            )
            .pick_file()
        {
            self.load_image(path);
        }
    }

    /// Decode `path` to RGBA on a loader thread.
    pub fn load_image(&mut self, path: PathBuf) {
        self.image_loading = true;
        self.region_histogram = None;
        self.selection_rect = None;

        self.spawn_loader(move || {
            Some(match image::open(&path) {
                Ok(img) => LoaderMessage::ImageLoaded(path, img.to_rgba8()),
                Err(e) => {
                    let err = VizError::ImageLoadError {
                        path: path.clone(),
                        message: e.to_string(),
                    };
                    LoaderMessage::ImageFailed(path, err.user_message())
                }
            })
        });
    }

    /// Recount channel values for the selected region of the loaded image.
    ///
    /// Coordinates are image pixels; the selection may hang over any edge
    /// (the counter clips). Called on the UI thread: the scan is a bounded
    /// synchronous pass over the region.
    pub fn compute_selection_histogram(&mut self, x: i64, y: i64, width: i64, height: i64) {
        let Some(pixels) = &self.image_pixels else {
            return;
        };

        let buffer = PixelBuffer::new(pixels.as_raw(), pixels.width(), pixels.height());
        match histogram::region_histogram(&buffer, x, y, width, height) {
            Ok(hist) => {
                self.selection_rect = Some((x, y, width, height));
                self.region_histogram = Some(hist);
            }
            Err(e) => {
                log::error!("region histogram failed: {}", e);
                self.set_status_message(format!("Selection failed: {}", e));
            }
        }
    }
}
