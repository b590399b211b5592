use crate::errors::{Result, VizError};

/// Read-only view over an RGBA image buffer.
///
/// Samples are interleaved RGBA, 8 bits each, row-major. `data` must hold at
/// least `width * height * 4` bytes; the caller (image decode or canvas
/// snapshot) owns the storage.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelBuffer<'a> {
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Self {
        debug_assert!(data.len() >= (width as usize) * (height as usize) * 4);
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Per-channel value-frequency counts for a pixel region.
///
/// Bucket `v` of a channel holds the number of counted pixels whose channel
/// value is exactly `v`. Alpha is never tallied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHistogram {
    pub red: [u32; 256],
    pub green: [u32; 256],
    pub blue: [u32; 256],
}

impl ChannelHistogram {
    pub fn zeroed() -> Self {
        Self {
            red: [0; 256],
            green: [0; 256],
            blue: [0; 256],
        }
    }

    /// Total pixel count of one channel (equals the clipped region area).
    pub fn channel_total(channel: &[u32; 256]) -> u64 {
        channel.iter().map(|&c| c as u64).sum()
    }

    /// Largest bucket across all three channels, used for plot scaling.
    pub fn max_count(&self) -> u32 {
        self.red
            .iter()
            .chain(self.green.iter())
            .chain(self.blue.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// Count per-channel pixel values inside the given region of `buffer`.
///
/// The region is clipped to the buffer bounds; negative origins are clipped
/// the same way. A clipped region with no pixels yields all-zero histograms.
/// Negative `width` or `height` is the only rejected input.
pub fn region_histogram(
    buffer: &PixelBuffer<'_>,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
) -> Result<ChannelHistogram> {
    if width < 0 || height < 0 {
        return Err(VizError::InvalidRegion { width, height });
    }

    let mut histogram = ChannelHistogram::zeroed();

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = x.saturating_add(width).min(buffer.width as i64);
    let y1 = y.saturating_add(height).min(buffer.height as i64);

    if x0 >= x1 || y0 >= y1 {
        return Ok(histogram);
    }

    let stride = buffer.width as usize * 4;
    for row in y0..y1 {
        let mut idx = row as usize * stride + x0 as usize * 4;
        for _ in x0..x1 {
            histogram.red[buffer.data[idx] as usize] += 1;
            histogram.green[buffer.data[idx + 1] as usize] += 1;
            histogram.blue[buffer.data[idx + 2] as usize] += 1;
            idx += 4;
        }
    }

    Ok(histogram)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_buffer(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&rgba);
        }
        data
    }

    #[test]
    fn interior_region_counts_sum_to_area() {
        let data = solid_buffer(8, 6, [120, 40, 200, 255]);
        let buffer = PixelBuffer::new(&data, 8, 6);

        let hist = region_histogram(&buffer, 1, 1, 5, 3).unwrap();
        assert_eq!(ChannelHistogram::channel_total(&hist.red), 15);
        assert_eq!(ChannelHistogram::channel_total(&hist.green), 15);
        assert_eq!(ChannelHistogram::channel_total(&hist.blue), 15);
        assert_eq!(hist.red[120], 15);
        assert_eq!(hist.green[40], 15);
        assert_eq!(hist.blue[200], 15);
    }

    #[test]
    fn region_fully_outside_is_all_zero() {
        let data = solid_buffer(4, 4, [10, 20, 30, 255]);
        let buffer = PixelBuffer::new(&data, 4, 4);

        let hist = region_histogram(&buffer, 10, 10, 3, 3).unwrap();
        assert_eq!(hist, ChannelHistogram::zeroed());
    }

    #[test]
    fn empty_extent_is_all_zero() {
        let data = solid_buffer(4, 4, [10, 20, 30, 255]);
        let buffer = PixelBuffer::new(&data, 4, 4);

        let hist = region_histogram(&buffer, 1, 1, 0, 3).unwrap();
        assert_eq!(hist, ChannelHistogram::zeroed());
        let hist = region_histogram(&buffer, 1, 1, 3, 0).unwrap();
        assert_eq!(hist, ChannelHistogram::zeroed());
    }

    #[test]
    fn single_pixel_region() {
        let mut data = solid_buffer(3, 3, [0, 0, 0, 255]);
        // Pixel (2, 1) gets a distinct color
        let idx = (1 * 3 + 2) * 4;
        data[idx..idx + 4].copy_from_slice(&[9, 130, 244, 128]);
        let buffer = PixelBuffer::new(&data, 3, 3);

        let hist = region_histogram(&buffer, 2, 1, 1, 1).unwrap();
        assert_eq!(hist.red[9], 1);
        assert_eq!(hist.green[130], 1);
        assert_eq!(hist.blue[244], 1);
        assert_eq!(ChannelHistogram::channel_total(&hist.red), 1);
        assert_eq!(ChannelHistogram::channel_total(&hist.green), 1);
        assert_eq!(ChannelHistogram::channel_total(&hist.blue), 1);
    }

    #[test]
    fn partial_overlap_matches_intersection() {
        let data = solid_buffer(4, 4, [50, 60, 70, 255]);
        let buffer = PixelBuffer::new(&data, 4, 4);

        // Region [2, 2)..[6, 6) overlaps the buffer in a 2x2 square
        let clipped = region_histogram(&buffer, 2, 2, 4, 4).unwrap();
        let exact = region_histogram(&buffer, 2, 2, 2, 2).unwrap();
        assert_eq!(clipped, exact);
        assert_eq!(ChannelHistogram::channel_total(&clipped.red), 4);
    }

    #[test]
    fn negative_origin_is_clipped() {
        let data = solid_buffer(4, 4, [5, 6, 7, 255]);
        let buffer = PixelBuffer::new(&data, 4, 4);

        // Starts above-left of the buffer; only the 2x2 corner is inside
        let hist = region_histogram(&buffer, -2, -2, 4, 4).unwrap();
        assert_eq!(ChannelHistogram::channel_total(&hist.red), 4);
        assert_eq!(hist.red[5], 4);
    }

    #[test]
    fn negative_extent_is_rejected() {
        let data = solid_buffer(2, 2, [0, 0, 0, 255]);
        let buffer = PixelBuffer::new(&data, 2, 2);

        let err = region_histogram(&buffer, 0, 0, -1, 2).unwrap_err();
        assert!(matches!(err, VizError::InvalidRegion { .. }));
        let err = region_histogram(&buffer, 0, 0, 2, -1).unwrap_err();
        assert!(matches!(err, VizError::InvalidRegion { .. }));
    }

    #[test]
    fn repeated_calls_are_independent() {
        let data = solid_buffer(5, 5, [1, 2, 3, 255]);
        let buffer = PixelBuffer::new(&data, 5, 5);

        let first = region_histogram(&buffer, 0, 0, 5, 5).unwrap();
        let second = region_histogram(&buffer, 0, 0, 5, 5).unwrap();
        assert_eq!(first, second);
        assert_eq!(ChannelHistogram::channel_total(&first.red), 25);
        assert_eq!(ChannelHistogram::channel_total(&second.red), 25);
    }

    #[test]
    fn mixed_two_by_two_example() {
        let data: Vec<u8> = [
            [255u8, 0, 0, 255],
            [0, 255, 0, 255],
            [0, 0, 255, 255],
            [10, 10, 10, 255],
        ]
        .concat();
        let buffer = PixelBuffer::new(&data, 2, 2);

        let hist = region_histogram(&buffer, 0, 0, 2, 2).unwrap();
        assert_eq!(hist.red[255], 1);
        assert_eq!(hist.red[0], 2);
        assert_eq!(hist.red[10], 1);
        assert_eq!(hist.green[255], 1);
        assert_eq!(hist.green[0], 2);
        assert_eq!(hist.green[10], 1);
        assert_eq!(hist.blue[255], 1);
        assert_eq!(hist.blue[0], 2);
        assert_eq!(hist.blue[10], 1);
        // Alpha is read but never counted
        assert_eq!(ChannelHistogram::channel_total(&hist.red), 4);
    }

    #[test]
    fn max_count_over_all_channels() {
        let data = solid_buffer(3, 1, [7, 7, 9, 255]);
        let buffer = PixelBuffer::new(&data, 3, 1);

        let hist = region_histogram(&buffer, 0, 0, 3, 1).unwrap();
        assert_eq!(hist.max_count(), 3);
        assert_eq!(ChannelHistogram::zeroed().max_count(), 0);
    }
}
