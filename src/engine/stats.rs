use image::RgbaImage;

pub const HISTOGRAM_BINS: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelHistogram {
    pub bins: [u64; HISTOGRAM_BINS],
}

impl Default for ChannelHistogram {
    fn default() -> Self {
        Self {
            bins: [0; HISTOGRAM_BINS],
        }
    }
}

impl ChannelHistogram {
    pub fn peak(&self) -> u64 {
        self.bins.iter().copied().max().unwrap_or(0)
    }
}

/// Per-channel means and intensity histograms of an RGB(A) image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageStatistics {
    pub mean: [f64; 3],
    pub histograms: [ChannelHistogram; 3],
    pub pixel_count: u64,
}

impl ImageStatistics {
    pub fn compute(image: &RgbaImage) -> Self {
        let mut histograms: [ChannelHistogram; 3] = Default::default();
        let mut sums = [0_u64; 3];

        for pixel in image.pixels() {
            for channel in 0..3 {
                let value = pixel[channel];
                histograms[channel].bins[usize::from(value)] += 1;
                sums[channel] += u64::from(value);
            }
        }

        let pixel_count = u64::from(image.width()) * u64::from(image.height());
        let mean = if pixel_count == 0 {
            [0.0; 3]
        } else {
            sums.map(|sum| sum as f64 / pixel_count as f64)
        };

        Self {
            mean,
            histograms,
            pixel_count,
        }
    }

    pub fn peak(&self) -> u64 {
        self.histograms
            .iter()
            .map(ChannelHistogram::peak)
            .max()
            .unwrap_or(0)
    }

    pub fn average_color_label(&self) -> String {
        format!(
            "Average Color: R:{:.2}, G:{:.2}, B:{:.2}",
            self.mean[0], self.mean[1], self.mean[2]
        )
    }
}
