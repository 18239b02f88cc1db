//! RGB pipeline: read → per-channel Sobel → write.
//!
//! Channels are filtered independently. With `parallel` set, the three
//! filters run as rayon tasks; output is bit-identical either way.
use crate::diagnostics::{elapsed_ms, ChannelStats, FilterReport, Stage, TimingBreakdown};
use crate::edges::{sobel_filter_with_options, EdgeOptions};
use crate::error::Result;
use crate::image::io::{read_ppm, write_ppm};
use crate::image::{Channel, GrayImageU8, RgbPlanes};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

/// Pipeline-wide parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub edge: EdgeOptions,
    /// Filter the three channels concurrently.
    pub parallel: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            edge: EdgeOptions::default(),
            parallel: true,
        }
    }
}

/// Filtered image together with its run report.
#[derive(Clone, Debug)]
pub struct FilterOutput {
    pub image: RgbPlanes,
    pub report: FilterReport,
}

#[derive(Clone, Debug, Default)]
pub struct EdgePipeline {
    options: PipelineOptions,
}

impl EdgePipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    /// Filter every channel of `image`.
    pub fn process(&self, image: &RgbPlanes) -> RgbPlanes {
        let edge = self.options.edge;
        let filter = |plane: &GrayImageU8| sobel_filter_with_options(plane.as_view(), &edge);
        let [r, g, b] = image.planes();
        let (r, g, b) = if self.options.parallel {
            let (r, (g, b)) = rayon::join(|| filter(r), || rayon::join(|| filter(g), || filter(b)));
            (r, g, b)
        } else {
            (filter(r), filter(g), filter(b))
        };
        RgbPlanes::from_matching_planes(r, g, b)
    }

    /// Filter every channel and collect statistics and timings.
    pub fn process_with_diagnostics(&self, image: &RgbPlanes) -> FilterOutput {
        let (width, height) = (image.width(), image.height());
        debug!(
            "EdgePipeline::process start w={} h={} parallel={} edge={:?}",
            width, height, self.options.parallel, self.options.edge
        );
        let start = Instant::now();
        let filtered = self.process(image);
        let filter_ms = elapsed_ms(start);

        let mut timing = TimingBreakdown::default();
        timing.push(Stage::Filter, filter_ms);
        timing.total_ms = filter_ms;

        let report = FilterReport {
            width,
            height,
            parallel: self.options.parallel,
            edge: self.options.edge,
            channels: Channel::ALL
                .iter()
                .map(|&c| ChannelStats::from_plane(c, filtered.channel(c)))
                .collect(),
            timing,
        };
        debug!("EdgePipeline::process done filter_ms={:.3}", filter_ms);
        FilterOutput {
            image: filtered,
            report,
        }
    }

    /// Read `input`, filter it and write the result to `output`.
    pub fn run_file(&self, input: &Path, output: &Path) -> Result<FilterReport> {
        let total_start = Instant::now();

        let read_start = Instant::now();
        let image = read_ppm(input)?;
        let read_ms = elapsed_ms(read_start);
        debug!(
            "EdgePipeline::run_file read {} ({}x{}) in {:.3} ms",
            input.display(),
            image.width(),
            image.height(),
            read_ms
        );

        let FilterOutput { image, mut report } = self.process_with_diagnostics(&image);

        let write_start = Instant::now();
        write_ppm(output, &image)?;
        let write_ms = elapsed_ms(write_start);
        debug!(
            "EdgePipeline::run_file wrote {} in {:.3} ms",
            output.display(),
            write_ms
        );

        report.timing.prepend_read(read_ms);
        report.timing.push(Stage::Write, write_ms);
        report.timing.total_ms = elapsed_ms(total_start);
        Ok(report)
    }
}

/// Filter all channels with the given options.
pub fn filter_rgb(image: &RgbPlanes, options: &PipelineOptions) -> RgbPlanes {
    EdgePipeline::new(*options).process(image)
}
