//! File-to-file orchestration around [`DwtFilter`]: decode a frame, filter
//! it, encode the result.

use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::dwt_filter::common::error::{FilterError, Result};
use crate::dwt_filter::filter::DwtFilter;
use crate::dwt_filter::frame_io::{FrameReader, FrameWriter, TiffFrameReader, TiffFrameWriter};
use crate::dwt_filter::timing::{PipelineTimings, Timer};

pub struct FramePipeline<R: FrameReader, W: FrameWriter> {
    reader: R,
    writer: W,
    filter: DwtFilter,
}

impl FramePipeline<TiffFrameReader, TiffFrameWriter> {
    pub fn new(filter: DwtFilter) -> Self {
        Self {
            reader: TiffFrameReader,
            writer: TiffFrameWriter::default(),
            filter,
        }
    }
}

impl<R: FrameReader, W: FrameWriter> FramePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, filter: DwtFilter) -> Self {
        Self {
            reader,
            writer,
            filter,
        }
    }

    /// Decodes one frame from `input_data`, filters it and encodes it to
    /// `output`. The filter is reconfigured whenever the frame size changes.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&mut self, input_data: &[u8], output: &mut dyn Write) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();

        let mut frame = {
            let _span = tracing::info_span!("decode_frame").entered();
            let timer = Timer::start("decode");
            let frame = self.reader.read_frame(input_data)?;
            timings.record(timer);
            frame
        };

        if self.filter.geometry() != Some((frame.width, frame.height)) {
            let _span = tracing::info_span!("configure",
                width = frame.width,
                height = frame.height
            ).entered();
            self.filter.configure(frame.width, frame.height)?;
        }

        timings.extend(&self.filter.process_with_timings(&mut frame.data)?);

        {
            let _span = tracing::info_span!("encode_frame").entered();
            let timer = Timer::start("encode");
            self.writer.write_frame(&frame, output)?;
            timings.record(timer);
        }

        info!(
            width = frame.width,
            height = frame.height,
            "Frame filtered"
        );
        Ok(timings)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Filtering file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                FilterError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                FilterError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert(&input_data, &mut output_file)
    }

    pub fn filter(&self) -> &DwtFilter {
        &self.filter
    }
}
