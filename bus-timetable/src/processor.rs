//! End-to-end timetable processing.

use std::path::Path;

use tracing::{debug, info};

use crate::io::{FileRead, FileWrite, ReadError, TimetableReader, TimetableWriter};
use crate::selection;

/// The result file is always written next to the working directory.
const OUTPUT_FILE_PATH: &str = "output.txt";

/// Failure of a processing run.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Write(std::io::Error),
}

/// Runs the read → select → write pipeline.
///
/// Holds no business logic of its own: the reader parses, the selection
/// engine filters, the writer renders. Any stage failure aborts the run
/// and propagates to the caller.
pub struct TimetableProcessor<R, W> {
    reader: TimetableReader<R>,
    writer: TimetableWriter<W>,
}

impl<R: FileRead, W: FileWrite> TimetableProcessor<R, W> {
    pub fn new(reader: TimetableReader<R>, writer: TimetableWriter<W>) -> Self {
        Self { reader, writer }
    }

    /// Process the timetable at `input_path`, writing the surviving
    /// services to `output.txt`.
    pub async fn process(&self, input_path: &Path) -> Result<(), ProcessError> {
        info!(input = %input_path.display(), "processing timetable");

        let source = self.reader.read_timetable(input_path).await?;
        let best = selection::select_best(&source);
        debug!(read = source.len(), kept = best.len(), "selected services");

        self.writer
            .write_timetable(Path::new(OUTPUT_FILE_PATH), &best)
            .await
            .map_err(ProcessError::Write)
    }
}
