use std::path::Path;

use tracing_subscriber::EnvFilter;

use bus_timetable::io::{LocalFs, TimetableReader, TimetableWriter};
use bus_timetable::processor::TimetableProcessor;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(input_path) = std::env::args().nth(1) else {
        eprintln!("Usage: bus-timetable <input-file>");
        std::process::exit(2);
    };

    let processor = TimetableProcessor::new(
        TimetableReader::new(LocalFs),
        TimetableWriter::new(LocalFs),
    );

    match processor.process(Path::new(&input_path)).await {
        Ok(()) => println!("Processing done successfully."),
        Err(err) => {
            eprintln!("Processing stopped unexpectedly.\n{err}");
            std::process::exit(1);
        }
    }
}
