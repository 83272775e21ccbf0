//! Writing timetables in the grouped text format.

use std::future::Future;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::domain::{BusCompany, Service, Timetable};

/// Capability to write a whole text file.
pub trait FileWrite {
    /// Write `contents` to the file at `path`, replacing it.
    fn write(&self, path: &Path, contents: &str) -> impl Future<Output = io::Result<()>> + Send;
}

/// Writes timetables through an injected [`FileWrite`] capability.
pub struct TimetableWriter<W> {
    sink: W,
}

impl<W: FileWrite> TimetableWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Render `timetable` and write it to `path`.
    pub async fn write_timetable(&self, path: &Path, timetable: &Timetable) -> io::Result<()> {
        let contents = format_timetable(timetable);
        debug!(bytes = contents.len(), "rendering timetable");
        self.sink.write(path, &contents).await
    }
}

/// Render a timetable as grouped text.
///
/// Services are grouped by company, with groups ordered by descending
/// company identifier (so `Posh` renders before `Grotty`) and separated
/// by one blank line. Within a group, services are ordered by ascending
/// departure time. An empty timetable renders as the empty string.
pub fn format_timetable(timetable: &Timetable) -> String {
    let mut companies: Vec<BusCompany> = Vec::new();
    for service in timetable.services() {
        if !companies.contains(&service.company()) {
            companies.push(service.company());
        }
    }
    companies.sort_by(|a, b| b.as_str().cmp(a.as_str()));

    let groups: Vec<String> = companies
        .iter()
        .map(|&company| format_company_group(timetable, company))
        .collect();

    groups.join("\n\n")
}

fn format_company_group(timetable: &Timetable, company: BusCompany) -> String {
    let mut services: Vec<&Service> = timetable
        .services()
        .iter()
        .filter(|service| service.company() == company)
        .collect();
    services.sort_by_key(|service| service.departure());

    let lines: Vec<String> = services.iter().map(|service| service.to_string()).collect();
    lines.join("\n")
}
