use std::io::Write;

use log::Log;

/// Logs every record to stdout, filtering is left to [log::set_max_level].
pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        let _ = writeln!(
            out,
            "{file}:{line}: {level}: {args}",
            file = record.file().unwrap_or_default(),
            line = record.line().unwrap_or_default(),
            level = record.level(),
            args = record.args(),
        );
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}
