#![no_main]

use colstat::{stats, ColumnExtractor, Report};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Extraction and the report must never panic, whatever the file holds
    if let Ok(column) = ColumnExtractor::new("x").extract(data, "fuzz.tsv") {
        let _ = Report::build("fuzz.tsv", "x", &column.values);
        let _ = stats::percentile(&column.values, 0.5);
    }
});
