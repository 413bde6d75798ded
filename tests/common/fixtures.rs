//! Static CDR corpora used across harnesses, one per input format.
//!
//! All four corpora describe the same three calls so a harness can assert
//! that every format normalises to the same table.

use std::path::{Path, PathBuf};

pub const CORPUS_CSV: &str = "\
Call Start Time,Call End Time,Duration,Caller Number,Receiver Number,Call Type,Country,Tower ID,ISP Name,Cost,Call Status
2024-01-15 10:00:00,2024-01-15 10:02:30,150,+254700000001,+254711111111,Voice,Kenya,TWR-001,Safaricom,2.50,Completed
2024-01-15 10:05:00,2024-01-15 10:05:00,0,+254700000002,+254722222222,Voice,Kenya,TWR-014,Airtel,0.00,Missed
2024-01-15 11:00:00,2024-01-15 11:45:10,2710,+254700000003,+447900000000,International,United Kingdom,TWR-002,Safaricom,41.20,Completed
";

pub const CORPUS_TXT: &str = "\
Call Start Time\tCall End Time\tDuration\tCaller Number\tReceiver Number\tCall Type\tCountry\tTower ID\tISP Name\tCost\tCall Status
2024-01-15 10:00:00\t2024-01-15 10:02:30\t150\t+254700000001\t+254711111111\tVoice\tKenya\tTWR-001\tSafaricom\t2.50\tCompleted
2024-01-15 10:05:00\t2024-01-15 10:05:00\t0\t+254700000002\t+254722222222\tVoice\tKenya\tTWR-014\tAirtel\t0.00\tMissed
2024-01-15 11:00:00\t2024-01-15 11:45:10\t2710\t+254700000003\t+447900000000\tInternational\tUnited Kingdom\tTWR-002\tSafaricom\t41.20\tCompleted
";

pub const CORPUS_JSON: &str = r#"[
  {"Call Start Time": "2024-01-15 10:00:00", "Call End Time": "2024-01-15 10:02:30", "Duration": "150",
   "Caller Number": "+254700000001", "Receiver Number": "+254711111111", "Call Type": "Voice",
   "Country": "Kenya", "Tower ID": "TWR-001", "ISP Name": "Safaricom", "Cost": "2.50", "Call Status": "Completed"},
  {"Call Start Time": "2024-01-15 10:05:00", "Call End Time": "2024-01-15 10:05:00", "Duration": "0",
   "Caller Number": "+254700000002", "Receiver Number": "+254722222222", "Call Type": "Voice",
   "Country": "Kenya", "Tower ID": "TWR-014", "ISP Name": "Airtel", "Cost": "0.00", "Call Status": "Missed"},
  {"Call Start Time": "2024-01-15 11:00:00", "Call End Time": "2024-01-15 11:45:10", "Duration": "2710",
   "Caller Number": "+254700000003", "Receiver Number": "+447900000000", "Call Type": "International",
   "Country": "United Kingdom", "Tower ID": "TWR-002", "ISP Name": "Safaricom", "Cost": "41.20", "Call Status": "Completed"}
]"#;

/// XML cannot carry attribute names with spaces, so the XML corpus is built
/// from the columns that are valid XML names plus extra vendor attributes.
pub const CORPUS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<cdrs exported="2024-01-16">
  <!-- three calls -->
  <call Duration="150" Country="Kenya" Cost="2.50" Vendor="acme"/>
  <call Duration="0" Country="Kenya" Cost="0.00" Vendor="acme"/>
  <call Duration="2710" Country="United Kingdom" Cost="41.20" Vendor="acme"/>
</cdrs>
"#;

/// Values the first corpus record should normalise to, in schema order.
pub const FIRST_CALL: [&str; 11] = [
    "2024-01-15 10:00:00",
    "2024-01-15 10:02:30",
    "150",
    "+254700000001",
    "+254711111111",
    "Voice",
    "Kenya",
    "TWR-001",
    "Safaricom",
    "2.50",
    "Completed",
];

/// Write `contents` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

/// Write every corpus into `dir` as `calls.csv`, `calls.txt`, `calls.json`
/// and `calls.xml`.
pub fn write_all_corpora(dir: &Path) -> Vec<PathBuf> {
    vec![
        write_fixture(dir, "calls.csv", CORPUS_CSV),
        write_fixture(dir, "calls.txt", CORPUS_TXT),
        write_fixture(dir, "calls.json", CORPUS_JSON),
        write_fixture(dir, "calls.xml", CORPUS_XML),
    ]
}
