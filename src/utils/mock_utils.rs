#![forbid(unsafe_code)]

use chrono::Local;
use poem::Request;
use log::{debug, LevelFilter};

// ***************************************************************************
// GENERAL PUBLIC FUNCTIONS
// ***************************************************************************
// ---------------------------------------------------------------------------
// timestamp_hms:
// ---------------------------------------------------------------------------
/** Get the current local time as HH:MM:SS for request log lines. */
pub fn timestamp_hms() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

// ---------------------------------------------------------------------------
// debug_request:
// ---------------------------------------------------------------------------
// Dump http request information to the log.
pub fn debug_request(http_req: &Request, body: &[u8]) {
    // Check that debug or higher logging is in effect.
    if log::max_level() < LevelFilter::Debug {
        return;
    }

    // Accumulate the output.
    let mut s = "\n".to_string();
    s += format!("  URI: {:?}\n", http_req.uri()).as_str();
    for (name, value) in http_req.headers().iter() {
        s += format!("  Header: {} = {:?} \n", name, value).as_str();
    }

    // The body is usually xml, but don't trust it.
    s += "  Request body:\n";
    s += String::from_utf8_lossy(body).as_ref();

    // Write the single log record.
    debug!("{}", s);
}
