//! Deferred, typed wrappers around DynamoDB `scan` and `put_item`.
//!
//! Building a call performs no I/O; running it performs exactly one request
//! and always resolves to a `Result`, never an escaped SDK error. Callers
//! chain further logic with `Result::map` / `Result::map_err`.

pub mod error;
pub mod put;
pub mod scan;

pub use error::StoreError;
pub use put::{put, PutCall, PutCallError, PutCallResult, PutRequest, PUT_ERROR_NAME};
pub use scan::{scan, ScanCall, ScanCallError, ScanCallResult, ScanRequest, SCAN_ERROR_NAME};
