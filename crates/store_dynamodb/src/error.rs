use std::fmt::{Debug, Display, Formatter};

/// Error produced when a store call is rejected.
///
/// `body` keeps the request that was being attempted so the caller can
/// inspect or resend it. `error` is the underlying SDK failure, untouched.
#[derive(Debug)]
pub struct StoreError<Body, Cause> {
    pub name: &'static str,

    pub body: Body,
    pub error: Cause,
}

impl<Body, Cause> StoreError<Body, Cause> {
    pub fn new(name: &'static str, body: Body, error: Cause) -> Self {
        StoreError { name, body, error }
    }
}

impl<Body: Debug, Cause: Debug> Display for StoreError<Body, Cause> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(format!("{:?}", self).as_str())
    }
}

impl<Body: Debug, Cause: Debug> std::error::Error for StoreError<Body, Cause> {}
