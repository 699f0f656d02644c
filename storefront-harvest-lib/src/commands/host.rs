use std::io::Write;

/// The process surroundings a command talks to.
///
/// Commands write and exit only through this trait, so a harvest run
/// can be driven end to end from tests.
pub trait Host: Send + Sync {
    /// Stream for run summaries, such as how many items landed in which file.
    fn output(&mut self) -> impl Write;

    /// Stream for failures and warnings the user should see.
    fn error(&mut self) -> impl Write;

    /// Report a non-zero status for the run. The real host ends the process.
    fn exit(&mut self, code: i32);
}

/// Records everything a command writes, and ignores exit requests
#[cfg(test)]
pub struct TestHost {
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
}

#[cfg(test)]
impl TestHost {
    pub const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
        }
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, _code: i32) {
        // keep the test process alive
    }
}
