//! Batch scan options.

/// Options for the file/batch driver.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Produce located findings instead of a per-file boolean.
    pub detailed: bool,
    /// Worker threads; `None` means one per CPU, `Some(1)` forces serial.
    pub threads: Option<usize>,
    /// Skip files larger than this many bytes.
    pub max_file_size: Option<u64>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { detailed: false, threads: Some(1), max_file_size: None }
    }
}

impl ScanOptions {
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }
}
