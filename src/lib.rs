//! Library crate for the JSONL ingester

pub mod error;
pub mod ingest;
pub mod source;

// CLI modules
pub mod cli {
    pub mod args;
}

// Format modules
pub mod formats {
    pub mod text;
    pub mod traits;
}
