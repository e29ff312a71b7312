mod probe;


pub use probe::{check_store, ensure_store_location, probe_store, run_startup_check};
