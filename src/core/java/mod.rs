pub mod discovery;
pub mod probe;
pub mod roots;

pub use discovery::detect_java_installations;
pub use discovery::detect_java_installations_in;
pub use discovery::JavaInstallation;
pub use probe::{extract_bitness, extract_version, run_version_probe};
pub use probe::{Bitness, ProbeOutcome};
