pub mod mirror;
pub mod store;

pub use mirror::{select_fastest_source, MirrorSource};
pub use mirror::{BMCLAPI_MANIFEST_URL, MOJANG_MANIFEST_URL};
pub use store::ManifestStore;
