// Services module for version stamping

pub mod header_updater;
pub mod line_rewriter;
pub mod manifest_updater;

pub use header_updater::HeaderVersionUpdater;
pub use line_rewriter::LineRewriter;
pub use manifest_updater::ManifestVersionUpdater;
