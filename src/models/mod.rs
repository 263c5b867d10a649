// Data models for versions, tags and update reports

pub mod release_tag;
pub mod update_report;
pub mod version;

pub use release_tag::ReleaseTag;
pub use update_report::UpdateReport;
pub use version::ReleaseVersion;
