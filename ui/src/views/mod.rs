mod dashboard;
mod landing;
mod meta;

pub use dashboard::Dashboard;
pub use landing::{AuthControls, Landing};
pub use meta::{Privacy, TermsOfService};
