//! Project catalog and site profile for vitrine.
//!
//! This crate holds the static data the rest of the site consumes: the ordered
//! list of showcased projects and the owner's profile (hero, about, socials).

pub mod catalog;
pub mod profile;
pub mod record;

pub use catalog::{Catalog, CatalogError};
pub use profile::{SiteProfile, SocialLinks};
pub use record::ProjectRecord;
