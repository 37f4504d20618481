//! Seasonal plant gallery.
//!
//! Static sample profiles grouped by season, with a selector that opens on
//! the current season. No network access: everything comes from the
//! catalog it is given.
//!
//! ```
//! use herbal_memory::gallery::{GalleryView, SampleCatalog, Season, SeasonalGallery};
//!
//! let gallery = SeasonalGallery::new(SampleCatalog::builtin(), Season::Summer);
//! match gallery.view() {
//!     GalleryView::Plants(plants) => assert_eq!(plants[1].name, "Basil"),
//!     GalleryView::Empty { .. } => unreachable!(),
//! }
//! ```

pub mod catalog;
pub mod season;
pub mod showcase;

pub use catalog::{PlantProfile, SampleCatalog};
pub use season::{Season, UnknownSeason};
pub use showcase::{GalleryView, SeasonalGallery};
