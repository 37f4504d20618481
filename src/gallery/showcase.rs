//! Season selector state and the grid it renders.

use chrono::{Datelike, Local};
use tracing::debug;

use super::catalog::{PlantProfile, SampleCatalog};
use super::season::Season;

/// What the plant grid shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GalleryView<'a> {
    Plants(&'a [PlantProfile]),
    Empty { message: String },
}

/// A season selector over a sample catalog.
#[derive(Clone, Debug)]
pub struct SeasonalGallery {
    catalog: SampleCatalog,
    selected: Season,
}

impl SeasonalGallery {
    pub fn new(catalog: SampleCatalog, initial: Season) -> Self {
        Self {
            catalog,
            selected: initial,
        }
    }

    /// Open on the season of the local calendar month.
    pub fn for_today(catalog: SampleCatalog) -> Self {
        let season = Season::from_month(Local::now().month());
        debug!(%season, "initial gallery season");
        Self::new(catalog, season)
    }

    #[must_use]
    pub fn selected(&self) -> Season {
        self.selected
    }

    pub fn select(&mut self, season: Season) {
        debug!(from = %self.selected, to = %season, "gallery season changed");
        self.selected = season;
    }

    /// Grid contents for the selected season.
    #[must_use]
    pub fn view(&self) -> GalleryView<'_> {
        let plants = self.catalog.plants(self.selected);
        if plants.is_empty() {
            GalleryView::Empty {
                message: format!("No sample plants for {}", self.selected),
            }
        } else {
            GalleryView::Plants(plants)
        }
    }
}
