//! Catalog operations and response assembly

pub mod catalog;
pub mod enrichment;
pub mod error;

pub use catalog::CatalogService;
pub use enrichment::{ActorProfile, ActorSummary, GenreMovies, MovieDetails};
pub use error::{CatalogError, CatalogResult, NotFound, StoreAction};
