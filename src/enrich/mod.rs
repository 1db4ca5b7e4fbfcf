pub use cache::Cache;
pub use city::{City, Continent, Country, Division, Locality, Location, Names, Postal};
pub use dns::{Dns, Resolve, System};
pub use enrich::{Enrich, Pipeline};
pub use geo::{Database, GeoIP};
pub use maxmind::Maxmind;

mod cache;
mod city;
pub mod dns;
mod enrich;
mod geo;
mod maxmind;
