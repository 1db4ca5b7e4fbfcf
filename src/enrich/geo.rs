use std::net::IpAddr;
use anyhow::Result;
use async_trait::async_trait;
use log::{debug, trace};
use crate::flow::{Geo, Record, Subdivision};
use super::city::{City, Names};
use super::enrich::Enrich;

pub trait Database: Send + Sync {
    fn city(&self, addr: IpAddr) -> Result<City>;
}

pub struct GeoIP {
    db:       Option<Box<dyn Database>>,
    language: String,
}

impl GeoIP {
    pub fn new(db: Option<Box<dyn Database>>, language: &str) -> Self {
        Self {
            db:       db,
            language: language.to_owned(),
        }
    }

    pub fn lookup(&self, addr: IpAddr) -> Option<Geo> {
        let db = match &self.db {
            Some(db) => db,
            None     => {
                trace!("no geo database, skipping {}", addr);
                return None;
            }
        };

        match db.city(addr) {
            Ok(city) => Some(flatten(&city, &self.language)),
            Err(e)   => {
                debug!("geo lookup {} failed: {}", addr, e);
                None
            }
        }
    }
}

#[async_trait]
impl Enrich for GeoIP {
    async fn enrich(&self, rec: &mut Record) {
        if let Some(geo) = self.lookup(rec.flow.src.addr) {
            rec.src.geo = Some(geo);
        }

        if let Some(geo) = self.lookup(rec.flow.dst.addr) {
            rec.dst.geo = Some(geo);
        }
    }

    fn name(&self) -> &str {
        "geoip"
    }
}

pub fn flatten(city: &City, language: &str) -> Geo {
    let name = |names: &Option<Names>| -> Option<String> {
        names.as_ref()?.get(language).cloned()
    };

    let mut geo = Geo::default();

    if let Some(c) = &city.city {
        geo.city_name = name(&c.names);
    }

    if let Some(c) = &city.continent {
        geo.continent_code = c.code.clone();
        geo.continent_name = name(&c.names);
    }

    if let Some(c) = &city.country {
        geo.country_iso_code = c.iso_code.clone();
        geo.country_name     = name(&c.names);
        geo.country_in_eu    = c.in_eu;
    }

    if let Some(l) = &city.location {
        geo.latitude   = l.latitude;
        geo.longitude  = l.longitude;
        geo.metro_code = l.metro_code;
        geo.time_zone  = l.time_zone.clone();
    }

    if let Some(p) = &city.postal {
        geo.postal_code = p.code.clone();
    }

    geo.subdivisions = city.subdivisions.as_ref().map(|subs| {
        subs.iter().map(|s| Subdivision {
            iso_code: s.iso_code.clone(),
            name:     name(&s.names),
        }).collect()
    });

    geo
}
