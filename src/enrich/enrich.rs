use async_trait::async_trait;
use log::{log_enabled, trace, Level::Trace};
use crate::flow::Record;

#[async_trait]
pub trait Enrich: Send + Sync {
    async fn enrich(&self, rec: &mut Record);

    fn name(&self) -> &str;
}

pub struct Pipeline {
    enrichers: Vec<Box<dyn Enrich>>,
}

impl Pipeline {
    pub fn new(enrichers: Vec<Box<dyn Enrich>>) -> Self {
        Self {
            enrichers: enrichers,
        }
    }

    pub async fn enrich(&self, rec: &mut Record) {
        for enricher in &self.enrichers {
            if log_enabled!(Trace) {
                let flow = &rec.flow;
                trace!("{} enriching {} -> {}", enricher.name(), flow.src, flow.dst);
            }
            enricher.enrich(rec).await;
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.enrichers.iter().map(|e| e.name()).collect()
    }
}
