use std::convert::TryFrom;
use std::sync::Arc;
use log::{debug, warn};
use crate::enrich::Pipeline;
use crate::export::Buffer;
use crate::flow::{Flow, Record};
use super::{Model, Stats};

#[derive(Clone)]
pub struct Sink {
    pipeline: Arc<Pipeline>,
    buffer:   Arc<Buffer>,
}

impl Sink {
    pub fn new(pipeline: Arc<Pipeline>, buffer: Arc<Buffer>) -> Self {
        Self { pipeline, buffer }
    }

    pub async fn collect(&self, models: Vec<Model>) -> Stats {
        let mut stats = Stats::default();

        for model in models {
            let flow = match Flow::try_from(model) {
                Ok(flow) => flow,
                Err(e)   => {
                    warn!("rejected flow: {}", e);
                    stats.rejected += 1;
                    continue;
                }
            };

            if self.record(flow).await {
                stats.accepted += 1;
            } else {
                stats.rejected += 1;
            }
        }

        debug!("collected {} flows, rejected {}", stats.accepted, stats.rejected);

        stats
    }

    pub async fn record(&self, flow: Flow) -> bool {
        let mut rec = Record::new(flow);

        self.pipeline.enrich(&mut rec).await;

        match self.buffer.enqueue(&rec) {
            Ok(()) => true,
            Err(e) => {
                warn!("enqueue failed: {}", e);
                false
            }
        }
    }
}
