use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use log::{debug, info, warn};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use super::Buffer;

pub struct Uploader {
    buffer: Arc<Buffer>,
    stop:   watch::Sender<bool>,
    task:   JoinHandle<()>,
}

impl Uploader {
    pub fn start(buffer: Arc<Buffer>, handle: &Handle) -> Self {
        let (tx, rx) = watch::channel(false);
        let period   = Duration::from_secs(1) / buffer.config().rate;
        let task     = handle.spawn(upload(buffer.clone(), period, rx));

        info!("uploading every {:?}", period);

        Self {
            buffer: buffer,
            stop:   tx,
            task:   task,
        }
    }

    pub async fn stop(self) -> Result<usize> {
        info!("stopping uploader, {} records queued", self.buffer.len());

        if self.stop.send(true).is_err() {
            debug!("upload task already finished");
        }

        if let Err(e) = self.task.await {
            warn!("upload task failed: {}", e);
        }

        self.buffer.flush().await
    }
}

async fn upload(buffer: Arc<Buffer>, period: Duration, mut stop: watch::Receiver<bool>) {
    let mut timer = interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = stop.changed() => break,
            _ = timer.tick()   => (),
        }

        // TODO: back off while the stream keeps failing, retries run at the flush rate
        if let Err(e) = buffer.flush().await {
            warn!("upload failed: {}", e);
        }
    }

    debug!("upload task stopped");
}
