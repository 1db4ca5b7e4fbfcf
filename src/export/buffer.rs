use std::collections::VecDeque;
use std::sync::Arc;
use anyhow::{Result, anyhow};
use log::{debug, info, warn};
use parking_lot::Mutex;
use tokio::sync::Mutex as FlushLock;
use crate::flow::Record;
use super::{Entry, Failure, Stream};

pub const MAX_RECORDS: usize = 500;

#[derive(Clone, Debug)]
pub struct Config {
    pub max_size:  usize,
    pub max_count: usize,
    pub rate:      u32,
}

pub struct Buffer {
    pub(super) queue: Mutex<VecDeque<Entry>>,
    flush:            FlushLock<()>,
    stream:           Arc<dyn Stream>,
    config:           Config,
}

impl Buffer {
    pub fn new(stream: Arc<dyn Stream>, config: Config) -> Self {
        let config = Config {
            max_size:  config.max_size,
            max_count: config.max_count.max(1).min(MAX_RECORDS),
            rate:      config.rate.max(1),
        };

        Self {
            queue:  Mutex::new(VecDeque::new()),
            flush:  FlushLock::new(()),
            stream: stream,
            config: config,
        }
    }

    pub fn enqueue(&self, rec: &Record) -> Result<()> {
        self.push(Entry::new(rec)?)
    }

    pub fn push(&self, entry: Entry) -> Result<()> {
        let weight = entry.weight();
        if weight > self.config.max_size {
            let max = self.config.max_size;
            return Err(anyhow!("record {} weighs {} bytes, max upload is {}", entry.key, weight, max));
        }

        self.queue.lock().push_back(entry);

        Ok(())
    }

    pub async fn flush(&self) -> Result<usize> {
        let _flush = self.flush.lock().await;

        let (batch, size) = match self.next() {
            Some(next) => next,
            None       => return Ok(0),
        };

        let count  = batch.len();
        let result = self.stream.put(&batch).await;

        match result {
            Ok(failed) if failed.is_empty() => {
                info!("uploaded {} records ({} bytes)", count, size);
                Ok(count)
            },
            Ok(failed) => {
                let retry = self.requeue(batch, &failed);
                warn!("uploaded {} records ({} bytes), {} failed", count, size, retry);
                Err(anyhow!("failed to upload {} of {} records", retry, count))
            },
            Err(e) => {
                warn!("upload of {} records ({} bytes) failed: {}", count, size, e);
                self.retry(batch);
                Err(e)
            },
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    fn next(&self) -> Option<(Vec<Entry>, usize)> {
        let mut queue = self.queue.lock();

        if queue.is_empty() {
            return None;
        }

        let Config { max_size, max_count, .. } = self.config;
        let (count, size) = batch(queue.iter(), max_size, max_count);
        let batch = queue.drain(..count).collect::<Vec<_>>();

        debug!("flushing {} of {} queued records", count, count + queue.len());

        Some((batch, size))
    }

    fn requeue(&self, batch: Vec<Entry>, failed: &[Failure]) -> usize {
        let mut retry = vec![false; batch.len()];

        for f in failed {
            match retry.get_mut(f.index) {
                Some(slot) => *slot = true,
                None       => warn!("upload failure for unknown index {}", f.index),
            }
            debug!("record {} failed: {} {:?}", f.index, f.code, f.message);
        }

        let batch = batch.into_iter().zip(retry).filter_map(|(entry, retry)| {
            match retry {
                true  => Some(entry),
                false => None,
            }
        }).collect::<Vec<_>>();

        let count = batch.len();
        self.retry(batch);
        count
    }

    fn retry(&self, batch: Vec<Entry>) {
        let mut queue = self.queue.lock();
        for entry in batch.into_iter().rev() {
            queue.push_front(entry);
        }
    }
}

pub fn batch<'a, I>(entries: I, max_size: usize, max_count: usize) -> (usize, usize)
    where I: IntoIterator<Item = &'a Entry>
{
    let mut count = 0;
    let mut size  = 0;

    for entry in entries {
        let weight = entry.weight();
        if count == max_count || size + weight > max_size {
            break;
        }
        count += 1;
        size  += weight;
    }

    (count, size)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size:  1_000_000,
            max_count: MAX_RECORDS,
            rate:      1,
        }
    }
}
