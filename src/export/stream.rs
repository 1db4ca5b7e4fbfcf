use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use stream_api::{Client, Record};
use super::Entry;

#[async_trait]
pub trait Stream: Send + Sync {
    async fn put(&self, batch: &[Entry]) -> Result<Vec<Failure>>;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Failure {
    pub index:   usize,
    pub code:    String,
    pub message: Option<String>,
}

#[async_trait]
impl Stream for Client {
    async fn put(&self, batch: &[Entry]) -> Result<Vec<Failure>> {
        let records = batch.iter().map(|e| Record {
            data:          &e.data,
            partition_key: &e.key,
        }).collect::<Vec<_>>();

        let out = self.put_records(&records).await?;

        let failed = out.records.into_iter().enumerate().filter_map(|(index, r)| {
            Some(Failure {
                index:   index,
                code:    r.error_code?,
                message: r.error_message,
            })
        }).collect::<Vec<_>>();

        if failed.len() as u64 != out.failed_record_count {
            let count = out.failed_record_count;
            warn!("stream reported {} failed records, {} carry an error", count, failed.len());
        }

        Ok(failed)
    }
}
