use log::debug;
use serde::{Serialize, Deserialize};
use crate::{Client, Error};

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record<'a> {
    #[serde(with = "crate::serde::b64")]
    pub data: &'a [u8],
    pub partition_key: &'a str,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordsOutput {
    #[serde(default)]
    pub failed_record_count: u64,
    pub records: Vec<Outcome>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Outcome {
    pub sequence_number: Option<String>,
    pub shard_id:        Option<String>,
    pub error_code:      Option<String>,
    pub error_message:   Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PutRecords<'a> {
    stream_name: &'a str,
    records:     &'a [Record<'a>],
}

impl Outcome {
    pub fn failed(&self) -> bool {
        self.error_code.is_some()
    }
}

impl Client {
    pub async fn put_records(&self, records: &[Record<'_>]) -> Result<PutRecordsOutput, Error> {
        let arg = PutRecords {
            stream_name: &self.stream,
            records:     records,
        };

        debug!("putting {} records to {}", records.len(), self.stream);

        let out: PutRecordsOutput = self.call("PutRecords", &arg).await?;

        if out.records.len() != records.len() {
            return Err(Error::Mismatch {
                sent:     records.len(),
                received: out.records.len(),
            });
        }

        Ok(out)
    }
}
