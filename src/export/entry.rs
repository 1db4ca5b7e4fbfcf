use anyhow::{Result, anyhow};
use bytes::{Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder, LengthDelimitedCodec};
use crate::flow::Record;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub data: Bytes,
    pub key:  String,
}

impl Entry {
    pub fn new(rec: &Record) -> Result<Self> {
        Ok(Self {
            data: encode(rec)?,
            key:  rec.flow.key().partition(),
        })
    }

    pub fn weight(&self) -> usize {
        self.data.len() + self.key.len()
    }
}

pub fn encode(rec: &Record) -> Result<Bytes> {
    let json = serde_json::to_vec(rec)?;

    let mut codec = LengthDelimitedCodec::new();
    let mut buf   = BytesMut::with_capacity(json.len() + 4);
    codec.encode(Bytes::from(json), &mut buf)?;

    Ok(buf.freeze())
}

pub fn decode(buf: &mut BytesMut) -> Result<Vec<Record>> {
    let mut codec   = LengthDelimitedCodec::new();
    let mut records = Vec::new();

    while let Some(frame) = codec.decode_eof(buf)? {
        let index = records.len();
        let rec   = serde_json::from_slice(&frame).map_err(|e| {
            anyhow!("invalid record {}: {}", index, e)
        })?;
        records.push(rec);
    }

    Ok(records)
}
