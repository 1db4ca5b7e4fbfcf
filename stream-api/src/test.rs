use mockito::{Matcher, Server};
use serde_json::json;
use crate::{Client, Error, Record};

const TARGET: &str = "Kinesis_20131202.PutRecords";

fn records<'a>(data: &'a [Vec<u8>]) -> Vec<Record<'a>> {
    data.iter().map(|d| Record {
        data:          d,
        partition_key: "10.0.0.1:80-10.0.0.2:443-6",
    }).collect()
}

#[tokio::test]
async fn put_records_success() {
    let mut server = Server::new_async().await;
    let mock = server.mock("POST", "/")
        .match_header("x-amz-target", TARGET)
        .match_header("content-type", "application/x-amz-json-1.1")
        .match_body(Matcher::PartialJson(json!({
            "StreamName": "flows",
            "Records": [
                { "Data": "AAAAAXs=", "PartitionKey": "10.0.0.1:80-10.0.0.2:443-6" },
                { "Data": "AAAAAX0=", "PartitionKey": "10.0.0.1:80-10.0.0.2:443-6" },
            ],
        })))
        .with_status(200)
        .with_body(json!({
            "FailedRecordCount": 0,
            "Records": [
                { "SequenceNumber": "1", "ShardId": "shardId-000000000000" },
                { "SequenceNumber": "2", "ShardId": "shardId-000000000000" },
            ],
        }).to_string())
        .create_async()
        .await;

    let client = Client::new(&server.url(), "flows", None).unwrap();
    let data   = vec![vec![0, 0, 0, 1, b'{'], vec![0, 0, 0, 1, b'}']];
    let out    = client.put_records(&records(&data)).await.unwrap();

    assert_eq!(0, out.failed_record_count);
    assert!(out.records.iter().all(|r| !r.failed()));
    mock.assert_async().await;
}

#[tokio::test]
async fn put_records_partial() {
    let mut server = Server::new_async().await;
    let _mock = server.mock("POST", "/")
        .with_status(200)
        .with_body(json!({
            "FailedRecordCount": 1,
            "Records": [
                { "SequenceNumber": "1", "ShardId": "shardId-000000000000" },
                { "ErrorCode": "ProvisionedThroughputExceededException", "ErrorMessage": "slow down" },
            ],
        }).to_string())
        .create_async()
        .await;

    let client = Client::new(&server.url(), "flows", None).unwrap();
    let data   = vec![vec![1], vec![2]];
    let out    = client.put_records(&records(&data)).await.unwrap();

    assert_eq!(1, out.failed_record_count);
    assert!(!out.records[0].failed());
    assert!(out.records[1].failed());
}

#[tokio::test]
async fn put_records_app_error() {
    let mut server = Server::new_async().await;
    let _mock = server.mock("POST", "/")
        .with_status(400)
        .with_body(json!({
            "__type":  "ResourceNotFoundException",
            "message": "stream flows not found",
        }).to_string())
        .create_async()
        .await;

    let client = Client::new(&server.url(), "flows", None).unwrap();
    let data   = vec![vec![1]];
    let err    = client.put_records(&records(&data)).await.unwrap_err();

    let msg = "ResourceNotFoundException: stream flows not found".to_owned();
    assert_eq!(Error::App(msg, 400), err);
    assert_eq!("stream error (400): ResourceNotFoundException: stream flows not found", err.to_string());
}

#[tokio::test]
async fn put_records_status_error() {
    let mut server = Server::new_async().await;
    let _mock = server.mock("POST", "/")
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let client = Client::new(&server.url(), "flows", None).unwrap();
    let data   = vec![vec![1]];
    let err    = client.put_records(&records(&data)).await.unwrap_err();

    assert_eq!(Error::Status(503), err);
}

#[tokio::test]
async fn put_records_auth_error() {
    let mut server = Server::new_async().await;
    let _mock = server.mock("POST", "/")
        .with_status(403)
        .create_async()
        .await;

    let client = Client::new(&server.url(), "flows", None).unwrap();
    let data   = vec![vec![1]];
    let err    = client.put_records(&records(&data)).await.unwrap_err();

    assert_eq!(Error::Auth(403), err);
    assert_eq!("stream access denied (403)", err.to_string());
}

#[tokio::test]
async fn put_records_short_response() {
    let mut server = Server::new_async().await;
    let _mock = server.mock("POST", "/")
        .with_status(200)
        .with_body(json!({ "FailedRecordCount": 0, "Records": [] }).to_string())
        .create_async()
        .await;

    let client = Client::new(&server.url(), "flows", None).unwrap();
    let data   = vec![vec![1]];
    let err    = client.put_records(&records(&data)).await.unwrap_err();

    assert_eq!(Error::Mismatch { sent: 1, received: 0 }, err);
    assert_eq!("sent 1 records, got 0 outcomes", err.to_string());
}

#[test]
fn invalid_endpoint() {
    match Client::new("not a url", "flows", None) {
        Err(Error::Endpoint(_)) => (),
        Err(e)                  => panic!("unexpected error {}", e),
        Ok(_)                   => panic!("accepted invalid endpoint"),
    }
}
