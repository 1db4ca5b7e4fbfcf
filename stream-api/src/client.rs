use std::time::Duration;
use http::{Method, StatusCode};
use reqwest::{Request, Response};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::{Serialize, Deserialize, de::DeserializeOwned};
use url::Url;
use crate::Error;

const TARGET_PREFIX: &str = "Kinesis_20131202";
const CONTENT_JSON:  &str = "application/x-amz-json-1.1";

#[derive(Clone)]
pub struct Client {
    pub(crate) client: reqwest::Client,
    pub(crate) url:    Url,
    pub(crate) stream: String,
}

impl Client {
    pub fn new(endpoint: &str, stream: &str, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url:    Url::parse(endpoint)?,
            stream: stream.to_owned(),
        })
    }

    pub fn stream(&self) -> &str {
        &self.stream
    }

    pub async fn call<T: Serialize, U: DeserializeOwned>(&self, action: &str, body: &T) -> Result<U, Error> {
        let body = serde_json::to_vec(body)?;

        let mut request = self.request(Method::POST, action)?;
        request.body_mut().replace(body.into());

        let res = self.send(request).await?;

        Ok(res.json().await?)
    }

    pub async fn send(&self, request: Request) -> Result<Response, Error> {
        let response = self.client.execute(request).await?;
        let status   = response.status();
        match status {
            _ if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(Error::Auth(status.into())),
            StatusCode::FORBIDDEN    => Err(Error::Auth(status.into())),
            _                        => Err(error(response).await?),
        }
    }

    pub(crate) fn request(&self, method: Method, action: &str) -> Result<Request, Error> {
        let target  = format!("{}.{}", TARGET_PREFIX, action);
        let mut request = Request::new(method, self.url.clone());
        let headers = request.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_JSON));
        headers.insert("x-amz-target", HeaderValue::from_str(&target)?);
        Ok(request)
    }
}

async fn error(response: Response) -> Result<Error, Error> {
    let status = response.status();

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(rename = "__type")]
        kind:    Option<String>,
        message: Option<String>,
    }

    Ok(match response.json::<Wrapper>().await {
        Ok(Wrapper { kind: Some(kind), message }) => {
            let msg = match message {
                Some(message) => format!("{}: {}", kind, message),
                None          => kind,
            };
            Error::App(msg, status.into())
        },
        Ok(Wrapper { message: Some(msg), .. }) => Error::App(msg, status.into()),
        _                                      => Error::Status(status.into()),
    })
}
