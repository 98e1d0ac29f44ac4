use std::time::Duration;

use reqwest::{blocking::Client, StatusCode};
use thiserror::Error;

use crate::{
    record::DailyRecord,
    series::{oldest_first, GroupedSeries},
};

pub const DEFAULT_BASE_URL: &str = "https://covidtracking.com/api/v1/";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not set up the HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("{url} returned no records")]
    EmptyBody { url: String },
    #[error("could not decode records from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The two collections offered by the API.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Endpoint {
    National,
    States,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::National => "us/daily.json",
            Endpoint::States => "states/daily.json",
        }
    }
}

/// Blocking client for the daily endpoints. Cheap to clone, so every
/// request can take its own copy to a worker thread.
#[derive(Clone, Debug)]
pub struct CovidClient {
    base_url: String,
    http: Client,
}

impl CovidClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        // No timeout: a request runs until it completes or fails.
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            base_url: base_url.to_owned(),
            http,
        })
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }

    /// Nationwide records, oldest first.
    pub fn fetch_national(&self) -> Result<Vec<DailyRecord>, FetchError> {
        let url = self.url(Endpoint::National);
        let body = self.get(&url)?;
        decode_records(&url, &body).map(oldest_first)
    }

    /// Per-state records, oldest first and grouped by state.
    pub fn fetch_states(&self) -> Result<GroupedSeries, FetchError> {
        let url = self.url(Endpoint::States);
        let body = self.get(&url)?;
        let records = decode_records(&url, &body)?;
        Ok(GroupedSeries::from_oldest_first(oldest_first(records)))
    }

    fn get(&self, url: &str) -> Result<String, FetchError> {
        log::info!("requesting {}", url);
        let transport = |source| FetchError::Transport {
            url: url.to_owned(),
            source,
        };
        let response = self.http.get(url).send().map_err(transport)?;
        log::info!("{} answered with {}", url, response.status());
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_owned(),
                status,
            });
        }
        response.text().map_err(transport)
    }
}

/// Decode a JSON array of records in the order the API sent them. A
/// missing, `null` or empty array is an error.
pub fn decode_records(url: &str, body: &str) -> Result<Vec<DailyRecord>, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::EmptyBody { url: url.to_owned() });
    }
    let records: Option<Vec<DailyRecord>> =
        serde_json::from_str(body).map_err(|source| FetchError::Malformed {
            url: url.to_owned(),
            source,
        })?;
    match records {
        Some(records) if !records.is_empty() => {
            log::debug!("decoded {} records from {}", records.len(), url);
            Ok(records)
        }
        _ => Err(FetchError::EmptyBody { url: url.to_owned() }),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread,
    };

    use super::*;
    use crate::record::Jurisdiction;

    const URL: &str = "https://example.test/states/daily.json";

    /// Nothing listens on the discard port.
    const REFUSED_BASE_URL: &str = "http://127.0.0.1:9/";

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Answer a single request with `status` and `body`, return the base url
    /// to reach the server.
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0; 4096];
            let _ = stream.read(&mut request);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{}/", addr)
    }

    #[test]
    fn test_fetch_national_reverses_body() {
        init();
        let base_url = serve_once(
            "200 OK",
            r#"[
                {"date": "2020-03-02T00:00:00", "positiveIncrease": 15},
                {"date": "2020-03-01T00:00:00", "positiveIncrease": 10}
            ]"#,
        );
        let records = CovidClient::new(&base_url)
            .unwrap()
            .fetch_national()
            .unwrap();
        let values: Vec<i64> = records.iter().map(|r| r.positive_increase).collect();
        assert_eq!(values, vec![10, 15]);
    }

    #[test]
    fn test_fetch_states_groups_body() {
        init();
        let base_url = serve_once(
            "200 OK",
            r#"[
                {"date": 20200302, "state": "NY", "positiveIncrease": 2},
                {"date": 20200302, "state": "CA", "positiveIncrease": 4},
                {"date": 20200301, "state": "NY", "positiveIncrease": 1}
            ]"#,
        );
        let grouped = CovidClient::new(&base_url)
            .unwrap()
            .fetch_states()
            .unwrap();
        assert_eq!(grouped.len(), 2);
        let ny: Vec<i64> = grouped
            .get(&Jurisdiction::State("NY".into()))
            .unwrap()
            .iter()
            .map(|r| r.positive_increase)
            .collect();
        assert_eq!(ny, vec![1, 2]);
    }

    #[test]
    fn test_fetch_error_status() {
        init();
        let base_url = serve_once("503 Service Unavailable", "maintenance");
        let res = CovidClient::new(&base_url).unwrap().fetch_national();
        match res {
            Err(FetchError::Status { url, status }) => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert!(url.ends_with("/us/daily.json"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_error_empty_ok_body() {
        init();
        let base_url = serve_once("200 OK", "[]");
        let res = CovidClient::new(&base_url).unwrap().fetch_states();
        assert!(matches!(res, Err(FetchError::EmptyBody { .. })), "{:?}", res);
    }

    #[test]
    fn test_fetch_error_transport() {
        init();
        let client = CovidClient::new(REFUSED_BASE_URL).unwrap();
        let res = client.fetch_national();
        assert!(matches!(res, Err(FetchError::Transport { .. })), "{:?}", res);
        let res = client.fetch_states();
        assert!(matches!(res, Err(FetchError::Transport { .. })), "{:?}", res);
    }

    #[test]
    fn test_bad_base_url_fails_on_request() {
        init();
        // Building the client does not look at the url, so a bad one only
        // shows up once a request is made.
        let client = CovidClient::new("not a url").unwrap();
        let res = client.fetch_national();
        assert!(matches!(res, Err(FetchError::Transport { .. })), "{:?}", res);
    }

    #[test]
    fn test_endpoint_urls() {
        init();
        let client = CovidClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            client.url(Endpoint::National),
            "https://covidtracking.com/api/v1/us/daily.json"
        );
        let client = CovidClient::new("http://localhost:8080/api").unwrap();
        assert_eq!(
            client.url(Endpoint::States),
            "http://localhost:8080/api/states/daily.json"
        );
    }

    #[test]
    fn test_decode_keeps_source_order() {
        init();
        let body = r#"[
            {"date": "2020-03-02T00:00:00", "state": "NY", "positiveIncrease": 2},
            {"date": "2020-03-02T00:00:00", "state": "CA", "positiveIncrease": 4},
            {"date": "2020-03-01T00:00:00", "state": "NY", "positiveIncrease": 1}
        ]"#;
        let records = decode_records(URL, body).unwrap();
        let values: Vec<i64> = records.iter().map(|r| r.positive_increase).collect();
        assert_eq!(values, vec![2, 4, 1]);

        let grouped = GroupedSeries::from_oldest_first(oldest_first(records));
        let ny: Vec<i64> = grouped
            .get(&Jurisdiction::State("NY".into()))
            .unwrap()
            .iter()
            .map(|r| r.positive_increase)
            .collect();
        assert_eq!(ny, vec![1, 2]);
        assert_eq!(grouped.len(), 2);
    }

    #[test]
    fn test_empty_bodies_are_errors() {
        init();
        for body in ["", "  \n", "null", "[]"] {
            let res = decode_records(URL, body);
            assert!(
                matches!(res, Err(FetchError::EmptyBody { .. })),
                "body {:?} gave {:?}",
                body,
                res
            );
        }
    }

    #[test]
    fn test_malformed_bodies_are_errors() {
        init();
        for body in [
            "<html>Service Unavailable</html>",
            r#"{"date": "2020-03-01T00:00:00"}"#,
            r#"[{"date": "yesterday", "positiveIncrease": 1}]"#,
            r#"[{"date": "2020-03-01T00:00:00", "positiveIncrease": "many"}]"#,
        ] {
            let res = decode_records(URL, body);
            assert!(
                matches!(res, Err(FetchError::Malformed { .. })),
                "body {:?} gave {:?}",
                body,
                res
            );
        }
    }

    #[test]
    fn test_error_messages_name_the_url() {
        let err = decode_records(URL, "[]").unwrap_err();
        assert_eq!(err.to_string(), format!("{} returned no records", URL));
        let err = FetchError::Status {
            url: URL.to_owned(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert!(err.to_string().contains("503"));
    }
}
