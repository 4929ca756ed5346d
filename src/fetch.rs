// SPDX-FileCopyrightText: The tourmark authors
// SPDX-License-Identifier: MPL-2.0

//! Fetching tour documents

use derive_more::{Display, Error};
use reqwest::blocking::{Client, Response};
use url::Url;

use crate::tour::TourDocument;

/// The tour document could not be retrieved.
#[derive(Debug, Display, Error)]
#[display("failed to fetch {url}: {source}")]
pub struct FetchError {
    /// The requested URL
    #[error(not(source))]
    pub url: Url,

    /// The transport or HTTP status error
    pub source: reqwest::Error,
}

/// The response body is not a valid tour document.
#[derive(Debug, Display, Error)]
#[display("failed to decode tour document: {source}")]
pub struct DecodeError {
    /// The JSON error
    pub source: serde_json::Error,
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        Self { source }
    }
}

/// Decode a tour document from JSON text.
///
/// # Errors
///
/// Returns a [`DecodeError`] if `json` is malformed or does not have the
/// shape of a tour document.
pub fn decode_tour(json: &str) -> Result<TourDocument, DecodeError> {
    let tour = serde_json::from_str(json)?;
    Ok(tour)
}

/// Fetch and decode a tour document with a single blocking GET request.
///
/// # Errors
///
/// Returns a [`crate::Error::Fetch`] if the request fails or the response
/// status is not successful, and a [`crate::Error::Decode`] if the body is
/// not a valid tour document.
pub fn fetch_tour(url: &Url) -> Result<TourDocument, crate::Error> {
    let client = Client::builder().build().map_err(|source| FetchError {
        url: url.clone(),
        source,
    })?;
    fetch_tour_with(&client, url)
}

/// Fetch and decode a tour document with the given client.
///
/// # Errors
///
/// See [`fetch_tour()`].
pub fn fetch_tour_with(client: &Client, url: &Url) -> Result<TourDocument, crate::Error> {
    tracing::info!(%url, "Fetching tour");
    let with_url = |source| FetchError {
        url: url.clone(),
        source,
    };
    let response = client
        .get(url.clone())
        .send()
        .and_then(Response::error_for_status)
        .map_err(with_url)?;
    let body = response.text().map_err(with_url)?;
    tracing::debug!(bytes = body.len(), "Received tour document");
    let tour = decode_tour(&body)?;
    Ok(tour)
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Read as _, Write as _},
        net::TcpListener,
        thread,
    };

    use reqwest::StatusCode;

    use super::*;

    /// Answer a single request on a local port with a canned response.
    fn serve_once(status: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0; 1024];
            while !request.ends_with(b"\r\n\r\n") {
                let len = stream.read(&mut buf).unwrap();
                if len == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..len]);
            }
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {len}\r\nConnection: close\r\n\r\n{body}",
                len = body.len()
            )
            .unwrap();
        });
        format!("http://{addr}/tour.json").parse().unwrap()
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    #[test]
    fn fetch_tour_document() {
        let url = serve_once("200 OK", r#"{"name": "Served Tour", "artworks": []}"#);
        let tour = fetch_tour_with(&local_client(), &url).unwrap();
        assert_eq!(Some("Served Tour"), tour.name.as_deref());
        assert!(tour.artworks.is_empty());
    }

    #[test]
    fn should_fail_to_fetch_on_error_status() {
        let url = serve_once("404 Not Found", "Not Found");
        let err = fetch_tour_with(&local_client(), &url).unwrap_err();
        let crate::Error::Fetch { source } = err else {
            panic!("unexpected error");
        };
        assert_eq!(url, source.url);
        assert_eq!(Some(StatusCode::NOT_FOUND), source.source.status());
    }

    #[test]
    fn should_fail_to_decode_fetched_html() {
        let url = serve_once("200 OK", "<html></html>");
        let err = fetch_tour_with(&local_client(), &url).unwrap_err();
        assert!(matches!(err, crate::Error::Decode { .. }));
    }

    #[test]
    fn decode_tour_document() {
        let tour = decode_tour(
            r#"{"name": "Test Tour", "introNarration": "Hello.", "artworks": [{"title":"Piece A","narration":"Line1\\nLine2","audio":"/a.mp3"}]}"#,
        )
        .unwrap();
        assert_eq!(Some("Test Tour"), tour.name.as_deref());
        assert_eq!("Hello.", tour.intro_narration());
        assert_eq!(1, tour.artworks.len());
        assert_eq!(
            Some(r"Line1\nLine2"),
            tour.artworks[0].narration.as_deref()
        );
    }

    #[test]
    fn should_fail_to_decode_malformed_json() {
        assert!(decode_tour("").is_err());
        assert!(decode_tour("{").is_err());
        assert!(decode_tour("<html>404</html>").is_err());
    }

    #[test]
    fn should_fail_to_decode_wrongly_typed_fields() {
        assert!(decode_tour(r#"{"name": 42}"#).is_err());
        assert!(decode_tour(r#"{"artworks": {}}"#).is_err());
        assert!(decode_tour(r#"{"artworks": [{"title": ["A"]}]}"#).is_err());
    }

    #[test]
    fn missing_artwork_fields_are_decoded() {
        let tour = decode_tour(r#"{"artworks": [{"title": "Untitled"}]}"#).unwrap();
        assert!(tour.artworks[0].narration.is_none());
        assert!(tour.artworks[0].audio.is_none());
    }
}
