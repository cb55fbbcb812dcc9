#![allow(dead_code)]

use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::header::HeaderMap;
use hyper::{Method, Request, StatusCode};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::net::SocketAddr;

pub async fn get(addr: SocketAddr, path: &str) -> (StatusCode, HeaderMap, Bytes) {
    request(addr, Method::GET, path).await
}

pub async fn request(
    addr: SocketAddr,
    method: Method,
    path: &str,
) -> (StatusCode, HeaderMap, Bytes) {
    let client: Client<HttpConnector, Empty<Bytes>> =
        Client::builder(TokioExecutor::new()).build_http();

    let req = Request::builder()
        .method(method)
        .uri(format!("http://{}{}", addr, path))
        .body(Empty::new())
        .unwrap();

    let resp = client.request(req).await.unwrap();
    let (parts, body) = resp.into_parts();
    let body = body.collect().await.unwrap().to_bytes();
    (parts.status, parts.headers, body)
}

pub fn content_type(headers: &HeaderMap) -> &str {
    headers["content-type"].to_str().unwrap()
}
