use crate::assets::file;
use crate::assets::path::sanitize;
use crate::body::{empty, from_file, full};
use crate::err::Error;
use headers::{ContentLength, ContentType, HeaderMapExt};
use http_body_util::combinators::BoxBody;
use http_body_util::BodyExt;
use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request, Response, StatusCode};
use std::path::PathBuf;

/// Fixed root-path response when the directory has no index file.
pub const GREETING: &str = "Server is running";

pub struct State {
    pub dir: PathBuf,
}

pub async fn respond_to_request(
    req: Request<Incoming>,
    state: &State,
) -> Response<BoxBody<Bytes, Error>> {
    match *req.method() {
        Method::GET | Method::HEAD => get(req, state).await,
        _ => {
            log::warn!("{} {} -> [method not allowed]", req.method(), req.uri());
            let mut resp = Response::new(empty());
            *resp.status_mut() = StatusCode::METHOD_NOT_ALLOWED;
            resp
        }
    }
}

async fn get(req: Request<Incoming>, state: &State) -> Response<BoxBody<Bytes, Error>> {
    let rel = match sanitize(req.uri().path()) {
        Some(rel) => rel,
        None => {
            log::warn!("{} {} -> [rejected path]", req.method(), req.uri());
            let mut resp = Response::new(empty());
            *resp.status_mut() = StatusCode::NOT_FOUND;
            return resp;
        }
    };

    match file::open(&state.dir, &rel).await {
        Ok(Some(file::Found { path, file, len })) => {
            log::info!("{} {} -> [found] {}", req.method(), req.uri(), path.display());
            let mut resp = Response::new(from_file(file).map_err(Error::from).boxed());
            resp.headers_mut().typed_insert(ContentLength(len));
            resp.headers_mut().typed_insert(ContentType::from(
                mime_guess::from_path(&path).first_or_octet_stream(),
            ));
            resp
        }
        Ok(None) if rel.as_os_str().is_empty() => {
            log::info!("{} {} -> [greeting]", req.method(), req.uri());
            let mut resp = Response::new(full(GREETING));
            resp.headers_mut().typed_insert(ContentType::text());
            resp
        }
        Ok(None) => {
            log::info!("{} {} -> [not found]", req.method(), req.uri());
            let mut resp = Response::new(empty());
            *resp.status_mut() = StatusCode::NOT_FOUND;
            resp
        }
        Err(e) => {
            log::error!("{} {} -> [file error] {}", req.method(), req.uri(), e);
            let mut resp = Response::new(empty());
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            resp
        }
    }
}
