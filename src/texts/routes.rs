use crate::body::{empty, full};
use crate::err::Error;
use crate::texts::id::Identifier;
use crate::texts::lookup::{self, Lookup, DEFAULT_FILE_NAME};
use headers::{ContentType, HeaderMapExt};
use http_body_util::combinators::BoxBody;
use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request, Response, StatusCode};
use std::path::PathBuf;

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
    let segment = match lookup_segment(req.uri().path()) {
        Some(segment) => segment,
        None => {
            log::warn!("{} {} -> [no match]", req.method(), req.uri());
            return text_response(StatusCode::NOT_FOUND, "Not found");
        }
    };

    // Validation happens before any filesystem access; the raw segment is
    // never percent-decoded, so encoded traversal sequences fail here too.
    let id = match Identifier::parse(segment) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("{} {} -> [invalid id] {}", req.method(), req.uri(), e);
            return text_response(StatusCode::BAD_REQUEST, "Invalid ID");
        }
    };

    match lookup::resolve(&state.dir, &id).await {
        Ok(Lookup::Found { path, contents }) => {
            log::info!("{} {} -> [found] {}", req.method(), req.uri(), path.display());
            text_response(StatusCode::OK, contents)
        }
        Ok(Lookup::Fallback { path, contents }) => {
            log::info!(
                "{} {} -> [fallback] {}",
                req.method(),
                req.uri(),
                path.display()
            );
            text_response(StatusCode::OK, contents)
        }
        Ok(Lookup::Absent) => {
            log::info!("{} {} -> [not found]", req.method(), req.uri());
            text_response(StatusCode::NOT_FOUND, "Not found")
        }
        Err(e) => {
            log::error!("{} {} -> [read error] {}", req.method(), req.uri(), e);
            let mut resp = Response::new(empty());
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            resp
        }
    }
}

/// The endpoint covers paths of the exact shape `/{segment}/file.txt`;
/// everything else is not this route.
fn lookup_segment(path: &str) -> Option<&str> {
    let rest = path.strip_prefix('/')?;
    let (segment, tail) = rest.split_once('/')?;
    (tail == DEFAULT_FILE_NAME).then_some(segment)
}

fn text_response(status: StatusCode, body: impl Into<Bytes>) -> Response<BoxBody<Bytes, Error>> {
    let mut resp = Response::new(full(body.into()));
    *resp.status_mut() = status;
    resp.headers_mut().typed_insert(ContentType::text());
    resp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_identifier_segment() {
        assert_eq!(lookup_segment("/abc/file.txt"), Some("abc"));
        assert_eq!(lookup_segment("//file.txt"), Some(""));
        assert_eq!(lookup_segment("/../file.txt"), Some(".."));
    }

    #[test]
    fn other_path_shapes_miss() {
        assert_eq!(lookup_segment("/"), None);
        assert_eq!(lookup_segment("/file.txt"), None);
        assert_eq!(lookup_segment("/abc"), None);
        assert_eq!(lookup_segment("/abc/other.txt"), None);
        assert_eq!(lookup_segment("/abc/file.txt/"), None);
        assert_eq!(lookup_segment("/a/b/file.txt"), None);
        assert_eq!(lookup_segment("abc/file.txt"), None);
    }
}
