use crate::config::FILE_STREAM_CAPACITY;
use futures::TryStreamExt;
use http_body_util::combinators::BoxBody;
use http_body_util::StreamBody;
use http_body_util::{BodyExt, Empty, Full};
use hyper::body::{Body, Bytes, Frame};
use std::io;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

pub fn empty<E>() -> BoxBody<Bytes, E> {
    Empty::<Bytes>::new()
        .map_err(|never| match never {})
        .boxed()
}

pub fn full<E>(bytes: impl Into<Bytes>) -> BoxBody<Bytes, E> {
    Full::new(bytes.into())
        .map_err(|never| match never {})
        .boxed()
}

pub fn from_file(file: File) -> impl Body<Data = Bytes, Error = io::Error> {
    let stream = ReaderStream::with_capacity(file, FILE_STREAM_CAPACITY);
    StreamBody::new(stream.map_ok(Frame::data))
}
