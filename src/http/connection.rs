use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::parser::{READ_BUFFER_SIZE, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::routing::Router;

/// Serves exactly one request on a duplex byte stream, then closes it.
pub struct Connection<S> {
    stream: S,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>) -> Self {
        Self {
            stream,
            router,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(Ok(req)) => ConnectionState::Processing(req),
                        Some(Err(response)) => {
                            ConnectionState::Writing(ResponseWriter::new(&response))
                        }
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = self.router.handle(req).await;

                    tracing::debug!(
                        method = %req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Request handled"
                    );

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    // no keep-alive
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        self.stream.shutdown().await?;
        Ok(())
    }

    /// Performs the single read of up to [`READ_BUFFER_SIZE`] bytes.
    ///
    /// Returns `None` if the client closed without sending anything, and an
    /// error response if the request line is malformed.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Result<Request, Response>>> {
        let mut buffer = BytesMut::with_capacity(READ_BUFFER_SIZE);
        let n = (&mut self.stream)
            .take(READ_BUFFER_SIZE as u64)
            .read_buf(&mut buffer)
            .await?;

        if n == 0 {
            // Client closed connection
            return Ok(None);
        }

        match parse_http_request(&buffer) {
            Ok(request) => Ok(Some(Ok(request))),
            Err(e) => {
                tracing::debug!(error = %e, "Malformed request line");
                Ok(Some(Err(Response::bad_request())))
            }
        }
    }
}
