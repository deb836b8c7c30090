use regex_lite::Regex;

use crate::files::FileStore;
use crate::http::request::{Method, Request};
use crate::http::response::Response;

const ECHO_PATTERN: &str = r"^/echo/(.+)$";
const FILES_PATTERN: &str = r"^/files/(.+)$";

/// The route a path resolved to, borrowing any captured segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    /// `/`
    Root,
    /// `/user-agent`
    UserAgent,
    /// `/echo/<value>`
    Echo(&'a str),
    /// `/files/<name>`
    File(&'a str),
    NotFound,
}

/// Fixed route table plus the file store the `/files/` route delegates to.
///
/// Built once at startup and shared read-only between connections.
#[derive(Debug)]
pub struct Router {
    echo: Regex,
    files: Regex,
    store: FileStore,
}

impl Router {
    pub fn new(store: FileStore) -> Result<Self, regex_lite::Error> {
        Ok(Self {
            echo: Regex::new(ECHO_PATTERN)?,
            files: Regex::new(FILES_PATTERN)?,
            store,
        })
    }

    /// Match a path against the routes in priority order.
    ///
    /// Exact routes win over pattern routes; the captured segment keeps any
    /// embedded slashes.
    pub fn resolve<'a>(&self, path: &'a str) -> Route<'a> {
        match path {
            "/" => return Route::Root,
            "/user-agent" => return Route::UserAgent,
            _ => {}
        }

        if let Some(value) = capture(&self.echo, path) {
            return Route::Echo(value);
        }

        if let Some(name) = capture(&self.files, path) {
            return Route::File(name);
        }

        Route::NotFound
    }

    /// Produce the response for a request.
    pub async fn handle(&self, request: &Request) -> Response {
        match self.resolve(&request.path) {
            Route::Root => Response::ok(),
            Route::UserAgent => Response::text(request.user_agent.as_str()),
            Route::Echo(value) => Response::text(value),
            Route::File(name) => self.handle_file(name, request).await,
            Route::NotFound => Response::not_found(),
        }
    }

    async fn handle_file(&self, name: &str, request: &Request) -> Response {
        match request.method {
            Method::GET => match self.store.read(name).await {
                Ok(contents) => Response::octet_stream(contents),
                Err(e) => {
                    tracing::debug!(file = name, error = %e, "File not readable");
                    Response::not_found()
                }
            },

            // Clients always get 201, even if the write failed.
            Method::POST => {
                if let Err(e) = self.store.write(name, request.post_field().as_bytes()).await {
                    tracing::warn!(file = name, error = %e, "Failed to write file");
                }
                Response::created()
            }

            _ => Response::method_not_allowed(),
        }
    }
}

fn capture<'a>(pattern: &Regex, path: &'a str) -> Option<&'a str> {
    pattern
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
