/// HTTP request methods.
///
/// Only GET and POST carry meaning for the file routes. Any other token is
/// kept verbatim in `Other` so routing can still answer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// Any token not listed above
    Other(String),
}

/// Prefix stripped from the third request line to obtain the user agent.
pub const USER_AGENT_PREFIX: &str = "User-Agent: ";

/// Represents a parsed HTTP request from a client.
///
/// Only the fields the routes need are extracted. Headers are not parsed
/// into a map: the user agent is read from a fixed line position, see
/// [`crate::http::parser`].
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path (e.g., "/echo/abc")
    pub path: String,
    /// Value of the `User-Agent` line, empty if the request had none
    pub user_agent: String,
    /// Last line of the payload split on `&`
    pub post_data: Vec<String>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    user_agent: String,
    post_data: Vec<String>,
}

impl Method {
    /// Returns the method token as it appears on the wire.
    ///
    /// ```
    /// # use courier::http::request::Method;
    /// assert_eq!(Method::from("GET").as_str(), "GET");
    /// assert_eq!(Method::from("BREW").as_str(), "BREW");
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::Other(token) => token,
        }
    }
}

impl From<&str> for Method {
    /// Parses a method token. Matching is case-sensitive; unknown tokens
    /// become `Method::Other`.
    fn from(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            other => Method::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            user_agent: String::new(),
            post_data: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the raw body line; it is split on `&` the same way the parser does.
    pub fn body(mut self, line: &str) -> Self {
        self.post_data = split_post_data(line);
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            user_agent: self.user_agent,
            post_data: self.post_data,
        })
    }
}

impl Request {
    /// First `&`-separated field of the body, or "" when the body is empty.
    pub fn post_field(&self) -> &str {
        self.post_data.first().map(String::as_str).unwrap_or("")
    }
}

pub(crate) fn split_post_data(line: &str) -> Vec<String> {
    line.split('&').map(str::to_string).collect()
}
