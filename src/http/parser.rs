//! Request parsing for the single read a connection performs.
//!
//! The format accepted here is deliberately narrow: the request line, then
//! `Host`, then `User-Agent` on line index 2, and an optional form body on the
//! final line. Clients that reorder or omit headers get a wrong (but defined)
//! user agent; no header map is built.

use thiserror::Error;

use crate::http::request::{Method, Request, USER_AGENT_PREFIX, split_post_data};

/// Bytes taken from the socket in the one read a connection performs.
pub const READ_BUFFER_SIZE: usize = 4096;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("request line has no method")]
    MissingMethod,
    #[error("request line has no path")]
    MissingPath,
}

pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = String::from_utf8_lossy(buf);

    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    // Request line
    let mut parts = lines[0].split_whitespace();
    let method = parts.next().ok_or(ParseError::MissingMethod)?;
    let path = parts.next().ok_or(ParseError::MissingPath)?;

    let user_agent = lines
        .get(2)
        .copied()
        .map(|line| line.strip_prefix(USER_AGENT_PREFIX).unwrap_or(line))
        .unwrap_or_default();

    // split always yields at least one line
    let body_line = lines.last().copied().unwrap_or_default();

    Ok(Request {
        method: Method::from(method),
        path: path.to_string(),
        user_agent: user_agent.to_string(),
        post_data: split_post_data(body_line),
    })
}
