//! CGI response framing.
//!
//! # Responsibilities
//! - Hold the ordered header block and the rendered body
//! - Reject headers that would break the framing
//! - Write headers, one blank line, then the body
//!
//! # Design Decisions
//! - Lines end in `\n`; servers accept it and it is what CGI scripts emit
//! - The whole response is written before returning; there is no streaming
//!   API that could interleave a header after body bytes

use std::io::Write;

use crate::cgi::error::{CgiError, CgiResult};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_HTML: &str = "text/html; charset=UTF-8";

/// A single response header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// Check that a header can be framed safely.
///
/// Names must be RFC 7230 tokens other than `Content-Type`, which every
/// response carries exactly once. Values must not contain CR or LF, which
/// would end the header block early, or NUL.
pub fn check_header(name: &str, value: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("empty header name");
    }
    if !name.bytes().all(is_token_byte) {
        return Err("header name is not a token");
    }
    if name.eq_ignore_ascii_case(CONTENT_TYPE) {
        return Err("Content-Type is always set by the responder");
    }
    if value.bytes().any(|b| b == b'\r' || b == b'\n') {
        return Err("header value contains a line break");
    }
    if value.bytes().any(|b| b == 0) {
        return Err("header value contains a NUL byte");
    }
    Ok(())
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

/// The complete response for one invocation.
#[derive(Debug, Clone)]
pub struct CgiResponse {
    headers: Vec<Header>,
    body: String,
}

impl CgiResponse {
    /// An HTML response with the mandatory Content-Type header.
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            headers: vec![Header {
                name: CONTENT_TYPE.to_string(),
                value: CONTENT_TYPE_HTML.to_string(),
            }],
            body: body.into(),
        }
    }

    /// Append a header after the ones already present.
    pub fn push_header(&mut self, name: &str, value: &str) -> CgiResult<()> {
        check_header(name, value).map_err(|reason| CgiError::InvalidHeader {
            name: name.to_string(),
            reason,
        })?;
        self.headers.push(Header {
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Write the framed response and flush the sink.
    ///
    /// Returns the number of bytes written.
    pub fn write_to<W: Write>(&self, out: &mut W) -> CgiResult<usize> {
        let mut head = String::new();
        for header in &self.headers {
            head.push_str(&header.name);
            head.push_str(": ");
            head.push_str(&header.value);
            head.push('\n');
        }
        head.push('\n');

        out.write_all(head.as_bytes())?;
        out.write_all(self.body.as_bytes())?;
        out.flush()?;

        Ok(head.len() + self.body.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_framing() {
        let response = CgiResponse::html("<p>hi</p>");
        let mut out = Vec::new();
        let written = response.write_to(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Content-Type: text/html; charset=UTF-8\n\n<p>hi</p>");
        assert_eq!(written, text.len());
    }

    #[test]
    fn test_extra_headers_precede_separator() {
        let mut response = CgiResponse::html("body");
        response.push_header("Cache-Control", "no-store").unwrap();

        let mut out = Vec::new();
        response.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let (head, body) = text.split_once("\n\n").unwrap();
        assert_eq!(
            head,
            "Content-Type: text/html; charset=UTF-8\nCache-Control: no-store"
        );
        assert_eq!(body, "body");
    }

    #[test]
    fn test_rejects_header_injection() {
        let mut response = CgiResponse::html("body");
        let err = response
            .push_header("X-Test", "a\r\nSet-Cookie: x=1")
            .unwrap_err();
        assert!(matches!(err, CgiError::InvalidHeader { .. }));
        assert_eq!(response.headers().len(), 1);

        assert!(response.push_header("Bad Name", "v").is_err());
        assert!(response.push_header("", "v").is_err());
    }

    #[test]
    fn test_rejects_second_content_type() {
        let mut response = CgiResponse::html("body");
        for name in ["Content-Type", "content-type", "CONTENT-TYPE"] {
            let err = response.push_header(name, "text/plain").unwrap_err();
            assert!(matches!(
                err,
                CgiError::InvalidHeader { reason, .. } if reason.contains("Content-Type")
            ));
        }
        assert_eq!(response.headers().len(), 1);

        let mut out = Vec::new();
        response.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Content-Type").count(), 1);
    }

    #[test]
    fn test_nul_has_its_own_reason() {
        assert_eq!(
            check_header("X-Test", "a\0b"),
            Err("header value contains a NUL byte")
        );
        assert_eq!(
            check_header("X-Test", "a\nb"),
            Err("header value contains a line break")
        );
        assert_eq!(check_header("X-Test", "ok"), Ok(()));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_surfaces() {
        let err = CgiResponse::html("body").write_to(&mut BrokenPipe).unwrap_err();
        match err {
            CgiError::Write(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }
}
