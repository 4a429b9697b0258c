//! CGI-style request handling core
//!
//! Each invocation acquires raw input (query-string fragments or a request
//! body), parses it into parameters, dispatches to one operation and emits
//! plain text. The binary wraps this for single-shot CGI runs and for a
//! local development host.

pub mod cgi;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod response;
pub mod server;
