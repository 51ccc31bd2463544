//! Tableau Server REST API constants

/// API path prefix, followed by the API version
pub const API_BASE_PATH: &str = "api";

/// Header carrying the session token
pub const AUTH_HEADER: &str = "X-Tableau-Auth";

/// User agent sent with every request
pub const USER_AGENT: &str = "tableau-dictionary/0.1";

pub const ACCEPT_JSON: &str = "application/json";

/// Content type of a plain `.tds` download; anything else is a package
pub const XML_CONTENT_TYPE: &str = "application/xml";
