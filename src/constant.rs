pub const FRONT_PAGE_URL: &str = "https://heydesigner.com/";

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_MAX_BODY_CHARS: usize = 10_000;

// Article sites serve reduced or blocked pages to clients without browser headers.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
pub const ACCEPT_HEADER: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
pub const ACCEPT_LANGUAGE_HEADER: &str = "en-US,en;q=0.9";
