//! The tagsmith library keeps a small form of webpage metadata, fetches a
//! page's current meta tags through a public CORS-bypass proxy, and asks an
//! LLM for an SEO report on the tags.

pub mod analyze;
pub mod constants;
pub mod fetch;
pub mod form;
pub mod prompt;
pub mod render;
pub mod session;
pub mod storage;

pub use analyze::{AnalysisConfig, AnalysisError, ConfigError, run_analysis};
pub use fetch::{FetchError, MetaFetcher, PageMeta, extract_page_meta, normalize_target_url};
pub use form::{FormData, FormPatch, FormStore, StatePersistence};
pub use prompt::build_prompt;
pub use session::{FetchNotice, OpState, Session, SessionView, Ticket};
pub use storage::SqliteStore;
