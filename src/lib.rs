//! # SEKKEI: Architecture-as-Code DSL Processing Core
//!
//! SEKKEI processes textual architecture definitions written in a small
//! domain-specific language. A definition can be split across many files,
//! directories, and remote locations, stitched together with `!include`
//! directives; this crate implements that stitching together with the
//! model nodes it feeds.
//!
//! ## Position in the Pipeline
//!
//! Include expansion runs while the line reader walks a source file,
//! before any structural parsing of the included content:
//!
//! ```text
//! Source Lines → Tokenizer → Include Expansion → Directive Parsers → Model
//! ```
//!
//! When the reader encounters an include directive it tokenizes the line,
//! hands the tokens to [`include::IncludeParser`], and resumes with the
//! next input line once every discovered source has been registered on
//! the parsing context. There is no concurrency between expansion and the
//! outer parse: directory listing, file reads, and network fetches all
//! block the parsing thread.
//!
//! ## Core Components
//!
//! * [`tokens`]: Indexed access to the split tokens of a directive line
//! * [`context`]: The parsing context and the source registration seam
//! * [`include`]: Classification and expansion of include targets
//! * [`model`]: Architecture model elements and their capability traits
//! * [`config`]: Processor configuration
//! * [`error`]: Crate-wide error aggregation
//!
//! ## Ordering Contract
//!
//! All resolved content reaches the caller through registration calls on
//! the parsing context, one call per discovered source, in traversal
//! order. Directory children are visited sorted by name, depth-first, so
//! the registration sequence is reproducible regardless of filesystem
//! listing order.

pub mod config;
pub mod context;
pub mod error;
pub mod include;
pub mod model;
pub mod tokens;

// Re-exports
pub use context::*;
pub use error::*;
pub use include::*;
pub use tokens::*;

#[cfg(test)]
mod tests {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    #[ctor::ctor]
    fn init_tests() {
        // テストの前に一度だけ実行したい処理
        // tracing_subscriberの初期化
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}
