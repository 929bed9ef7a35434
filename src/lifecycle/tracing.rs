//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter driven by
//! `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # transitions: item selected, order accepted, ...
//! RUST_LOG=debug cargo run    # plus every event payload and the order request
//! ```
//!
//! Log lines carry structured fields rather than prose, e.g.
//!
//! ```text
//! INFO Opened session_type="StorefrontPage" id=page_1 open=1
//! INFO Item selected page=page_1 item=item_1 name=Классическая шаурма
//! INFO Order accepted page=page_1 item=item_1 total=430
//! WARN Submission rejected page=page_1 item_missing=false missing_fields=[Phone]
//! ```

/// Installs the global subscriber. Call once, from the binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
