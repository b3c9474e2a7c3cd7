#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod filter;
pub mod generate;
pub mod record;
pub mod split;

pub use filter::is_eligible_surface;
pub use generate::{Category, PrimaryNamePolicy, Term, generate_terms};
pub use record::{NamePair, PersonRecord};
pub use split::split_name;
