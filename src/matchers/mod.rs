//! The matcher instances, one factory function per public name.
//!
//! Aliases are re-exported names of the same function items (`have_passed`
//! is `pass` and `have_failed_with` is `fail_with`, not copies), so the two
//! names cannot drift apart in behavior or message text. The same sharing
//! holds in the string-name registry (see [`crate::registry`]).

pub mod contain_exactly;
pub mod files;
pub mod mapping;
pub mod outcome;

pub use contain_exactly::ContainExactly;
pub use files::{contain_files, ContainFiles};
pub use mapping::{map_specs, MapSpecs, MapSpecsTo, SpecMapper};
pub use outcome::{
    be_pending_with, be_skipped_with, be_skipped_with_regexp, fail_with, fail_with_regexp, pass,
    FailWith, FailWithMessage, PassMatcher, PendingWith, SkippedWith, SkippedWithMessage,
};

pub use files::contain_files as a_file_collection;
pub use outcome::fail_with as have_failed_with;
pub use outcome::pass as have_passed;
