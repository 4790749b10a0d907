//! Style template compiler: tokenizer, parser, scoped emission.

pub mod compiler;
pub mod model;
pub mod parser;
pub mod tokenizer;

pub use compiler::{compile, compile_global};
pub use parser::CompileError;

/// Build a raw style template with `format!` interpolation.
///
/// ```ignore
/// let root = css!("
///     color: {};
///     padding: {};
/// ", color.on_surface, theme.space(1.0));
/// ```
#[macro_export]
macro_rules! css {
    ($($arg:tt)*) => {
        ::std::format!($($arg)*)
    };
}
