pub mod configuration;
pub mod dimension;
pub mod font;
pub mod parsers;

pub use configuration::{ConfigError, Configuration, OptionKind, OptionSpec, OptionValue, OPTIONS};
pub use dimension::{Margins, PageSize};
pub use font::{StandardFont, WIN_ANSI_REPLACEMENT, encode_win_ansi, win_ansi_code};
pub use parsers::ValueParseError;
