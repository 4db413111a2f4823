pub use self::args::{Args, OutputFormat};

mod args;
