pub use self::file_utils::append_output;

mod file_utils;
