mod string;

pub use string::{sanitize_test_name, unquote_go_string};
