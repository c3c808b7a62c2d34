pub mod reporter;
pub mod writer_json;
pub mod writer_tagged;

pub use reporter::{account_lines, print_results, print_stats};
pub use writer_json::{write_json, JsonReport};
pub use writer_tagged::write_tagged;
