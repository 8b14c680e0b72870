mod row;
pub use row::{COLUMN_COUNT, HEADER, Row};

mod config;
pub use config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT};

mod table;
pub use table::{DELIMITER, HEADER_KEYWORDS, Line};
