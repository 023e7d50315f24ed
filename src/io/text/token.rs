//! # Tokens used in matrix text files

/// Key of the first header line, holding the number of rows.
pub const ROWS: &str = "rows";

/// Key of the second header line, holding the number of columns.
pub const COLUMNS: &str = "cols";

/// Separates the key from the value on a header line.
pub const HEADER_SEPARATOR: char = '=';

/// Opens an entry line.
pub const ENTRY_START: char = '(';

/// Closes an entry line.
pub const ENTRY_END: char = ')';

/// Separates the row, column and value on an entry line.
pub const ENTRY_SEPARATOR: char = ',';

/// Joins row and column into the key that the lexicographic entry order sorts on.
///
/// Must sort before all digits for the order to match existing files.
pub const LEXICOGRAPHIC_KEY_SEPARATOR: char = '.';
