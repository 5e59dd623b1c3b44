/// Splits one comma-delimited record line into its fields, trimming the
/// whitespace around each field. No quoting or escaping: the record formats
/// this project reads carry plain categorical tokens.
pub fn split_record_line(line: &str) -> Vec<String> {
    line.split(',').map(|field| field.trim().to_string()).collect()
}
