#[cfg(test)]
mod tests {
    use crate::parsing::csv_parser::{parse_catalog_csv, parse_catalog_reader};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_parse_basic_catalog() {
        let csv_content = "id;brand;category\n1;EVVA;Schrauben\n2;Bosch;Dübel\n";

        let temp_file = create_temp_csv(csv_content);
        let table = parse_catalog_csv(temp_file.path()).unwrap();

        assert_eq!(table.height(), 2);
        assert_eq!(table.width(), 3);
        assert_eq!(table.columns(), &["id", "brand", "category"]);
        assert_eq!(table.cell_by_name(0, "brand"), Some("EVVA"));
        assert_eq!(table.cell_by_name(1, "category"), Some("Dübel"));
    }

    #[test]
    fn test_empty_fields_become_absent_cells() {
        let table = parse_catalog_reader("id;brand\n1;\n;Bosch\n".as_bytes()).unwrap();

        assert_eq!(table.cell_by_name(0, "brand"), None);
        assert_eq!(table.cell_by_name(1, "id"), None);
        assert_eq!(table.cell_by_name(1, "brand"), Some("Bosch"));
    }

    #[test]
    fn test_quoted_fields_keep_semicolons() {
        let table =
            parse_catalog_reader("id;category\n1;\"['A;B','C']\"\n".as_bytes()).unwrap();

        assert_eq!(table.cell_by_name(0, "category"), Some("['A;B','C']"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = parse_catalog_reader("id;brand;title\n1;Bosch\n".as_bytes()).unwrap();

        assert_eq!(table.height(), 1);
        assert_eq!(table.cell_by_name(0, "brand"), Some("Bosch"));
        assert_eq!(table.cell_by_name(0, "title"), None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(parse_catalog_csv(std::path::Path::new("/nirgendwo/fehlt.csv")).is_err());
    }
}
