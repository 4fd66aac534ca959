//! CSV export of table rows as a browser download
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Rows that can be written as CSV records
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Header line plus one record per row, with a UTF-8 BOM for spreadsheet apps
pub fn build_csv<T: CsvExportable>(rows: &[T]) -> Result<String, String> {
    if rows.is_empty() {
        return Err("No data to export".to_string());
    }

    let mut content = String::from('\u{FEFF}');
    content.push_str(&T::headers().join(","));
    content.push('\n');

    for row in rows {
        let cells: Vec<String> = row.to_csv_row().iter().map(|c| escape_csv_cell(c)).collect();
        content.push_str(&cells.join(","));
        content.push('\n');
    }

    Ok(content)
}

pub fn export_to_csv<T: CsvExportable>(rows: &[T], filename: &str) -> Result<(), String> {
    let content = build_csv(rows)?;
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, filename)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, u32);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Outlets"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_build_csv() {
        let csv = build_csv(&[Row("Rahul Sharma", 45), Row("Shah, \"A\"", 3)]).unwrap();
        assert_eq!(
            csv,
            "\u{FEFF}Name,Outlets\nRahul Sharma,45\n\"Shah, \"\"A\"\"\",3\n"
        );
        assert!(build_csv::<Row>(&[]).is_err());
    }
}
