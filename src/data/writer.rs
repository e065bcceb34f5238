use std::io::{Cursor, Write};

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use super::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Dataset serialization
// ---------------------------------------------------------------------------

/// Serialize a dataset back to the byte representation of its source
/// format: `.xlsx` gets a workbook, everything else CSV text.  Header row
/// and column order are preserved; no index column is emitted.
pub fn serialize(dataset: &Dataset, extension: &str) -> Result<Vec<u8>> {
    if extension.eq_ignore_ascii_case(".xlsx") {
        serialize_xlsx(dataset)
    } else {
        serialize_csv(dataset)
    }
}

fn serialize_csv(dataset: &Dataset) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(&dataset.columns)
        .context("writing CSV header")?;

    for row in &dataset.rows {
        // Pad short rows so every record matches the header width.
        let record: Vec<String> = (0..dataset.columns.len())
            .map(|i| row.get(i).map(|c| c.to_string()).unwrap_or_default())
            .collect();
        writer.write_record(&record).context("writing CSV row")?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV buffer: {e}"))
}

fn serialize_xlsx(dataset: &Dataset) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in dataset.columns.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, name)
            .context("writing xlsx header")?;
    }

    for (row_no, row) in dataset.rows.iter().enumerate() {
        let r = (row_no + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let c = col as u16;
            match cell {
                CellValue::Text(s) => worksheet.write_string(r, c, s),
                CellValue::Integer(i) => worksheet.write_number(r, c, *i as f64),
                CellValue::Float(v) => worksheet.write_number(r, c, *v),
                CellValue::Bool(b) => worksheet.write_boolean(r, c, *b),
                CellValue::Empty => continue,
            }
            .context("writing xlsx cell")?;
        }
    }

    workbook.save_to_buffer().context("saving xlsx buffer")
}

// ---------------------------------------------------------------------------
// Archive assembly
// ---------------------------------------------------------------------------

/// Pack `(entry name, bytes)` pairs into one in-memory zip archive.
/// An empty entry list still yields a valid archive.
pub fn build_archive(entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        for (name, bytes) in entries {
            zip.start_file(name.clone(), options)
                .with_context(|| format!("adding '{name}' to archive"))?;
            zip.write_all(bytes)
                .with_context(|| format!("writing '{name}' to archive"))?;
        }
        zip.finish().context("finalizing archive")?;
    }
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn sample() -> Dataset {
        Dataset::new(
            "contacts.csv",
            vec!["phone".into(), "name".into()],
            vec![
                vec![CellValue::Text("555-1234".into()), CellValue::Text("Ada".into())],
                vec![CellValue::Empty, CellValue::Text("Bo".into())],
            ],
        )
    }

    #[test]
    fn csv_bytes_preserve_header_and_blanks() {
        let bytes = serialize(&sample(), ".csv").unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "phone,name\n555-1234,Ada\n,Bo\n");
    }

    #[test]
    fn xlsx_round_trips_through_the_loader() {
        let mut ds = sample();
        ds.name = "contacts.xlsx".into();
        ds.rows.push(vec![CellValue::Integer(42), CellValue::Bool(true)]);

        let bytes = serialize(&ds, ".xlsx").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.xlsx");
        std::fs::write(&path, bytes).unwrap();

        let loaded = crate::data::loader::load_file(&path).unwrap();
        assert_eq!(loaded.columns, ds.columns);
        assert_eq!(loaded.rows[0][0], CellValue::Text("555-1234".into()));
        assert_eq!(loaded.rows[1][0], CellValue::Empty);
        assert_eq!(loaded.rows[2][0], CellValue::Integer(42));
        assert_eq!(loaded.rows[2][1], CellValue::Bool(true));
    }

    #[test]
    fn archive_contains_entries_in_order() {
        let entries = vec![
            ("a_1_excluded.csv".to_string(), b"id\n1\n".to_vec()),
            ("b_2_excluded.csv".to_string(), b"id\n2\n".to_vec()),
        ];
        let bytes = build_archive(&entries).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        let mut content = String::new();
        archive
            .by_name("b_2_excluded.csv")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "id\n2\n");
    }

    #[test]
    fn empty_archive_is_still_valid() {
        let bytes = build_archive(&[]).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
