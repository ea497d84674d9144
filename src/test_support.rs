//! Test fixtures: small tables and in-memory xlsx workbooks.

use crate::data::schema::ColumnInfo;
use crate::data::{ColumnKind, Table};
use polars::prelude::*;
use std::io::{Cursor, Write};
use ::zip::write::FileOptions;
use ::zip::ZipWriter;

/// Two-column table with a missing category and a missing age.
pub fn sample_table() -> Table {
    let df = DataFrame::new(vec![
        Series::new(
            "Class".into(),
            vec![Some("Eco"), Some("Business"), Some("Eco"), None, Some("Eco Plus")],
        )
        .into(),
        Series::new(
            "Age".into(),
            vec![Some(20.0), Some(40.0), Some(30.0), Some(50.0), None],
        )
        .into(),
    ])
    .unwrap();
    Table::new(
        "sample.xlsx",
        df,
        vec![
            ColumnInfo {
                name: "Class".into(),
                kind: ColumnKind::Categorical,
            },
            ColumnInfo {
                name: "Age".into(),
                kind: ColumnKind::Numeric,
            },
        ],
    )
}

/// A handful of passengers in the shape of the satisfaction survey.
pub fn airline_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["Gender", "Customer Type", "Age", "Class", "Flight Distance", "Satisfaction"],
        vec!["Male", "Loyal Customer", "13", "Eco Plus", "460", "neutral or dissatisfied"],
        vec!["Male", "disloyal Customer", "25", "Business", "235", "neutral or dissatisfied"],
        vec!["Female", "Loyal Customer", "26", "Business", "1142", "satisfied"],
        vec!["Female", "Loyal Customer", "25", "Business", "562", "neutral or dissatisfied"],
        vec!["Male", "Loyal Customer", "61", "Business", "214", "satisfied"],
        vec!["Female", "Loyal Customer", "26", "Eco", "1180", "neutral or dissatisfied"],
    ]
}

/// A second, unrelated dataset used to check that uploads replace each other.
pub fn delay_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["Type of Travel", "Departure Delay in Minutes"],
        vec!["Personal Travel", "25"],
        vec!["Business travel", "1"],
        vec!["Business travel", "0"],
    ]
}

/// Build a minimal xlsx package holding one worksheet. Cells that parse as
/// numbers are written as numeric cells, everything else as inline strings.
pub fn xlsx_bytes(rows: &[Vec<&str>]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default();

    let parts: [(&str, String); 5] = [
        ("[Content_Types].xml", content_types_xml().to_string()),
        ("_rels/.rels", root_rels_xml().to_string()),
        ("xl/workbook.xml", workbook_xml().to_string()),
        ("xl/_rels/workbook.xml.rels", workbook_rels_xml().to_string()),
        ("xl/worksheets/sheet1.xml", sheet_xml(rows)),
    ];
    for (name, body) in parts {
        zip.start_file(name, options).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

fn column_letter(mut idx: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (idx % 26) as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }
    letters.iter().rev().collect()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn sheet_xml(rows: &[Vec<&str>]) -> String {
    let mut body = String::new();
    for (r, row) in rows.iter().enumerate() {
        body.push_str(&format!("<row r=\"{}\">", r + 1));
        for (c, value) in row.iter().enumerate() {
            let cell_ref = format!("{}{}", column_letter(c), r + 1);
            if value.parse::<f64>().is_ok() {
                body.push_str(&format!("<c r=\"{}\"><v>{}</v></c>", cell_ref, value));
            } else {
                body.push_str(&format!(
                    "<c r=\"{}\" t=\"inlineStr\"><is><t>{}</t></is></c>",
                    cell_ref,
                    escape(value)
                ));
            }
        }
        body.push_str("</row>");
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">\
<sheetData>{}</sheetData></worksheet>",
        body
    )
}

fn content_types_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#
}

fn root_rels_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#
}

fn workbook_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#
}

fn workbook_rels_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#
}

/// A 2x1 PNG, red then blue.
pub fn png_bytes() -> Vec<u8> {
    let mut img = image::RgbaImage::new(2, 1);
    img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
    img.put_pixel(1, 0, image::Rgba([0, 0, 255, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}
