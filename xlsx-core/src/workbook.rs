use std::fs::File;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::sink::{Cell, Header, SinkError, TabularSink};

const NS_MAIN: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_WORKSHEET: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_TABLE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/table";

const CT_WORKBOOK: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
const CT_WORKSHEET: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
const CT_STYLES: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";
const CT_TABLE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.table+xml";
const CT_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";

/// Package relationships part pointing at the workbook.
const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

/// Fixed stylesheet: xf 0 is the default, xf 1 wraps text for list cells.
const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts><fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills><borders count="1"><border/></borders><cellStyleXfs count="1"><xf/></cellStyleXfs><cellXfs count="2"><xf/><xf applyAlignment="1"><alignment vertical="top" wrapText="1"/></xf></cellXfs></styleSheet>"#;

#[derive(Debug, Default)]
struct Sheet {
    name: String,
    headers: Vec<Header>,
    rows: Vec<Vec<Cell>>,
    table: Option<String>,
}

/// An in-memory workbook builder implementing [`TabularSink`].
///
/// Sheets are buffered until [`TabularSink::save_and_close`] assembles the
/// `.xlsx` package and writes it to the configured path in one step.
#[derive(Debug)]
pub struct XlsxWorkbook {
    path: PathBuf,
    sheets: Vec<Sheet>,
    closed: bool,
}

impl XlsxWorkbook {
    /// Create a workbook builder that will be saved to `path`.
    pub fn create(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheets: Vec::new(),
            closed: false,
        }
    }

    /// Path the workbook will be written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn current(&mut self) -> Result<&mut Sheet, SinkError> {
        self.sheets
            .last_mut()
            .ok_or_else(|| SinkError::Sequence("no active sheet".to_string()))
    }

    fn ensure_open(&self) -> Result<(), SinkError> {
        if self.closed {
            return Err(SinkError::Sequence("workbook already saved".to_string()));
        }
        Ok(())
    }

    fn write_package(&self) -> Result<(), SinkError> {
        let file = File::create(&self.path)?;
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        // Sheets qualify for a table part only when they hold data rows; Excel
        // rejects tables whose range is a lone header row.
        let tables: Vec<usize> = self
            .sheets
            .iter()
            .enumerate()
            .filter(|(_, s)| s.table.is_some() && !s.rows.is_empty())
            .map(|(idx, _)| idx)
            .collect();

        let mut part = |zip: &mut ZipWriter<File>, name: &str, bytes: &[u8]| -> Result<(), SinkError> {
            zip.start_file(name, options)?;
            zip.write_all(bytes)?;
            Ok(())
        };

        part(&mut zip, "[Content_Types].xml", &content_types(&self.sheets, &tables)?)?;
        part(&mut zip, "_rels/.rels", ROOT_RELS.as_bytes())?;
        part(&mut zip, "xl/workbook.xml", &workbook_xml(&self.sheets)?)?;
        part(&mut zip, "xl/_rels/workbook.xml.rels", &workbook_rels(self.sheets.len())?)?;
        part(&mut zip, "xl/styles.xml", STYLES_XML.as_bytes())?;

        for (idx, sheet) in self.sheets.iter().enumerate() {
            let has_table = tables.contains(&idx);
            part(
                &mut zip,
                &format!("xl/worksheets/sheet{}.xml", idx + 1),
                &sheet_xml(sheet, has_table)?,
            )?;
            if has_table {
                let table_id = tables.iter().position(|t| *t == idx).unwrap_or(0) + 1;
                part(
                    &mut zip,
                    &format!("xl/worksheets/_rels/sheet{}.xml.rels", idx + 1),
                    &sheet_rels(table_id)?,
                )?;
                part(
                    &mut zip,
                    &format!("xl/tables/table{table_id}.xml"),
                    &table_xml(sheet, table_id)?,
                )?;
            }
        }

        zip.finish()?;
        Ok(())
    }
}

impl TabularSink for XlsxWorkbook {
    fn new_sheet(&mut self, name: &str) -> Result<(), SinkError> {
        self.ensure_open()?;
        if self.sheets.iter().any(|s| s.name == name) {
            return Err(SinkError::Sequence(format!("sheet '{name}' already exists")));
        }
        self.sheets.push(Sheet {
            name: name.to_string(),
            ..Sheet::default()
        });
        Ok(())
    }

    fn set_header(&mut self, headers: &[Header]) -> Result<(), SinkError> {
        self.ensure_open()?;
        let sheet = self.current()?;
        sheet.headers = headers.to_vec();
        Ok(())
    }

    fn set_row(&mut self, cells: Vec<Cell>) -> Result<(), SinkError> {
        self.ensure_open()?;
        let sheet = self.current()?;
        sheet.rows.push(cells);
        Ok(())
    }

    fn add_table(&mut self, name: &str) -> Result<(), SinkError> {
        self.ensure_open()?;
        let display = table_display_name(name);
        let sheet = self.current()?;
        sheet.table = Some(display);
        Ok(())
    }

    fn save_and_close(&mut self) -> Result<(), SinkError> {
        self.ensure_open()?;
        self.write_package()?;
        self.closed = true;
        Ok(())
    }
}

/// `[Content_Types].xml` listing every part in the package.
fn content_types(sheets: &[Sheet], tables: &[usize]) -> Result<Vec<u8>, quick_xml::Error> {
    let mut writer = part_writer()?;
    let mut types = BytesStart::new("Types");
    types.push_attribute(("xmlns", NS_CONTENT_TYPES));
    writer.write_event(Event::Start(types))?;

    for (extension, content_type) in [("rels", CT_RELATIONSHIPS), ("xml", "application/xml")] {
        let mut elem = BytesStart::new("Default");
        elem.push_attribute(("Extension", extension));
        elem.push_attribute(("ContentType", content_type));
        writer.write_event(Event::Empty(elem))?;
    }

    write_override(&mut writer, "/xl/workbook.xml", CT_WORKBOOK)?;
    write_override(&mut writer, "/xl/styles.xml", CT_STYLES)?;
    for idx in 0..sheets.len() {
        write_override(
            &mut writer,
            &format!("/xl/worksheets/sheet{}.xml", idx + 1),
            CT_WORKSHEET,
        )?;
    }
    for table_id in 1..=tables.len() {
        write_override(&mut writer, &format!("/xl/tables/table{table_id}.xml"), CT_TABLE)?;
    }

    writer.write_event(Event::End(BytesEnd::new("Types")))?;
    Ok(writer.into_inner())
}

fn write_override(
    writer: &mut Writer<Vec<u8>>,
    part_name: &str,
    content_type: &str,
) -> Result<(), quick_xml::Error> {
    let mut elem = BytesStart::new("Override");
    elem.push_attribute(("PartName", part_name));
    elem.push_attribute(("ContentType", content_type));
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// `xl/workbook.xml` enumerating the sheets in creation order.
fn workbook_xml(sheets: &[Sheet]) -> Result<Vec<u8>, quick_xml::Error> {
    let mut writer = part_writer()?;
    let mut workbook = BytesStart::new("workbook");
    workbook.push_attribute(("xmlns", NS_MAIN));
    workbook.push_attribute(("xmlns:r", NS_REL));
    writer.write_event(Event::Start(workbook))?;
    writer.write_event(Event::Start(BytesStart::new("sheets")))?;

    for (idx, sheet) in sheets.iter().enumerate() {
        let mut elem = BytesStart::new("sheet");
        elem.push_attribute(("name", sheet.name.as_str()));
        elem.push_attribute(("sheetId", format!("{}", idx + 1).as_str()));
        elem.push_attribute(("r:id", format!("rId{}", idx + 1).as_str()));
        writer.write_event(Event::Empty(elem))?;
    }

    writer.write_event(Event::End(BytesEnd::new("sheets")))?;
    writer.write_event(Event::End(BytesEnd::new("workbook")))?;
    Ok(writer.into_inner())
}

/// `xl/_rels/workbook.xml.rels`: one relationship per sheet, then styles.
fn workbook_rels(sheet_count: usize) -> Result<Vec<u8>, quick_xml::Error> {
    let mut writer = part_writer()?;
    let mut rels = BytesStart::new("Relationships");
    rels.push_attribute(("xmlns", NS_PKG_REL));
    writer.write_event(Event::Start(rels))?;

    for idx in 0..sheet_count {
        write_relationship(
            &mut writer,
            &format!("rId{}", idx + 1),
            REL_WORKSHEET,
            &format!("worksheets/sheet{}.xml", idx + 1),
        )?;
    }
    write_relationship(
        &mut writer,
        &format!("rId{}", sheet_count + 1),
        REL_STYLES,
        "styles.xml",
    )?;

    writer.write_event(Event::End(BytesEnd::new("Relationships")))?;
    Ok(writer.into_inner())
}

/// Worksheet relationships part pointing at the sheet's table definition.
fn sheet_rels(table_id: usize) -> Result<Vec<u8>, quick_xml::Error> {
    let mut writer = part_writer()?;
    let mut rels = BytesStart::new("Relationships");
    rels.push_attribute(("xmlns", NS_PKG_REL));
    writer.write_event(Event::Start(rels))?;
    write_relationship(
        &mut writer,
        "rId1",
        REL_TABLE,
        &format!("../tables/table{table_id}.xml"),
    )?;
    writer.write_event(Event::End(BytesEnd::new("Relationships")))?;
    Ok(writer.into_inner())
}

fn write_relationship(
    writer: &mut Writer<Vec<u8>>,
    id: &str,
    rel_type: &str,
    target: &str,
) -> Result<(), quick_xml::Error> {
    let mut elem = BytesStart::new("Relationship");
    elem.push_attribute(("Id", id));
    elem.push_attribute(("Type", rel_type));
    elem.push_attribute(("Target", target));
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// One worksheet part: column widths, header row, data rows, table reference.
fn sheet_xml(sheet: &Sheet, has_table: bool) -> Result<Vec<u8>, quick_xml::Error> {
    let mut writer = part_writer()?;
    let mut worksheet = BytesStart::new("worksheet");
    worksheet.push_attribute(("xmlns", NS_MAIN));
    worksheet.push_attribute(("xmlns:r", NS_REL));
    writer.write_event(Event::Start(worksheet))?;

    if !sheet.headers.is_empty() {
        writer.write_event(Event::Start(BytesStart::new("cols")))?;
        for (idx, header) in sheet.headers.iter().enumerate() {
            let mut col = BytesStart::new("col");
            let position = format!("{}", idx + 1);
            col.push_attribute(("min", position.as_str()));
            col.push_attribute(("max", position.as_str()));
            col.push_attribute(("width", format!("{}", header.width).as_str()));
            col.push_attribute(("customWidth", "1"));
            writer.write_event(Event::Empty(col))?;
        }
        writer.write_event(Event::End(BytesEnd::new("cols")))?;
    }

    writer.write_event(Event::Start(BytesStart::new("sheetData")))?;
    if !sheet.headers.is_empty() {
        let mut row = BytesStart::new("row");
        row.push_attribute(("r", "1"));
        writer.write_event(Event::Start(row))?;
        for (col, header) in sheet.headers.iter().enumerate() {
            write_inline_str(&mut writer, &cell_ref(col, 1), &header.label, false)?;
        }
        writer.write_event(Event::End(BytesEnd::new("row")))?;
    }
    for (idx, cells) in sheet.rows.iter().enumerate() {
        let row_num = idx + 2;
        let mut row = BytesStart::new("row");
        row.push_attribute(("r", format!("{row_num}").as_str()));
        writer.write_event(Event::Start(row))?;
        for (col, cell) in cells.iter().enumerate() {
            write_cell(&mut writer, &cell_ref(col, row_num), cell)?;
        }
        writer.write_event(Event::End(BytesEnd::new("row")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("sheetData")))?;

    if has_table {
        let mut parts = BytesStart::new("tableParts");
        parts.push_attribute(("count", "1"));
        writer.write_event(Event::Start(parts))?;
        let mut table_part = BytesStart::new("tablePart");
        table_part.push_attribute(("r:id", "rId1"));
        writer.write_event(Event::Empty(table_part))?;
        writer.write_event(Event::End(BytesEnd::new("tableParts")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("worksheet")))?;
    Ok(writer.into_inner())
}

/// Table definition covering the header row plus all data rows.
fn table_xml(sheet: &Sheet, table_id: usize) -> Result<Vec<u8>, quick_xml::Error> {
    let display = sheet.table.as_deref().unwrap_or("Table");
    let last_col = column_name(sheet.headers.len().saturating_sub(1));
    let range = format!("A1:{}{}", last_col, sheet.rows.len() + 1);

    let mut writer = part_writer()?;
    let mut table = BytesStart::new("table");
    table.push_attribute(("xmlns", NS_MAIN));
    table.push_attribute(("id", format!("{table_id}").as_str()));
    table.push_attribute(("name", display));
    table.push_attribute(("displayName", display));
    table.push_attribute(("ref", range.as_str()));
    table.push_attribute(("headerRowCount", "1"));
    writer.write_event(Event::Start(table))?;

    let mut filter = BytesStart::new("autoFilter");
    filter.push_attribute(("ref", range.as_str()));
    writer.write_event(Event::Empty(filter))?;

    let mut columns = BytesStart::new("tableColumns");
    columns.push_attribute(("count", format!("{}", sheet.headers.len()).as_str()));
    writer.write_event(Event::Start(columns))?;
    for (idx, header) in sheet.headers.iter().enumerate() {
        let mut column = BytesStart::new("tableColumn");
        column.push_attribute(("id", format!("{}", idx + 1).as_str()));
        column.push_attribute(("name", header.label.as_str()));
        writer.write_event(Event::Empty(column))?;
    }
    writer.write_event(Event::End(BytesEnd::new("tableColumns")))?;

    let mut style = BytesStart::new("tableStyleInfo");
    style.push_attribute(("name", "TableStyleMedium2"));
    style.push_attribute(("showFirstColumn", "0"));
    style.push_attribute(("showLastColumn", "0"));
    style.push_attribute(("showRowStripes", "1"));
    style.push_attribute(("showColumnStripes", "0"));
    writer.write_event(Event::Empty(style))?;

    writer.write_event(Event::End(BytesEnd::new("table")))?;
    Ok(writer.into_inner())
}

fn write_cell(
    writer: &mut Writer<Vec<u8>>,
    cell_ref: &str,
    cell: &Cell,
) -> Result<(), quick_xml::Error> {
    match cell {
        Cell::Int(value) => {
            let mut elem = BytesStart::new("c");
            elem.push_attribute(("r", cell_ref));
            writer.write_event(Event::Start(elem))?;
            writer.write_event(Event::Start(BytesStart::new("v")))?;
            writer.write_event(Event::Text(BytesText::new(&value.to_string())))?;
            writer.write_event(Event::End(BytesEnd::new("v")))?;
            writer.write_event(Event::End(BytesEnd::new("c")))?;
        }
        Cell::Text(text) if text.is_empty() => {}
        Cell::Text(text) => write_inline_str(writer, cell_ref, text, false)?,
        Cell::List(items) if items.is_empty() => {}
        Cell::List(items) => write_inline_str(writer, cell_ref, &items.join("\n"), true)?,
    }
    Ok(())
}

fn write_inline_str(
    writer: &mut Writer<Vec<u8>>,
    cell_ref: &str,
    text: &str,
    wrap: bool,
) -> Result<(), quick_xml::Error> {
    let mut elem = BytesStart::new("c");
    elem.push_attribute(("r", cell_ref));
    elem.push_attribute(("t", "inlineStr"));
    if wrap {
        elem.push_attribute(("s", "1"));
    }
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Start(BytesStart::new("is")))?;
    let mut t = BytesStart::new("t");
    if wrap {
        t.push_attribute(("xml:space", "preserve"));
    }
    writer.write_event(Event::Start(t))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new("t")))?;
    writer.write_event(Event::End(BytesEnd::new("is")))?;
    writer.write_event(Event::End(BytesEnd::new("c")))?;
    Ok(())
}

fn part_writer() -> Result<Writer<Vec<u8>>, quick_xml::Error> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(writer)
}

/// `A1`-style reference for a zero-based column and one-based row.
fn cell_ref(col: usize, row: usize) -> String {
    format!("{}{row}", column_name(col))
}

/// Zero-based column index to spreadsheet column letters.
fn column_name(mut col: usize) -> String {
    let mut name = String::new();
    col += 1;
    while col > 0 {
        col -= 1;
        name.insert(0, (b'A' + (col % 26) as u8) as char);
        col /= 26;
    }
    name
}

/// Table display names must start with a letter or underscore and contain no
/// spaces or punctuation.
fn table_display_name(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' { ch } else { '_' })
        .collect();
    if out.chars().next().map_or(true, |ch| ch.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{cell_ref, column_name, table_display_name, XlsxWorkbook};
    use crate::sink::{Header, SinkError, TabularSink};

    #[test]
    fn column_names_roll_over_past_z() {
        assert_eq!(column_name(0), "A");
        assert_eq!(column_name(25), "Z");
        assert_eq!(column_name(26), "AA");
        assert_eq!(column_name(27), "AB");
        assert_eq!(cell_ref(2, 7), "C7");
    }

    #[test]
    fn display_names_are_sanitized() {
        assert_eq!(table_display_name("VR Static Routes"), "VR_Static_Routes");
        assert_eq!(table_display_name("1st"), "_1st");
        assert_eq!(table_display_name("Users"), "Users");
    }

    #[test]
    fn header_without_sheet_is_a_sequence_error() {
        let mut workbook = XlsxWorkbook::create("unused.xlsx");
        let result = workbook.set_header(&[Header::new("#", 4.0)]);
        assert!(matches!(result, Err(SinkError::Sequence(_))));
    }

    #[test]
    fn duplicate_sheet_names_are_rejected() {
        let mut workbook = XlsxWorkbook::create("unused.xlsx");
        workbook.new_sheet("Users").expect("first sheet");
        let result = workbook.new_sheet("Users");
        assert!(matches!(result, Err(SinkError::Sequence(_))));
    }
}
