use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::clean::normalize_card_text;
use crate::error::{Result, SourceError};

const DECK_ENTRY: &str = "cards.xml";
const FIELD_TAG: &[u8] = b"p_1";

/// Open a `.cards` deck archive and return the normalized text of every front field.
pub fn read_fields(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    read_archive(file)
}

pub fn read_archive<R: Read + Seek>(reader: R) -> Result<Vec<String>> {
    let mut archive = ZipArchive::new(reader)?;
    let mut xml = String::new();
    match archive.by_name(DECK_ENTRY) {
        Ok(mut entry) => {
            entry.read_to_string(&mut xml)?;
        }
        Err(ZipError::FileNotFound) => return Err(SourceError::MissingEntry(DECK_ENTRY.into())),
        Err(e) => return Err(e.into()),
    }
    debug!(bytes = xml.len(), "loaded deck xml");

    let fields = parse_fields(&xml)?
        .iter()
        .map(|raw| normalize_card_text(raw))
        .filter(|s| !s.is_empty())
        .collect();
    Ok(fields)
}

/// Text content of every `<p_1>` element, entities decoded.
fn parse_fields(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == FIELD_TAG => {
                if depth == 0 {
                    current.clear();
                }
                depth += 1;
            }
            Event::End(e) if e.name().as_ref() == FIELD_TAG && depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    fields.push(std::mem::take(&mut current));
                }
            }
            Event::Text(e) if depth > 0 => {
                let text = e.unescape().map_err(quick_xml::Error::from)?;
                current.push_str(&text);
            }
            Event::CData(e) if depth > 0 => {
                current.push_str(&String::from_utf8_lossy(&e));
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(fields)
}
