//! CSV export of a generated roster.
//!
//! The output is a header line followed by one line per record, each
//! terminated by `\n`. Fields are never quoted or escaped, so every line is
//! exactly what [`personnel::serialize_to_line`] produces.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use personnel::{CSV_HEADER, Roster};

use crate::errors::ExportError;

/// Writes the header and every record of `roster`, in roster order.
pub fn write_roster<W: Write>(writer: W, roster: &Roster) -> Result<(), ExportError> {
    let mut csv = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    csv.write_record(CSV_HEADER)?;
    for record in roster {
        csv.write_record(record.csv_fields())?;
    }
    csv.flush()?;

    Ok(())
}

/// Creates (or truncates) `path` and writes `roster` to it.
///
/// Nothing is written if the file cannot be created.
pub fn export_roster(roster: &Roster, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ExportError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;

    write_roster(file, roster)?;
    info!("Exported {} records to {}", roster.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use personnel::serialize_to_line;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::builders::RosterBuilder;
    use crate::vocabulary::Vocabulary;

    #[test]
    fn test_write_roster_lines_match_serialization() {
        let mut rng = StdRng::seed_from_u64(13);
        let roster = RosterBuilder::new().build(&mut rng).unwrap();

        let mut buf = Vec::new();
        write_roster(&mut buf, &roster).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 401);
        assert_eq!(
            lines[0],
            "maSo,hoTen,capBac,donVi,ngaySinh,ngayNhapNgu,chucVu/nhiemVu,loai"
        );
        for (line, record) in lines[1..].iter().zip(roster.iter()) {
            assert_eq!(*line, serialize_to_line(record));
        }
        assert!(text.ends_with('\n'));
        assert!(!text.contains('"'));
    }

    #[test]
    fn test_write_empty_roster() {
        let mut buf = Vec::new();
        write_roster(&mut buf, &Roster::new()).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "maSo,hoTen,capBac,donVi,ngaySinh,ngayNhapNgu,chucVu/nhiemVu,loai\n"
        );
    }

    #[test]
    fn test_fields_are_written_unquoted() {
        let vocabulary = Vocabulary {
            units: &["Tieu doan 1, Trung doan 3"],
            enlisted_duties: &["Canh \"gac\""],
            ..Vocabulary::STANDARD
        };
        let mut rng = StdRng::seed_from_u64(6);
        let roster = RosterBuilder::new()
            .with_enlisted(2)
            .with_officers(1)
            .with_vocabulary(&vocabulary)
            .build(&mut rng)
            .unwrap();

        let mut buf = Vec::new();
        write_roster(&mut buf, &roster).unwrap();
        let text = String::from_utf8(buf).unwrap();

        for (line, record) in text.lines().skip(1).zip(roster.iter()) {
            assert_eq!(line, serialize_to_line(record));
        }
        assert!(text.contains(",Tieu doan 1, Trung doan 3,"));
        assert!(text.contains(",Canh \"gac\",BinhSi"));
    }
}
