//! Record types and their flat-file representation.

use time::Date;

/// Column names written as the first line of an exported roster.
pub const CSV_HEADER: [&str; 8] = [
    "maSo",
    "hoTen",
    "capBac",
    "donVi",
    "ngaySinh",
    "ngayNhapNgu",
    "chucVu/nhiemVu",
    "loai",
];

/// Variant of a personnel record, carrying the field only that variant has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonnelKind {
    /// Enlisted soldier with an assigned duty.
    Enlisted { duty: String },
    /// Officer with a command or staff role.
    Officer { role: String },
}

impl PersonnelKind {
    /// Returns the discriminator written as the last CSV field.
    pub fn tag(&self) -> &'static str {
        match self {
            PersonnelKind::Enlisted { .. } => "BinhSi",
            PersonnelKind::Officer { .. } => "SiQuan",
        }
    }

    /// Returns the character that prefixes ids of this variant.
    pub fn id_prefix(&self) -> char {
        match self {
            PersonnelKind::Enlisted { .. } => 'B',
            PersonnelKind::Officer { .. } => 'S',
        }
    }

    /// Returns the duty or role.
    pub fn detail(&self) -> &str {
        match self {
            PersonnelKind::Enlisted { duty } => duty,
            PersonnelKind::Officer { role } => role,
        }
    }

    /// Returns true for the enlisted variant.
    pub fn is_enlisted(&self) -> bool {
        matches!(self, PersonnelKind::Enlisted { .. })
    }
}

/// A single service member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonnelRecord {
    /// `<prefix>-<NNN>`, e.g. `B-001`.
    pub id: String,
    /// "Surname MiddleName GivenName".
    pub full_name: String,
    pub rank: String,
    pub unit: String,
    pub birth_date: Date,
    pub enlistment_date: Date,
    pub kind: PersonnelKind,
}

impl PersonnelRecord {
    /// Returns the eight CSV fields in column order.
    pub fn csv_fields(&self) -> [String; 8] {
        [
            self.id.clone(),
            self.full_name.clone(),
            self.rank.clone(),
            self.unit.clone(),
            format_date(self.birth_date),
            format_date(self.enlistment_date),
            self.kind.detail().to_string(),
            self.kind.tag().to_string(),
        ]
    }
}

/// Serializes a record to one comma-joined line without a trailing newline.
///
/// Values are not quoted or escaped.
pub fn serialize_to_line(record: &PersonnelRecord) -> String {
    record.csv_fields().join(",")
}

/// Renders a date as `DD/MM/YYYY`.
pub fn format_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

/// Ordered, owning collection of generated records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    records: Vec<PersonnelRecord>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty roster with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Appends a record after all existing ones.
    pub fn push(&mut self, record: PersonnelRecord) {
        self.records.push(record);
    }

    /// Returns all records in insertion order.
    pub fn records(&self) -> &[PersonnelRecord] {
        &self.records
    }

    /// Iterates over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, PersonnelRecord> {
        self.records.iter()
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of enlisted records.
    pub fn enlisted_count(&self) -> usize {
        self.records.iter().filter(|r| r.kind.is_enlisted()).count()
    }

    /// Number of officer records.
    pub fn officer_count(&self) -> usize {
        self.len() - self.enlisted_count()
    }
}

impl Extend<PersonnelRecord> for Roster {
    fn extend<I: IntoIterator<Item = PersonnelRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a PersonnelRecord;
    type IntoIter = std::slice::Iter<'a, PersonnelRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn enlisted() -> PersonnelRecord {
        PersonnelRecord {
            id: "B-001".to_string(),
            full_name: "Nguyen Minh Tu".to_string(),
            rank: "Binh nhat".to_string(),
            unit: "Tieu doan 1".to_string(),
            birth_date: date!(1985 - 01 - 01),
            enlistment_date: date!(2010 - 01 - 01),
            kind: PersonnelKind::Enlisted {
                duty: "Canh gac".to_string(),
            },
        }
    }

    fn officer() -> PersonnelRecord {
        PersonnelRecord {
            id: "S-042".to_string(),
            full_name: "Tran Quang Duc".to_string(),
            rank: "Dai uy".to_string(),
            unit: "Trung doan 3".to_string(),
            birth_date: date!(1979 - 11 - 28),
            enlistment_date: date!(2004 - 06 - 09),
            kind: PersonnelKind::Officer {
                role: "Chinh tri vien".to_string(),
            },
        }
    }

    #[test]
    fn test_serialize_enlisted() {
        assert_eq!(
            serialize_to_line(&enlisted()),
            "B-001,Nguyen Minh Tu,Binh nhat,Tieu doan 1,01/01/1985,01/01/2010,Canh gac,BinhSi"
        );
    }

    #[test]
    fn test_serialize_officer() {
        let line = serialize_to_line(&officer());
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields.len(), 8);
        assert_eq!(fields[4], "28/11/1979");
        assert_eq!(fields[5], "09/06/2004");
        assert_eq!(fields[6], "Chinh tri vien");
        assert_eq!(fields[7], "SiQuan");
    }

    #[test]
    fn test_kind_prefix_matches_tag() {
        assert_eq!(enlisted().kind.id_prefix(), 'B');
        assert_eq!(officer().kind.id_prefix(), 'S');
        assert!(enlisted().kind.is_enlisted());
        assert!(!officer().kind.is_enlisted());
    }

    #[test]
    fn test_header_has_one_column_per_field() {
        assert_eq!(CSV_HEADER.len(), enlisted().csv_fields().len());
        assert_eq!(
            CSV_HEADER.join(","),
            "maSo,hoTen,capBac,donVi,ngaySinh,ngayNhapNgu,chucVu/nhiemVu,loai"
        );
    }

    #[test]
    fn test_roster_counts() {
        let mut roster = Roster::new();
        roster.push(enlisted());
        roster.extend([enlisted(), officer()]);

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.enlisted_count(), 2);
        assert_eq!(roster.officer_count(), 1);
        assert_eq!(roster.iter().last().map(|r| r.id.as_str()), Some("S-042"));
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::with_capacity(4);

        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
        assert!(roster.records().is_empty());
        assert_eq!(roster.iter().count(), 0);
        assert_eq!(roster, Roster::new());
    }
}
