//! Fixed value pools for generated fields.

/// The eight tables random fields are drawn from.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub surnames: &'static [&'static str],
    pub middle_names: &'static [&'static str],
    pub given_names: &'static [&'static str],
    pub enlisted_ranks: &'static [&'static str],
    pub officer_ranks: &'static [&'static str],
    pub units: &'static [&'static str],
    pub enlisted_duties: &'static [&'static str],
    pub officer_roles: &'static [&'static str],
}

impl Vocabulary {
    /// Tables used by the roster binary.
    pub const STANDARD: Vocabulary = Vocabulary {
        surnames: &[
            "Nguyen", "Tran", "Le", "Pham", "Vo", "Dang", "Bui", "Hoang", "Ngo", "Do",
        ],
        middle_names: &[
            "Minh", "Thi", "Quang", "Thanh", "Duy", "Son", "Anh", "Phu", "Kien", "Tam",
        ],
        // Repeats are intentional: they weight the draw.
        given_names: &[
            "Tu", "Lan", "Son", "Hieu", "Mai", "Quang", "Duc", "Hieu", "Anh", "Mai",
        ],
        enlisted_ranks: &["Binh nhat", "Binh nhi"],
        officer_ranks: &["Thieu uy", "Trung uy", "Dai uy", "Thieu ta"],
        units: &["Tieu doan 1", "Tieu doan 2", "Trung doan 3"],
        enlisted_duties: &["Canh gac", "Truyen tin", "Van chuyen", "Hau can"],
        officer_roles: &[
            "Dai doi truong",
            "Tieu doan pho",
            "Chinh tri vien",
            "Tham muu phu",
        ],
    };

    /// Returns every table, for checks that apply to all of them.
    pub fn tables(&self) -> [&'static [&'static str]; 8] {
        [
            self.surnames,
            self.middle_names,
            self.given_names,
            self.enlisted_ranks,
            self.officer_ranks,
            self.units,
            self.enlisted_duties,
            self.officer_roles,
        ]
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::STANDARD
    }
}
