use std::fmt;

// ---------------------------------------------------------------------------
// Canonical fields and their accepted header spellings
// ---------------------------------------------------------------------------

/// A logical column of the canonical schema that must be found in every file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
    Weight,
}

impl Field {
    /// Lower-case header spellings accepted for this field.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["название", "продукт", "товар", "наименование"],
            Field::Price => &["цена", "розница"],
            Field::Weight => &["фасовка", "масса", "вес"],
        }
    }

    fn matches(self, header: &str) -> bool {
        let header = header.trim().to_lowercase();
        self.synonyms().iter().any(|s| *s == header)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Price => write!(f, "price"),
            Field::Weight => write!(f, "weight"),
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnMap – header positions resolved once per file
// ---------------------------------------------------------------------------

/// Column indices of the three required fields within one file's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: usize,
    pub price: usize,
    pub weight: usize,
}

impl ColumnMap {
    /// Resolve each field to the first header (in header order) that matches
    /// one of its synonyms. Returns the first field with no match as the error.
    pub fn resolve<'a, I>(headers: I) -> Result<Self, Field>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: Vec<&str> = headers
            .into_iter()
            .map(|h| h.trim_start_matches('\u{feff}'))
            .collect();

        let find = |field: Field| headers.iter().position(|h| field.matches(h)).ok_or(field);

        Ok(ColumnMap {
            name: find(Field::Name)?,
            price: find(Field::Price)?,
            weight: find(Field::Weight)?,
        })
    }
}
