use once_cell::sync::Lazy;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Top-level activity category. The taxonomy is static and client-owned;
/// the backend only ever sees the concatenated strings built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum MainCategory {
    Luring,
    Daring,
}

impl MainCategory {
    /// Sub-categories valid under this main category.
    pub fn sub_categories(self) -> &'static [&'static str] {
        match self {
            MainCategory::Luring => &[
                "Rapat",
                "Kunjungan",
                "Bimbingan Teknis",
                "Sosialisasi",
                "Diskusi Kelompok",
                "Lainnya Luring",
            ],
            MainCategory::Daring => &[
                "Webinar",
                "Zoom Meeting",
                "Pelatihan Online",
                "Kuliah Umum",
                "Lainnya Daring",
            ],
        }
    }
}

/// Display-ordered view of the whole taxonomy, for rendering the two
/// dropdowns the way the form lays them out.
pub static ACTIVITY_CATEGORIES: Lazy<Vec<(MainCategory, &'static [&'static str])>> =
    Lazy::new(|| MainCategory::iter().map(|m| (m, m.sub_categories())).collect());

/// Category pick as a three-state machine. A sub-category can only exist
/// under the main category it belongs to, so the inconsistent pairing the
/// form must never submit cannot be constructed at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelection {
    #[default]
    None,
    Main(MainCategory),
    Full {
        main: MainCategory,
        sub: &'static str,
    },
}

impl CategorySelection {
    /// Picking a main category always drops any sub-category, including
    /// when re-picking the same main.
    pub fn select_main(&mut self, main: MainCategory) {
        *self = CategorySelection::Main(main);
    }

    /// Attaches a sub-category. Fails if no main is selected or the value
    /// is not in the selected main's list; the selection is left unchanged.
    pub fn select_sub(&mut self, sub: &str) -> Result<(), &'static str> {
        let main = match self {
            CategorySelection::None => return Err("pilih kategori utama terlebih dahulu"),
            CategorySelection::Main(main) | CategorySelection::Full { main, .. } => *main,
        };
        match main.sub_categories().iter().copied().find(|s| *s == sub) {
            Some(sub) => {
                *self = CategorySelection::Full { main, sub };
                Ok(())
            }
            None => Err("sub kategori tidak sesuai dengan kategori utama"),
        }
    }

    pub fn main(&self) -> Option<MainCategory> {
        match self {
            CategorySelection::None => None,
            CategorySelection::Main(main) | CategorySelection::Full { main, .. } => Some(*main),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, CategorySelection::Full { .. })
    }

    /// The `"{main} - {sub}"` string submitted as `activity_type`.
    pub fn activity_type(&self) -> Option<String> {
        match self {
            CategorySelection::Full { main, sub } => Some(format!("{main} - {sub}")),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        *self = CategorySelection::None;
    }
}
