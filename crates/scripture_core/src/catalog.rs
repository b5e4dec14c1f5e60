//! Id-keyed book presentation metadata and book-browser labels.
//!
//! # Responsibility
//! - Resolve icon glyphs and localized short descriptions by book id.
//! - Provide localized testament section headings.
//!
//! # Invariants
//! - Metadata is keyed by book id only, never by a localized display name,
//!   so it resolves identically under every language.
//! - Unknown ids fall back to [`DEFAULT_BOOK_ICON`] and an empty description.

use crate::model::book::Testament;
use crate::model::language::LanguageCode;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const DEFAULT_BOOK_ICON: &str = "📖";

#[derive(Debug, Clone, Copy)]
struct BookMeta {
    id: &'static str,
    icon: &'static str,
    ar: &'static str,
    en: &'static str,
    fr: &'static str,
}

// Canonical order: 39 old testament books, then 27 new testament books.
const BOOK_TABLE: &[BookMeta] = &[
    BookMeta {
        id: "genesis",
        icon: "🌍",
        ar: "خلق وتاريخ البشرية المبكر",
        en: "Creation and early human history",
        fr: "Création et histoire humaine primitive",
    },
    BookMeta {
        id: "exodus",
        icon: "🕊️",
        ar: "التحرير والعهد",
        en: "Liberation and covenant",
        fr: "Libération et alliance",
    },
    BookMeta {
        id: "leviticus",
        icon: "📜",
        ar: "القوانين واللوائح الكهنوتية",
        en: "Priestly laws and regulations",
        fr: "Lois et règlements sacerdotaux",
    },
    BookMeta {
        id: "numbers",
        icon: "🏜️",
        ar: "ترحال في البرية",
        en: "Wilderness wanderings",
        fr: "Errances dans le désert",
    },
    BookMeta {
        id: "deuteronomy",
        icon: "📖",
        ar: "تعليمات موسى الأخيرة",
        en: "Moses' final instructions",
        fr: "Dernières instructions de Moïse",
    },
    BookMeta {
        id: "joshua",
        icon: "🏹",
        ar: "غزو كنعان",
        en: "Conquest of Canaan",
        fr: "Conquête de Canaan",
    },
    BookMeta {
        id: "judges",
        icon: "⚔️",
        ar: "فترة القضاة",
        en: "Period of the judges",
        fr: "Période des juges",
    },
    BookMeta {
        id: "ruth",
        icon: "❤️",
        ar: "قصة الولاء والخلاص",
        en: "Story of loyalty and redemption",
        fr: "Histoire de loyauté et de rédemption",
    },
    BookMeta {
        id: "i_samuel",
        icon: "👑",
        ar: "صعود الملكية",
        en: "Rise of the monarchy",
        fr: "Avènement de la monarchie",
    },
    BookMeta {
        id: "ii_samuel",
        icon: "🛡️",
        ar: "عهد داوود",
        en: "David's reign",
        fr: "Règne de David",
    },
    BookMeta {
        id: "i_kings",
        icon: "🏰",
        ar: "سليمان والمملكة المنقسمة",
        en: "Solomon and divided kingdom",
        fr: "Salomon et le royaume divisé",
    },
    BookMeta {
        id: "ii_kings",
        icon: "🔥",
        ar: "سقوط إسرائيل ويهوذا",
        en: "Fall of Israel and Judah",
        fr: "Chute d'Israël et de Juda",
    },
    BookMeta {
        id: "i_chronicles",
        icon: "📋",
        ar: "أنساب وعهد داوود",
        en: "Genealogies and David's reign",
        fr: "Généalogies et règne de David",
    },
    BookMeta {
        id: "ii_chronicles",
        icon: "🕯️",
        ar: "مملكة يهوذا",
        en: "Kingdom of Judah",
        fr: "Royaume de Juda",
    },
    BookMeta {
        id: "ezra",
        icon: "🏛️",
        ar: "العودة من السبي البابلي",
        en: "Return from Babylonian exile",
        fr: "Retour de l'exil babylonien",
    },
    BookMeta {
        id: "nehemiah",
        icon: "🧱",
        ar: "إعادة بناء أورشليم",
        en: "Rebuilding Jerusalem",
        fr: "Reconstruction de Jérusalem",
    },
    BookMeta {
        id: "esther",
        icon: "👑",
        ar: "بقاء اليهود في بلاد فارس",
        en: "Jewish survival in Persia",
        fr: "Survie juive en Perse",
    },
    BookMeta {
        id: "job",
        icon: "💔",
        ar: "المعاناة والإيمان",
        en: "Suffering and faith",
        fr: "Souffrance et foi",
    },
    BookMeta {
        id: "psalms",
        icon: "🎵",
        ar: "عبادة شعرية ورثاء",
        en: "Poetic worship and lament",
        fr: "Adoration poétique et lamentation",
    },
    BookMeta {
        id: "proverbs",
        icon: "🧠",
        ar: "تعاليم الحكمة والأخلاق",
        en: "Wisdom and moral teachings",
        fr: "Enseignements de sagesse et de morale",
    },
    BookMeta {
        id: "ecclesiastes",
        icon: "🤔",
        ar: "تأملات في معنى الحياة",
        en: "Reflections on life's meaning",
        fr: "Réflexions sur le sens de la vie",
    },
    BookMeta {
        id: "song_of_solomon",
        icon: "❤️",
        ar: "شعر الحب",
        en: "Love poetry",
        fr: "Poésie d'amour",
    },
    BookMeta {
        id: "isaiah",
        icon: "🕊️",
        ar: "نبوة ورجاء مسياني",
        en: "Prophecy and messianic hope",
        fr: "Prophétie et espérance messianique",
    },
    BookMeta {
        id: "jeremiah",
        icon: "😢",
        ar: "تحذيرات ورثاء",
        en: "Warnings and lamentations",
        fr: "Avertissements et lamentations",
    },
    BookMeta {
        id: "lamentations",
        icon: "😭",
        ar: "حزن على أورشليم",
        en: "Grief over Jerusalem",
        fr: "Deuil sur Jérusalem",
    },
    BookMeta {
        id: "ezekiel",
        icon: "👁️",
        ar: "رؤى الاستعادة",
        en: "Visions of restoration",
        fr: "Visions de restauration",
    },
    BookMeta {
        id: "daniel",
        icon: "🦁",
        ar: "نبوة وتدخل إلهي",
        en: "Prophecy and divine intervention",
        fr: "Prophétie et intervention divine",
    },
    BookMeta {
        id: "hosea",
        icon: "❤️",
        ar: "استعارة لمحبة الله",
        en: "Metaphor of God's love",
        fr: "Métaphore de l'amour de Dieu",
    },
    BookMeta {
        id: "joel",
        icon: "🌪️",
        ar: "يوم الرب",
        en: "Day of the Lord",
        fr: "Jour du Seigneur",
    },
    BookMeta {
        id: "amos",
        icon: "⚖️",
        ar: "العدالة الاجتماعية",
        en: "Social justice",
        fr: "Justice sociale",
    },
    BookMeta {
        id: "obadiah",
        icon: "🏔️",
        ar: "دينونة على أدوم",
        en: "Judgment on Edom",
        fr: "Jugement sur Édom",
    },
    BookMeta {
        id: "jonah",
        icon: "🐳",
        ar: "الرحمة والشفقة",
        en: "Mercy and compassion",
        fr: "Miséricorde et compassion",
    },
    BookMeta {
        id: "micah",
        icon: "🗣️",
        ar: "نقد اجتماعي وديني",
        en: "Social and religious critique",
        fr: "Critique sociale et religieuse",
    },
    BookMeta {
        id: "nahum",
        icon: "🏙️",
        ar: "نبوة ضد نينوى",
        en: "Prophecy against Nineveh",
        fr: "Prophétie contre Ninive",
    },
    BookMeta {
        id: "habakkuk",
        icon: "🤲",
        ar: "حوار مع الله",
        en: "Dialogue with God",
        fr: "Dialogue avec Dieu",
    },
    BookMeta {
        id: "zephaniah",
        icon: "🌋",
        ar: "يوم الدينونة",
        en: "Day of judgment",
        fr: "Jour du jugement",
    },
    BookMeta {
        id: "haggai",
        icon: "🏗️",
        ar: "إعادة بناء الهيكل",
        en: "Rebuilding the temple",
        fr: "Reconstruction du temple",
    },
    BookMeta {
        id: "zechariah",
        icon: "🕯️",
        ar: "نبوءات مسيانية",
        en: "Messianic prophecies",
        fr: "Prophéties messianiques",
    },
    BookMeta {
        id: "malachi",
        icon: "📯",
        ar: "الرسالة النبوية الأخيرة",
        en: "Final prophetic message",
        fr: "Dernier message prophétique",
    },
    BookMeta {
        id: "matthew",
        icon: "👼",
        ar: "إنجيل حياة يسوع",
        en: "Gospel of Jesus' life",
        fr: "Évangile de la vie de Jésus",
    },
    BookMeta {
        id: "mark",
        icon: "🦁",
        ar: "سرد موجز ليسوع",
        en: "Concise account of Jesus",
        fr: "Récit concis de Jésus",
    },
    BookMeta {
        id: "luke",
        icon: "🐂",
        ar: "سرد مفصل ليسوع",
        en: "Detailed narrative of Jesus",
        fr: "Narratif détaillé de Jésus",
    },
    BookMeta {
        id: "john",
        icon: "🦅",
        ar: "إنجيل لاهوتي",
        en: "Theological gospel",
        fr: "Évangile théologique",
    },
    BookMeta {
        id: "acts",
        icon: "⛪",
        ar: "نمو الكنيسة الأولى",
        en: "Growth of early church",
        fr: "Croissance de l'église primitive",
    },
    BookMeta {
        id: "romans",
        icon: "📖",
        ar: "أسس لاهوتية",
        en: "Theological foundations",
        fr: "Fondements théologiques",
    },
    BookMeta {
        id: "i_corinthians",
        icon: "🤝",
        ar: "تحديات الكنيسة",
        en: "Church challenges",
        fr: "Défis de l'église",
    },
    BookMeta {
        id: "ii_corinthians",
        icon: "💪",
        ar: "دفاع بولس الرسولي",
        en: "Paul's apostolic defense",
        fr: "Défense apostolique de Paul",
    },
    BookMeta {
        id: "galatians",
        icon: "🕊️",
        ar: "الحرية في المسيح",
        en: "Freedom in Christ",
        fr: "Liberté en Christ",
    },
    BookMeta {
        id: "ephesians",
        icon: "🏛️",
        ar: "الكنيسة والحياة المسيحية",
        en: "Church and Christian life",
        fr: "Église et vie chrétienne",
    },
    BookMeta {
        id: "philippians",
        icon: "😊",
        ar: "الفرح في المعاناة",
        en: "Joy in suffering",
        fr: "Joie dans la souffrance",
    },
    BookMeta {
        id: "colossians",
        icon: "👑",
        ar: "سيادة المسيح",
        en: "Christ's supremacy",
        fr: "Suprématie du Christ",
    },
    BookMeta {
        id: "i_thessalonians",
        icon: "🌅",
        ar: "المجيء الثاني",
        en: "Second coming",
        fr: "Seconde venue",
    },
    BookMeta {
        id: "ii_thessalonians",
        icon: "🛡️",
        ar: "المثابرة",
        en: "Perseverance",
        fr: "Persévérance",
    },
    BookMeta {
        id: "i_timothy",
        icon: "🤲",
        ar: "قيادة الكنيسة",
        en: "Church leadership",
        fr: "Direction de l'église",
    },
    BookMeta {
        id: "ii_timothy",
        icon: "📯",
        ar: "الخدمة الأمينة",
        en: "Faithful ministry",
        fr: "Ministère fidèle",
    },
    BookMeta {
        id: "titus",
        icon: "🤝",
        ar: "المسيحية العملية",
        en: "Practical Christianity",
        fr: "Christianisme pratique",
    },
    BookMeta {
        id: "philemon",
        icon: "❤️",
        ar: "المغفرة والمصالحة",
        en: "Forgiveness and reconciliation",
        fr: "Pardon et réconciliation",
    },
    BookMeta {
        id: "hebrews",
        icon: "🕯️",
        ar: "عهد المسيح الفائق",
        en: "Christ's superior covenant",
        fr: "Alliance supérieure du Christ",
    },
    BookMeta {
        id: "james",
        icon: "✋",
        ar: "الإيمان والأعمال",
        en: "Faith and works",
        fr: "Foi et œuvres",
    },
    BookMeta {
        id: "i_peter",
        icon: "🕊️",
        ar: "الرجاء في المعاناة",
        en: "Hope in suffering",
        fr: "Espoir dans la souffrance",
    },
    BookMeta {
        id: "ii_peter",
        icon: "⚠️",
        ar: "المعلمون الكذبة",
        en: "False teachers",
        fr: "Faux enseignants",
    },
    BookMeta {
        id: "i_john",
        icon: "❤️",
        ar: "المحبة والشركة",
        en: "Love and fellowship",
        fr: "Amour et communion",
    },
    BookMeta {
        id: "ii_john",
        icon: "🚶",
        ar: "السير في الحق",
        en: "Walking in truth",
        fr: "Marcher dans la vérité",
    },
    BookMeta {
        id: "iii_john",
        icon: "🤲",
        ar: "دعم المبشرين",
        en: "Supporting missionaries",
        fr: "Soutenir les missionnaires",
    },
    BookMeta {
        id: "jude",
        icon: "🛡️",
        ar: "الدفاع عن الإيمان",
        en: "Contending for faith",
        fr: "Défendre la foi",
    },
    BookMeta {
        id: "revelation",
        icon: "🌟",
        ar: "نبوءة رؤيوية",
        en: "Apocalyptic prophecy",
        fr: "Prophétie apocalyptique",
    },
];

static BOOK_META: Lazy<HashMap<&'static str, BookMeta>> =
    Lazy::new(|| BOOK_TABLE.iter().map(|meta| (meta.id, *meta)).collect());

/// Icon glyph for a book id.
pub fn book_icon(book_id: &str) -> &'static str {
    BOOK_META
        .get(book_id.to_ascii_lowercase().as_str())
        .map_or(DEFAULT_BOOK_ICON, |meta| meta.icon)
}

/// Localized one-line description for a book id, empty when unknown.
pub fn book_description(language: LanguageCode, book_id: &str) -> &'static str {
    BOOK_META
        .get(book_id.to_ascii_lowercase().as_str())
        .map_or("", |meta| match language {
            LanguageCode::Ar => meta.ar,
            LanguageCode::En => meta.en,
            LanguageCode::Fr => meta.fr,
        })
}

/// Localized labels for the book browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserStrings {
    pub search_placeholder: &'static str,
    pub old_testament: &'static str,
    pub old_testament_description: &'static str,
    pub new_testament: &'static str,
    pub new_testament_description: &'static str,
    pub no_results: &'static str,
    pub try_different: &'static str,
    pub chapters_abbrev: &'static str,
}

impl BrowserStrings {
    pub fn section_title(&self, testament: Testament) -> &'static str {
        match testament {
            Testament::Old => self.old_testament,
            Testament::New => self.new_testament,
        }
    }

    pub fn section_description(&self, testament: Testament) -> &'static str {
        match testament {
            Testament::Old => self.old_testament_description,
            Testament::New => self.new_testament_description,
        }
    }
}

const AR: BrowserStrings = BrowserStrings {
    search_placeholder: "ابحث عن كتب...",
    old_testament: "العهد القديم",
    old_testament_description: "نصوص أساسية للإيمان والتاريخ",
    new_testament: "العهد الجديد",
    new_testament_description: "حياة وتعاليم يسوع والمسيحية المبكرة",
    no_results: "لا توجد كتب",
    try_different: "جرب كلمة بحث مختلفة",
    chapters_abbrev: "فصل",
};

const EN: BrowserStrings = BrowserStrings {
    search_placeholder: "Search books...",
    old_testament: "Old Testament",
    old_testament_description: "Foundational texts of faith and history",
    new_testament: "New Testament",
    new_testament_description: "Life and teachings of Jesus and early Christianity",
    no_results: "No books found",
    try_different: "Try a different search term",
    chapters_abbrev: "ch",
};

const FR: BrowserStrings = BrowserStrings {
    search_placeholder: "Rechercher des livres...",
    old_testament: "Ancien Testament",
    old_testament_description: "Textes fondateurs de la foi et de l'histoire",
    new_testament: "Nouveau Testament",
    new_testament_description: "Vie et enseignements de Jésus et du christianisme primitif",
    no_results: "Aucun livre trouvé",
    try_different: "Essayez un autre terme de recherche",
    chapters_abbrev: "ch",
};

pub fn browser_strings(language: LanguageCode) -> &'static BrowserStrings {
    match language {
        LanguageCode::Ar => &AR,
        LanguageCode::En => &EN,
        LanguageCode::Fr => &FR,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        book_description, book_icon, browser_strings, BOOK_META, BOOK_TABLE, DEFAULT_BOOK_ICON,
    };
    use crate::model::book::Testament;
    use crate::model::language::LanguageCode;

    #[test]
    fn metadata_resolves_by_id_in_every_language() {
        assert_eq!(book_icon("genesis"), "🌍");
        assert_eq!(
            book_description(LanguageCode::Ar, "genesis"),
            "خلق وتاريخ البشرية المبكر"
        );
        assert_eq!(
            book_description(LanguageCode::Fr, "GENESIS"),
            "Création et histoire humaine primitive"
        );
    }

    #[test]
    fn table_covers_the_full_canon() {
        assert_eq!(BOOK_TABLE.len(), 66);
        assert_eq!(BOOK_META.len(), 66);
        assert!(BOOK_TABLE.iter().all(|meta| {
            !meta.icon.is_empty()
                && !meta.ar.is_empty()
                && !meta.en.is_empty()
                && !meta.fr.is_empty()
        }));
        assert_eq!(book_icon("leviticus"), "📜");
        assert_eq!(
            book_description(LanguageCode::En, "revelation"),
            "Apocalyptic prophecy"
        );
    }

    #[test]
    fn unknown_id_falls_back() {
        assert_eq!(book_icon("tobit"), DEFAULT_BOOK_ICON);
        assert_eq!(book_description(LanguageCode::En, "tobit"), "");
    }

    #[test]
    fn section_titles_follow_testament() {
        let strings = browser_strings(LanguageCode::Fr);
        assert_eq!(strings.section_title(Testament::Old), "Ancien Testament");
        assert_eq!(strings.section_title(Testament::New), "Nouveau Testament");
    }
}
