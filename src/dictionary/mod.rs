//! The static DICOM attribute dictionary:
//! a read-only mapping between tags, keywords,
//! and default value representations.
//!
//! The dictionary index is automatically initialized upon the first use.

use crate::header::{Tag, VR};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

mod entries;
pub mod tags;

pub use entries::ENTRIES;

/// Specification of the range of tags pertaining to an attribute.
/// Most attributes have a unique `(group, element)` pair,
/// but repeating groups such as the curve (`50xx`) and overlay (`60xx`)
/// families cover a range of groups with one entry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TagRange {
    /// Only a specific tag
    Single(Tag),
    /// The two rightmost digits of the _group_ portion are open:
    /// `(GGxx,EEEE)`
    Group100(Tag),
}

impl TagRange {
    /// Retrieve the inner tag representation of this range.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) => tag,
            TagRange::Group100(tag) => tag,
        }
    }
}

/// A single attribute dictionary entry:
/// tag range, keyword, and default value representation.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEntry {
    /// The tag or tag range of the attribute
    pub tag: TagRange,
    /// The attribute's keyword, in canonical identifier form
    pub keyword: &'static str,
    /// The attribute's default value representation
    pub vr: VR,
}

static DICT: Lazy<DictionaryRegistry> = Lazy::new(init_dictionary);

/// The data struct actually containing the indexed dictionary.
#[derive(Debug)]
struct DictionaryRegistry {
    /// mapping: keyword → entry
    by_keyword: HashMap<&'static str, &'static DictionaryEntry>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DictionaryEntry>,
    /// repeating entries of the form (GGxx, eeee). The `xx` portion is zeroed.
    repeating_ggxx: HashSet<Tag>,
}

impl DictionaryRegistry {
    fn new() -> Self {
        DictionaryRegistry {
            by_keyword: HashMap::with_capacity(512),
            by_tag: HashMap::with_capacity(512),
            repeating_ggxx: HashSet::with_capacity(8),
        }
    }

    fn index(&mut self, entry: &'static DictionaryEntry) {
        self.by_keyword.insert(entry.keyword, entry);
        self.by_tag.insert(entry.tag.inner(), entry);
        if let TagRange::Group100(tag) = entry.tag {
            self.repeating_ggxx.insert(tag);
        }
    }
}

fn init_dictionary() -> DictionaryRegistry {
    let mut d = DictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    // generic group length and private creator are not generated entries
    d.by_keyword.insert("GenericGroupLength", &GROUP_LENGTH_ENTRY);
    d.by_keyword.insert("PrivateCreator", &PRIVATE_CREATOR_ENTRY);
    d
}

/// Generic Group Length dictionary entry.
static GROUP_LENGTH_ENTRY: DictionaryEntry = DictionaryEntry {
    tag: TagRange::Single(Tag(0x0000, 0x0000)),
    keyword: "GenericGroupLength",
    vr: VR::UL,
};

/// Generic Private Creator dictionary entry.
static PRIVATE_CREATOR_ENTRY: DictionaryEntry = DictionaryEntry {
    tag: TagRange::Single(Tag(0x0009, 0x0010)),
    keyword: "PrivateCreator",
    vr: VR::LO,
};

/// Look up the dictionary entry for the given tag.
///
/// Tags in the `50xx` and `60xx` repeating groups are canonicalised to
/// their `5000`/`6000` base entry. Private creator tags (odd group,
/// element in `0x0010..=0x00FF`) resolve to LO, and any other element
/// number `0x0000` resolves to the generic group length.
pub fn entry_of(tag: Tag) -> Option<&'static DictionaryEntry> {
    let r = &*DICT;

    r.by_tag
        .get(&tag)
        .copied()
        .or_else(|| {
            // check tags repeating in different groups
            let group_trimmed = Tag(tag.0 & 0xFF00, tag.1);
            if r.repeating_ggxx.contains(&group_trimmed) {
                return r.by_tag.get(&group_trimmed).copied();
            }
            None
        })
        .or_else(|| {
            // check for private creator
            if tag.is_private() && (0x0010..=0x00FF).contains(&tag.1) {
                return Some(&PRIVATE_CREATOR_ENTRY);
            }
            // check for group length
            if tag.element() == 0x0000 {
                return Some(&GROUP_LENGTH_ENTRY);
            }
            None
        })
}

/// Look up the default value representation of the given tag.
pub fn vr_of(tag: Tag) -> Option<VR> {
    entry_of(tag).map(|e| e.vr)
}

/// Look up the keyword of the given tag.
pub fn keyword_of(tag: Tag) -> Option<&'static str> {
    entry_of(tag).map(|e| e.keyword)
}

/// Look up a tag by its attribute keyword at run time.
///
/// The query is whitespace insensitive:
/// `"Patient Name"` and `"PatientName"` resolve to the same tag.
/// For keyword literals known at compile time,
/// prefer the constants in [`tags`](crate::dictionary::tags),
/// where an unknown keyword fails to compile.
pub fn tag_for_keyword(name: &str) -> Option<Tag> {
    let r = &*DICT;
    if name.as_bytes().iter().any(|b| b.is_ascii_whitespace()) {
        let normalized: String = name.split_whitespace().collect();
        r.by_keyword.get(normalized.as_str())
    } else {
        r.by_keyword.get(name)
    }
    .map(|e| e.tag.inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test() {
        assert_eq!(tag_for_keyword("PatientName"), Some(Tag(0x0010, 0x0010)));
        assert_eq!(tag_for_keyword("Modality"), Some(Tag(0x0008, 0x0060)));
        assert_eq!(vr_of(Tag(0x0008, 0x0060)), Some(VR::CS));
        assert_eq!(vr_of(Tag(0x0010, 0x0010)), Some(VR::PN));
        assert_eq!(vr_of(Tag(0x7FE0, 0x0010)), Some(VR::OW));
        assert_eq!(keyword_of(Tag(0x0020, 0x0013)), Some("InstanceNumber"));
    }

    #[test]
    fn keyword_queries_ignore_whitespace() {
        assert_eq!(tag_for_keyword("Patient Name"), Some(Tag(0x0010, 0x0010)));
        assert_eq!(
            tag_for_keyword(" Rescale  Intercept "),
            Some(Tag(0x0028, 0x1052))
        );
        assert_eq!(tag_for_keyword("No Such Attribute"), None);
    }

    #[test]
    fn repeating_groups_are_canonicalised() {
        // overlay data repeats over even groups 6000-60FF
        assert_eq!(vr_of(Tag(0x6000, 0x3000)), Some(VR::OW));
        assert_eq!(vr_of(Tag(0x60EE, 0x3000)), vr_of(Tag(0x6000, 0x3000)));
        assert_eq!(keyword_of(Tag(0x60EE, 0x3000)), Some("OverlayData"));
        // curve data repeats over 5000-50FF
        assert_eq!(vr_of(Tag(0x50AA, 0x0010)), vr_of(Tag(0x5000, 0x0010)));
    }

    #[test]
    fn private_creator_range() {
        assert_eq!(vr_of(Tag(0x0009, 0x0010)), Some(VR::LO));
        assert_eq!(vr_of(Tag(0x0009, 0x00FF)), Some(VR::LO));
        assert_eq!(vr_of(Tag(0x000B, 0x0011)), Some(VR::LO));
        // outside the creator range, a private tag has no default VR
        assert_eq!(vr_of(Tag(0x0009, 0x0100)), None);
        assert_eq!(vr_of(Tag(0x0009, 0x1002)), None);
        // odd groups at or below 0x0008 are reserved, not private
        assert_eq!(vr_of(Tag(0x0005, 0x0010)), None);
        assert_eq!(vr_of(Tag(0x0007, 0x0050)), None);
    }

    #[test]
    fn group_length_fallback() {
        assert_eq!(vr_of(Tag(0x0008, 0x0000)), Some(VR::UL));
        assert_eq!(vr_of(Tag(0x7FE0, 0x0000)), Some(VR::UL));
        assert_eq!(keyword_of(Tag(0x7FE0, 0x0000)), Some("GenericGroupLength"));
    }

    #[test]
    fn constants_available() {
        use super::tags::*;
        assert_eq!(PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(INSTANCE_NUMBER, Tag(0x0020, 0x0013));
        assert_eq!(TRANSFER_SYNTAX_UID, Tag(0x0002, 0x0010));
    }
}
