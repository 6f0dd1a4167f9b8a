//! The in-memory DICOM data set:
//! an ordered-by-tag mapping of data elements,
//! together with the encoding properties inferred from
//! (or destined for) the wire.

use crate::dictionary;
use crate::header::{Header, Length, Tag, VR};
use crate::value::{DataElement, Value};
use byteordered::Endianness;
use snafu::{Backtrace, Snafu};
use std::collections::btree_map;
use std::collections::BTreeMap;

pub mod read;
pub mod write;

/// Error type for data set accesses.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum AccessError {
    /// Raised when the given tag is not present in the data set.
    #[snafu(display("No data element {}", tag))]
    NoSuchDataElement { tag: Tag, backtrace: Backtrace },
    /// Raised when the given keyword does not name a known attribute.
    #[snafu(display("Unknown attribute keyword `{}`", name))]
    NoSuchAttributeName { name: String, backtrace: Backtrace },
}

type Result<T, E = AccessError> = std::result::Result<T, E>;

/// A DICOM data set that is fully contained in memory.
///
/// Elements are kept in ascending tag order. The set also records the
/// encoding mode it was read in (or should be written in): the byte
/// order and whether value representations are explicit on the wire.
#[derive(Debug, Clone)]
pub struct DataSet {
    /// the element map
    entries: BTreeMap<Tag, DataElement>,
    /// byte order of the body encoding
    endianness: Endianness,
    /// whether value representations are explicit in the body encoding
    explicit_vr: bool,
    /// the effective VR of each element observed during parsing
    observed_vrs: BTreeMap<Tag, VR>,
    /// The length of the data set in bytes.
    /// It is usually undefined, unless it is part of an item
    /// in a sequence with a specified length in its item header.
    len: Length,
}

impl PartialEq for DataSet {
    // this implementation ignores the encoding properties
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Default for DataSet {
    fn default() -> Self {
        DataSet::create_empty()
    }
}

impl DataSet {
    /// Create a new empty data set
    /// in the default encoding (Explicit VR Little Endian).
    pub fn create_empty() -> Self {
        DataSet::new(Endianness::Little, true)
    }

    /// Create a new empty data set with the given encoding properties.
    pub fn new(endianness: Endianness, explicit_vr: bool) -> Self {
        DataSet {
            entries: BTreeMap::new(),
            endianness,
            explicit_vr,
            observed_vrs: BTreeMap::new(),
            len: Length::UNDEFINED,
        }
    }

    pub(crate) fn new_item(endianness: Endianness, explicit_vr: bool, len: Length) -> Self {
        DataSet {
            entries: BTreeMap::new(),
            endianness,
            explicit_vr,
            observed_vrs: BTreeMap::new(),
            len,
        }
    }

    /// The byte order of the data set's body encoding.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Whether the body encoding carries explicit value representations.
    pub fn explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Change the encoding mode which the data set
    /// will be written in.
    pub fn set_encoding(&mut self, endianness: Endianness, explicit_vr: bool) {
        self.endianness = endianness;
        self.explicit_vr = explicit_vr;
    }

    /// The length in bytes of this data set on the wire, when known.
    /// Only items of sequences with defined lengths carry one.
    pub fn length(&self) -> Length {
        self.len
    }

    /// The number of data elements in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the data set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retrieve a particular DICOM element by its tag.
    pub fn element<T>(&self, tag: T) -> Result<&DataElement>
    where
        T: Into<Tag>,
    {
        let tag = tag.into();
        self.entries
            .get(&tag)
            .ok_or_else(|| NoSuchDataElementSnafu { tag }.build())
    }

    /// Retrieve a particular DICOM element by its attribute keyword.
    ///
    /// The keyword is whitespace insensitive:
    /// `"Patient Name"` retrieves the same element as `"PatientName"`.
    pub fn element_by_name(&self, name: &str) -> Result<&DataElement> {
        let tag = dictionary::tag_for_keyword(name)
            .ok_or_else(|| NoSuchAttributeNameSnafu { name }.build())?;
        self.element(tag)
    }

    /// Retrieve the value of the element with the given tag,
    /// or `None` if it is not present.
    pub fn get<T>(&self, tag: T) -> Option<&Value>
    where
        T: Into<Tag>,
    {
        self.entries.get(&tag.into()).map(|e| e.value())
    }

    /// Check whether an element with the given tag exists in the set.
    pub fn contains<T>(&self, tag: T) -> bool
    where
        T: Into<Tag>,
    {
        self.entries.contains_key(&tag.into())
    }

    /// Insert a data element to the object, replacing (and returning) any
    /// previous element of the same attribute.
    pub fn put(&mut self, elt: DataElement) -> Option<DataElement> {
        self.entries.insert(elt.tag(), elt)
    }

    /// Remove the element with the given tag, returning it if present.
    pub fn remove<T>(&mut self, tag: T) -> Option<DataElement>
    where
        T: Into<Tag>,
    {
        self.entries.remove(&tag.into())
    }

    /// Iterate over the tags present in the set, in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate over the keyword form of every present tag
    /// which is known to the attribute dictionary, in ascending tag order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().filter_map(|t| dictionary::keyword_of(*t))
    }

    /// Iterate over the data elements in ascending tag order.
    pub fn iter(&self) -> btree_map::Values<'_, Tag, DataElement> {
        self.entries.values()
    }

    /// The effective value representation of each element,
    /// as observed while parsing.
    ///
    /// This records what was actually used to decode each element:
    /// the explicit VR read from the wire, the dictionary default,
    /// or a caller-supplied override. It can be fed back through the
    /// write options to reproduce a file whose VRs are not all
    /// dictionary defaults.
    pub fn observed_vrs(&self) -> &BTreeMap<Tag, VR> {
        &self.observed_vrs
    }

    pub(crate) fn record_vr(&mut self, tag: Tag, vr: VR) {
        self.observed_vrs.insert(tag, vr);
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a DataElement;
    type IntoIter = btree_map::Values<'a, Tag, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl IntoIterator for DataSet {
    type Item = DataElement;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.entries.into_iter(),
        }
    }
}

/// Base iterator type for an in-memory data set.
#[derive(Debug)]
pub struct Iter {
    inner: btree_map::IntoIter<Tag, DataElement>,
}

impl Iterator for Iter {
    type Item = DataElement;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|x| x.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
