use alloc::string::String;

/// One scored item subject to sorting and display.
///
/// `id` is a decimal numeric string that may exceed 64-bit integer range
/// (ids are ordered as arbitrary-precision integers, see
/// [`crate::cmp_record_ids`]). `score` is finite once a record has passed
/// validation; records are immutable after that point.
///
/// With `feature = "serde"`, a record (de)serializes as the 3-element array
/// `[id, content, score]` used by the wire protocol and the source file.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub id: String,
    pub content: String,
    pub score: f64,
}

impl Record {
    pub fn new(id: impl Into<String>, content: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            score,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;
        let mut t = serializer.serialize_tuple(3)?;
        t.serialize_element(&self.id)?;
        t.serialize_element(&self.content)?;
        t.serialize_element(&self.score)?;
        t.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Record {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> serde::de::Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a 3-element array [id, content, score]")
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Record, A::Error> {
                let id = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
                let content = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(1, &self))?;
                let score = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(2, &self))?;
                Ok(Record { id, content, score })
            }
        }

        deserializer.deserialize_tuple(3, RecordVisitor)
    }
}

/// Which comparator orders the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortKey {
    /// Order by `id` interpreted as an arbitrary-precision integer.
    Time,
    /// Order by `score`.
    Score,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortOrder {
    Asc,
    Desc,
}

/// The contiguous index range actually materialized for display, plus the
/// filler extents that preserve total scrollable size.
///
/// Derived, never stored: recompute on every scroll/resize/length change
/// via [`crate::compute_window`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualWindow {
    pub start_index: usize,
    pub end_index: usize, // exclusive
    /// Extent of the skipped rows before `start_index`.
    pub leading_extent: u64,
    /// Extent of the skipped rows at and after `end_index`.
    pub trailing_extent: u64,
}

impl VirtualWindow {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    /// Number of rows to materialize.
    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}
