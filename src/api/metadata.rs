use std::fmt;

use crate::api::checked;
use crate::error::MdfError;
use crate::exports::MdfExports;
use crate::handle::MetaDataHandle;
use crate::protocol::{read_array, read_string};
use crate::types::ETag;

/// XML metadata attached to a header, attachment, file history, event or data group.
///
/// In [`MdfStore`](crate::store::MdfStore) the named properties and the XML
/// snippet are stored independently: setting a property does not rewrite the
/// snippet, and vice versa.
pub struct MdfMetaData<'a, E: MdfExports + ?Sized> {
    exports: &'a E,
    handle: MetaDataHandle,
}

impl<'a, E: MdfExports + ?Sized> MdfMetaData<'a, E> {
    /// Wrap a metadata handle.
    ///
    /// # Returns
    /// [`MdfError::InvalidHandle`] if `handle` is null, e.g. because the parent
    /// record carries no metadata yet.
    pub fn new(exports: &'a E, handle: MetaDataHandle) -> Result<Self, MdfError> {
        Ok(MdfMetaData { exports, handle: checked(handle)? })
    }

    pub fn handle(&self) -> MetaDataHandle {
        self.handle
    }

    /// Value of the named property, empty if it does not exist.
    pub fn property_as_string(&self, name: &str) -> String {
        read_string(self.exports.read_policy(), |out| {
            self.exports.metadata_get_property_as_string(self.handle, name, out)
        })
    }

    pub fn set_property_as_string(&self, name: &str, value: &str) {
        self.exports.metadata_set_property_as_string(self.handle, name, value);
    }

    /// Value of the named property as float, `0.0` if missing or not numeric.
    pub fn property_as_float(&self, name: &str) -> f64 {
        self.exports.metadata_get_property_as_float(self.handle, name)
    }

    pub fn set_property_as_float(&self, name: &str, value: f64) {
        self.exports.metadata_set_property_as_float(self.handle, name, value);
    }

    /// Store `tag` with its unit, description, language and read-only flag.
    pub fn set_property(&self, tag: &ETag) {
        self.exports.metadata_set_property(self.handle, tag);
    }

    /// All named properties as tags, in insertion order.
    pub fn properties(&self) -> Vec<ETag> {
        read_array(self.exports.read_policy(), |out| {
            self.exports.metadata_get_properties(self.handle, out)
        })
    }

    pub fn common_properties(&self) -> Vec<ETag> {
        read_array(self.exports.read_policy(), |out| {
            self.exports.metadata_get_common_properties(self.handle, out)
        })
    }

    /// Replace the whole common property list.
    pub fn set_common_properties(&self, tags: &[ETag]) {
        self.exports.metadata_set_common_properties(self.handle, tags);
    }

    pub fn add_common_property(&self, tag: &ETag) {
        self.exports.metadata_add_common_property(self.handle, tag);
    }

    pub fn xml_snippet(&self) -> String {
        read_string(self.exports.read_policy(), |out| {
            self.exports.metadata_get_xml_snippet(self.handle, out)
        })
    }

    pub fn set_xml_snippet(&self, xml: &str) {
        self.exports.metadata_set_xml_snippet(self.handle, xml);
    }
}

impl<E: MdfExports + ?Sized> Clone for MdfMetaData<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: MdfExports + ?Sized> Copy for MdfMetaData<'_, E> {}

impl<E: MdfExports + ?Sized> fmt::Debug for MdfMetaData<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MdfMetaData").field("handle", &self.handle).finish()
    }
}
