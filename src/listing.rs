//! Schema of the `List Blobs` enumeration document.
//!
//! ```xml
//! <EnumerationResults ServiceEndpoint="..." ContainerName="backup">
//!   <Blobs>
//!     <Blob><Name>secrets.txt</Name><Properties>...</Properties></Blob>
//!   </Blobs>
//!   <NextMarker />
//! </EnumerationResults>
//! ```
//!
//! Only `Name` is mandatory. A blob without one rejects the whole document.

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EnumerationResults {
    #[serde(rename = "@ContainerName", default)]
    pub container_name: Option<String>,
    #[serde(rename = "@ServiceEndpoint", default)]
    pub service_endpoint: Option<String>,
    #[serde(rename = "Blobs", default)]
    pub blobs: Blobs,
    #[serde(rename = "NextMarker", default)]
    pub next_marker: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Blobs {
    #[serde(rename = "Blob", default)]
    pub items: Vec<Blob>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Blob {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Url", default)]
    pub url: Option<String>,
    #[serde(rename = "Properties", default)]
    pub properties: Option<BlobProperties>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct BlobProperties {
    // kept as text so a bad value never rejects the document
    #[serde(rename = "Content-Length", default)]
    pub content_length: Option<String>,
    #[serde(rename = "Content-Type", default)]
    pub content_type: Option<String>,
    #[serde(rename = "Last-Modified", default)]
    pub last_modified: Option<String>,
}

impl EnumerationResults {
    pub fn parse(body: &str) -> Result<Self> {
        // Azure prefixes the payload with a UTF-8 BOM
        let body = body.trim_start_matches('\u{feff}');
        Ok(quick_xml::de::from_str(body)?)
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs.items
    }

    /// The service paged the result; only the first page was returned.
    pub fn is_truncated(&self) -> bool {
        self.next_marker.as_deref().is_some_and(|m| !m.trim().is_empty())
    }
}

impl Blob {
    pub fn size(&self) -> Option<u64> {
        self.properties
            .as_ref()
            .and_then(|p| p.content_length.as_deref())
            .and_then(|v| v.trim().parse().ok())
    }
}
