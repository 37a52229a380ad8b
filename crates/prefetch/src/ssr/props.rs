use prefetch_core::query::{DehydratedState, QueryClient};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// Data handed from a loader to its page.
///
/// Empty props serialize as `{}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dehydrated_state: Option<DehydratedState>,
}

impl PageProps {
    pub fn dehydrated(state: DehydratedState) -> Self {
        Self {
            dehydrated_state: Some(state),
        }
    }

    /// Builds a query client holding the dehydrated queries, if any.
    pub async fn hydrate_client(&self, client: QueryClient) -> QueryClient {
        if let Some(state) = &self.dehydrated_state {
            client.hydrate(state.clone()).await;
        }
        client
    }

    /// Serializes the props for embedding inside a `<script>` element.
    ///
    /// `<`, `>` and `&` are escaped so post content cannot close the tag.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(json
            .replace('<', "\\u003c")
            .replace('>', "\\u003e")
            .replace('&', "\\u0026"))
    }
}

/// Outcome of a page loader.
///
/// Serializes as `{"props": {...}}` or `{"notFound": true}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerSideProps {
    Props(PageProps),
    NotFound,
}

impl ServerSideProps {
    /// Props with no data, as returned for navigation probes.
    pub fn empty() -> Self {
        ServerSideProps::Props(PageProps::default())
    }
}

impl Serialize for ServerSideProps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            ServerSideProps::Props(props) => map.serialize_entry("props", props)?,
            ServerSideProps::NotFound => map.serialize_entry("notFound", &true)?,
        }
        map.end()
    }
}
